use communityvi_player::configuration::Configuration;
use communityvi_player::controller::PlayerController;
use communityvi_player::replay::{SimulatedController, parse_event_log, replay};
use communityvi_player::simulation::{MediaState, RecordingView, SimulatedMedia};
use communityvi_player::view::ToggleGlyph;

fn simulated_controller(duration: f64, configuration: Configuration) -> SimulatedController {
	PlayerController::new(
		SimulatedMedia::new(MediaState::builder().duration(duration).build()),
		RecordingView::new(200.0),
		configuration,
	)
}

#[test]
fn should_reflect_playback_state_fed_back_from_the_media_element() {
	let events = parse_event_log(
		r#"[
			{"type": "toggle_clicked"},
			{"type": "skip_clicked", "amount": "25"},
			{"type": "skip_clicked", "amount": "-10"}
		]"#,
	)
	.expect("Failed to parse event log");
	let mut controller = simulated_controller(60.0, Configuration::default());

	let outcome = replay(&mut controller, events);

	assert!(!outcome.media.paused);
	assert_eq!(15.0, outcome.media.current_time);
	assert_eq!(Some(ToggleGlyph::Pause), outcome.glyph);
	assert_eq!(Some("25%".to_string()), outcome.fill_basis.map(|basis| basis.to_string()));
	assert_eq!(0, outcome.rejected_events);
}

#[test]
fn should_scrub_while_dragging_across_the_progress_track() {
	let events = parse_event_log(
		r#"[
			{"type": "progress_mouse_moved", "offset_x": 10},
			{"type": "progress_mouse_down"},
			{"type": "progress_mouse_moved", "offset_x": 50},
			{"type": "progress_mouse_moved", "offset_x": 100},
			{"type": "progress_mouse_up"},
			{"type": "progress_mouse_moved", "offset_x": 150}
		]"#,
	)
	.expect("Failed to parse event log");
	let mut controller = simulated_controller(80.0, Configuration::default());

	let outcome = replay(&mut controller, events);

	assert_eq!(40.0, outcome.media.current_time);
	assert_eq!(Some("50%".to_string()), outcome.fill_basis.map(|basis| basis.to_string()));
}

#[test]
fn should_count_and_skip_rejected_events() {
	let events = parse_event_log(
		r#"[
			{"type": "range_changed", "name": "volume", "value": "0.4"},
			{"type": "range_changed", "name": "brightness", "value": "1"},
			{"type": "range_mouse_moved", "name": "playbackRate", "value": "fast"},
			{"type": "skip_clicked"},
			{"type": "range_mouse_moved", "name": "playbackRate", "value": "2"}
		]"#,
	)
	.expect("Failed to parse event log");
	let mut controller = simulated_controller(80.0, Configuration::default());

	let outcome = replay(&mut controller, events);

	assert_eq!(0.4, outcome.media.volume);
	assert_eq!(2.0, outcome.media.playback_rate);
	assert_eq!(3, outcome.rejected_events);
}

#[test]
fn should_clamp_seeks_when_configured() {
	let configuration = Configuration::try_from("clamp_seeking = true").expect("Invalid configuration");
	let events = parse_event_log(r#"[{"type": "skip_clicked", "amount": "-10"}]"#).expect("Failed to parse event log");
	let mut controller = simulated_controller(20.0, configuration);

	let outcome = replay(&mut controller, events);

	assert_eq!(0.0, outcome.media.current_time);
	assert_eq!(Some("0%".to_string()), outcome.fill_basis.map(|basis| basis.to_string()));
}

#[test]
fn should_not_render_progress_for_unknown_duration() {
	let events = parse_event_log(r#"[{"type": "skip_clicked", "amount": "10"}]"#).expect("Failed to parse event log");
	let mut controller = simulated_controller(f64::NAN, Configuration::default());

	let outcome = replay(&mut controller, events);

	assert_eq!(10.0, outcome.media.current_time);
	assert_eq!(None, outcome.fill_basis);
}

#[test]
fn should_serialize_outcome_for_the_commandline() {
	let events = parse_event_log(r#"[{"type": "toggle_clicked"}, {"type": "time_updated"}]"#)
		.expect("Failed to parse event log");
	let mut controller = simulated_controller(60.0, Configuration::default());

	let outcome = replay(&mut controller, events);
	let json = serde_json::to_value(&outcome).expect("Failed to serialize outcome");

	assert_eq!("pause", json["glyph"]);
	assert_eq!("0%", json["fill_basis"]);
	assert_eq!(false, json["media"]["paused"]);
}

#[test]
fn should_reject_malformed_event_log() {
	parse_event_log(r#"[{"type": "toggle_clicked"}"#).expect_err("Parsed a truncated event log");
}
