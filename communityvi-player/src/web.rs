//! Browser binding: finds the player's elements in the DOM and feeds their events into a [`PlayerController`].

use crate::configuration::Configuration;
use crate::controller::PlayerController;
use crate::controller::error::PlayerError;
use crate::event::{MediaFailedEvent, PlayerEvent, RangeEvent, SkipClickedEvent};
use crate::media::{MediaElement, MediaError};
use crate::progress::FillBasis;
use crate::view::{PlayerView, ToggleGlyph};
use console_writer::MakeConsoleWriter;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlMediaElement, MouseEvent};

mod console_writer;

type SharedController = Rc<RefCell<PlayerController<HtmlMediaElement, DomView>>>;

/// Binds the player matching `selector` and keeps it bound for the lifetime of the page.
///
/// `configuration` is TOML in the format of the configuration file, defaults are used if it is omitted.
#[wasm_bindgen(js_name = bindPlayer)]
pub fn bind_player(selector: &str, configuration: Option<String>) -> Result<(), JsValue> {
	let configuration =
		parse_configuration(configuration.as_deref()).map_err(|error| JsValue::from_str(&error.to_string()))?;
	init_logging(&configuration);

	let player = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.query_selector(selector).ok().flatten())
		.ok_or_else(|| JsValue::from_str(&format!("No player element matches '{selector}'.")))?;

	let binding = bind(&player, configuration).map_err(|error| JsValue::from_str(&error.to_string()))?;
	binding.keep_alive();
	Ok(())
}

fn parse_configuration(configuration: Option<&str>) -> Result<Configuration, toml::de::Error> {
	match configuration {
		Some(text) => Configuration::try_from(text),
		None => Ok(Configuration::default()),
	}
}

/// Only the first bound player installs the subscriber, later calls keep it.
fn init_logging(configuration: &Configuration) {
	let filter = EnvFilter::try_new(&configuration.log_filters).unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(MakeConsoleWriter)
		.with_ansi(false)
		.without_time()
		.try_init();
}

/// Attaches the player controls inside `player` to its media element.
///
/// The listeners are detached when the returned binding is dropped.
pub fn bind(player: &Element, configuration: Configuration) -> Result<PlayerBinding, PlayerError> {
	let video = query::<HtmlMediaElement>(player, ".viewer")?;
	let progress = query::<HtmlElement>(player, ".progress")?;
	let fill = query::<HtmlElement>(player, ".progress__filled")?;
	let toggle = query::<HtmlElement>(player, ".toggle")?;
	let skip_buttons = query_all::<HtmlElement>(player, "[data-skip]");
	let ranges = query_all::<HtmlInputElement>(player, ".player__slider");

	let view = DomView {
		toggle: toggle.clone(),
		fill,
		track: progress.clone(),
	};
	let controller = Rc::new(RefCell::new(PlayerController::new(video.clone(), view, configuration)));
	let mut binding = PlayerBinding {
		controller,
		listeners: Vec::new(),
	};

	binding.listen(&video, "click", |_| Some(PlayerEvent::MediaClicked))?;
	binding.listen(&toggle, "click", |_| Some(PlayerEvent::ToggleClicked))?;
	binding.listen(&video, "play", |_| Some(PlayerEvent::Played))?;
	binding.listen(&video, "pause", |_| Some(PlayerEvent::Paused))?;
	binding.listen(&video, "timeupdate", |_| Some(PlayerEvent::TimeUpdated))?;

	for button in skip_buttons {
		let skip_button = button.clone();
		binding.listen(&button, "click", move |_| {
			Some(
				SkipClickedEvent {
					amount: skip_button.dataset().get("skip"),
				}
				.into(),
			)
		})?;
	}

	for range in ranges {
		for event_type in ["change", "mousemove"] {
			let slider = range.clone();
			binding.listen(&range, event_type, move |_| {
				let event = RangeEvent {
					name: slider.name(),
					value: slider.value(),
				};
				Some(if event_type == "change" {
					PlayerEvent::RangeChanged(event)
				} else {
					PlayerEvent::RangeMouseMoved(event)
				})
			})?;
		}
	}

	binding.listen(&progress, "click", |event| {
		mouse_offset_x(event).map(PlayerEvent::progress_clicked)
	})?;
	binding.listen(&progress, "mousemove", |event| {
		mouse_offset_x(event).map(PlayerEvent::progress_mouse_moved)
	})?;
	binding.listen(&progress, "mousedown", |_| Some(PlayerEvent::ProgressMouseDown))?;
	binding.listen(&progress, "mouseup", |_| Some(PlayerEvent::ProgressMouseUp))?;

	let failed_video = video.clone();
	binding.listen(&video, "error", move |_| {
		Some(
			MediaFailedEvent {
				message: failed_video
					.error()
					.map(|error| format!("media error code {}", error.code())),
			}
			.into(),
		)
	})?;

	info!("Bound player with {} listeners.", binding.listeners.len());
	Ok(binding)
}

fn query<T: JsCast>(player: &Element, selector: &'static str) -> Result<T, PlayerError> {
	player
		.query_selector(selector)
		.ok()
		.flatten()
		.and_then(|element| element.dyn_into::<T>().ok())
		.ok_or(PlayerError::MissingElement(selector))
}

fn query_all<T: JsCast>(player: &Element, selector: &'static str) -> Vec<T> {
	let Ok(nodes) = player.query_selector_all(selector) else {
		warn!("Invalid selector '{selector}'.");
		return Vec::new();
	};

	(0..nodes.length())
		.filter_map(|index| nodes.item(index))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

fn mouse_offset_x(event: &Event) -> Option<f64> {
	event
		.dyn_ref::<MouseEvent>()
		.map(|mouse_event| f64::from(mouse_event.offset_x()))
}

/// Keeps the controller and its event listeners alive.
pub struct PlayerBinding {
	controller: SharedController,
	listeners: Vec<EventListener>,
}

impl PlayerBinding {
	fn listen(
		&mut self,
		target: &EventTarget,
		event_type: &'static str,
		to_player_event: impl Fn(&Event) -> Option<PlayerEvent> + 'static,
	) -> Result<(), PlayerError> {
		let controller = Rc::clone(&self.controller);
		let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
			let Some(player_event) = to_player_event(&event) else {
				return;
			};
			let Ok(mut controller) = controller.try_borrow_mut() else {
				warn!("Dropped '{event_type}' event, the player is still handling another one.");
				return;
			};
			if let Err(error) = controller.handle(player_event) {
				error!("Failed to handle '{event_type}' event: {error}");
			}
		});

		target
			.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
			.map_err(|error| PlayerError::Listener(event_type, format!("{error:?}")))?;
		self.listeners.push(EventListener {
			target: target.clone(),
			event_type,
			closure,
		});
		Ok(())
	}

	/// Leaks the binding so the player stays bound after the caller returns.
	pub fn keep_alive(self) {
		std::mem::forget(self);
	}
}

struct EventListener {
	target: EventTarget,
	event_type: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl Drop for EventListener {
	fn drop(&mut self) {
		if let Err(error) = self
			.target
			.remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref())
		{
			warn!("Failed to detach '{}' listener: {error:?}", self.event_type);
		}
	}
}

pub struct DomView {
	toggle: HtmlElement,
	fill: HtmlElement,
	track: HtmlElement,
}

impl PlayerView for DomView {
	fn set_toggle_glyph(&self, glyph: ToggleGlyph) {
		self.toggle.set_text_content(Some(glyph.symbol()));
	}

	fn set_fill_basis(&self, basis: FillBasis) {
		if let Err(error) = self.fill.style().set_property("flex-basis", &basis.to_string()) {
			error!("Failed to set progress fill to {basis}: {error:?}");
		}
	}

	fn track_width(&self) -> f64 {
		f64::from(self.track.offset_width())
	}
}

impl MediaElement for HtmlMediaElement {
	fn paused(&self) -> bool {
		HtmlMediaElement::paused(self)
	}

	/// The returned promise is not awaited, a rejection surfaces as an unhandled rejection in the console.
	fn play(&self) -> Result<(), MediaError> {
		HtmlMediaElement::play(self)
			.map(drop)
			.map_err(|error| MediaError(format!("{error:?}")))
	}

	fn pause(&self) -> Result<(), MediaError> {
		HtmlMediaElement::pause(self).map_err(|error| MediaError(format!("{error:?}")))
	}

	fn current_time(&self) -> f64 {
		HtmlMediaElement::current_time(self)
	}

	fn set_current_time(&self, seconds: f64) {
		HtmlMediaElement::set_current_time(self, seconds);
	}

	fn duration(&self) -> f64 {
		HtmlMediaElement::duration(self)
	}

	fn volume(&self) -> f64 {
		HtmlMediaElement::volume(self)
	}

	fn set_volume(&self, volume: f64) {
		HtmlMediaElement::set_volume(self, volume);
	}

	fn playback_rate(&self) -> f64 {
		HtmlMediaElement::playback_rate(self)
	}

	fn set_playback_rate(&self, rate: f64) {
		HtmlMediaElement::set_playback_rate(self, rate);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	const PLAYER_MARKUP: &str = r#"
		<video class="viewer"></video>
		<div class="progress"><div class="progress__filled"></div></div>
		<button class="toggle">►</button>
		<input type="range" name="volume" class="player__slider" min="0" max="1" step="0.05" value="0.4">
		<button data-skip="10">10s »</button>
	"#;

	fn fixture(markup: &str) -> Element {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.expect("No document");
		let player = document.create_element("div").expect("Failed to create player");
		player.set_class_name("player");
		player.set_inner_html(markup);
		document
			.body()
			.expect("No body")
			.append_child(&player)
			.expect("Failed to attach player");
		player
	}

	fn element<T: JsCast>(player: &Element, selector: &'static str) -> T {
		query(player, selector).expect("Fixture element missing")
	}

	fn dispatch(player: &Element, selector: &'static str, event_type: &str) {
		let event = Event::new(event_type).expect("Failed to create event");
		element::<EventTarget>(player, selector)
			.dispatch_event(&event)
			.expect("Failed to dispatch event");
	}

	fn zero_progress_configuration() -> Configuration {
		parse_configuration(Some(r#"unknown_duration_progress = "zero""#)).expect("Invalid configuration")
	}

	#[wasm_bindgen_test]
	fn should_fail_to_bind_without_fill_indicator() {
		let player = fixture(&PLAYER_MARKUP.replace(r#"<div class="progress__filled"></div>"#, ""));

		let error = bind(&player, Configuration::default()).err();

		assert_eq!(Some(PlayerError::MissingElement(".progress__filled")), error);
	}

	#[wasm_bindgen_test]
	fn should_skip_by_the_buttons_skip_amount() {
		let player = fixture(PLAYER_MARKUP);
		let _binding = bind(&player, Configuration::default()).expect("Failed to bind player");

		dispatch(&player, "[data-skip]", "click");

		assert_eq!(10.0, element::<HtmlMediaElement>(&player, ".viewer").current_time());
	}

	#[wasm_bindgen_test]
	fn should_apply_slider_value_on_change() {
		let player = fixture(PLAYER_MARKUP);
		let _binding = bind(&player, Configuration::default()).expect("Failed to bind player");

		dispatch(&player, ".player__slider", "change");

		assert_eq!(0.4, element::<HtmlMediaElement>(&player, ".viewer").volume());
	}

	#[wasm_bindgen_test]
	fn should_set_flex_basis_on_time_update() {
		let player = fixture(PLAYER_MARKUP);
		let _binding = bind(&player, zero_progress_configuration()).expect("Failed to bind player");

		dispatch(&player, ".viewer", "timeupdate");

		let fill = element::<HtmlElement>(&player, ".progress__filled");
		assert_eq!(
			"0%",
			fill.style().get_property_value("flex-basis").expect("No flex-basis")
		);
	}

	#[wasm_bindgen_test]
	fn should_leave_flex_basis_alone_with_unknown_duration_by_default() {
		let player = fixture(PLAYER_MARKUP);
		let _binding = bind(&player, Configuration::default()).expect("Failed to bind player");

		dispatch(&player, ".viewer", "timeupdate");

		let fill = element::<HtmlElement>(&player, ".progress__filled");
		assert_eq!("", fill.style().get_property_value("flex-basis").expect("No flex-basis"));
	}

	#[wasm_bindgen_test]
	fn should_detach_listeners_when_dropped() {
		let player = fixture(PLAYER_MARKUP);
		let binding = bind(&player, zero_progress_configuration()).expect("Failed to bind player");

		drop(binding);
		dispatch(&player, ".viewer", "timeupdate");

		let fill = element::<HtmlElement>(&player, ".progress__filled");
		assert_eq!("", fill.style().get_property_value("flex-basis").expect("No flex-basis"));
	}

	#[wasm_bindgen_test]
	fn should_parse_configuration_passed_by_the_page() {
		let configuration = parse_configuration(Some("clamp_seeking = true")).expect("Invalid configuration");

		assert!(configuration.clamp_seeking);
		assert_eq!(Configuration::default(), parse_configuration(None).expect("Invalid configuration"));
		parse_configuration(Some("clamp_seeking = 1")).expect_err("Accepted invalid configuration");
	}
}
