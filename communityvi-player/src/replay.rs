use crate::controller::PlayerController;
use crate::event::PlayerEvent;
use crate::progress::FillBasis;
use crate::simulation::{MediaState, RecordingView, SimulatedMedia};
use crate::view::ToggleGlyph;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::error;

pub type SimulatedController = PlayerController<SimulatedMedia, RecordingView>;

/// Where the simulated player ended up after a replay.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReplayOutcome {
	pub media: MediaState,
	pub glyph: Option<ToggleGlyph>,
	pub fill_basis: Option<FillBasis>,
	pub rejected_events: usize,
}

/// Parses an event log, a JSON array of player events.
pub fn parse_event_log(json: &str) -> Result<Vec<PlayerEvent>, serde_json::Error> {
	serde_json::from_str(json)
}

/// Feeds `events` into the controller one by one. After each event, the notifications the simulated media element
/// dispatched are handled before the next event, like the browser's event loop would.
///
/// Rejected events are logged and skipped.
pub fn replay(controller: &mut SimulatedController, events: impl IntoIterator<Item = PlayerEvent>) -> ReplayOutcome {
	let mut rejected_events = 0;
	for event in events {
		let mut pending = VecDeque::from([event]);
		while let Some(event) = pending.pop_front() {
			if let Err(error) = controller.handle(event) {
				error!("Rejected event: {error}");
				rejected_events += 1;
			}
			pending.extend(controller.media().take_notifications());
		}
	}

	ReplayOutcome {
		media: controller.media().state(),
		glyph: controller.view().glyph(),
		fill_basis: controller.view().fill_basis(),
		rejected_events,
	}
}
