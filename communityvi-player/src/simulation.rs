//! In-memory stand-ins for the browser's media element and player UI.
//!
//! [`SimulatedMedia`] queues the notifications a real media element would dispatch after a state change, so
//! they can be fed back into the controller the way the browser's event loop does.

use crate::event::PlayerEvent;
use crate::media::{MediaElement, MediaError};
use crate::progress::FillBasis;
use crate::view::{PlayerView, ToggleGlyph};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MediaState {
	#[builder(default = true)]
	pub paused: bool,
	#[builder(default)]
	pub current_time: f64,
	/// `NaN` until metadata has been loaded.
	#[builder(default = f64::NAN)]
	pub duration: f64,
	#[builder(default = 1.0)]
	pub volume: f64,
	#[builder(default = 1.0)]
	pub playback_rate: f64,
}

impl Default for MediaState {
	fn default() -> Self {
		Self::builder().build()
	}
}

#[derive(Debug, Default)]
pub struct SimulatedMedia {
	state: Cell<MediaState>,
	refuses_playback: Cell<bool>,
	notifications: RefCell<Vec<PlayerEvent>>,
}

impl SimulatedMedia {
	pub fn new(state: MediaState) -> Self {
		Self {
			state: Cell::new(state),
			..Default::default()
		}
	}

	pub fn state(&self) -> MediaState {
		self.state.get()
	}

	/// Makes every following `play` fail, like a browser enforcing its autoplay policy.
	pub fn refuse_playback(&self) {
		self.refuses_playback.set(true);
	}

	/// Notifications dispatched since the last call, oldest first.
	pub fn take_notifications(&self) -> Vec<PlayerEvent> {
		self.notifications.take()
	}

	fn update(&self, change: impl FnOnce(&mut MediaState)) {
		let mut state = self.state.get();
		change(&mut state);
		self.state.set(state);
	}

	fn notify(&self, notification: PlayerEvent) {
		self.notifications.borrow_mut().push(notification);
	}
}

impl MediaElement for SimulatedMedia {
	fn paused(&self) -> bool {
		self.state.get().paused
	}

	fn play(&self) -> Result<(), MediaError> {
		if self.refuses_playback.get() {
			return Err(MediaError("NotAllowedError: play() is not allowed".to_string()));
		}

		if self.paused() {
			self.update(|state| state.paused = false);
			self.notify(PlayerEvent::Played);
		}
		Ok(())
	}

	fn pause(&self) -> Result<(), MediaError> {
		if !self.paused() {
			self.update(|state| state.paused = true);
			self.notify(PlayerEvent::Paused);
		}
		Ok(())
	}

	fn current_time(&self) -> f64 {
		self.state.get().current_time
	}

	fn set_current_time(&self, seconds: f64) {
		self.update(|state| state.current_time = seconds);
		self.notify(PlayerEvent::TimeUpdated);
	}

	fn duration(&self) -> f64 {
		self.state.get().duration
	}

	fn volume(&self) -> f64 {
		self.state.get().volume
	}

	fn set_volume(&self, volume: f64) {
		self.update(|state| state.volume = volume);
	}

	fn playback_rate(&self) -> f64 {
		self.state.get().playback_rate
	}

	fn set_playback_rate(&self, rate: f64) {
		self.update(|state| state.playback_rate = rate);
	}
}

/// Player UI that remembers what was last rendered into it.
#[derive(Debug)]
pub struct RecordingView {
	track_width: f64,
	glyph: Cell<Option<ToggleGlyph>>,
	fill_basis: Cell<Option<FillBasis>>,
}

impl RecordingView {
	pub fn new(track_width: f64) -> Self {
		Self {
			track_width,
			glyph: Cell::new(None),
			fill_basis: Cell::new(None),
		}
	}

	pub fn glyph(&self) -> Option<ToggleGlyph> {
		self.glyph.get()
	}

	pub fn fill_basis(&self) -> Option<FillBasis> {
		self.fill_basis.get()
	}
}

impl PlayerView for RecordingView {
	fn set_toggle_glyph(&self, glyph: ToggleGlyph) {
		self.glyph.set(Some(glyph));
	}

	fn set_fill_basis(&self, basis: FillBasis) {
		self.fill_basis.set(Some(basis));
	}

	fn track_width(&self) -> f64 {
		self.track_width
	}
}
