use crate::configuration::{Configuration, UnknownDurationProgress};
use crate::controller::error::PlayerError;
use crate::event::{MediaFailedEvent, PlayerEvent, PointerEvent, RangeEvent, SkipClickedEvent};
use crate::media::{MediaElement, MediaProperty};
use crate::progress::{FillBasis, clamp_position, fill_basis, scrub_target};
use crate::view::{PlayerView, ToggleGlyph};
use tracing::{debug, error};

pub mod error;

/// Binds the player controls to a media element and reflects the media element's state back into the UI.
///
/// All playback state lives in the media element. The controller only tracks whether the pointer is held down
/// on the progress track.
pub struct PlayerController<Media, View> {
	media: Media,
	view: View,
	configuration: Configuration,
	is_scrubbing: bool,
}

impl<Media, View> PlayerController<Media, View>
where
	Media: MediaElement,
	View: PlayerView,
{
	pub fn new(media: Media, view: View, configuration: Configuration) -> Self {
		Self {
			media,
			view,
			configuration,
			is_scrubbing: false,
		}
	}

	pub fn handle(&mut self, event: PlayerEvent) -> Result<(), PlayerError> {
		use PlayerEvent::*;

		debug!("Handling {event:?}");
		match event {
			MediaClicked | ToggleClicked => self.toggle_play()?,
			Played | Paused => self.update_toggle_glyph(),
			TimeUpdated => self.reflect_progress(),
			SkipClicked(SkipClickedEvent { amount }) => self.skip(amount.as_deref())?,
			RangeChanged(RangeEvent { name, value }) | RangeMouseMoved(RangeEvent { name, value }) => {
				self.apply_range_update(&name, &value)?;
			}
			ProgressClicked(PointerEvent { offset_x }) => self.scrub(offset_x),
			ProgressMouseDown => self.begin_scrubbing(),
			ProgressMouseUp => self.end_scrubbing(),
			ProgressMouseMoved(PointerEvent { offset_x }) => self.pointer_moved(offset_x),
			MediaFailed(MediaFailedEvent { message }) => self.observe_media_error(message.as_deref()),
		}
		Ok(())
	}

	pub fn toggle_play(&self) -> Result<(), PlayerError> {
		if self.media.paused() {
			self.media.play()?;
		} else {
			self.media.pause()?;
		}
		Ok(())
	}

	/// Reacts to play and pause notifications.
	pub fn update_toggle_glyph(&self) {
		self.view
			.set_toggle_glyph(ToggleGlyph::for_paused_state(self.media.paused()));
	}

	/// Moves the position by the signed number of seconds in a skip control's `amount` attribute.
	pub fn skip(&self, amount: Option<&str>) -> Result<(), PlayerError> {
		let seconds = amount
			.and_then(|amount| amount.trim().parse::<f64>().ok())
			.filter(|seconds| seconds.is_finite())
			.ok_or_else(|| PlayerError::InvalidSkipAmount(amount.map(ToString::to_string)))?;

		self.seek_to(self.media.current_time() + seconds);
		Ok(())
	}

	/// Writes a slider's value to the media property the slider is named after.
	pub fn apply_range_update(&self, name: &str, value: &str) -> Result<(), PlayerError> {
		let property = name.parse::<MediaProperty>()?;
		let value = value
			.trim()
			.parse::<f64>()
			.ok()
			.filter(|value| value.is_finite())
			.ok_or_else(|| PlayerError::InvalidRangeValue {
				name: name.to_string(),
				value: value.to_string(),
			})?;

		let value = if self.configuration.clamp_range_values {
			property.clamp(value)
		} else {
			value
		};
		debug!(
			"Setting {} from {} to {value}",
			property.name(),
			property.read(&self.media)
		);
		property.write(&self.media, value);
		Ok(())
	}

	/// Reacts to time update notifications.
	pub fn reflect_progress(&self) {
		match fill_basis(self.media.current_time(), self.media.duration()) {
			Some(basis) => self.view.set_fill_basis(basis),
			None => match self.configuration.unknown_duration_progress {
				UnknownDurationProgress::Skip => {}
				UnknownDurationProgress::Zero => self.view.set_fill_basis(FillBasis::EMPTY),
			},
		}
	}

	/// Seeks to the position under the pointer, `offset_x` pixels into the progress track.
	pub fn scrub(&self, offset_x: f64) {
		if let Some(target) = scrub_target(offset_x, self.view.track_width(), self.media.duration()) {
			self.seek_to(target);
		}
	}

	pub fn begin_scrubbing(&mut self) {
		self.is_scrubbing = true;
	}

	pub fn end_scrubbing(&mut self) {
		self.is_scrubbing = false;
	}

	pub fn pointer_moved(&self, offset_x: f64) {
		if self.is_scrubbing {
			self.scrub(offset_x);
		}
	}

	pub fn is_scrubbing(&self) -> bool {
		self.is_scrubbing
	}

	pub fn observe_media_error(&self, message: Option<&str>) {
		match message {
			Some(message) => error!("Error loading the video: {message}"),
			None => error!("Error loading the video."),
		}
	}

	pub fn media(&self) -> &Media {
		&self.media
	}

	pub fn view(&self) -> &View {
		&self.view
	}

	fn seek_to(&self, target: f64) {
		let target = if self.configuration.clamp_seeking {
			clamp_position(target, self.media.duration())
		} else {
			target
		};
		self.media.set_current_time(target);
	}
}
