use crate::controller::error::PlayerError;
use static_assertions::assert_obj_safe;
use std::str::FromStr;
use thiserror::Error;

/// Smallest playback rate browsers accept without throwing.
pub const MINIMUM_PLAYBACK_RATE: f64 = 0.0625;
/// Largest playback rate browsers accept without throwing.
pub const MAXIMUM_PLAYBACK_RATE: f64 = 16.0;

/// The platform's audio/video playback object.
///
/// Positions and durations are in seconds. The duration is `NaN` as long as it is unknown.
pub trait MediaElement {
	fn paused(&self) -> bool;
	fn play(&self) -> Result<(), MediaError>;
	fn pause(&self) -> Result<(), MediaError>;

	fn current_time(&self) -> f64;
	fn set_current_time(&self, seconds: f64);
	fn duration(&self) -> f64;

	fn volume(&self) -> f64;
	fn set_volume(&self, volume: f64);
	fn playback_rate(&self) -> f64;
	fn set_playback_rate(&self, rate: f64);
}

assert_obj_safe!(MediaElement);

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct MediaError(pub String);

/// Media properties that can be driven by a slider. Sliders are named after these properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaProperty {
	Volume,
	PlaybackRate,
}

impl MediaProperty {
	pub fn name(self) -> &'static str {
		match self {
			MediaProperty::Volume => "volume",
			MediaProperty::PlaybackRate => "playbackRate",
		}
	}

	/// Restrict `value` to what the property legally accepts.
	pub fn clamp(self, value: f64) -> f64 {
		match self {
			MediaProperty::Volume => value.clamp(0.0, 1.0),
			MediaProperty::PlaybackRate => value.clamp(MINIMUM_PLAYBACK_RATE, MAXIMUM_PLAYBACK_RATE),
		}
	}

	pub fn read(self, media: &impl MediaElement) -> f64 {
		match self {
			MediaProperty::Volume => media.volume(),
			MediaProperty::PlaybackRate => media.playback_rate(),
		}
	}

	pub fn write(self, media: &impl MediaElement, value: f64) {
		match self {
			MediaProperty::Volume => media.set_volume(value),
			MediaProperty::PlaybackRate => media.set_playback_rate(value),
		}
	}
}

impl FromStr for MediaProperty {
	type Err = PlayerError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name {
			"volume" => Ok(MediaProperty::Volume),
			"playbackRate" => Ok(MediaProperty::PlaybackRate),
			_ => Err(PlayerError::UnknownRangeProperty(name.to_string())),
		}
	}
}
