use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
	pub log_filters: String,
	/// Clamp skip and scrub targets to `[0, duration]` instead of passing them through to the media element.
	pub clamp_seeking: bool,
	/// Clamp slider values to the legal domain of the property they drive.
	pub clamp_range_values: bool,
	pub unknown_duration_progress: UnknownDurationProgress,
}

/// What the progress fill shows while the duration can't be divided by.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownDurationProgress {
	/// Leave the fill indicator as it is.
	#[default]
	Skip,
	/// Render an empty fill indicator.
	Zero,
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			log_filters: "info".to_string(),
			clamp_seeking: false,
			clamp_range_values: true,
			unknown_duration_progress: UnknownDurationProgress::default(),
		}
	}
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}
