use crate::media::MediaError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayerError {
	#[error("Skip control has no numeric skip amount, got: {0:?}")]
	InvalidSkipAmount(Option<String>),
	#[error("Slider '{0}' doesn't name a writable media property.")]
	UnknownRangeProperty(String),
	#[error("Slider '{name}' has a non-numeric value: '{value}'")]
	InvalidRangeValue { name: String, value: String },
	#[error("Media element refused the operation: {0}")]
	Media(#[from] MediaError),
	#[error("Player element '{0}' is missing.")]
	MissingElement(&'static str),
	#[error("Failed to attach '{0}' listener: {1}")]
	Listener(&'static str, String),
}
