use crate::configuration::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommunityviPlayerError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Invalid log filters: {0}")]
	LogFilters(#[from] tracing_subscriber::filter::ParseError),
	#[error("Failed to read event log: {0}")]
	EventLog(#[from] std::io::Error),
	#[error("Failed to convert JSON: {0}")]
	Json(#[from] serde_json::Error),
}
