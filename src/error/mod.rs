use std::io;
use thiserror::Error;

use crate::helpers::HelperError;

/// Everything that can end a run. Each variant is terminal.
#[derive(Debug, Error)]
pub enum GatError {
	#[error("Error loading configuration: {0}")]
	Config(#[from] HelperError),
	#[error("Error opening file: {0}")]
	File(#[source] io::Error),
	#[error("Error encoding JSON: {0}")]
	Encode(#[source] serde_json::Error),
	#[error("Invalid endpoint URL: {0}")]
	Endpoint(#[from] url::ParseError),
	#[error("Error sending data to API: {0}")]
	Network(#[from] reqwest::Error),
	#[error("Error decoding API response: {0}")]
	Decode(#[source] serde_json::Error),
}
