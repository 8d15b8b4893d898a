use std::path::{Path, PathBuf};
use serde_derive::{Deserialize, Serialize};

use crate::helpers::{self, HelperError};

pub const APP_NAME: &str = "gat";
pub const CONFIG_FILE: &str = "config.json";

/// Persisted settings, read once per run. Keys missing from the file fall
/// back to the values of `Config::default()`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
	pub model: String,
	#[serde(rename = "ollama_url", alias = "endpoint")]
	pub endpoint: String,
	pub temperature: f64,
	#[serde(rename = "prompt", alias = "defaultPrompt")]
	pub default_prompt: String,
	pub stream: bool,
	pub columns: usize,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			model: "neural-chat:7b".to_string(),
			endpoint: "http://127.0.0.1:11434/api/generate".to_string(),
			temperature: 0.5,
			default_prompt: "summarize the following content:".to_string(),
			stream: false,
			columns: 80,
		}
	}
}

impl Config {
	pub fn path_in(config_dir: &Path) -> PathBuf {
		config_dir.join(CONFIG_FILE)
	}

	/// Loads `config.json` from `config_dir`, writing the defaults there first
	/// if the file does not exist yet.
	pub fn load_or_create(config_dir: &Path) -> Result<Self, HelperError> {
		let config_file = Self::path_in(config_dir);
		if !config_file.exists() {
			let config = Config::default();
			helpers::save_to_json(&config_file, &config)?;
			tracing::info!(path = %config_file.display(), "created default configuration");
			return Ok(config);
		}
		let config: Config = helpers::read_from_json(&config_file)?;
		tracing::debug!(path = %config_file.display(), model = %config.model, "loaded configuration");
		Ok(config)
	}

	/// Returns a copy with the command line overrides applied. Nothing is
	/// written back to disk.
	pub fn with_overrides(&self, model: Option<&str>, endpoint: Option<&str>) -> Self {
		let mut config = self.clone();
		if let Some(model) = model.filter(|m| !m.is_empty()) {
			config.model = model.to_string();
		}
		if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
			config.endpoint = endpoint.to_string();
		}
		config
	}
}
