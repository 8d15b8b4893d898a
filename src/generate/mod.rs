use serde_derive::{Deserialize, Serialize};
use url::Url;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::error::GatError;
use crate::prompt::RunOptions;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
	pub model: String,
	pub prompt: String,
	pub stream: bool,
	pub temperature: f64,
}

impl GenerateRequest {
	/// Streaming replies are not handled, so `stream` is always sent as false.
	pub fn new(config: &Config, options: &RunOptions, prompt: String) -> Self {
		if config.stream {
			tracing::warn!("streamed responses are not supported, requesting a single reply");
		}
		GenerateRequest {
			model: config.model.clone(),
			prompt,
			stream: false,
			temperature: options.temperature,
		}
	}

	pub fn to_json(&self) -> Result<String, GatError> {
		serde_json::to_string(self).map_err(GatError::Encode)
	}

	pub fn to_json_pretty(&self) -> Result<String, GatError> {
		serde_json::to_string_pretty(self).map_err(GatError::Encode)
	}
}

#[derive(Deserialize, Debug)]
pub struct GenerateResponse {
	pub response: String,
}

pub struct GenerateClient {
	post_url: Url,
	client: reqwest::Client,
}

impl GenerateClient {
	pub fn new(post_url: &str) -> Result<Self, GatError> {
		Ok(GenerateClient {
			post_url: Url::parse(post_url)?,
			client: reqwest::Client::new(),
		})
	}

	pub async fn call_api(&self, request: &GenerateRequest) -> Result<String, GatError> {
		let serialised = request.to_json()?;
		tracing::debug!(url = %self.post_url, model = %request.model, bytes = serialised.len(), "sending generate request");
		let resp = self.client
			.post(self.post_url.clone())
			.header(CONTENT_TYPE, "application/json")
			.body(serialised)
			.send()
			.await?
			.error_for_status()?;
		let body = resp.text().await?;
		tracing::debug!(bytes = body.len(), "received generate response");
		let response = Self::parse_response(&body)?;
		Ok(response.response)
	}

	pub fn parse_response(response: &str) -> Result<GenerateResponse, GatError> {
		serde_json::from_str(response).map_err(GatError::Decode)
	}
}
