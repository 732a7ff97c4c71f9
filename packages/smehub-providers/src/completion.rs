use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

const API_KEY_HEADER: &str = "x-api-key";
const API_VERSION_HEADER: &str = "anthropic-version";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
	pub role: String,
	pub content: String,
}
impl Message {
	pub fn user(content: impl Into<String>) -> Self {
		Self { role: "user".to_string(), content: content.into() }
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
	pub model: String,
	pub max_tokens: u32,
	pub temperature: f32,
	pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
	#[serde(default)]
	pub content: Vec<ContentBlock>,
}
impl CompletionResponse {
	/// Text of the first `text` block, if the model produced one.
	pub fn first_text(&self) -> Option<&str> {
		self.content
			.iter()
			.find(|block| block.kind == "text")
			.and_then(|block| block.text.as_deref())
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
	#[serde(rename = "type", default = "default_block_type")]
	pub kind: String,
	#[serde(default)]
	pub text: Option<String>,
}
impl ContentBlock {
	pub fn text(text: impl Into<String>) -> Self {
		Self { kind: default_block_type(), text: Some(text.into()) }
	}
}

pub async fn complete(
	cfg: &smehub_config::CompletionProviderConfig,
	request: &CompletionRequest,
) -> Result<CompletionResponse> {
	let url = format!("{}{}", cfg.api_base, cfg.path);

	tracing::debug!(
		provider = %cfg.provider_id,
		model = %request.model,
		max_tokens = request.max_tokens,
		"Sending completion request."
	);

	let json = crate::post_json(&url, cfg.timeout_ms, completion_headers(cfg)?, request).await?;

	parse_completion_response(json)
}

fn completion_headers(cfg: &smehub_config::CompletionProviderConfig) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert(HeaderName::from_static(API_KEY_HEADER), HeaderValue::from_str(&cfg.api_key)?);
	headers.insert(
		HeaderName::from_static(API_VERSION_HEADER),
		HeaderValue::from_str(&cfg.api_version)?,
	);
	crate::extend_headers(&mut headers, &cfg.default_headers)?;

	Ok(headers)
}

fn parse_completion_response(json: Value) -> Result<CompletionResponse> {
	Ok(serde_json::from_value(json)?)
}

fn default_block_type() -> String {
	"text".to_string()
}
