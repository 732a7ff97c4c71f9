pub mod completion;
pub mod search;

mod error;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::{
	Client,
	header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use serde_json::{Map, Value};

const MAX_ERROR_BODY_CHARS: usize = 512;

pub fn auth_headers(api_key: &str, default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert(AUTHORIZATION, format!("Bearer {api_key}").parse()?);
	extend_headers(&mut headers, default_headers)?;

	Ok(headers)
}

pub(crate) fn extend_headers(
	headers: &mut HeaderMap,
	default_headers: &Map<String, Value>,
) -> Result<()> {
	for (key, value) in default_headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: format!("Default header {key} must be a string."),
			});
		};

		headers.insert(HeaderName::from_bytes(key.as_bytes())?, HeaderValue::from_str(raw)?);
	}

	Ok(())
}

pub(crate) async fn post_json<B>(
	url: &str,
	timeout_ms: u64,
	headers: HeaderMap,
	body: &B,
) -> Result<Value>
where
	B: Serialize + ?Sized,
{
	let client = Client::builder().timeout(Duration::from_millis(timeout_ms)).build()?;
	let res = client.post(url).headers(headers).json(body).send().await?;
	let status = res.status();

	if !status.is_success() {
		let text = res.text().await.unwrap_or_default();

		return Err(Error::Api { status: status.as_u16(), message: error_message(&text) });
	}

	Ok(res.json().await?)
}

/// Pulls a human-readable message out of a provider error body.
pub(crate) fn error_message(body: &str) -> String {
	if let Ok(json) = serde_json::from_str::<Value>(body) {
		let candidates = [
			json.pointer("/error/message"),
			json.pointer("/detail/error"),
			json.get("detail"),
			json.get("message"),
			json.get("error"),
		];

		for candidate in candidates.into_iter().flatten() {
			if let Some(message) = candidate.as_str().filter(|m| !m.trim().is_empty()) {
				return message.to_string();
			}
		}
	}

	let trimmed = body.trim();

	if trimmed.is_empty() {
		return "empty response body".to_string();
	}

	trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
