use reqwest::header::AUTHORIZATION;
use serde_json::{Map, Value};

use smehub_providers::{
	Error,
	completion::{CompletionResponse, ContentBlock},
};

#[test]
fn builds_bearer_auth_header() {
	let headers =
		smehub_providers::auth_headers("secret", &Map::new()).expect("Failed to build headers.");
	let value = headers.get(AUTHORIZATION).expect("Missing authorization header.");

	assert_eq!(value, "Bearer secret");
}

#[test]
fn default_headers_are_merged() {
	let mut defaults = Map::new();

	defaults.insert("x-client".to_string(), Value::String("smehub".to_string()));

	let headers =
		smehub_providers::auth_headers("secret", &defaults).expect("Failed to build headers.");

	assert_eq!(headers.get("x-client").expect("Missing default header."), "smehub");
}

#[test]
fn non_string_default_header_is_rejected() {
	let mut defaults = Map::new();

	defaults.insert("x-retries".to_string(), Value::from(3));

	let err = smehub_providers::auth_headers("secret", &defaults)
		.expect_err("Expected header validation error.");

	assert!(matches!(err, Error::InvalidConfig { .. }), "Unexpected error: {err}");
	assert!(err.to_string().contains("x-retries"), "Unexpected error: {err}");
}

#[test]
fn api_error_reports_status_and_message() {
	let err = Error::Api { status: 429, message: "rate limited".to_string() };

	assert_eq!(err.to_string(), "Provider returned HTTP 429: rate limited");
}

#[test]
fn first_text_skips_non_text_blocks() {
	let response = CompletionResponse {
		content: vec![
			ContentBlock { kind: "tool_use".to_string(), text: None },
			ContentBlock::text("report body"),
		],
	};

	assert_eq!(response.first_text(), Some("report body"));
}
