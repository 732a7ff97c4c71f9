use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDepth {
	Basic,
	Advanced,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
	pub query: String,
	pub search_depth: SearchDepth,
	pub max_results: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchHit {
	#[serde(default, deserialize_with = "null_as_empty")]
	pub title: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub content: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub url: String,
	#[serde(default)]
	pub score: Option<f64>,
}

pub async fn search(
	cfg: &smehub_config::SearchProviderConfig,
	request: &SearchRequest,
) -> Result<SearchResponse> {
	let url = format!("{}{}", cfg.api_base, cfg.path);

	tracing::debug!(
		provider = %cfg.provider_id,
		query = %request.query,
		max_results = request.max_results,
		"Sending search request."
	);

	let json = crate::post_json(
		&url,
		cfg.timeout_ms,
		crate::auth_headers(&cfg.api_key, &cfg.default_headers)?,
		request,
	)
	.await?;

	parse_search_response(json)
}

fn parse_search_response(json: Value) -> Result<SearchResponse> {
	Ok(serde_json::from_value(json)?)
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tolerates_missing_and_null_fields() {
		let json = serde_json::json!({
			"query": "bakery trends",
			"results": [
				{ "title": "Trends", "content": "Sourdough is up.", "url": "https://a.example", "score": 0.92 },
				{ "title": null, "url": "https://b.example" }
			]
		});
		let parsed = parse_search_response(json).expect("parse failed");

		assert_eq!(parsed.results.len(), 2);
		assert_eq!(parsed.results[0].score, Some(0.92));
		assert_eq!(parsed.results[1].title, "");
		assert_eq!(parsed.results[1].content, "");
		assert_eq!(parsed.results[1].score, None);
	}

	#[test]
	fn missing_results_array_is_empty() {
		let parsed = parse_search_response(serde_json::json!({})).expect("parse failed");

		assert!(parsed.results.is_empty());
	}

	#[test]
	fn serializes_depth_in_wire_form() {
		let request = SearchRequest {
			query: "q".to_string(),
			search_depth: SearchDepth::Advanced,
			max_results: 5,
		};
		let json = serde_json::to_value(&request).expect("serialize failed");

		assert_eq!(json["search_depth"], "advanced");
		assert_eq!(json["max_results"], 5);
	}
}
