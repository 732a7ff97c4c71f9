use serde::{Deserialize, Serialize};

/// The business a report is written about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
	pub business_name: String,
	pub postal_code: String,
	pub country: String,
	pub industry: String,
}

/// One web-search hit, tagged with the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
	pub title: String,
	pub content: String,
	pub url: String,
	pub relevance_score: f64,
	pub originating_query: String,
}
