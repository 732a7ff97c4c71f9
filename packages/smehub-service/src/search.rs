use smehub_config::SearchProviderConfig;
use smehub_domain::SearchResult;
use smehub_providers::search::{SearchDepth, SearchRequest};

use crate::{Error, Providers, Result};

pub const SEARCH_DEPTH: SearchDepth = SearchDepth::Advanced;

/// Runs every query in order and flattens the hits.
///
/// Search failures never reach the caller. With `keep_partial` unset, the first failing query
/// discards everything gathered so far and the result is empty. With it set, failing queries are
/// skipped and the remaining hits are kept.
pub async fn gather_results(
	providers: &Providers,
	cfg: &SearchProviderConfig,
	queries: &[String],
	keep_partial: bool,
) -> Vec<SearchResult> {
	let mut results = Vec::new();

	for query in queries {
		match search_one(providers, cfg, query).await {
			Ok(hits) => results.extend(hits),
			Err(err) if keep_partial => {
				tracing::warn!(error = %err, query = %query, "Search query failed. Skipping it.");
			},
			Err(err) => {
				tracing::warn!(
					error = %err,
					query = %query,
					discarded = results.len(),
					"Search query failed. Continuing without market data."
				);

				return Vec::new();
			},
		}
	}

	tracing::info!(queries = queries.len(), results = results.len(), "Search phase finished.");

	results
}

async fn search_one(
	providers: &Providers,
	cfg: &SearchProviderConfig,
	query: &str,
) -> Result<Vec<SearchResult>> {
	let request = SearchRequest {
		query: query.to_string(),
		search_depth: SEARCH_DEPTH,
		max_results: cfg.max_results,
	};
	let response = providers
		.search
		.search(cfg, &request)
		.await
		.map_err(|err| Error::Search { message: err.to_string() })?;

	Ok(response
		.results
		.into_iter()
		.map(|hit| SearchResult {
			title: hit.title,
			content: hit.content,
			url: hit.url,
			relevance_score: hit.score.unwrap_or(0.0),
			originating_query: query.to_string(),
		})
		.collect())
}
