use std::fmt::Write as _;

use crate::SearchResult;

pub const NO_MARKET_DATA: &str = "No current market data available.";
pub const MAX_RESULTS_PER_QUERY: usize = 3;
pub const MAX_CONTENT_CHARS: usize = 500;
pub const TRUNCATION_MARKER: &str = "...";

/// Renders search results as the market-intelligence block of the completion prompt.
///
/// Results are grouped by originating query in first-seen order. Each group keeps its first
/// [`MAX_RESULTS_PER_QUERY`] members and each content field is cut to [`MAX_CONTENT_CHARS`]
/// characters before the marker is appended.
pub fn assemble_context(results: &[SearchResult]) -> String {
	if results.is_empty() {
		return NO_MARKET_DATA.to_string();
	}

	let mut groups: Vec<(&str, Vec<&SearchResult>)> = Vec::new();

	for result in results {
		match groups.iter_mut().find(|(query, _)| *query == result.originating_query) {
			Some((_, members)) => members.push(result),
			None => groups.push((result.originating_query.as_str(), vec![result])),
		}
	}

	let mut out = String::new();

	for (index, (query, members)) in groups.iter().enumerate() {
		if index > 0 {
			out.push('\n');
		}

		let _ = writeln!(out, "Search results for \"{query}\":");

		for result in members.iter().take(MAX_RESULTS_PER_QUERY) {
			let _ = writeln!(out, "- Title: {}", result.title);
			let _ = writeln!(
				out,
				"  Content: {}{TRUNCATION_MARKER}",
				truncate_chars(&result.content, MAX_CONTENT_CHARS)
			);
			let _ = writeln!(out, "  Source: {}", result.url);
		}
	}

	out.trim_end().to_string()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
	match text.char_indices().nth(max_chars) {
		Some((byte_index, _)) => &text[..byte_index],
		None => text,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncates_on_char_boundaries() {
		let text = "\u{e9}".repeat(10);

		assert_eq!(truncate_chars(&text, 4).chars().count(), 4);
		assert_eq!(truncate_chars("short", 500), "short");
	}
}
