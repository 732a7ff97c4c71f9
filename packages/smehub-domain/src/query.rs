use crate::BusinessProfile;

/// Derives the search queries for one report request.
///
/// The prompt query is only added when the prompt has non-whitespace content, so the result holds
/// five or six entries.
pub fn build_queries(profile: &BusinessProfile, prompt: &str) -> Vec<String> {
	let BusinessProfile { postal_code, country, industry, .. } = profile;
	let mut queries = vec![
		format!("{industry} industry trends in {country}"),
		format!("{industry} market analysis {country}"),
		format!("business environment for {industry} companies near {postal_code}, {country}"),
		format!("{industry} regulations and compliance requirements in {country}"),
	];
	let prompt = prompt.trim();

	if !prompt.is_empty() {
		queries.push(format!("{prompt} {industry} {country}"));
	}

	queries.push(format!("{industry} competitors in {country}"));

	queries
}

#[cfg(test)]
mod tests {
	use super::*;

	fn profile() -> BusinessProfile {
		BusinessProfile {
			business_name: "Acme Bakery".to_string(),
			postal_code: "SW1A 1AA".to_string(),
			country: "UK".to_string(),
			industry: "Food Retail".to_string(),
		}
	}

	#[test]
	fn whitespace_prompt_counts_as_empty() {
		assert_eq!(build_queries(&profile(), " \n\t").len(), 5);
	}

	#[test]
	fn competitor_query_is_always_last() {
		let with_prompt = build_queries(&profile(), "open a second shop");
		let without_prompt = build_queries(&profile(), "");

		assert_eq!(with_prompt.last(), without_prompt.last());
		assert_eq!(&with_prompt[..4], &without_prompt[..4]);
	}
}
