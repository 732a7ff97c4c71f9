use crate::BusinessProfile;

/// Sections the completion is asked to produce, in order.
pub const REQUIRED_SECTIONS: [&str; 9] = [
	"Executive Summary",
	"Company Profile",
	"Market Analysis",
	"Industry Insights",
	"Competitive Landscape",
	"Strategic Recommendations",
	"Risk Assessment",
	"Implementation Roadmap",
	"Conclusion and Next Steps",
];

const INSTRUCTIONS: [&str; 4] = [
	"Format the report in markdown with clear headings and bullet points.",
	"Cite the market intelligence above where it supports a finding.",
	"Be specific to the business's industry and location rather than generic.",
	"Make every recommendation actionable, with concrete next steps.",
];

/// Renders the single instruction sent to the completion service.
pub fn build_prompt(profile: &BusinessProfile, prompt: &str, context: &str) -> String {
	let instructions = numbered(&INSTRUCTIONS);
	let sections = numbered(&REQUIRED_SECTIONS);

	format!(
		"You are an expert business analyst and consultant. Write a comprehensive, professional \
business report for the company described below.

BUSINESS INFORMATION:
- Business Name: {name}
- Postal Code: {postal_code}
- Country: {country}
- Industry: {industry}

USER REQUEST:
{prompt}

MARKET INTELLIGENCE FROM WEB SEARCH:
{context}

INSTRUCTIONS:
{instructions}

REQUIRED SECTIONS:
{sections}",
		name = profile.business_name,
		postal_code = profile.postal_code,
		country = profile.country,
		industry = profile.industry,
	)
}

fn numbered(items: &[&str]) -> String {
	items
		.iter()
		.enumerate()
		.map(|(index, item)| format!("{}. {item}", index + 1))
		.collect::<Vec<_>>()
		.join("\n")
}
