use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::BusinessProfile;

pub const FALLBACK_HEADING: &str = "## Report Generation Fallback";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// Template-only report returned when AI-assisted generation fails.
///
/// The output depends only on its arguments. It never reuses the headings requested from the
/// completion service, so a fallback can't be mistaken for a generated report.
pub fn render_fallback(
	profile: &BusinessProfile,
	prompt: &str,
	error: &str,
	generated_at: OffsetDateTime,
) -> String {
	let timestamp = generated_at
		.to_offset(time::UtcOffset::UTC)
		.format(TIMESTAMP_FORMAT)
		.unwrap_or_else(|_| generated_at.unix_timestamp().to_string());
	let request = if prompt.trim().is_empty() { "(no specific request provided)" } else { prompt };

	format!(
		"# Business Report for {name}

{FALLBACK_HEADING}

An AI-assisted report could not be generated for {name}. This fallback summarises the details \
that were submitted.

**Error Details**: {error}

## Business Details
- **Business Name**: {name}
- **Location**: {postal_code}, {country}
- **Industry Sector**: {industry}

## Your Request
\"{request}\"

Please try again or contact support if the issue persists.

---
*Fallback report generated on {timestamp}*",
		name = profile.business_name,
		postal_code = profile.postal_code,
		country = profile.country,
		industry = profile.industry,
	)
}
