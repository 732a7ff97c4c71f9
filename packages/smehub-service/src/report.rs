use std::time::Duration;

use time::OffsetDateTime;

use smehub_domain::{
	BusinessProfile, context::assemble_context, fallback::render_fallback, prompt::build_prompt,
	query::build_queries,
};

use crate::{Error, ReportService, Result, completion, search};

/// Result of one generation call. Both arms carry report text.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
	Generated { report: String },
	Fallback { report: String, reason: Error },
}
impl GenerationOutcome {
	pub fn report(&self) -> &str {
		match self {
			Self::Generated { report } | Self::Fallback { report, .. } => report,
		}
	}

	pub fn into_report(self) -> String {
		match self {
			Self::Generated { report } | Self::Fallback { report, .. } => report,
		}
	}

	pub fn is_fallback(&self) -> bool {
		matches!(self, Self::Fallback { .. })
	}

	pub fn reason(&self) -> Option<&Error> {
		match self {
			Self::Generated { .. } => None,
			Self::Fallback { reason, .. } => Some(reason),
		}
	}
}

impl ReportService {
	/// Produces report text for `profile`. Never fails: any error becomes a fallback report.
	pub async fn generate(&self, profile: &BusinessProfile, prompt: &str) -> GenerationOutcome {
		tracing::info!(business = %profile.business_name, "Generating report.");

		match self.try_generate(profile, prompt).await {
			Ok(report) => {
				tracing::info!(chars = report.chars().count(), "Report generation completed.");

				GenerationOutcome::Generated { report }
			},
			Err(reason) => {
				tracing::error!(error = %reason, "Report generation failed. Using fallback report.");

				let report =
					render_fallback(profile, prompt, &reason.to_string(), OffsetDateTime::now_utc());

				GenerationOutcome::Fallback { report, reason }
			},
		}
	}

	async fn try_generate(&self, profile: &BusinessProfile, prompt: &str) -> Result<String> {
		smehub_config::validate_credentials(&self.cfg)?;

		let seconds = self.cfg.report.timeout_seconds;

		if seconds == 0 {
			return self.run_pipeline(profile, prompt).await;
		}

		tokio::time::timeout(Duration::from_secs(seconds), self.run_pipeline(profile, prompt))
			.await
			.unwrap_or(Err(Error::Timeout { seconds }))
	}

	async fn run_pipeline(&self, profile: &BusinessProfile, prompt: &str) -> Result<String> {
		let queries = build_queries(profile, prompt);
		let results = search::gather_results(
			&self.providers,
			&self.cfg.providers.search,
			&queries,
			self.cfg.report.keep_partial_search_results,
		)
		.await;
		let context = assemble_context(&results);
		let instruction = build_prompt(profile, prompt, &context);

		completion::complete_report(&self.providers, &self.cfg.providers.completion, &instruction)
			.await
	}
}
