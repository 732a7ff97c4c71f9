use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use smehub_domain::BusinessProfile;
use smehub_storage::{ReportStore, ReportUpdate};

use crate::{Error, GenerationOutcome, ReportService, Result};

/// Inbound report request, in the wire shape the front end sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
	pub report_id: String,
	pub user_id: String,
	pub business_info: BusinessProfile,
	pub final_prompt: String,
}

impl ReportRequest {
	/// Rejects requests without a report or user id.
	pub fn validate(&self) -> Result<()> {
		if self.report_id.trim().is_empty() || self.user_id.trim().is_empty() {
			return Err(Error::InvalidRequest {
				message: "Missing required fields: reportId or userId.".to_string(),
			});
		}

		Ok(())
	}
}

/// Whether a best-effort store write landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreUpdate {
	pub updated: bool,
}

#[derive(Debug, Clone)]
pub struct ProcessedReport {
	pub report_id: String,
	pub outcome: GenerationOutcome,
	pub processing: StoreUpdate,
	pub completion: StoreUpdate,
}

impl ReportService {
	/// Generates the report for `request` and records progress in `store`.
	///
	/// Only a malformed request is an error. Store failures are logged and surfaced through the
	/// [`StoreUpdate`] flags.
	pub async fn process(
		&self,
		store: &dyn ReportStore,
		request: ReportRequest,
	) -> Result<ProcessedReport> {
		request.validate()?;

		let ReportRequest { report_id, business_info, final_prompt, .. } = request;

		tracing::info!(report_id = %report_id, "Received report request.");

		if let Ok(Some(existing)) = store.get(&report_id).await
			&& existing.status.is_terminal()
		{
			tracing::info!(
				report_id = %report_id,
				previous_status = existing.status.as_str(),
				"Report already finished once. Its earlier output will be replaced."
			);
		}

		let processing =
			write_update(store, &report_id, &ReportUpdate::processing(OffsetDateTime::now_utc()))
				.await;
		let outcome = self.generate(&business_info, &final_prompt).await;
		let now = OffsetDateTime::now_utc();
		let update = match &outcome {
			GenerationOutcome::Generated { report } => ReportUpdate::completed(report.clone(), now),
			GenerationOutcome::Fallback { report, reason } =>
				ReportUpdate::failed(report.clone(), reason.to_string(), now),
		};
		let completion = write_update(store, &report_id, &update).await;

		if !completion.updated {
			tracing::warn!(report_id = %report_id, "Report was generated but could not be stored.");
		}

		Ok(ProcessedReport { report_id, outcome, processing, completion })
	}
}

async fn write_update(
	store: &dyn ReportStore,
	report_id: &str,
	update: &ReportUpdate,
) -> StoreUpdate {
	match store.update(report_id, update).await {
		Ok(()) => {
			tracing::info!(
				report_id = %report_id,
				status = update.status.as_str(),
				"Report status updated."
			);

			StoreUpdate { updated: true }
		},
		Err(err) => {
			tracing::warn!(
				error = %Error::from(err),
				report_id = %report_id,
				status = update.status.as_str(),
				"Report status update failed."
			);

			StoreUpdate { updated: false }
		},
	}
}
