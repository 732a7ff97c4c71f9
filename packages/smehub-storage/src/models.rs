use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
	Pending,
	Processing,
	Completed,
	Failed,
}
impl ReportStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Pending => "pending",
			Self::Processing => "processing",
			Self::Completed => "completed",
			Self::Failed => "failed",
		}
	}

	pub fn is_terminal(self) -> bool {
		matches!(self, Self::Completed | Self::Failed)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
	pub id: String,
	pub user_id: String,
	pub status: ReportStatus,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub generated_report: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub completed_at: Option<OffsetDateTime>,
}
impl ReportRecord {
	pub fn pending(id: impl Into<String>, user_id: impl Into<String>, now: OffsetDateTime) -> Self {
		Self {
			id: id.into(),
			user_id: user_id.into(),
			status: ReportStatus::Pending,
			generated_report: None,
			error: None,
			created_at: now,
			updated_at: now,
			completed_at: None,
		}
	}
}

/// Field-level patch applied to a stored [`ReportRecord`].
///
/// For the optional fields, `None` leaves the stored value untouched and `Some(None)` clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportUpdate {
	pub status: ReportStatus,
	pub generated_report: Option<Option<String>>,
	pub error: Option<Option<String>>,
	pub updated_at: OffsetDateTime,
	pub completed_at: Option<Option<OffsetDateTime>>,
}
impl ReportUpdate {
	/// Starts a new run. Output of any earlier run is cleared.
	pub fn processing(now: OffsetDateTime) -> Self {
		Self {
			status: ReportStatus::Processing,
			generated_report: Some(None),
			error: Some(None),
			updated_at: now,
			completed_at: Some(None),
		}
	}

	pub fn completed(report: impl Into<String>, now: OffsetDateTime) -> Self {
		Self {
			status: ReportStatus::Completed,
			generated_report: Some(Some(report.into())),
			error: Some(None),
			updated_at: now,
			completed_at: Some(Some(now)),
		}
	}

	pub fn failed(report: impl Into<String>, error: impl Into<String>, now: OffsetDateTime) -> Self {
		Self {
			status: ReportStatus::Failed,
			generated_report: Some(Some(report.into())),
			error: Some(Some(error.into())),
			updated_at: now,
			completed_at: Some(Some(now)),
		}
	}

	pub fn apply(&self, record: &mut ReportRecord) {
		record.status = self.status;
		record.updated_at = self.updated_at;

		if let Some(report) = &self.generated_report {
			record.generated_report = report.clone();
		}
		if let Some(error) = &self.error {
			record.error = error.clone();
		}
		if let Some(completed_at) = self.completed_at {
			record.completed_at = completed_at;
		}
	}
}
