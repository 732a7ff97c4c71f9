pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Report store I/O failed at {path:?}.")]
	Io { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error("Report {report_id} was not found.")]
	NotFound { report_id: String },
	#[error("Invalid report id: {report_id:?}.")]
	InvalidId { report_id: String },
}
