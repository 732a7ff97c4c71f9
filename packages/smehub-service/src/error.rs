pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("{message}")]
	Configuration { message: String },
	#[error("Search provider error: {message}")]
	Search { message: String },
	#[error("Completion service error: {message}")]
	Completion { message: String },
	#[error("Report generation timed out after {seconds} seconds.")]
	Timeout { seconds: u64 },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<smehub_config::Error> for Error {
	fn from(err: smehub_config::Error) -> Self {
		Self::Configuration { message: err.to_string() }
	}
}

impl From<smehub_storage::Error> for Error {
	fn from(err: smehub_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}
