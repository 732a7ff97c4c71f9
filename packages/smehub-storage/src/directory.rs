use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{BoxFuture, Error, ReportRecord, ReportStore, ReportUpdate, Result};

/// Stores each report as `<dir>/<report_id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
	root: PathBuf,
}
impl DirectoryStore {
	pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
		let root = root.into();

		fs::create_dir_all(&root)
			.await
			.map_err(|source| Error::Io { path: root.clone(), source })?;

		Ok(Self { root })
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn record_path(&self, report_id: &str) -> Result<PathBuf> {
		let valid = !report_id.is_empty()
			&& report_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

		if !valid {
			return Err(Error::InvalidId { report_id: report_id.to_string() });
		}

		Ok(self.root.join(format!("{report_id}.json")))
	}

	async fn read(&self, path: &Path) -> Result<Option<ReportRecord>> {
		match fs::read(path).await {
			Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(source) => Err(Error::Io { path: path.to_path_buf(), source }),
		}
	}

	async fn write(&self, path: &Path, record: &ReportRecord) -> Result<()> {
		let payload = serde_json::to_vec_pretty(record)?;
		let staging = path.with_extension("json.tmp");

		fs::write(&staging, payload)
			.await
			.map_err(|source| Error::Io { path: staging.clone(), source })?;
		fs::rename(&staging, path)
			.await
			.map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

		tracing::debug!(
			report_id = %record.id,
			status = record.status.as_str(),
			"Report record written."
		);

		Ok(())
	}
}
impl ReportStore for DirectoryStore {
	fn create<'a>(&'a self, record: &'a ReportRecord) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let path = self.record_path(&record.id)?;

			self.write(&path, record).await
		})
	}

	fn get<'a>(&'a self, report_id: &'a str) -> BoxFuture<'a, Result<Option<ReportRecord>>> {
		Box::pin(async move {
			let path = self.record_path(report_id)?;

			self.read(&path).await
		})
	}

	fn update<'a>(
		&'a self,
		report_id: &'a str,
		update: &'a ReportUpdate,
	) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let path = self.record_path(report_id)?;
			let Some(mut record) = self.read(&path).await? else {
				return Err(Error::NotFound { report_id: report_id.to_string() });
			};

			update.apply(&mut record);

			self.write(&path, &record).await
		})
	}
}
