pub mod directory;
pub mod memory;
pub mod models;

mod error;

pub use directory::DirectoryStore;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use models::{ReportRecord, ReportStatus, ReportUpdate};

use std::{future::Future, pin::Pin};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Document store holding one [`ReportRecord`] per report id.
///
/// Writes are field-level patches with no compare-and-swap; concurrent writers to the same id
/// interleave in arrival order.
pub trait ReportStore
where
	Self: Send + Sync,
{
	fn create<'a>(&'a self, record: &'a ReportRecord) -> BoxFuture<'a, Result<()>>;

	fn get<'a>(&'a self, report_id: &'a str) -> BoxFuture<'a, Result<Option<ReportRecord>>>;

	/// Fails with [`Error::NotFound`] when no record exists for `report_id`.
	fn update<'a>(
		&'a self,
		report_id: &'a str,
		update: &'a ReportUpdate,
	) -> BoxFuture<'a, Result<()>>;
}
