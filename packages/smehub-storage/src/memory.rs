use std::{collections::HashMap, sync::Mutex};

use crate::{BoxFuture, Error, ReportRecord, ReportStore, ReportUpdate, Result};

/// Process-local store. Records vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
	records: Mutex<HashMap<String, ReportRecord>>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, record: ReportRecord) {
		let mut records = self.records.lock().unwrap_or_else(|err| err.into_inner());

		records.insert(record.id.clone(), record);
	}

	pub fn record(&self, report_id: &str) -> Option<ReportRecord> {
		let records = self.records.lock().unwrap_or_else(|err| err.into_inner());

		records.get(report_id).cloned()
	}

	pub fn len(&self) -> usize {
		self.records.lock().unwrap_or_else(|err| err.into_inner()).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
impl ReportStore for MemoryStore {
	fn create<'a>(&'a self, record: &'a ReportRecord) -> BoxFuture<'a, Result<()>> {
		self.insert(record.clone());

		Box::pin(async { Ok(()) })
	}

	fn get<'a>(&'a self, report_id: &'a str) -> BoxFuture<'a, Result<Option<ReportRecord>>> {
		let record = self.record(report_id);

		Box::pin(async move { Ok(record) })
	}

	fn update<'a>(
		&'a self,
		report_id: &'a str,
		update: &'a ReportUpdate,
	) -> BoxFuture<'a, Result<()>> {
		let result = {
			let mut records = self.records.lock().unwrap_or_else(|err| err.into_inner());

			match records.get_mut(report_id) {
				Some(record) => {
					update.apply(record);

					Ok(())
				},
				None => Err(Error::NotFound { report_id: report_id.to_string() }),
			}
		};

		Box::pin(async move { result })
	}
}
