use std::{
	fs,
	path::{Path, PathBuf},
};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use smehub_service::{ReportRequest, ReportService};
use smehub_storage::{DirectoryStore, MemoryStore, ReportRecord, ReportStore};

/// Generate a business report from a request file.
#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Report request JSON: reportId, userId, businessInfo, finalPrompt.
	#[arg(long, short = 'r', value_name = "FILE")]
	pub request: PathBuf,
	/// Persist report records as JSON files here. Without it, records live in memory only.
	#[arg(long, value_name = "DIR")]
	pub store_dir: Option<PathBuf>,
	/// Write the report here instead of stdout.
	#[arg(long, short = 'o', value_name = "FILE")]
	pub output: Option<PathBuf>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = smehub_config::load(&args.config)?;
	init_tracing(&config)?;
	let request = read_request(&args.request)?;

	request.validate()?;

	let store: Box<dyn ReportStore> = match &args.store_dir {
		Some(dir) => Box::new(DirectoryStore::open(dir).await?),
		None => {
			tracing::warn!("No store directory given. Running in demo mode.");

			Box::new(MemoryStore::new())
		},
	};

	ensure_record(store.as_ref(), &request).await?;

	let service = ReportService::new(config);
	let processed = service.process(store.as_ref(), request).await?;

	if let Some(reason) = processed.outcome.reason() {
		tracing::warn!(
			report_id = %processed.report_id,
			error = %reason,
			"Fallback report produced."
		);
	}
	if !processed.completion.updated {
		tracing::warn!(report_id = %processed.report_id, "Report record was not updated.");
	}

	let report = processed.outcome.into_report();

	match &args.output {
		Some(path) => {
			tokio::fs::write(path, report.as_bytes())
				.await
				.wrap_err_with(|| format!("Failed to write report to {}.", path.display()))?;
			tracing::info!(path = %path.display(), "Report written.");
		},
		None => println!("{report}"),
	}

	Ok(())
}

pub fn read_request(path: &Path) -> color_eyre::Result<ReportRequest> {
	let raw = fs::read_to_string(path)
		.wrap_err_with(|| format!("Failed to read report request at {}.", path.display()))?;
	let request = serde_json::from_str(&raw)
		.wrap_err_with(|| format!("Failed to parse report request at {}.", path.display()))?;

	Ok(request)
}

/// Creates the pending record the front end would normally have written.
async fn ensure_record(
	store: &dyn ReportStore,
	request: &ReportRequest,
) -> color_eyre::Result<()> {
	if store.get(&request.report_id).await?.is_none() {
		let record =
			ReportRecord::pending(&request.report_id, &request.user_id, OffsetDateTime::now_utc());

		store.create(&record).await?;
	}

	Ok(())
}

fn init_tracing(config: &smehub_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
	Ok(())
}
