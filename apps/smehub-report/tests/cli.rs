use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;

use smehub_domain::fallback::FALLBACK_HEADING;
use smehub_report::Args;
use smehub_service::Error;
use smehub_storage::{DirectoryStore, ReportStatus, ReportStore};

// Both providers point at a closed local port, so nothing leaves the machine even when
// credentials come from the environment.
const RUN_CONFIG: &str = r#"
[providers.completion]
provider_id = "anthropic"
api_base    = "http://127.0.0.1:9"
path        = "/v1/messages"
api_key     = ""
timeout_ms  = 500

[providers.search]
provider_id = "tavily"
api_base    = "http://127.0.0.1:9"
path        = "/search"
api_key     = ""
timeout_ms  = 500

[report]
timeout_seconds = 10
"#;

fn temp_path(prefix: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);

	env::temp_dir().join(format!("{prefix}_{nanos}_{}_{ordinal}", std::process::id()))
}

fn write_temp_request(payload: &str) -> PathBuf {
	let path = temp_path("smehub_request_test").with_extension("json");

	fs::write(&path, payload).expect("Failed to write test request.");

	path
}

#[test]
fn parses_required_and_optional_flags() {
	let args = Args::try_parse_from([
		"smehub-report",
		"-c",
		"config.toml",
		"--request",
		"request.json",
		"--store-dir",
		"reports",
	])
	.expect("Arguments must parse.");

	assert_eq!(args.config, PathBuf::from("config.toml"));
	assert_eq!(args.request, PathBuf::from("request.json"));
	assert_eq!(args.store_dir, Some(PathBuf::from("reports")));
	assert_eq!(args.output, None);
}

#[test]
fn request_flag_is_required() {
	assert!(Args::try_parse_from(["smehub-report", "-c", "config.toml"]).is_err());
}

#[test]
fn reads_inbound_request_file() {
	let path = write_temp_request(
		r#"{
			"reportId": "r1",
			"userId": "u1",
			"businessInfo": {
				"businessName": "Acme Bakery",
				"postalCode": "SW1A 1AA",
				"country": "UK",
				"industry": "Food Retail"
			},
			"finalPrompt": "expand to online sales"
		}"#,
	);
	let result = smehub_report::read_request(&path);

	fs::remove_file(&path).expect("Failed to remove test request.");

	let request = result.expect("Request must load.");

	assert_eq!(request.report_id, "r1");
	assert_eq!(request.business_info.business_name, "Acme Bakery");
	assert_eq!(request.final_prompt, "expand to online sales");
}

#[test]
fn rejects_request_without_ids() {
	let path = write_temp_request(
		r#"{
			"reportId": "",
			"userId": "u1",
			"businessInfo": {
				"businessName": "Acme Bakery",
				"postalCode": "SW1A 1AA",
				"country": "UK",
				"industry": "Food Retail"
			},
			"finalPrompt": ""
		}"#,
	);
	let result = smehub_report::read_request(&path);

	fs::remove_file(&path).expect("Failed to remove test request.");

	let request = result.expect("Request must parse.");
	let err = request.validate().expect_err("Expected missing id error.");

	assert!(matches!(err, Error::InvalidRequest { .. }), "Unexpected error: {err}");
	assert!(err.to_string().contains("reportId or userId"), "Unexpected error: {err}");
}

#[tokio::test]
async fn run_stores_fallback_for_missing_credentials() {
	let dir = temp_path("smehub_run_test");
	let store_dir = dir.join("store");
	let output = dir.join("report.md");

	fs::create_dir_all(&dir).expect("Failed to create test directory.");

	let config = dir.join("smehub.toml");
	let request = dir.join("request.json");

	fs::write(&config, RUN_CONFIG).expect("Failed to write test config.");
	fs::write(
		&request,
		r#"{
			"reportId": "cli-r1",
			"userId": "u1",
			"businessInfo": {
				"businessName": "Acme Bakery",
				"postalCode": "SW1A 1AA",
				"country": "UK",
				"industry": "Food Retail"
			},
			"finalPrompt": "expand to online sales"
		}"#,
	)
	.expect("Failed to write test request.");

	let args = Args {
		config,
		request,
		store_dir: Some(store_dir.clone()),
		output: Some(output.clone()),
	};

	smehub_report::run(args).await.expect("Run must succeed with a fallback report.");

	let report = fs::read_to_string(&output).expect("Report file must exist.");
	let store = DirectoryStore::open(&store_dir).await.expect("open failed");
	let record = store.get("cli-r1").await.expect("get failed").expect("Missing record.");

	assert!(report.contains(FALLBACK_HEADING), "Unexpected report: {report}");
	assert!(report.contains("Acme Bakery"));
	assert_eq!(record.status, ReportStatus::Failed);
	assert_eq!(record.user_id, "u1");
	assert_eq!(record.generated_report.as_deref(), Some(report.as_str()));
	assert!(record.error.is_some());
	assert!(record.completed_at.is_some());

	fs::remove_dir_all(&dir).expect("Failed to remove test directory.");
}
