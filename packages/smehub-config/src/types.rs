use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub service: Service,
	pub providers: Providers,
	#[serde(default)]
	pub report: Report,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { log_level: default_log_level() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Providers {
	pub completion: CompletionProviderConfig,
	pub search: SearchProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub path: String,
	/// Empty means unset. Checked by [`crate::validate_credentials`], not at load time.
	#[serde(default)]
	pub api_key: String,
	#[serde(default = "default_api_version")]
	pub api_version: String,
	#[serde(default = "default_completion_model")]
	pub model: String,
	#[serde(default = "default_max_tokens")]
	pub max_tokens: u32,
	#[serde(default = "default_temperature")]
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub path: String,
	/// Empty means unset. Checked by [`crate::validate_credentials`], not at load time.
	#[serde(default)]
	pub api_key: String,
	#[serde(default = "default_max_results")]
	pub max_results: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
	/// Overall deadline for one generation call. Zero disables it.
	#[serde(default = "default_timeout_seconds")]
	pub timeout_seconds: u64,
	/// When false, one failed search query discards every result gathered for the request.
	#[serde(default)]
	pub keep_partial_search_results: bool,
}
impl Default for Report {
	fn default() -> Self {
		Self { timeout_seconds: default_timeout_seconds(), keep_partial_search_results: false }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_api_version() -> String {
	"2023-06-01".to_string()
}

fn default_completion_model() -> String {
	"claude-3-5-sonnet-20241022".to_string()
}

fn default_max_tokens() -> u32 {
	4_000
}

fn default_temperature() -> f32 {
	0.7
}

fn default_max_results() -> u32 {
	5
}

fn default_timeout_seconds() -> u64 {
	60
}
