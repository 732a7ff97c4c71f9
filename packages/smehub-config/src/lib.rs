mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	CompletionProviderConfig, Config, Providers, Report, SearchProviderConfig, Service,
};

use std::{env, fs, path::Path};

use serde_json::{Map, Value};

pub const ENV_COMPLETION_API_KEY: &str = "CLAUDE_API_KEY";
pub const ENV_COMPLETION_MODEL: &str = "CLAUDE_MODEL";
pub const ENV_COMPLETION_MAX_TOKENS: &str = "CLAUDE_MAX_TOKENS";
pub const ENV_SEARCH_API_KEY: &str = "TAVILY_API_KEY";
pub const ENV_SEARCH_MAX_RESULTS: &str = "MAX_SEARCH_RESULTS";
pub const ENV_REPORT_TIMEOUT: &str = "REPORT_GENERATION_TIMEOUT";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	apply_env_overrides(&mut cfg, |name| env::var(name).ok())?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Overlays process environment values on top of the file contents.
///
/// Blank values are ignored so an exported-but-empty variable does not wipe a key set in the file.
pub fn apply_env_overrides<F>(cfg: &mut Config, lookup: F) -> Result<()>
where
	F: Fn(&str) -> Option<String>,
{
	let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

	if let Some(key) = get(ENV_COMPLETION_API_KEY) {
		cfg.providers.completion.api_key = key;
	}
	if let Some(model) = get(ENV_COMPLETION_MODEL) {
		cfg.providers.completion.model = model;
	}
	if let Some(raw) = get(ENV_COMPLETION_MAX_TOKENS) {
		cfg.providers.completion.max_tokens = parse_env(ENV_COMPLETION_MAX_TOKENS, &raw)?;
	}
	if let Some(key) = get(ENV_SEARCH_API_KEY) {
		cfg.providers.search.api_key = key;
	}
	if let Some(raw) = get(ENV_SEARCH_MAX_RESULTS) {
		cfg.providers.search.max_results = parse_env(ENV_SEARCH_MAX_RESULTS, &raw)?;
	}
	if let Some(raw) = get(ENV_REPORT_TIMEOUT) {
		cfg.report.timeout_seconds = parse_env(ENV_REPORT_TIMEOUT, &raw)?;
	}

	Ok(())
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	let completion = &cfg.providers.completion;

	for (label, value) in [
		("providers.completion.api_base", &completion.api_base),
		("providers.completion.path", &completion.path),
		("providers.completion.api_version", &completion.api_version),
		("providers.completion.model", &completion.model),
		("providers.search.api_base", &cfg.providers.search.api_base),
		("providers.search.path", &cfg.providers.search.path),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if completion.max_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.completion.max_tokens must be greater than zero.".to_string(),
		});
	}
	if !completion.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.completion.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=1.0).contains(&completion.temperature) {
		return Err(Error::Validation {
			message: "providers.completion.temperature must be in the range 0.0-1.0.".to_string(),
		});
	}
	if cfg.providers.search.max_results == 0 {
		return Err(Error::Validation {
			message: "providers.search.max_results must be greater than zero.".to_string(),
		});
	}

	for (label, timeout_ms) in [
		("providers.completion.timeout_ms", completion.timeout_ms),
		("providers.search.timeout_ms", cfg.providers.search.timeout_ms),
	] {
		if timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("{label} must be greater than zero."),
			});
		}
	}

	for (label, headers) in [
		("providers.completion.default_headers", &completion.default_headers),
		("providers.search.default_headers", &cfg.providers.search.default_headers),
	] {
		validate_headers(label, headers)?;
	}

	Ok(())
}

/// Checks that both provider credentials are present.
///
/// Runs before any network call of a generation, so every missing key is reported in one error.
pub fn validate_credentials(cfg: &Config) -> Result<()> {
	let mut errors = Vec::new();

	if cfg.providers.completion.api_key.trim().is_empty() {
		errors.push("Completion API key is required");
	}
	if cfg.providers.search.api_key.trim().is_empty() {
		errors.push("Search API key is required for web search functionality");
	}

	if errors.is_empty() {
		return Ok(());
	}

	Err(Error::Validation { message: format!("Configuration errors: {}", errors.join(", ")) })
}

fn validate_headers(label: &str, headers: &Map<String, Value>) -> Result<()> {
	for (key, value) in headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("{label}.{key} must be a string."),
			});
		}
	}

	Ok(())
}

fn parse_env<T>(name: &'static str, raw: &str) -> Result<T>
where
	T: std::str::FromStr,
{
	raw.trim().parse().map_err(|_| Error::InvalidEnv { name, value: raw.to_string() })
}

fn normalize(cfg: &mut Config) {
	let completion_key = cfg.providers.completion.api_key.trim().to_string();
	let search_key = cfg.providers.search.api_key.trim().to_string();

	cfg.providers.completion.api_key = completion_key;
	cfg.providers.search.api_key = search_key;

	if cfg.providers.completion.api_base.ends_with('/') {
		let trimmed = cfg.providers.completion.api_base.trim_end_matches('/').to_string();

		cfg.providers.completion.api_base = trimmed;
	}
	if cfg.providers.search.api_base.ends_with('/') {
		let trimmed = cfg.providers.search.api_base.trim_end_matches('/').to_string();

		cfg.providers.search.api_base = trimmed;
	}
}
