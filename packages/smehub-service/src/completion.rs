use smehub_config::CompletionProviderConfig;
use smehub_providers::completion::{CompletionRequest, Message};

use crate::{Error, Providers, Result};

/// Sends one completion request and returns the first text block unchanged.
///
/// Provider failures propagate as [`Error::Completion`]. There is no retry here.
pub async fn complete_report(
	providers: &Providers,
	cfg: &CompletionProviderConfig,
	prompt: &str,
) -> Result<String> {
	let request = CompletionRequest {
		model: cfg.model.clone(),
		max_tokens: cfg.max_tokens,
		temperature: cfg.temperature,
		messages: vec![Message::user(prompt)],
	};
	let response = providers
		.completion
		.complete(cfg, &request)
		.await
		.map_err(|err| Error::Completion { message: err.to_string() })?;
	let Some(text) = response.first_text() else {
		return Err(Error::Completion {
			message: "Completion response contained no text content.".to_string(),
		});
	};

	Ok(text.to_string())
}
