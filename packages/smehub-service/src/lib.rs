pub mod completion;
pub mod process;
pub mod report;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use process::{ProcessedReport, ReportRequest, StoreUpdate};
pub use report::GenerationOutcome;

use std::{future::Future, pin::Pin, sync::Arc};

use smehub_config::{CompletionProviderConfig, Config, SearchProviderConfig};
use smehub_providers::{
	completion::{self as completion_api, CompletionRequest, CompletionResponse},
	search::{self as search_api, SearchRequest, SearchResponse},
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait SearchProvider
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a SearchProviderConfig,
		request: &'a SearchRequest,
	) -> BoxFuture<'a, smehub_providers::Result<SearchResponse>>;
}

pub trait CompletionProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a CompletionProviderConfig,
		request: &'a CompletionRequest,
	) -> BoxFuture<'a, smehub_providers::Result<CompletionResponse>>;
}

#[derive(Clone)]
pub struct Providers {
	pub search: Arc<dyn SearchProvider>,
	pub completion: Arc<dyn CompletionProvider>,
}
impl Providers {
	pub fn new(search: Arc<dyn SearchProvider>, completion: Arc<dyn CompletionProvider>) -> Self {
		Self { search, completion }
	}
}
impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { search: provider.clone(), completion: provider }
	}
}

pub struct ReportService {
	pub cfg: Config,
	pub providers: Providers,
}
impl ReportService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}

struct DefaultProviders;

impl SearchProvider for DefaultProviders {
	fn search<'a>(
		&'a self,
		cfg: &'a SearchProviderConfig,
		request: &'a SearchRequest,
	) -> BoxFuture<'a, smehub_providers::Result<SearchResponse>> {
		Box::pin(search_api::search(cfg, request))
	}
}

impl CompletionProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a CompletionProviderConfig,
		request: &'a CompletionRequest,
	) -> BoxFuture<'a, smehub_providers::Result<CompletionResponse>> {
		Box::pin(completion_api::complete(cfg, request))
	}
}
