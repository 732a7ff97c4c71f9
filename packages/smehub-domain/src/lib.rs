pub mod context;
pub mod fallback;
pub mod models;
pub mod prompt;
pub mod query;

pub use models::{BusinessProfile, SearchResult};
