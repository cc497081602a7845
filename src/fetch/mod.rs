// src/fetch/mod.rs
// =============================================================================
// This module retrieves pages over HTTP.
//
// Submodules:
// - http: The Fetcher that performs the single bounded GET
// - page: FetchedPage / StatusError, the values a fetch returns
// =============================================================================

mod http;
mod page;

pub use http::{Fetcher, DEFAULT_RESPONSE_TIMEOUT};
pub use page::{FetchedPage, StatusError};

use crate::error::Result;

/// Fetches one page with a default [`Fetcher`].
///
/// Callers fetching many pages should build a `Fetcher` once and reuse it so
/// connections are pooled.
pub async fn fetch(url: &str) -> Result<FetchedPage> {
    Fetcher::new()?.fetch(url).await
}
