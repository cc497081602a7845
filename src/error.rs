// src/error.rs
// =============================================================================
// Error types for the crawler core.
//
// Every public operation returns crate::error::Result<T>. The variants map
// one-to-one onto the failure kinds a caller can react to:
// - InvalidType: an argument that should be a string is something else
// - InvalidArgument: an empty or unusable argument
// - Timeout: the server did not start responding in time
// - UnsupportedContentType: the fetched page is not HTML
// - Http: any other transport failure reported by reqwest
//
// HTTP status errors (404, 500, ...) are NOT errors here. They travel back
// inside FetchedPage::status_error and the caller decides what to do.
// =============================================================================

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid type for `{arg}`: expected a string, found {found}")]
    InvalidType { arg: &'static str, found: &'static str },

    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    #[error("no response from {url} within {}s", .limit.as_secs_f64())]
    Timeout { url: String, limit: Duration },

    #[error("unsupported content type {} at {url}, expected text/html", .found.as_deref().unwrap_or("<none>"))]
    UnsupportedContentType { url: String, found: Option<String> },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl CrawlError {
    pub(crate) fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Shorthand for the "argument is an empty string" precondition.
    pub(crate) fn empty(arg: &'static str) -> Self {
        Self::invalid_argument(arg, "must not be empty")
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
