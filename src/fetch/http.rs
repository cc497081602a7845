// src/fetch/http.rs
// =============================================================================
// This module downloads a single page.
//
// Contract:
// - Exactly one GET request, no retries
// - The server has a bounded time (1 second by default) to start responding,
//   otherwise the fetch fails with CrawlError::Timeout
// - 4xx/5xx statuses are logged and recorded, never fatal
// - The response must declare the text/html media type, otherwise the fetch
//   fails with CrawlError::UnsupportedContentType
// - The body comes back verbatim
//
// Redirects are followed with reqwest's default policy.
// =============================================================================

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::page::{FetchedPage, StatusError};
use crate::error::{CrawlError, Result};

/// How long the server has to start answering.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(1);

const DEFAULT_USER_AGENT: &str = concat!("page-scout/", env!("CARGO_PKG_VERSION"));

const HTML_MEDIA_TYPE: &str = "text/html";

/// Reusable page fetcher. Cloning is cheap; the underlying client is shared.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    response_timeout: Duration,
    user_agent: String,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn response_timeout(&self) -> Duration {
        self.response_timeout
    }

    /// Fetches `url` and returns the page if it is HTML.
    ///
    /// A returned page does not imply a successful status; check
    /// [`FetchedPage::status_error`].
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        if url.is_empty() {
            return Err(CrawlError::empty("url"));
        }
        let target = Url::parse(url).map_err(|e| {
            CrawlError::invalid_argument("url", format!("`{}` is not a URL: {}", url, e))
        })?;

        debug!(url, timeout = ?self.response_timeout, "fetching page");

        let request = self
            .client
            .get(target)
            .header(USER_AGENT, self.user_agent.as_str())
            .send();

        // send() resolves once the status line and headers are in, which is
        // the "server started responding" moment the timeout bounds
        let response = match tokio::time::timeout(self.response_timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) if e.is_timeout() => return Err(self.timeout_error(url)),
            Ok(Err(e)) => return Err(e.into()),
            Err(_elapsed) => return Err(self.timeout_error(url)),
        };

        let status = response.status();
        let status_error = StatusError::from_status(status);
        if let Some(err) = &status_error {
            warn!(url, status = err.code, "server answered with an error status");
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        if !is_html(content_type.as_deref()) {
            return Err(CrawlError::UnsupportedContentType {
                url: url.to_string(),
                found: content_type,
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().await?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");

        Ok(FetchedPage {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            content_type,
            body,
            status_error,
        })
    }

    fn timeout_error(&self, url: &str) -> CrawlError {
        CrawlError::Timeout {
            url: url.to_string(),
            limit: self.response_timeout,
        }
    }
}

// Compares the media type essence only: "text/html; charset=utf-8" is HTML,
// "application/xhtml+xml" and a missing header are not
fn is_html(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case(HTML_MEDIA_TYPE))
        .unwrap_or(false)
}
