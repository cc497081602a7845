// src/fetch/page.rs
// =============================================================================
// The value a successful fetch hands back.
//
// A fetch "succeeds" as soon as the server answered with an HTML page, even
// if the status code was 404 or 500. The status problem is recorded in
// status_error so the caller can decide whether to escalate it.
// =============================================================================

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Advisory 4xx/5xx status observed on an otherwise usable response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusError {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StatusError {
    /// Returns `Some` for client and server error statuses only.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_client_error() || status.is_server_error() {
            Some(Self {
                code: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "HTTP {} {}", self.code, reason),
            None => write!(f, "HTTP {}", self.code),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,
    /// Where the transport ended up after following redirects
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    /// Response body, exactly as received
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_error: Option<StatusError>,
}

impl FetchedPage {
    pub fn into_body(self) -> String {
        self.body
    }

    pub fn has_status_error(&self) -> bool {
        self.status_error.is_some()
    }
}
