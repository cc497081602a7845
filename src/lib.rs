//! Page acquisition and link discovery for a single-host web crawler.
//!
//! The crate exposes three operations, normally called in this order by a
//! crawl orchestrator:
//!
//! 1. [`fetch`] downloads one HTML page,
//! 2. [`extract_links`] lists the absolute links on it,
//! 3. [`normalize_url`] reduces each link to the identity used for
//!    "have we seen this page already?" checks.
//!
//! ```
//! use page_scout::{extract_links, normalize_url};
//!
//! let html = r#"<a href="/Partners/">Partners</a>"#;
//! for link in extract_links(html, "https://blog.boot.dev").unwrap() {
//!     assert_eq!(normalize_url(&link).unwrap(), "blog.boot.dev/partners");
//! }
//! ```

pub mod error;
pub mod fetch;
pub mod links;
pub mod value;

pub use error::{CrawlError, Result};
pub use fetch::{fetch, FetchedPage, Fetcher, StatusError};
pub use links::{discover_links, extract_links, normalize_url, DiscoveredLink, Page};
