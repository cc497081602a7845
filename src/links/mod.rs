// src/links/mod.rs
// =============================================================================
// This module contains the link discovery logic.
//
// Submodules:
// - normalize: Reduces a URL to its canonical identity
// - html: Extracts absolute links from an HTML page
// - discover: Chains both into the two named dedup stages
//
// Nothing in here touches the network.
// =============================================================================

mod discover;
mod html;
mod normalize;

pub use discover::{canonical_dedup, discover_links, extraction_dedup, DiscoveredLink};
pub use html::extract_links;
pub use normalize::normalize_url;

/// A fetched page as seen by the extractor: its own absolute URL and its markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub base_url: &'a str,
    pub html: &'a str,
}

impl<'a> Page<'a> {
    pub fn new(base_url: &'a str, html: &'a str) -> Self {
        Self { base_url, html }
    }
}
