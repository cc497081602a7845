// src/links/discover.rs
// =============================================================================
// Link discovery happens in two separate dedup stages:
//
// 1. Extraction-time dedup (extract_links): literal string equality of the
//    resolved absolute URLs. "https://x.dev/A" and "https://x.dev/a/" are
//    still two entries after this stage.
// 2. Crawl-time dedup (canonical_dedup): equality of normalize_url output.
//    The two URLs above collapse into one entry here.
//
// Both stages stay visible as functions of their own so a caller can stop
// after the first one.
// =============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{extract_links, normalize_url, Page};
use crate::error::Result;

/// An absolute link paired with its canonical identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredLink {
    /// Absolute URL as resolved from the page
    pub url: String,
    /// Output of normalize_url for `url`
    pub canonical: String,
}

/// Stage 1: the literal-equality set produced by the extractor.
pub fn extraction_dedup(page: &Page<'_>) -> Result<HashSet<String>> {
    extract_links(page.html, page.base_url)
}

/// Stage 2: keeps one link per canonical identity.
///
/// Links are visited in sorted order so the representative kept for each
/// identity does not depend on set iteration order. Links that cannot be
/// normalized are dropped.
pub fn canonical_dedup<I>(links: I) -> Vec<DiscoveredLink>
where
    I: IntoIterator<Item = String>,
{
    let mut sorted: Vec<String> = links.into_iter().collect();
    sorted.sort();

    let mut seen = HashSet::new();
    let mut discovered = Vec::new();

    for url in sorted {
        let canonical = match normalize_url(&url) {
            Ok(canonical) => canonical,
            Err(e) => {
                debug!(url = %url, error = %e, "dropping link without canonical form");
                continue;
            }
        };

        if seen.insert(canonical.clone()) {
            discovered.push(DiscoveredLink { url, canonical });
        }
    }

    discovered
}

/// Runs both stages over one page.
pub fn discover_links(page: &Page<'_>) -> Result<Vec<DiscoveredLink>> {
    let links = extraction_dedup(page)?;
    Ok(canonical_dedup(links))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: &str = r#"
        <a href="https://blog.boot.dev/Path">A</a>
        <a href="https://blog.boot.dev/path/">B</a>
        <a href="http://BLOG.boot.dev/path">C</a>
        <a href="/other">D</a>
    "#;

    #[test]
    fn test_first_stage_keeps_textual_variants() {
        let page = Page::new("https://blog.boot.dev", VARIANTS);
        let links = extraction_dedup(&page).unwrap();
        assert_eq!(links.len(), 4);
    }

    #[test]
    fn test_second_stage_collapses_canonical_duplicates() {
        let page = Page::new("https://blog.boot.dev", VARIANTS);
        let discovered = discover_links(&page).unwrap();

        let canonicals: Vec<&str> = discovered.iter().map(|l| l.canonical.as_str()).collect();
        assert_eq!(canonicals, vec!["blog.boot.dev/path", "blog.boot.dev/other"]);
        // Sorted input means the http:// variant is the representative
        assert_eq!(discovered[0].url, "http://blog.boot.dev/path");
    }

    #[test]
    fn test_canonical_dedup_drops_unnormalizable() {
        let discovered = canonical_dedup(vec![
            "mailto:someone@boot.dev".to_string(),
            "https://boot.dev/".to_string(),
        ]);
        assert_eq!(
            discovered,
            vec![DiscoveredLink {
                url: "https://boot.dev/".to_string(),
                canonical: "boot.dev".to_string(),
            }]
        );
    }

    #[test]
    fn test_discovered_link_serializes() {
        let link = DiscoveredLink {
            url: "https://boot.dev/a".to_string(),
            canonical: "boot.dev/a".to_string(),
        };
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"url":"https://boot.dev/a","canonical":"boot.dev/a"}"#);
    }
}
