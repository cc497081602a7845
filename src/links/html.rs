// src/links/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever, which lower-cases tag and attribute names while
//   parsing, so <A HREF="..."> and <a href="..."> look the same to us
//
// We also use the `url` crate to:
// - Tell absolute references apart from relative ones
// - Resolve relative references against the page URL
//
// The result is a set of absolute URLs. Duplicates are removed by exact
// string comparison only. Two links that differ by case or by a trailing
// slash both stay in the set; collapsing those is normalize_url's job.
// =============================================================================

use std::collections::HashSet;
use std::fmt::Write;

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::{CrawlError, Result};

/// Extracts every anchor target from `html` as an absolute URL.
///
/// - `base_url` is the absolute URL of the page and anchors relative
///   references (`/partners`, `../about`, `?page=2`).
/// - References that carry a host are rebuilt as `scheme://host/path`,
///   dropping their query string and fragment.
/// - Anchors without an `href` are skipped, as are references that do not
///   land on an http(s) URL with a host (`mailto:`, `javascript:` ...).
///
/// # Example
///
/// ```
/// let links = page_scout::extract_links(
///     r#"<a href="/partners">Partners</a>"#,
///     "https://blog.boot.dev",
/// ).unwrap();
/// assert!(links.contains("https://blog.boot.dev/partners"));
/// ```
pub fn extract_links(html: &str, base_url: &str) -> Result<HashSet<String>> {
    if html.is_empty() {
        return Err(CrawlError::empty("html"));
    }
    if base_url.is_empty() {
        return Err(CrawlError::empty("base_url"));
    }

    let base = parse_base(base_url)?;
    let document = Html::parse_document(html);

    // Every anchor, with or without href; missing attributes are skipped below
    let selector = Selector::parse("a").expect("`a` is a valid CSS selector");

    let mut links = HashSet::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        match resolve_reference(&base, href) {
            Some(absolute_url) => {
                links.insert(absolute_url);
            }
            None => debug!(href, "skipping reference that is not a web page"),
        }
    }

    debug!(base_url, count = links.len(), "extracted links");
    Ok(links)
}

// The page URL must be absolute and have a host, otherwise nothing can be
// resolved against it
fn parse_base(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url).map_err(|e| {
        CrawlError::invalid_argument("base_url", format!("`{}` is not a URL: {}", base_url, e))
    })?;

    if base.cannot_be_a_base() || !base.has_host() {
        return Err(CrawlError::invalid_argument(
            "base_url",
            format!("`{}` has no host", base_url),
        ));
    }

    Ok(base)
}

// Turns one href value into an absolute URL
//
// Examples (base = "https://blog.boot.dev/posts/"):
//   "/partners"                 -> "https://blog.boot.dev/partners"
//   "intro"                     -> "https://blog.boot.dev/posts/intro"
//   "https://x.dev/a?b=1#c"     -> "https://x.dev/a"
//   "//cdn.x.dev/lib.js"        -> "https://cdn.x.dev/lib.js"
//   "mailto:me@x.dev"           -> None
fn resolve_reference(base: &Url, href: &str) -> Option<String> {
    // join() returns absolute references untouched and resolves the rest
    let resolved = base.join(href).ok()?;

    if !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }
    let host = resolved.host_str().filter(|host| !host.is_empty())?;

    if !carries_authority(href) {
        return Some(resolved.into());
    }

    let mut absolute_url = format!("{}://{}", resolved.scheme(), host);
    if let Some(port) = resolved.port() {
        let _ = write!(absolute_url, ":{}", port);
    }
    absolute_url.push_str(resolved.path());
    Some(absolute_url)
}

// True when the reference is written with its own host, either with a
// scheme ("https://host/...") or protocol-relative ("//host/..."). Decided on
// the text itself: "https:foo" has a scheme but no authority and join()
// resolves it against the base like any relative path
fn carries_authority(href: &str) -> bool {
    let href = href.trim_start();
    if href.starts_with("//") {
        return true;
    }

    match href.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
