// src/links/normalize.rs
// =============================================================================
// This module reduces a URL to its canonical identity.
//
// Two URLs that point at the same logical page should compare equal after
// normalization, even if they were written differently:
//   https://blog.boot.dev/path/   -> blog.boot.dev/path
//   http://BLOG.BOOT.DEV/Path     -> blog.boot.dev/path
//   https://blog.boot.dev/        -> blog.boot.dev
//
// Rules:
// - The scheme, query string and fragment are dropped
// - The authority (host and explicit port) and the path are lower-cased
// - Exactly one trailing '/' is removed from the path
//
// A crawler keys its visited-set on this string, so any change here changes
// whether a crawl terminates.
// =============================================================================

use url::{ParseError, Url};

use crate::error::{CrawlError, Result};

/// Maps an absolute URL to its canonical identity string.
///
/// Input without a scheme (`blog.boot.dev/path`, `//host/path`) is parsed as
/// if it had been written with `http://`. Input with no host at all is
/// rejected with [`CrawlError::InvalidArgument`].
///
/// Only a single trailing slash is stripped, so `https://host/path//`
/// normalizes to `host/path/`.
pub fn normalize_url(input_url: &str) -> Result<String> {
    if input_url.is_empty() {
        return Err(CrawlError::empty("input_url"));
    }

    let url = parse_lenient(input_url)?;

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => {
            return Err(CrawlError::invalid_argument(
                "input_url",
                format!("`{}` has no host", input_url),
            ))
        }
    };

    // The parser drops default ports (443 for https, 80 for http),
    // so only a port that actually changes the destination survives
    let mut authority = host.to_lowercase();
    if let Some(port) = url.port() {
        authority.push(':');
        authority.push_str(&port.to_string());
    }

    let path = url.path().to_lowercase();
    let path = path.strip_suffix('/').unwrap_or(&path);

    Ok(format!("{}{}", authority, path))
}

// Parses the input, retrying with an http:// prefix when it lacks a scheme
fn parse_lenient(input_url: &str) -> Result<Url> {
    let unusable = |e: ParseError| {
        CrawlError::invalid_argument("input_url", format!("`{}` is not a URL: {}", input_url, e))
    };

    match Url::parse(input_url) {
        // "localhost:8080/path" parses with "localhost" as its scheme
        Ok(url) if !url.has_host() && starts_with_port(url.as_str()) => {
            Url::parse(&format!("http://{}", input_url)).map_err(unusable)
        }
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let with_scheme = if input_url.starts_with("//") {
                format!("http:{}", input_url)
            } else if input_url.starts_with('/') {
                // A bare path like "/about" has nothing to identify
                return Err(CrawlError::invalid_argument(
                    "input_url",
                    format!("`{}` has no host", input_url),
                ));
            } else {
                format!("http://{}", input_url)
            };
            Url::parse(&with_scheme).map_err(unusable)
        }
        Err(e) => Err(unusable(e)),
    }
}

// True for "host:8080", "host:8080/path", "host:8080?q": what follows the
// first ':' is a port, not an opaque path like "someone@example.com"
fn starts_with_port(parsed: &str) -> bool {
    let Some((_, rest)) = parsed.split_once(':') else {
        return false;
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && matches!(rest.as_bytes().get(digits), None | Some(b'/' | b'?' | b'#'))
}
