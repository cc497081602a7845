// src/value.rs
// =============================================================================
// Entry points for loosely-typed callers.
//
// An orchestrator that speaks JSON hands over serde_json::Value arguments.
// These wrappers check that each argument really is a string (otherwise
// CrawlError::InvalidType) and then call the typed operations, which enforce
// the remaining preconditions.
// =============================================================================

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{CrawlError, Result};
use crate::fetch::{fetch, FetchedPage};
use crate::links::{extract_links, normalize_url};

/// [`normalize_url`] for a JSON argument.
pub fn normalize_value(input_url: &Value) -> Result<String> {
    normalize_url(require_str("input_url", input_url)?)
}

/// [`extract_links`] for JSON arguments. Both types are checked before
/// either value is looked at.
pub fn extract_links_value(html: &Value, base_url: &Value) -> Result<HashSet<String>> {
    let html = require_str("html", html)?;
    let base_url = require_str("base_url", base_url)?;
    extract_links(html, base_url)
}

/// [`fetch`] for a JSON argument.
pub async fn fetch_value(url: &Value) -> Result<FetchedPage> {
    fetch(require_str("url", url)?).await
}

fn require_str<'a>(arg: &'static str, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(CrawlError::InvalidType {
            arg,
            found: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn non_strings() -> Vec<(Value, &'static str)> {
        vec![
            (json!(42), "integer"),
            (json!(null), "null"),
            (json!(4.2), "float"),
            (json!(["https://blog.boot.dev"]), "list"),
            (json!({"url": "https://blog.boot.dev"}), "mapping"),
            (json!(true), "boolean"),
        ]
    }

    #[test]
    fn test_normalize_rejects_non_strings() {
        for (value, kind) in non_strings() {
            match normalize_value(&value) {
                Err(CrawlError::InvalidType { arg, found }) => {
                    assert_eq!(arg, "input_url");
                    assert_eq!(found, kind);
                }
                other => panic!("expected InvalidType for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_normalize_string_value() {
        assert_eq!(
            normalize_value(&json!("https://BLOG.BOOT.DEV/Path")).unwrap(),
            "blog.boot.dev/path"
        );
        assert!(matches!(
            normalize_value(&json!("")),
            Err(CrawlError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_extract_rejects_non_strings() {
        let html = json!(r#"<a href="/partners">Partners</a>"#);
        let base = json!("https://blog.boot.dev");

        for (value, _) in non_strings() {
            assert!(matches!(
                extract_links_value(&value, &base),
                Err(CrawlError::InvalidType { arg: "html", .. })
            ));
            assert!(matches!(
                extract_links_value(&html, &value),
                Err(CrawlError::InvalidType { arg: "base_url", .. })
            ));
        }
    }

    #[test]
    fn test_extract_type_checked_before_emptiness() {
        assert!(matches!(
            extract_links_value(&json!(""), &json!(7)),
            Err(CrawlError::InvalidType { arg: "base_url", .. })
        ));
    }

    #[test]
    fn test_extract_string_values() {
        let links = extract_links_value(
            &json!(r#"<a href="/partners">Partners</a>"#),
            &json!("https://blog.boot.dev"),
        )
        .unwrap();
        assert!(links.contains("https://blog.boot.dev/partners"));

        assert!(matches!(
            extract_links_value(&json!(""), &json!("https://blog.boot.dev")),
            Err(CrawlError::InvalidArgument { arg: "html", .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_strings() {
        for (value, _) in non_strings() {
            assert!(matches!(
                fetch_value(&value).await,
                Err(CrawlError::InvalidType { arg: "url", .. })
            ));
        }
        assert!(matches!(
            fetch_value(&json!("")).await,
            Err(CrawlError::InvalidArgument { arg: "url", .. })
        ));
    }
}
