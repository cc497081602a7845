// src/main.rs
// =============================================================================
// This is the entry point of the command-line wrapper.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the seed URL once
// 3. Print the page body, or the links found on it with --links
// 4. Exit with proper code (0 = success, 1 = usage error, 2 = error)
//
// There is no crawl loop: one invocation handles exactly one page. Logs go
// to stderr (filtered by RUST_LOG). The usage messages and the start banner
// go to stdout, except with --json where stdout carries only the JSON.
// =============================================================================

mod cli;

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use page_scout::{discover_links, DiscoveredLink, Fetcher, Page};

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = exit_code(run(Cli::parse()).await);
    std::process::exit(exit_code);
}

fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    }
}

// Returns:
//   Ok(0) = page fetched and printed (even with an advisory status error)
//   Ok(1) = wrong number of arguments
//   Err   = fetch or extraction failed
async fn run(cli: Cli) -> Result<i32> {
    let seed_url = match cli.seed_url() {
        Ok(url) => url,
        Err(usage) => {
            println!("{}", usage.message());
            return Ok(1);
        }
    };

    let timeout = Duration::try_from_secs_f64(cli.timeout)
        .ok()
        .filter(|timeout| !timeout.is_zero())
        .ok_or_else(|| anyhow!("--timeout must be a positive number of seconds"))?;

    if cli.json {
        eprintln!("starting crawl of: {}", seed_url);
    } else {
        println!("starting crawl of: {}", seed_url);
    }

    let fetcher = Fetcher::new()?.with_response_timeout(timeout);
    // An advisory status error is already reported by the fetcher's warn! log
    let page = fetcher.fetch(seed_url).await?;

    if cli.links || cli.json {
        let discovered = discover_links(&Page::new(seed_url, &page.body))?;
        info!(count = discovered.len(), "discovered links");
        print_links(&discovered, cli.json)?;
    } else {
        print!("{}", page.body);
    }

    Ok(0)
}

fn print_links(links: &[DiscoveredLink], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(links)?;
        println!("{}", json_output);
    } else {
        for link in links {
            println!("{:<60} {}", link.url, link.canonical);
        }
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_scout::CrawlError;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("page-scout").chain(args.iter().copied())).unwrap()
    }

    async fn serve(content_type: &str, status: u16) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(status)
                    .insert_header("content-type", content_type)
                    .set_body_bytes(br#"<a href="/partners">Partners</a>"#.as_slice()),
            )
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn test_usage_errors_exit_with_one() {
        assert_eq!(exit_code(run(cli(&[])).await), 1);
        assert_eq!(exit_code(run(cli(&["https://a.dev", "https://b.dev"])).await), 1);
    }

    #[tokio::test]
    async fn test_html_page_exits_with_zero() {
        let mock_server = serve("text/html", 200).await;
        let uri = mock_server.uri();
        assert_eq!(exit_code(run(cli(&[uri.as_str()])).await), 0);
        assert_eq!(exit_code(run(cli(&["--json", uri.as_str()])).await), 0);
    }

    #[tokio::test]
    async fn test_status_error_still_exits_with_zero() {
        let mock_server = serve("text/html", 503).await;
        let uri = mock_server.uri();
        assert_eq!(exit_code(run(cli(&[uri.as_str()])).await), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_exits_with_two() {
        let mock_server = serve("application/json", 200).await;
        let uri = mock_server.uri();
        let result = run(cli(&[uri.as_str()])).await;

        let err = result.as_ref().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CrawlError>(),
            Some(CrawlError::UnsupportedContentType { .. })
        ));
        assert_eq!(exit_code(result), 2);
    }

    #[tokio::test]
    async fn test_bad_timeout_exits_with_two() {
        let result = run(cli(&["--timeout", "0", "https://blog.boot.dev"])).await;
        assert_eq!(exit_code(result), 2);
    }
}
