// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The wrapper takes exactly one seed URL. clap would reject a missing
// argument with its own message and exit code 2, so the URL list is collected
// as-is and checked in Cli::seed_url(), which produces the two usage
// messages and exit code 1 the wrapper promises.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "page-scout",
    version,
    about = "Fetch one page and discover the links on it",
    long_about = "page-scout fetches a single HTML page and prints it. With --links it prints \
                  every link found on the page together with its canonical identity instead."
)]
pub struct Cli {
    /// Website URL to fetch (e.g., https://blog.boot.dev)
    ///
    /// Exactly one URL is expected
    #[arg(value_name = "URL", num_args = 0..)]
    pub urls: Vec<String>,

    /// Print the links found on the page instead of its body
    #[arg(long)]
    pub links: bool,

    /// Output links in JSON format instead of plain lines (implies --links)
    #[arg(long)]
    pub json: bool,

    /// Seconds the server has to start responding
    #[arg(long, default_value_t = 1.0, value_name = "SECS")]
    pub timeout: f64,
}

/// Why the positional arguments could not be turned into a seed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    NoWebsite,
    TooManyArguments,
}

impl UsageError {
    pub fn message(self) -> &'static str {
        match self {
            UsageError::NoWebsite => "no website provided",
            UsageError::TooManyArguments => "too many arguments provided",
        }
    }
}

impl Cli {
    pub fn seed_url(&self) -> Result<&str, UsageError> {
        match self.urls.as_slice() {
            [] => Err(UsageError::NoWebsite),
            [url] => Ok(url.as_str()),
            _ => Err(UsageError::TooManyArguments),
        }
    }
}
