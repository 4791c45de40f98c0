use clap::{Args, Parser, Subcommand};

use crate::locale::Locale;

/// Find published content across locales from English keywords.
///
/// Configuration via environment variables:
/// `POLYSCOUT_DISCOVERY_URL`, `POLYSCOUT_DISCOVERY_TOKEN`,
/// `POLYSCOUT_DISCOVERY_TIMEOUT_SECS`, `POLYSCOUT_BASE_URL`, `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "polyscout", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search discovery results and the local corpus for matching content
    Search(SearchArgs),
    /// Show how keywords expand into per-locale search terms
    Translate(TranslateArgs),
    /// Show the content URLs inspected for each locale
    Urls(UrlsArgs),
    /// List ready-made example searches
    Examples,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// English keyword (repeatable)
    #[arg(short, long = "keyword", required = true)]
    pub keywords: Vec<String>,
    /// Locale code such as de_de (repeatable)
    #[arg(short, long = "locale", default_value = "en_us")]
    pub locales: Vec<Locale>,
    /// Print the full report as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// English keyword (repeatable)
    #[arg(short, long = "keyword", required = true)]
    pub keywords: Vec<String>,
    /// Locale code (repeatable; default: every known locale)
    #[arg(short, long = "locale")]
    pub locales: Vec<Locale>,
}

#[derive(Args, Debug)]
pub struct UrlsArgs {
    /// Locale code (repeatable)
    #[arg(short, long = "locale", default_value = "en_us")]
    pub locales: Vec<Locale>,
    /// Print the plan as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}
