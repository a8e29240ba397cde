use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_ACCEPT_LANGUAGE, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the title, author and rating of the first book on the page.
    First(SearchArgs),
    /// Print every complete book entry on the page, numbered by position.
    All(SearchArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Full search URL (must be http/https). Overrides `--base-url` and `--query`.
    #[arg(long)]
    pub url: Option<String>,

    /// Search endpoint the query is appended to.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Search term (default: "python programming").
    #[arg(long)]
    pub query: Option<String>,

    /// `User-Agent` header sent with the request.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// `Accept-Language` header sent with the request.
    #[arg(long, default_value = DEFAULT_ACCEPT_LANGUAGE)]
    pub accept_language: String,

    /// Read the search page from a local HTML file instead of fetching it.
    #[arg(long, conflicts_with_all = ["url", "query"])]
    pub html_file: Option<String>,
}
