use anyhow::Context as _;
use url::Url;

use crate::cli::SourceArgs;

pub const DEFAULT_BASE_URL: &str = "https://www.goodreads.com/search";
pub const DEFAULT_QUERY: &str = "python programming";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/44.0.2403.157 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US, en;q=0.5";

/// Everything the fetcher needs to issue its single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: Url,
    pub user_agent: String,
    pub accept_language: String,
}

impl FetchConfig {
    pub fn from_args(args: &SourceArgs) -> anyhow::Result<Self> {
        let url = match args.url.as_deref() {
            Some(raw) => Url::parse(raw).context("parse --url")?,
            None => {
                let base = Url::parse(&args.base_url).context("parse --base-url")?;
                let query = args.query.as_deref().unwrap_or(DEFAULT_QUERY);
                search_url(&base, query)
            }
        };
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("search url must be http/https: {url}");
        }

        Ok(Self {
            url,
            user_agent: args.user_agent.clone(),
            accept_language: args.accept_language.clone(),
        })
    }
}

/// Replaces any existing query on `base` with a single form-encoded `q`.
pub fn search_url(base: &Url, query: &str) -> Url {
    let mut url = base.clone();
    url.set_fragment(None);
    url.query_pairs_mut().clear().append_pair("q", query);
    url
}
