use anyhow::Context as _;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};

use crate::config::FetchConfig;

pub fn build_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .context("build search http client")
}

/// Issues one GET and returns the body. Anything other than `200 OK` is an error.
pub async fn fetch_page(
    client: &reqwest::Client,
    config: &FetchConfig,
) -> anyhow::Result<String> {
    tracing::debug!(url = %config.url, "fetching search page");

    let response = client
        .get(config.url.clone())
        .header(USER_AGENT, &config.user_agent)
        .header(ACCEPT_LANGUAGE, &config.accept_language)
        .send()
        .await
        .with_context(|| format!("GET {}", config.url))?;

    let status = response.status();
    if status != StatusCode::OK {
        anyhow::bail!("GET {} returned {status}", config.url);
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("read body of {}", config.url))?;
    tracing::debug!(url = %config.url, %status, bytes = body.len(), "fetched search page");

    Ok(body)
}
