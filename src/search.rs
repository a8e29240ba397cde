use std::io::Write;
use std::path::Path;

use anyhow::Context as _;

use crate::cli::{SearchArgs, SourceArgs};
use crate::config::FetchConfig;
use crate::extract::{self, SearchResultPage};
use crate::render;

/// Which entries of the page get printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    First,
    All,
}

pub async fn run(variant: Variant, args: SearchArgs, out: &mut impl Write) -> anyhow::Result<()> {
    match load_page(&args.source).await? {
        None => render::write_fetch_failed(out).context("write output")?,
        Some(html) => {
            let page = SearchResultPage::parse(&html);
            match variant {
                Variant::First => {
                    let entry = extract::extract_first(&page);
                    render::write_first(out, &entry).context("write output")?;
                }
                Variant::All => {
                    let books = extract::extract_all(&page);
                    render::write_all(out, &books).context("write output")?;
                }
            }
        }
    }

    out.flush().context("flush output")?;
    Ok(())
}

/// `Ok(None)` means the page could not be retrieved; the cause is logged, not returned.
async fn load_page(source: &SourceArgs) -> anyhow::Result<Option<String>> {
    if let Some(path) = source.html_file.as_deref() {
        let html = std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("read html file: {path}"))?;
        tracing::debug!(path, bytes = html.len(), "loaded search page from file");
        return Ok(Some(html));
    }

    let config = FetchConfig::from_args(source).context("build fetch config")?;
    let client = crate::fetch::build_client()?;
    match crate::fetch::fetch_page(&client, &config).await {
        Ok(html) => Ok(Some(html)),
        Err(err) => {
            tracing::warn!(url = %config.url, ?err, "failed to retrieve search page");
            Ok(None)
        }
    }
}
