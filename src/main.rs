use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

use bookscrape::search::Variant;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    bookscrape::logging::init().context("init logging")?;

    let cli = bookscrape::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        bookscrape::cli::Command::First(args) => {
            bookscrape::search::run(Variant::First, args, &mut stdout)
                .await
                .context("first")?;
        }
        bookscrape::cli::Command::All(args) => {
            bookscrape::search::run(Variant::All, args, &mut stdout)
                .await
                .context("all")?;
        }
    }

    Ok(())
}
