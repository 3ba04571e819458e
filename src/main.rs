use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use tokio::io::{stdin, stdout, BufReader};

use filetrie::{FileTrie, Session};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose regular files are indexed; prompted for when omitted
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Prefix to look up, repeatable; answers these and exits instead of prompting
    #[arg(short, long)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let Args { directory, query } = Args::parse();

    let mut session = Session::new(BufReader::new(stdin()), stdout());

    let directory = match directory {
        Some(directory) => directory,
        None => session
            .prompt_directory()
            .await
            .context("reading directory path")?,
    };
    info!("directory: {}", directory.display());

    let trie = FileTrie::scan(&directory)
        .await
        .with_context(|| format!("listing {}", directory.display()))?;

    if query.is_empty() {
        session.run(&trie).await.context("reading queries")?;
    } else {
        for prefix in &query {
            session
                .answer(&trie, prefix)
                .await
                .with_context(|| format!("answering {prefix:?}"))?;
        }
    }

    Ok(())
}
