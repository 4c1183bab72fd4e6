//! Reads HTML from stdin and prints the extracted article as JSON.
//!
//! Usage: `readability [BASE_URL] < page.html`
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=rs_readability=debug`).

use std::io;
use std::process::ExitCode;

use rs_readability::{Document, Options};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let options = Options {
        url: std::env::args().nth(1),
        ..Options::default()
    };

    let document = match Document::from_reader(io::stdin().lock(), options) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(%err, "could not read document");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(&document.article()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "could not serialize article");
            ExitCode::FAILURE
        }
    }
}
