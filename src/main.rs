// Entrypoint for the interactive front-end.
// - Keeps `main` small: set up logging, create the client and hand it to
//   the UI loop.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wordstreamify::{ui::main_menu, WordstreamClient};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wordstreamify=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Base URL and timeout come from `WORDSTREAM_API_URL` and
    // `WORDSTREAM_TIMEOUT_SECS`, see `config::ClientConfig::from_env`.
    let api = WordstreamClient::from_env().context("Failed to build Wordstream client")?;

    main_menu(api)?;
    Ok(())
}
