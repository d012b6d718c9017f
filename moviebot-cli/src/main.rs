use clap::Parser;
mod modes;

use modes::chat::chat;
use modes::history::history;
use modes::register::register;
use moviebot_client::ClientConfig;
use moviebot_cli::cli_args::{Mode, Opt};
use tracing::level_filters::LevelFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();

    let config = match opt.url.as_deref() {
        Some(url) => ClientConfig::with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(api = %config.api_base_url, "using MovieBot backend");

    match opt.mode {
        Mode::Register(r) => register(config, r).await?,
        Mode::Chat(l) => chat(config, l).await?,
        Mode::History(l) => history(config, l).await?,
    };

    Ok(())
}
