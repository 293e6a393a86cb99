use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ffinfo=info,ffmpeg_utils=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::Args::parse().run()
}
