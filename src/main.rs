use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vidgrab::cli::Args;
use vidgrab::config::ClientConfig;
use vidgrab::progress::TerminalProgress;
use vidgrab::resolver::YouTubeResolver;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let request = Args::parse().into_request();

    let resolver = YouTubeResolver::new(&ClientConfig::from_request(&request))?;
    let mut progress = TerminalProgress::new();
    let mut stdout = std::io::stdout();

    vidgrab::app::run(&request, &resolver, &mut progress, &mut stdout)
        .await
        .with_context(|| format!("Failed to download {}", request.url))?;

    Ok(())
}
