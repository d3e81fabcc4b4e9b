use anyhow::{Context, Result};
use clap::Parser;
use gitter::{config::Config, github::GithubClient, logger, ArchiveFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitter")]
#[command(about = "Look up the latest GitHub release of a repository")]
#[command(version)]
struct Cli {
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
    /// Archive to resolve (tar or zip)
    #[arg(short, long, default_value_t = ArchiveFormat::TarGz)]
    format: ArchiveFormat,
    /// Print the whole release as JSON instead of the archive URL
    #[arg(long)]
    json: bool,
    /// Path to a gitter.yaml config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the configured log level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())
        .await
        .context("Cannot load config file")?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    logger::init(config.log_level()?)?;
    log::debug!("using api {}", config.github.api_url);

    let client = GithubClient::new(config.github);
    let releases = client.repo(&cli.owner, &cli.repo).releases();

    if cli.json {
        let release = releases
            .latest()
            .await
            .with_context(|| format!("Cannot fetch latest release of {}/{}", cli.owner, cli.repo))?;
        println!("{}", serde_json::to_string_pretty(&release)?);
    } else {
        let url = releases
            .latest_archive_url(cli.format)
            .await
            .with_context(|| format!("Cannot resolve {} of {}/{}", cli.format, cli.owner, cli.repo))?;
        println!("{}", url);
    }

    Ok(())
}
