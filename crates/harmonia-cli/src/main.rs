//! harmonia: music theory reference on the command line

mod cli;
mod commands;
mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(config::config_path);
    let (config, config_error) = match config::load_config(&path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    let parsed_level = level.parse::<tracing::Level>().ok();
    init_logging(parsed_level.unwrap_or(tracing::Level::INFO))?;

    if parsed_level.is_none() {
        tracing::warn!("unknown log_level {:?}, using info", level);
    }

    if let Some(e) = config_error {
        tracing::warn!("ignoring {}: {:#}", path.display(), e);
    }
    tracing::debug!("config: {:?}", config);

    let json = cli.json || config.json;
    commands::run(cli.command, &config, json)
}

/// Logs go to stderr so `--json` output stays clean on stdout
fn init_logging(level: tracing::Level) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(format!("harmonia={}", level.as_str().to_ascii_lowercase()).parse()?))
        .init();
    Ok(())
}
