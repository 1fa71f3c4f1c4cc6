//! Mortar CLI
//!
//! Prints the content the RK Constructions site would render, as JSON, and
//! submits enquiries from the command line.

use anyhow::Result;
use clap::Parser;

use mortar_core::config::SiteConfig;

mod cli;
mod commands;
mod config_handlers;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let default_filter = if cli.verbose {
        "debug"
    } else {
        "info,mortar=debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Command::Config { action } = cli.command {
        config_handlers::handle_config_command(cli.config.as_deref(), action)?;
        return Ok(());
    }

    let config = effective_config(&cli)?;
    tracing::debug!(
        host = %config.host,
        endpoint = %config.endpoint().api_base,
        "Loaded configuration"
    );
    commands::run(&config, cli.command).await
}

/// Config file plus command-line overrides.
fn effective_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mortar_core::endpoint::Environment;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "host = \"rkconstructions.in\"\n[http]\ntimeout_secs = 4\n").unwrap();

        let cli = Cli::try_parse_from([
            "mortar",
            "--config",
            file.to_str().unwrap(),
            "--host",
            "localhost",
            "resolve",
        ])
        .unwrap();
        let config = effective_config(&cli).unwrap();
        assert_eq!(config.endpoint().environment, Environment::Local);
        assert_eq!(config.http.timeout_secs, 4);
    }

    #[test]
    fn test_zero_timeout_override_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("absent.toml");
        let cli = Cli::try_parse_from([
            "mortar",
            "--config",
            file.to_str().unwrap(),
            "--timeout",
            "0",
            "about",
        ])
        .unwrap();
        assert!(effective_config(&cli).is_err());
    }
}
