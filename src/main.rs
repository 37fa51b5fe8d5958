//! ttsync CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use ttsync::cli::{self, Cli};
use ttsync::domain::models::Config;
use ttsync::infrastructure::config::ConfigLoader;
use ttsync::infrastructure::logging::{LogConfig, LoggerImpl};

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return cli::report_error(&err, json),
    };

    // Held until main returns so buffered log lines are flushed on every exit path.
    let _logger = match LogConfig::try_from(&config.logging).and_then(|c| LoggerImpl::init(&c)) {
        Ok(logger) => logger,
        Err(err) => return cli::report_error(&err, json),
    };

    match cli::commands::execute(cli.command, &config, json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::report_error(&err, json),
    }
}
