#![allow(clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kmasc_cli::command::{Command, Outcome, run};
use kmasc_cli::{CliConfig, exit_code};
use kmasc_core::KmascCore;
use kmasc_core::config::core_config::{self, AppConfig};
use kmasc_core::service::error::ServiceError;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "kmasc", author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<CliConfig> = match core_config::AppConfig::from_files(&config_files)
    {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(exit_code::FAILURE);
        }
    };

    if let Err(error) = initialize_tracing(&app_config.app) {
        eprintln!("Failed to initialize logging: {error}");
        return ExitCode::from(exit_code::FAILURE);
    }

    match execute(app_config, cli.command) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Negative) => ExitCode::from(exit_code::NEGATIVE),
        Err(error) => {
            report(&error);
            ExitCode::from(exit_code::FAILURE)
        }
    }
}

fn execute(app_config: AppConfig<CliConfig>, command: Command) -> anyhow::Result<Outcome> {
    let core = KmascCore::new(app_config.core)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(&core, command))
}

/// Prints the user-facing notice for a failed command.
fn report(error: &anyhow::Error) {
    tracing::debug!(?error, "Command failed");

    match error.downcast_ref::<ServiceError>() {
        Some(service_error) => {
            let code = service_error.error_code();
            eprintln!("{} [{code:?}]: {service_error}", code.msg());
        }
        None => eprintln!("Error: {error:#}"),
    }
}

fn initialize_tracing(config: &CliConfig) -> anyhow::Result<()> {
    // Create a filter based on the log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("warn"))
    })?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    };

    Ok(())
}
