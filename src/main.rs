//! `lambdalog` command line tool.
//!
//! Emits one context-enriched JSON record, for functions running on a custom
//! runtime whose handler is a shell script:
//!
//! ```text
//! lambdalog --service checkout emit --request-id "$REQUEST_ID" order placed
//! ```
//!
//! Function name, version, log group and log stream come from the
//! `AWS_LAMBDA_*` environment unless the config file overrides them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lambdalog::config::{load_config, validate_config, ConfigError, LoggerConfig};
use lambdalog::sink::Preset;
use lambdalog::{ExecutionContext, Level, Logger};

#[derive(Parser)]
#[command(name = "lambdalog")]
#[command(about = "Emit context-enriched structured log records", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service name (overrides the config file).
    #[arg(short, long)]
    service: Option<String>,

    /// `stdout`, `stderr` or a file path (overrides the config file).
    #[arg(short, long)]
    output: Option<String>,

    /// Use the development preset (debug records are written).
    #[arg(long)]
    development: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one record and flush
    Emit {
        /// Invocation request id.
        #[arg(short, long)]
        request_id: String,

        /// Severity: debug, info, warn or error.
        #[arg(short, long, default_value = "info")]
        level: Level,

        /// Message words, joined with spaces.
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Print the effective configuration as TOML
    ShowConfig,
}

/// Config file (if any) with command line overrides applied, validated as a whole.
fn effective_config(cli: &Cli) -> Result<LoggerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };

    if let Some(service) = &cli.service {
        config.service_name = service.clone();
    }
    if let Some(output) = &cli.output {
        config.sink.output = output.clone();
    }
    if cli.development {
        config.sink.preset = Preset::Development;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lambdalog::observability::init_subscriber();

    let cli = Cli::parse();
    let config = effective_config(&cli)?;

    match cli.command {
        Commands::Emit {
            request_id,
            level,
            message,
        } => {
            let ctx = ExecutionContext::new(request_id, config.function_metadata());
            let logger = Logger::from_config(&config, &ctx)?;

            let words: Vec<&dyn std::fmt::Display> =
                message.iter().map(|w| w as &dyn std::fmt::Display).collect();
            logger.sugared().log_at(level, &words);

            logger.sync()?;
        }
        Commands::ShowConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
