//! wes-bridge - command-line entrypoint for the dragen-wgts-rna WES bridge
//!
//! - `build-request` turns a READY workflow run event into ICAv2 WES request inputs
//! - `translate` turns an ICAv2 WES state change into a workflow run update
//! - `config` prints the effective configuration
//!
//! Events are read as JSON from a file or stdin; results go to stdout and
//! logs to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use crate::commands::translate::RegistryOverrides;
use crate::config::BridgeConfig;
use crate::output::OutputOptions;

/// wes-bridge CLI
#[derive(Parser)]
#[command(name = "wes-bridge")]
#[command(about = "dragen-wgts-rna WES bridge - event payload translation", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "WES_BRIDGE_CONFIG")]
    config: Option<String>,

    /// Log level (overrides logging.level)
    #[arg(long, global = true, env = "WES_BRIDGE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    /// Wrap the output in an event bus envelope
    #[arg(long, global = true)]
    envelope: bool,

    /// Pretty-print the output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Build ICAv2 WES request inputs from a READY workflow run event detail
    BuildRequest {
        /// Event detail file (stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Translate an ICAv2 WES state change into a workflow run update
    Translate {
        /// Event detail file (stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Workflow manager base URL
        #[arg(long, env = "WES_BRIDGE_REGISTRY_URL", conflicts_with = "fixture")]
        registry_url: Option<String>,

        /// Registry fixture file (`{"workflowRuns": [...], "payloads": {...}}`)
        #[arg(long)]
        fixture: Option<String>,
    },

    /// Show configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BridgeConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.logging.json |= cli.json_logs;
    config.events.envelope |= cli.envelope;

    init_tracing(&config);

    let output = OutputOptions {
        envelope: config.events.envelope,
        pretty: cli.pretty,
        event_bus_name: config.events.event_bus_name.clone(),
        source: config.events.source.clone(),
    };

    match cli.command {
        Commands::BuildRequest { input } => commands::request::execute(input.as_deref(), &output),
        Commands::Translate {
            input,
            registry_url,
            fixture,
        } => {
            let overrides = RegistryOverrides {
                registry_url,
                fixture,
            };
            commands::translate::execute(input.as_deref(), overrides, &config.registry, &output)
                .await
        }
        Commands::Config => {
            println!("{}", output.to_json(&config.redacted())?);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout carries only the emitted event
fn init_tracing(config: &BridgeConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
