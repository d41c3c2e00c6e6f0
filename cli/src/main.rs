//! CLI entrypoint for bedrock-ask
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use ask_application::RunChainUseCase;
use ask_infrastructure::{BedrockLlmGateway, ConfigLoader, FileConfig, ResolvedConfig};
use ask_presentation::{AppState, Cli, Command, ConsoleFormatter, PageRenderer, ask_once, serve};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting bedrock-ask");

    let file_config = load_config(&cli)?;

    let command = cli.command();
    if command == Command::ShowConfig {
        let output = ConsoleFormatter::format_config(
            &ConfigLoader::describe_config_sources(cli.config.as_deref(), cli.no_config),
            &file_config.to_redacted_toml()?,
        );
        print!("{}", output);
        return Ok(());
    }

    let config = file_config
        .resolve()
        .context("Invalid configuration")?;

    // === Dependency Injection ===
    let chain = build_chain(&config).await;

    match command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind);
            let pages = PageRenderer::new(config.title.clone())
                .context("Failed to load page template")?;
            serve(addr, AppState::new(chain, pages))
                .await
                .with_context(|| format!("Failed to serve on {}", addr))?;
        }
        Command::Ask { question, quiet } => {
            match ask_once(&chain, &question, quiet).await {
                Ok(Some(answer)) => print!("{}", answer),
                Ok(None) => {}
                Err(e) => {
                    eprint!("{}", ConsoleFormatter::format_error(&e.to_string()));
                    drop(log_guard);
                    std::process::exit(1);
                }
            }
        }
        Command::ShowConfig => {}
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides the verbosity flags. With `--log-dir`, logs are
/// also written to a daily rolling file; the returned guard flushes it.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::daily(dir, "bedrock-ask.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(fmt::layer().with_writer(non_blocking).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    config.context("Failed to load configuration")
}

async fn build_chain(config: &ResolvedConfig) -> RunChainUseCase {
    let gateway = Arc::new(BedrockLlmGateway::new(&config.bedrock).await);
    RunChainUseCase::new(gateway, config.template.clone())
}
