//! CLI command definitions

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for bedrock-ask
#[derive(Parser, Debug)]
#[command(name = "bedrock-ask")]
#[command(author, version, about = "Ask a Bedrock text model a question through a prompt template")]
#[command(long_about = r#"
bedrock-ask fills a prompt template with your question, sends it to an
Amazon Bedrock text model and shows the answer.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./bedrock-ask.toml       Project-level config (or ./.bedrock-ask.toml)
3. ~/.config/bedrock-ask/config.toml   Global config

Environment variables prefixed with BEDROCK_ASK_ override files, e.g.
BEDROCK_ASK_MODEL_ID, BEDROCK_ASK_REGION, BEDROCK_ASK_SERVER__BIND.

Example:
  bedrock-ask                          Serve the page on 127.0.0.1:8501
  bedrock-ask ask "What is 6*7?"       Answer once on the console
  bedrock-ask show-config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the question page over HTTP (default)
    Serve {
        /// Address to listen on, overriding the configured one
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,
    },

    /// Answer a single question on the console
    Ask {
        /// The question to ask
        question: String,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show configuration sources and the effective configuration
    ShowConfig,
}

impl Cli {
    /// The subcommand to run; no subcommand means `serve`.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { bind: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::parse_from(["bedrock-ask"]);
        assert_eq!(cli.command(), Command::Serve { bind: None });
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn serve_with_bind() {
        let cli = Cli::parse_from(["bedrock-ask", "serve", "--bind", "0.0.0.0:9000"]);
        assert_eq!(
            cli.command(),
            Command::Serve {
                bind: Some("0.0.0.0:9000".parse().unwrap())
            }
        );
    }

    #[test]
    fn ask_with_global_flags() {
        let cli = Cli::parse_from(["bedrock-ask", "ask", "What is 6*7?", "-vv", "--no-config"]);
        assert_eq!(
            cli.command(),
            Command::Ask {
                question: "What is 6*7?".to_string(),
                quiet: false
            }
        );
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
    }

    #[test]
    fn show_config() {
        let cli = Cli::parse_from(["bedrock-ask", "--config", "x.toml", "show-config"]);
        assert_eq!(cli.command(), Command::ShowConfig);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
