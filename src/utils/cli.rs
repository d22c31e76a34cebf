//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]
#![allow(clippy::print_stdout, reason = "`extract` prints its result to stdout")]

use crate::analysis::Analyzer;
use crate::config::{Config, LoggingConfig};
use crate::server::app::serve;
use clap::Parser;
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Lexis pulls the nouns and verbs out of uploaded PDFs
/// and stores them under the uploader's email.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply if it does not exist.
    #[arg(short, long, default_value_t = String::from("lexis.toml"))]
    config: String,
    /// Lexis cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the upload API
    Serve {
        /// Address to bind to. Overrides `[server] bind`.
        #[arg(short, long)]
        bind: Option<String>,
        /// Port to listen on. Overrides `[server] port`.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the nouns and verbs of a local PDF as JSON
    Extract {
        /// Path to the PDF.
        file: String,
    },
}

/// Log to stdout, or to daily-rotated files when a log directory is configured.
/// `RUST_LOG` overrides the default `info` level.
///
/// The returned guard must live as long as logging is needed.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match logging.directory {
        Some(ref directory) => {
            let appender = tracing_appender::rolling::daily(directory, "lexis.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}

/// Analyze the PDF at `file` and print the result.
fn extract(config: &Config, file: &str) -> io::Result<()> {
    let document = fs::read(file)?;
    let analyzer = Analyzer::from_config(&config.analysis);
    match analyzer.analyze(&document) {
        Ok(analysis) => {
            let json = serde_json::to_string_pretty(&analysis)?;
            println!("{json}");
            Ok(())
        }
        Err(err) => {
            tracing::error!("error: could not analyze `{file}`: {err}");
            Err(io::Error::new(io::ErrorKind::InvalidData, err))
        }
    }
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind, or `extract` cannot read or analyze its file.
pub fn run() -> io::Result<()> {
    let cli = Cli::parse();
    let config_result = Config::load(Path::new(&cli.config));
    let logging = config_result
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    let _guard = init_tracing(&logging);
    tracing::debug!("Starting application");

    let mut config = match config_result {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("error: could not load configuration `{}`: {err:?}", cli.config);
            std::process::exit(1);
        }
    };

    match cli.subcommands {
        Subcommands::Serve { bind, port } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config)
        }
        Subcommands::Extract { file } => extract(&config, &file),
    }
}
