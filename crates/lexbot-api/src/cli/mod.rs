//! Command-line arguments for the `lexbot` binary.
//!
//! Uses clap derive macros; every server option also reads from the
//! environment (after `.env` has been loaded).

use clap::Parser;

/// HTTP front end for building Amazon Lex bots.
#[derive(Parser, Debug)]
#[command(name = "lexbot", version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to.
    #[arg(long, env = "LEXBOT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "LEXBOT_PORT", default_value = "8080")]
    pub port: u16,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, env = "LEXBOT_OTEL")]
    pub otel: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,lexbot=debug,lexbot_core=debug,lexbot_infra=debug",
            _ => "trace",
        }
    }
}
