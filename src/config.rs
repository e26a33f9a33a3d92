//! Configuration and CLI argument handling

use clap::Parser;

use crate::view::OutputFormat;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "session-timer")]
#[command(about = "A fixed five-minute work session countdown")]
#[command(version)]
pub struct Config {
    /// Also serve the status/reset HTTP endpoints
    #[arg(long)]
    pub serve: bool,

    /// Port to bind the HTTP server to
    #[arg(short, long, default_value = "20553")]
    pub port: u16,

    /// Host address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// How frames are written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not read restart requests from stdin
    #[arg(long)]
    pub no_input: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
