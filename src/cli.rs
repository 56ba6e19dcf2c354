//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Clone a git repository into a predictable, language-aware directory
#[derive(Parser, Debug)]
#[command(name = "clone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: commands::clone::CloneArgs,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        commands::clone::execute(self.args)
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
