//! CLI argument definitions.

use clap::{Args, Parser};

use crate::commands::Commands;

/// ShiftStats CLI tool for hockey statistics exploration.
#[derive(Parser, Debug)]
#[command(name = "shiftstats")]
#[command(author, version = env!("SHIFTSTATS_VERSION"), about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// API key to log in with (defaults to the built-in shared key)
    #[arg(long, env = "SHIFTSTATS_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(
        long,
        env = "SHIFTSTATS_BASE_URL",
        global = true,
        default_value = shiftstats::types::DEFAULT_API_URL
    )]
    pub base_url: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}
