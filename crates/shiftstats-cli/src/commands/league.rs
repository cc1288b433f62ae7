//! League command implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;
use shiftstats::Session;

#[derive(Args, Debug)]
pub struct LeagueCommand {
    #[command(subcommand)]
    pub command: LeagueSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LeagueSubcommand {
    /// Show a league
    Show { league_id: u64 },

    /// List the seasons of a league
    Seasons { league_id: u64 },

    /// List suspensions in a league
    Suspensions {
        league_id: u64,

        /// Only active suspensions
        #[arg(long)]
        active: bool,
    },
}

pub async fn run(cmd: LeagueCommand, session: &Session) -> Result<Value> {
    let value = match cmd.command {
        LeagueSubcommand::Show { league_id } => session.league(league_id).await,
        LeagueSubcommand::Seasons { league_id } => session.league_seasons(league_id).await,
        LeagueSubcommand::Suspensions { league_id, active } => {
            session.league_suspensions(league_id, active).await
        }
    };

    value.context("League request failed")
}
