//! Season command implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;
use shiftstats::Session;

#[derive(Args, Debug)]
pub struct SeasonCommand {
    #[command(subcommand)]
    pub command: SeasonSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SeasonSubcommand {
    /// Show a season
    Show { season_id: u64 },

    /// List the divisions of a season
    Divisions { season_id: u64 },

    /// List suspensions in a season
    Suspensions {
        season_id: u64,

        /// Only active suspensions
        #[arg(long)]
        active: bool,
    },
}

pub async fn run(cmd: SeasonCommand, session: &Session) -> Result<Value> {
    let value = match cmd.command {
        SeasonSubcommand::Show { season_id } => session.season(season_id).await,
        SeasonSubcommand::Divisions { season_id } => session.season_divisions_list(season_id).await,
        SeasonSubcommand::Suspensions { season_id, active } => {
            session.season_suspensions(season_id, active).await
        }
    };

    value.context("Season request failed")
}
