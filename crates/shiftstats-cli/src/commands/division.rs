//! Division command implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;
use shiftstats::{LeadersQuery, SeasonType, Session};

#[derive(Args, Debug)]
pub struct DivisionCommand {
    #[command(subcommand)]
    pub command: DivisionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DivisionSubcommand {
    /// List the games of a division
    Games { division_id: u64 },

    /// Show the standings of a division
    Standings {
        division_id: u64,

        /// Season type, e.g. "Regular Season" or "Playoffs"
        #[arg(long = "type", default_value = "Regular Season")]
        season_type: String,
    },

    /// List the teams of a division
    Teams { division_id: u64 },

    /// Show the statistical leaders of a division
    Leaders {
        division_id: u64,

        /// Season type, e.g. "Regular Season" or "Playoffs"
        #[arg(long = "type", default_value = "Regular Season")]
        season_type: String,

        /// Number of leaders per metric
        #[arg(long, default_value_t = LeadersQuery::DEFAULT_LIMIT)]
        limit: u32,

        /// Metrics to rank by (comma-separated)
        #[arg(
            long,
            value_delimiter = ',',
            default_values_t = LeadersQuery::DEFAULT_METRICS.map(String::from)
        )]
        metrics: Vec<String>,
    },

    /// List suspensions in a division
    Suspensions {
        division_id: u64,

        /// Only active suspensions
        #[arg(long)]
        active: bool,
    },
}

pub async fn run(cmd: DivisionCommand, session: &Session) -> Result<Value> {
    let value = match cmd.command {
        DivisionSubcommand::Games { division_id } => session.division_games_list(division_id).await,
        DivisionSubcommand::Standings {
            division_id,
            season_type,
        } => {
            session
                .division_standings(division_id, SeasonType::from(season_type.as_str()))
                .await
        }
        DivisionSubcommand::Teams { division_id } => session.division_teams(division_id).await,
        DivisionSubcommand::Leaders {
            division_id,
            season_type,
            limit,
            metrics,
        } => {
            let query = LeadersQuery::default()
                .season_type(SeasonType::from(season_type.as_str()))
                .limit(limit)
                .metrics(metrics);
            session.division_leaders(division_id, query).await
        }
        DivisionSubcommand::Suspensions {
            division_id,
            active,
        } => session.division_suspensions(division_id, active).await,
    };

    value.context("Division request failed")
}
