//! Team command implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;
use shiftstats::Session;

#[derive(Args, Debug)]
pub struct TeamCommand {
    #[command(subcommand)]
    pub command: TeamSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TeamSubcommand {
    /// Search current teams by name
    Search {
        name: String,

        #[arg(long, default_value = "hockey")]
        sport: String,
    },

    /// List the teams of a named division in a league
    InDivision {
        division_name: String,

        #[arg(long)]
        league_id: u64,

        /// Include teams whose season has ended
        #[arg(long)]
        all_seasons: bool,
    },

    /// Show the full schedule of a team
    Schedule { team_id: u64 },

    /// List the active players of a team
    Players { team_id: u64 },

    /// List the games of a team
    Games {
        team_id: u64,

        /// Filter by game status instead, e.g. "Final,In Progress"
        #[arg(long)]
        status: Option<String>,

        /// Exclude future games
        #[arg(long)]
        no_future: bool,

        /// Exclude today's games
        #[arg(long)]
        no_today: bool,
    },

    /// List the practices of a team
    Practices {
        team_id: u64,

        /// Exclude future practices
        #[arg(long)]
        no_future: bool,

        /// Exclude today's practices
        #[arg(long)]
        no_today: bool,
    },

    /// List suspensions of a team
    Suspensions {
        team_id: u64,

        /// Only active suspensions
        #[arg(long)]
        active: bool,
    },
}

pub async fn run(cmd: TeamCommand, session: &Session) -> Result<Value> {
    let value = match cmd.command {
        TeamSubcommand::Search { name, sport } => session.team_search(&sport, &name).await,
        TeamSubcommand::InDivision {
            division_name,
            league_id,
            all_seasons,
        } => {
            session
                .teams_in_division(&division_name, league_id, !all_seasons)
                .await
        }
        TeamSubcommand::Schedule { team_id } => session.team_schedule(team_id).await,
        TeamSubcommand::Players { team_id } => session.team_players_list(team_id).await,
        TeamSubcommand::Games {
            team_id,
            status: Some(status),
            ..
        } => session.team_games_for_status(team_id, &status).await,
        TeamSubcommand::Games {
            team_id,
            status: None,
            no_future,
            no_today,
        } => session.team_games(team_id, !no_future, !no_today).await,
        TeamSubcommand::Practices {
            team_id,
            no_future,
            no_today,
        } => session.team_practices(team_id, !no_future, !no_today).await,
        TeamSubcommand::Suspensions { team_id, active } => {
            session.team_suspensions(team_id, active).await
        }
    };

    value.context("Team request failed")
}
