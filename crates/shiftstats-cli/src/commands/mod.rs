//! Command implementations.
//!
//! Every command runs against a freshly logged-in session.

mod demo;
mod division;
mod game;
mod get;
mod league;
mod login;
mod season;
mod team;

use anyhow::{Context, Result};
use clap::Subcommand;
use shiftstats::Session;
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and report the session
    Login(login::LoginArgs),

    /// List all leagues
    Leagues,

    /// League operations
    League(league::LeagueCommand),

    /// Season operations
    Season(season::SeasonCommand),

    /// Division operations (standings, leaders, ...)
    Division(division::DivisionCommand),

    /// Team operations
    Team(team::TeamCommand),

    /// Game operations (goals, roster, ...)
    Game(game::GameCommand),

    /// Request any resource path with raw query parameters
    Get(get::GetArgs),

    /// Log in, then print a division's standings and a game's home goals
    Demo(demo::DemoArgs),
}

pub async fn handle(command: Commands, global: &GlobalArgs) -> Result<()> {
    let session = build_session(global)?;
    debug!(api = %session.api_url(), "logging in");
    let response = session.login().await.context("Failed to login")?;

    let value = match command {
        Commands::Login(args) => return login::run(args, &session, &response),
        Commands::Demo(args) => return demo::run(args, &session, global.pretty).await,
        Commands::Leagues => session.leagues().await.context("Failed to list leagues")?,
        Commands::League(cmd) => league::run(cmd, &session).await?,
        Commands::Season(cmd) => season::run(cmd, &session).await?,
        Commands::Division(cmd) => division::run(cmd, &session).await?,
        Commands::Team(cmd) => team::run(cmd, &session).await?,
        Commands::Game(cmd) => game::run(cmd, &session).await?,
        Commands::Get(args) => get::run(args, &session).await?,
    };

    output::json(&value, global.pretty)
}

fn build_session(global: &GlobalArgs) -> Result<Session> {
    let mut builder = Session::builder()
        .base_url(&global.base_url)
        .context("Invalid API base URL")?;

    if let Some(key) = &global.api_key {
        builder = builder.api_key(key.as_str());
    }

    builder.build().context("Failed to create session")
}
