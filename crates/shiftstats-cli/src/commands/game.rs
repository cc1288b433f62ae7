//! Game command implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::Value;
use shiftstats::{GameSide, Session};

#[derive(Args, Debug)]
pub struct GameCommand {
    #[command(subcommand)]
    pub command: GameSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GameSubcommand {
    /// Show a game
    Show { game_id: u64 },

    /// List the goals of a game
    Goals(SideArgs),

    /// List the goalies of a game
    Goalies(SideArgs),

    /// List the penalties of a game
    Penalties(SideArgs),

    /// Show the roster of a game
    Roster(SideArgs),
}

#[derive(Args, Debug)]
pub struct SideArgs {
    pub game_id: u64,

    /// Restrict to one side of the game
    #[arg(long, value_enum)]
    pub side: Option<Side>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Side {
    Home,
    Away,
}

impl From<Side> for GameSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Home => GameSide::Home,
            Side::Away => GameSide::Away,
        }
    }
}

pub async fn run(cmd: GameCommand, session: &Session) -> Result<Value> {
    let value = match cmd.command {
        GameSubcommand::Show { game_id } => session.game(game_id).await,
        GameSubcommand::Goals(args) => session.game_goals(args.game_id, args.only()).await,
        GameSubcommand::Goalies(args) => session.game_goalies(args.game_id, args.only()).await,
        GameSubcommand::Penalties(args) => session.game_penalties(args.game_id, args.only()).await,
        GameSubcommand::Roster(args) => session.game_roster(args.game_id, args.only()).await,
    };

    value.context("Game request failed")
}

impl SideArgs {
    fn only(&self) -> Option<GameSide> {
        self.side.map(GameSide::from)
    }
}
