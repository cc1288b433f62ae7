//! Walkthrough of a typical session.

use anyhow::{Context, Result};
use clap::Args;
use shiftstats::{GameSide, SeasonType, Session};

use crate::output;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Division to show standings for
    #[arg(long, default_value_t = 4702)]
    pub division_id: u64,

    /// Game to show home goals for
    #[arg(long, default_value_t = 166658)]
    pub game_id: u64,
}

pub async fn run(args: DemoArgs, session: &Session, pretty: bool) -> Result<()> {
    output::heading(&format!("Standings for division {}", args.division_id));
    let standings = session
        .division_standings(args.division_id, SeasonType::RegularSeason)
        .await
        .context("Failed to fetch standings")?;
    output::json(&standings, pretty)?;

    output::heading(&format!("Home goals for game {}", args.game_id));
    let goals = session
        .game_goals(args.game_id, Some(GameSide::Home))
        .await
        .context("Failed to fetch game goals")?;
    output::json(&goals, pretty)
}
