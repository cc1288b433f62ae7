//! Game operations.

use serde_json::Value;
use tracing::instrument;

use crate::auth::Session;
use crate::error::Error;
use crate::transport::ApiRequest;
use crate::types::GameSide;

fn game_request(game_id: u64) -> ApiRequest {
    ApiRequest::new(format!("game/{}", game_id))
}

/// `game/{id}/{resource}`, with the side prefixed to the resource name.
fn game_resource_request(game_id: u64, resource: &str, only: Option<GameSide>) -> ApiRequest {
    let prefix = only.map(|side| side.prefix()).unwrap_or_default();
    ApiRequest::new(format!("game/{}/{}{}", game_id, prefix, resource))
}

impl Session {
    /// Fetch a game. Responds with a `game` object.
    #[instrument(skip(self))]
    pub async fn game(&self, game_id: u64) -> Result<Value, Error> {
        self.send(game_request(game_id)).await
    }

    /// Goals of a game, or of one side only.
    ///
    /// The response key follows the path: `goals`, `home_goals` or `away_goals`.
    #[instrument(skip(self))]
    pub async fn game_goals(&self, game_id: u64, only: Option<GameSide>) -> Result<Value, Error> {
        self.send(game_resource_request(game_id, "goals", only)).await
    }

    /// Goalies of a game, or of one side only.
    #[instrument(skip(self))]
    pub async fn game_goalies(&self, game_id: u64, only: Option<GameSide>) -> Result<Value, Error> {
        self.send(game_resource_request(game_id, "goalies", only)).await
    }

    /// Penalties of a game, or of one side only.
    #[instrument(skip(self))]
    pub async fn game_penalties(
        &self,
        game_id: u64,
        only: Option<GameSide>,
    ) -> Result<Value, Error> {
        self.send(game_resource_request(game_id, "penalties", only)).await
    }

    /// Roster of a game, or of one side only.
    #[instrument(skip(self))]
    pub async fn game_roster(&self, game_id: u64, only: Option<GameSide>) -> Result<Value, Error> {
        self.send(game_resource_request(game_id, "roster", only)).await
    }
}
