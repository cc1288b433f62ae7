//! League operations.

use serde_json::Value;
use tracing::instrument;

use crate::auth::Session;
use crate::error::Error;
use crate::transport::ApiRequest;

use super::suspensions_request;

fn leagues_request() -> ApiRequest {
    ApiRequest::new("leagues")
}

fn league_request(league_id: u64) -> ApiRequest {
    ApiRequest::new(format!("league/{}", league_id))
}

fn league_seasons_request(league_id: u64) -> ApiRequest {
    ApiRequest::new(format!("league/{}/seasons", league_id))
}

fn league_suspensions_request(league_id: u64, only_active: bool) -> ApiRequest {
    suspensions_request(&format!("league/{}", league_id), only_active)
}

impl Session {
    /// List all leagues. Responds with a `leagues` array.
    #[instrument(skip(self))]
    pub async fn leagues(&self) -> Result<Value, Error> {
        self.send(leagues_request()).await
    }

    /// Fetch a single league. Responds with a `league` object.
    #[instrument(skip(self))]
    pub async fn league(&self, league_id: u64) -> Result<Value, Error> {
        self.send(league_request(league_id)).await
    }

    /// List the seasons of a league. Responds with a `seasons` array.
    #[instrument(skip(self))]
    pub async fn league_seasons(&self, league_id: u64) -> Result<Value, Error> {
        self.send(league_seasons_request(league_id)).await
    }

    /// List suspensions across a league, optionally only the active ones.
    #[instrument(skip(self))]
    pub async fn league_suspensions(
        &self,
        league_id: u64,
        only_active: bool,
    ) -> Result<Value, Error> {
        self.send(league_suspensions_request(league_id, only_active)).await
    }
}
