//! Season operations.

use serde_json::Value;
use tracing::instrument;

use crate::auth::Session;
use crate::error::Error;
use crate::transport::ApiRequest;

use super::suspensions_request;

fn season_request(season_id: u64) -> ApiRequest {
    ApiRequest::new(format!("season/{}", season_id))
}

fn season_divisions_list_request(season_id: u64) -> ApiRequest {
    ApiRequest::new(format!("season/{}/divisions", season_id))
}

fn season_suspensions_request(season_id: u64, only_active: bool) -> ApiRequest {
    suspensions_request(&format!("season/{}", season_id), only_active)
}

impl Session {
    /// Fetch a single season.
    #[instrument(skip(self))]
    pub async fn season(&self, season_id: u64) -> Result<Value, Error> {
        self.send(season_request(season_id)).await
    }

    /// List the divisions of a season. Responds with a `divisions` array.
    #[instrument(skip(self))]
    pub async fn season_divisions_list(&self, season_id: u64) -> Result<Value, Error> {
        self.send(season_divisions_list_request(season_id)).await
    }

    /// List suspensions in a season, optionally only the active ones.
    #[instrument(skip(self))]
    pub async fn season_suspensions(
        &self,
        season_id: u64,
        only_active: bool,
    ) -> Result<Value, Error> {
        self.send(season_suspensions_request(season_id, only_active)).await
    }
}
