//! Team operations.

use serde_json::Value;
use tracing::instrument;

use crate::auth::Session;
use crate::error::Error;
use crate::transport::ApiRequest;

use super::suspensions_request;

fn team_search_request(sport: &str, name: &str) -> ApiRequest {
    ApiRequest::new("teams")
        .param("name", name)
        .param("not_ended", true)
        .param("sport", sport)
}

fn teams_in_division_request(
    division_name: &str,
    league_id: u64,
    current_season: bool,
) -> ApiRequest {
    ApiRequest::new("teams")
        .param("division", division_name)
        .param("league_id", league_id)
        .param_opt("not_ended", current_season.then_some(true))
}

fn team_schedule_request(team_id: u64) -> ApiRequest {
    ApiRequest::new(format!("team/{}/games", team_id))
        .param("future", true)
        .param("today", true)
        .param("past", true)
}

fn team_players_list_request(team_id: u64) -> ApiRequest {
    ApiRequest::new(format!("team/{}/players", team_id)).param("status", "active")
}

fn team_games_request(team_id: u64, include_future: bool, include_today: bool) -> ApiRequest {
    ApiRequest::new(format!("team/{}/games", team_id))
        .param("future", include_future)
        .param("today", include_today)
}

fn team_games_for_status_request(team_id: u64, status: &str) -> ApiRequest {
    ApiRequest::new(format!("team/{}/games", team_id)).param("status", status)
}

fn team_practices_request(team_id: u64, include_future: bool, include_today: bool) -> ApiRequest {
    ApiRequest::new(format!("team/{}/practices", team_id))
        .param("future", include_future)
        .param("today", include_today)
}

fn team_suspensions_request(team_id: u64, only_active: bool) -> ApiRequest {
    suspensions_request(&format!("team/{}", team_id), only_active)
}

impl Session {
    /// Search teams of a sport by name, among teams whose season has not ended.
    ///
    /// Responds with a `teams` array.
    #[instrument(skip(self))]
    pub async fn team_search(&self, sport: &str, name: &str) -> Result<Value, Error> {
        self.send(team_search_request(sport, name)).await
    }

    /// List the teams of a named division within a league.
    ///
    /// With `current_season` only teams whose season has not ended are returned.
    #[instrument(skip(self))]
    pub async fn teams_in_division(
        &self,
        division_name: &str,
        league_id: u64,
        current_season: bool,
    ) -> Result<Value, Error> {
        self.send(teams_in_division_request(division_name, league_id, current_season)).await
    }

    /// Full schedule of a team: past, today and future games.
    #[instrument(skip(self))]
    pub async fn team_schedule(&self, team_id: u64) -> Result<Value, Error> {
        self.send(team_schedule_request(team_id)).await
    }

    /// Active players of a team. Responds with a `players` array.
    #[instrument(skip(self))]
    pub async fn team_players_list(&self, team_id: u64) -> Result<Value, Error> {
        self.send(team_players_list_request(team_id)).await
    }

    /// Upcoming games of a team.
    #[instrument(skip(self))]
    pub async fn team_games(
        &self,
        team_id: u64,
        include_future: bool,
        include_today: bool,
    ) -> Result<Value, Error> {
        self.send(team_games_request(team_id, include_future, include_today)).await
    }

    /// Games of a team filtered by status, e.g. `"Final,In Progress"`.
    #[instrument(skip(self))]
    pub async fn team_games_for_status(&self, team_id: u64, status: &str) -> Result<Value, Error> {
        self.send(team_games_for_status_request(team_id, status)).await
    }

    /// Upcoming practices of a team. Responds with a `practices` array.
    #[instrument(skip(self))]
    pub async fn team_practices(
        &self,
        team_id: u64,
        include_future: bool,
        include_today: bool,
    ) -> Result<Value, Error> {
        self.send(team_practices_request(team_id, include_future, include_today)).await
    }

    /// List suspensions of a team, optionally only the active ones.
    #[instrument(skip(self))]
    pub async fn team_suspensions(&self, team_id: u64, only_active: bool) -> Result<Value, Error> {
        self.send(team_suspensions_request(team_id, only_active)).await
    }
}
