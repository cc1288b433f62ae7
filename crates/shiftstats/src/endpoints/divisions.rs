//! Division operations: games, standings, teams, leaders and suspensions.

use serde_json::Value;
use tracing::instrument;

use crate::auth::Session;
use crate::error::Error;
use crate::transport::ApiRequest;
use crate::types::{LeadersQuery, SeasonType};

use super::suspensions_request;

fn division_games_list_request(division_id: u64) -> ApiRequest {
    ApiRequest::new(format!("division/{}/games", division_id))
}

fn division_standings_request(division_id: u64, season_type: &SeasonType) -> ApiRequest {
    ApiRequest::new(format!("division/{}/standings", division_id))
        .param("type", season_type.as_str())
}

fn division_teams_request(division_id: u64) -> ApiRequest {
    ApiRequest::new(format!("division/{}/teams", division_id))
}

fn division_leaders_request(division_id: u64, leaders: &LeadersQuery) -> ApiRequest {
    ApiRequest::new(format!("division/{}/leaders", division_id))
        .param("limit", leaders.limit)
        .param("metrics", leaders.metrics.clone())
        .param("type", leaders.season_type.as_str())
}

fn division_suspensions_request(division_id: u64, only_active: bool) -> ApiRequest {
    suspensions_request(&format!("division/{}", division_id), only_active)
}

impl Session {
    /// List the games of a division. Responds with a `games` array.
    #[instrument(skip(self))]
    pub async fn division_games_list(&self, division_id: u64) -> Result<Value, Error> {
        self.send(division_games_list_request(division_id)).await
    }

    /// Ranked standings of a division. Responds with a `teams` array.
    ///
    /// Pass [`SeasonType::default()`] for the regular season.
    #[instrument(skip(self))]
    pub async fn division_standings(
        &self,
        division_id: u64,
        season_type: SeasonType,
    ) -> Result<Value, Error> {
        self.send(division_standings_request(division_id, &season_type)).await
    }

    /// List the teams of a division. Responds with a `teams` array.
    #[instrument(skip(self))]
    pub async fn division_teams(&self, division_id: u64) -> Result<Value, Error> {
        self.send(division_teams_request(division_id)).await
    }

    /// Statistical leaders of a division. Responds with a `leaders` object.
    #[instrument(skip(self))]
    pub async fn division_leaders(
        &self,
        division_id: u64,
        leaders: LeadersQuery,
    ) -> Result<Value, Error> {
        self.send(division_leaders_request(division_id, &leaders)).await
    }

    /// List suspensions in a division, optionally only the active ones.
    #[instrument(skip(self))]
    pub async fn division_suspensions(
        &self,
        division_id: u64,
        only_active: bool,
    ) -> Result<Value, Error> {
        self.send(division_suspensions_request(division_id, only_active)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standings_default_to_regular_season() {
        let request = division_standings_request(4702, &SeasonType::default());
        assert_eq!(request.path(), "division/4702/standings");
        assert_eq!(
            request.query().pairs(),
            vec![("type", "Regular Season".to_string())]
        );
    }

    #[test]
    fn standings_for_playoffs() {
        let request = division_standings_request(4702, &SeasonType::Playoffs);
        assert_eq!(
            request.query().pairs(),
            vec![("type", "Playoffs".to_string())]
        );
    }

    #[test]
    fn leaders_join_metrics() {
        let leaders = LeadersQuery::default()
            .limit(5)
            .metrics(["points", "goals", "assists"]);
        let request = division_leaders_request(3057, &leaders);
        assert_eq!(request.path(), "division/3057/leaders");
        assert_eq!(
            request.query().pairs(),
            vec![
                ("limit", "5".to_string()),
                ("metrics", "points,goals,assists".to_string()),
                ("type", "Regular Season".to_string()),
            ]
        );
    }

    #[test]
    fn plain_division_paths() {
        assert_eq!(division_games_list_request(3057).path(), "division/3057/games");
        assert_eq!(division_teams_request(3057).path(), "division/3057/teams");
        assert!(division_teams_request(3057).query().is_empty());
    }

    #[test]
    fn division_suspensions_active_filter() {
        let request = division_suspensions_request(3057, true);
        assert_eq!(request.path(), "division/3057/suspensions");
        assert_eq!(request.query().len(), 1);
        assert!(division_suspensions_request(3057, false).query().is_empty());
    }
}
