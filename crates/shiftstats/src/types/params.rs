//! Typed parameters accepted by the resource operations.

use std::fmt;

/// The portion of a season a statistic or standing refers to.
///
/// The service identifies season types by display name; unknown names can be
/// passed through with [`SeasonType::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeasonType {
    /// "Regular Season" (the default everywhere a type is accepted).
    #[default]
    RegularSeason,
    /// "Playoffs"
    Playoffs,
    /// "Exhibition"
    Exhibition,
    /// Any other name the service understands.
    Other(String),
}

impl SeasonType {
    /// Returns the name the service expects in the `type` parameter.
    pub fn as_str(&self) -> &str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::Exhibition => "Exhibition",
            SeasonType::Other(name) => name,
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SeasonType {
    fn from(name: &str) -> Self {
        match name {
            "Regular Season" => SeasonType::RegularSeason,
            "Playoffs" => SeasonType::Playoffs,
            "Exhibition" => SeasonType::Exhibition,
            other => SeasonType::Other(other.to_string()),
        }
    }
}

/// One side of a game.
///
/// Game sub-resources accept an optional side; when given, only that team's
/// entries are returned and the response key carries the side as a prefix
/// (`home_goals`, `away_roster`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameSide {
    Home,
    Away,
}

impl GameSide {
    /// Returns the path prefix for this side.
    pub fn prefix(&self) -> &'static str {
        match self {
            GameSide::Home => "home_",
            GameSide::Away => "away_",
        }
    }
}

impl fmt::Display for GameSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameSide::Home => f.write_str("home"),
            GameSide::Away => f.write_str("away"),
        }
    }
}

/// Options for the division leaders board.
///
/// # Example
///
/// ```
/// use shiftstats::{LeadersQuery, SeasonType};
///
/// let query = LeadersQuery::default()
///     .season_type(SeasonType::Playoffs)
///     .limit(5)
///     .metrics(["points", "goals"]);
/// assert_eq!(query.metrics, vec!["points", "goals"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadersQuery {
    pub season_type: SeasonType,
    /// Maximum number of players per metric.
    pub limit: u32,
    /// Metric names, sent as one comma-joined parameter.
    pub metrics: Vec<String>,
}

impl LeadersQuery {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const DEFAULT_METRICS: [&'static str; 3] = ["points", "goals", "assists"];

    /// Set the season type.
    pub fn season_type(mut self, season_type: SeasonType) -> Self {
        self.season_type = season_type;
        self
    }

    /// Set the number of players returned per metric.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the metrics list.
    pub fn metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for LeadersQuery {
    fn default() -> Self {
        Self {
            season_type: SeasonType::default(),
            limit: Self::DEFAULT_LIMIT,
            metrics: Self::DEFAULT_METRICS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_type_defaults_to_regular_season() {
        assert_eq!(SeasonType::default().as_str(), "Regular Season");
    }

    #[test]
    fn season_type_from_name() {
        assert_eq!(SeasonType::from("Playoffs"), SeasonType::Playoffs);
        assert_eq!(
            SeasonType::from("Round Robin"),
            SeasonType::Other("Round Robin".to_string())
        );
        assert_eq!(SeasonType::from("Round Robin").as_str(), "Round Robin");
    }

    #[test]
    fn game_side_prefix() {
        assert_eq!(GameSide::Home.prefix(), "home_");
        assert_eq!(GameSide::Away.prefix(), "away_");
        assert_eq!(GameSide::Away.to_string(), "away");
    }

    #[test]
    fn leaders_query_defaults() {
        let query = LeadersQuery::default();
        assert_eq!(query.season_type, SeasonType::RegularSeason);
        assert_eq!(query.limit, 10);
        assert_eq!(query.metrics, vec!["points", "goals", "assists"]);
    }
}
