//! API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The public ShiftStats API host.
pub const DEFAULT_API_URL: &str = "http://api.shiftstats.com";

/// A validated API base URL.
///
/// This type ensures the URL is absolute, uses HTTP or HTTPS and has a host.
/// Resource paths are appended to it with [`ApiUrl::endpoint_url`].
///
/// # Example
///
/// ```
/// use shiftstats::ApiUrl;
///
/// let api = ApiUrl::new("http://api.shiftstats.com").unwrap();
/// assert_eq!(api.endpoint_url("division/4702/standings"),
///            "http://api.shiftstats.com/division/4702/standings");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for a resource path.
    pub fn endpoint_url(&self, path: &str) -> String {
        // Url always renders a root path as "/", and callers may pass "/x" or "x"
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTP or HTTPS".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_host() {
        let api = ApiUrl::default();
        assert_eq!(api.as_str(), "http://api.shiftstats.com/");
        assert_eq!(api.endpoint_url("login"), "http://api.shiftstats.com/login");
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(api.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn endpoint_url_joins_single_slash() {
        let api = ApiUrl::new("https://api.shiftstats.com/").unwrap();
        assert_eq!(
            api.endpoint_url("/game/166658/home_goals"),
            "https://api.shiftstats.com/game/166658/home_goals"
        );
    }

    #[test]
    fn keeps_path_prefix() {
        let api = ApiUrl::new("http://localhost:9000/v1").unwrap();
        assert_eq!(api.endpoint_url("leagues"), "http://localhost:9000/v1/leagues");
    }

    #[test]
    fn invalid_scheme() {
        assert!(ApiUrl::new("ftp://api.shiftstats.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/leagues").is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(ApiUrl::new("http://api.shiftstats.com/?key=abc").is_err());
    }

    #[test]
    fn parses_via_from_str() {
        let api: ApiUrl = "http://localhost:1234".parse().unwrap();
        assert_eq!(api.to_string(), "http://localhost:1234/");
    }
}
