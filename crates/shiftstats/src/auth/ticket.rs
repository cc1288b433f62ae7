//! Ticket type.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::{Error, InvalidInputError};

/// The session ticket issued by login.
///
/// Every request other than login carries the ticket in its
/// `Authorization: StatsAuth ticket="<hash>"` header.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct Ticket(String);

impl Ticket {
    /// Create a ticket from a hash previously returned by login.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the ticket hash.
    ///
    /// # Security
    ///
    /// Handle the returned value securely. It grants access to the API.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the `Authorization` header value for this ticket.
    ///
    /// The value is marked sensitive so it is never printed by the HTTP stack.
    pub(crate) fn authorization(&self) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&format!("StatsAuth ticket=\"{}\"", self.0))
            .map_err(|e| InvalidInputError::Header {
                name: "authorization".to_string(),
                reason: e.to_string(),
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ticket").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_hides_value_in_debug() {
        let ticket = Ticket::new("2a6f1e0c9b");
        let debug = format!("{:?}", ticket);
        assert!(!debug.contains("2a6f1e0c9b"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn authorization_uses_stats_auth_scheme() {
        let value = Ticket::new("abc123").authorization().unwrap();
        assert_eq!(value.to_str().unwrap(), "StatsAuth ticket=\"abc123\"");
        assert!(value.is_sensitive());
    }

    #[test]
    fn authorization_rejects_control_characters() {
        assert!(Ticket::new("bad\nhash").authorization().is_err());
    }
}
