//! shiftstats - ShiftStats Hockey Statistics Client
//!
//! This library provides typed access to the ShiftStats web service with a
//! session-centric API. Every operation flows through a [`Session`], which
//! logs in with an API key and attaches the resulting ticket to each request.
//!
//! Responses are returned as decoded JSON ([`serde_json::Value`]); the
//! library does not model the service's resources.
//!
//! # Example
//!
//! ```no_run
//! use shiftstats::{GameSide, SeasonType, Session};
//!
//! # async fn example() -> Result<(), shiftstats::Error> {
//! let session = Session::new()?;
//! session.login().await?;
//!
//! let standings = session
//!     .division_standings(4702, SeasonType::RegularSeason)
//!     .await?;
//! println!("{}", standings["teams"]);
//!
//! let goals = session.game_goals(166658, Some(GameSide::Home)).await?;
//! println!("{}", goals["home_goals"]);
//! # Ok(())
//! # }
//! ```

pub mod auth;
mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{ApiKey, Session, SessionBuilder, Ticket};
pub use error::Error;
pub use transport::{ApiRequest, Query, QueryValue};
pub use types::{ApiUrl, GameSide, LeadersQuery, SeasonType};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
