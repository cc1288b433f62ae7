//! Authentication types and session management.
//!
//! All API operations flow through a [`Session`], which owns the API key and
//! the ticket obtained by logging in with it.

mod api_key;
mod session;
mod ticket;

pub use api_key::{ApiKey, DEFAULT_API_KEY};
pub use session::{LOGIN, Session, SessionBuilder, basic_headers};
pub use ticket::Ticket;
