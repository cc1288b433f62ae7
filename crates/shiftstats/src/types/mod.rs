//! Validated and typed values used across the API.

mod api_url;
mod params;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use params::{GameSide, LeadersQuery, SeasonType};
