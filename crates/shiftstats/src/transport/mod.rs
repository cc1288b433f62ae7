//! Request pipeline.
//!
//! This module provides the HTTP transport and the request description the
//! resource operations build.

mod client;
mod request;

pub use client::Transport;
pub use request::{ApiRequest, Query, QueryValue};
