//! Resource operations.
//!
//! Every operation is a thin mapping from a typed method on
//! [`Session`](crate::Session) to a resource path and query parameters.
//! The request for each one is built by a pure function so its shape can be
//! checked without a server; the method then sends it with the session's
//! authenticated headers.

mod divisions;
mod games;
mod leagues;
mod seasons;
mod teams;

use crate::transport::ApiRequest;

/// `{base}/suspensions`, restricted to active suspensions when asked.
fn suspensions_request(base: &str, only_active: bool) -> ApiRequest {
    ApiRequest::new(format!("{}/suspensions", base))
        .param_opt("status", only_active.then_some("active"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspensions_filter_only_when_active() {
        let active = suspensions_request("league/3", true);
        assert_eq!(active.path(), "league/3/suspensions");
        assert_eq!(active.query().pairs(), vec![("status", "active".to_string())]);

        let all = suspensions_request("league/3", false);
        assert!(all.query().is_empty());
    }
}
