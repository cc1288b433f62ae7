//! HTTP transport: one GET, one classified result.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use tracing::{debug, instrument, trace};

use crate::error::{ContentTypeError, Error, InvalidInputError, StatusError};
use crate::types::ApiUrl;

use super::request::Query;

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for API requests.
///
/// The transport knows nothing about authentication; headers are supplied by
/// the caller on every request.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    api: ApiUrl,
}

impl Transport {
    /// Create a transport for the given API base URL with default client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(api: ApiUrl) -> Result<Self, Error> {
        Self::with_client_builder(api, reqwest::Client::builder())
    }

    /// Create a transport from a custom client builder.
    ///
    /// Response decompression is always enabled on top of the given settings.
    pub fn with_client_builder(
        api: ApiUrl,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, Error> {
        let client = builder
            .user_agent(concat!("shiftstats/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| InvalidInputError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client, api })
    }

    /// Returns the API base URL this transport sends requests to.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Issue a GET for `path` and decode the JSON body.
    ///
    /// Status and content-type are checked before the body is touched; a
    /// rejected response is dropped unread.
    #[instrument(skip(self, query, headers), fields(api = %self.api))]
    pub async fn get(
        &self,
        path: &str,
        query: &Query,
        headers: HeaderMap,
    ) -> Result<serde_json::Value, Error> {
        let url = self.api.endpoint_url(path);
        debug!(path, "GET");
        trace!(?query, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(&query.pairs())
            .headers(headers)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn handle_response(response: reqwest::Response) -> Result<serde_json::Value, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status != StatusCode::OK {
            return Err(StatusError::new(status.as_u16()).into());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with(JSON_CONTENT_TYPE));
        if !is_json {
            return Err(ContentTypeError::new(content_type).into());
        }

        // The client decompresses gzip/deflate while streaming the body
        let body = response.bytes().await?;
        trace!(bytes = body.len(), "response body");

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_creation() {
        let api = ApiUrl::default();
        let transport = Transport::new(api.clone()).unwrap();
        assert_eq!(transport.api(), &api);
    }

    #[test]
    fn transport_with_custom_builder() {
        let api = ApiUrl::new("http://localhost:8080").unwrap();
        let builder = reqwest::Client::builder().timeout(std::time::Duration::from_secs(5));
        assert!(Transport::with_client_builder(api, builder).is_ok());
    }
}
