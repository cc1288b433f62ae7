//! Session management for authenticated API operations.

use std::sync::Arc;

use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION, CONNECTION, CONTENT_TYPE, HeaderMap,
    HeaderName, HeaderValue,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::error::{AuthError, Error};
use crate::transport::{ApiRequest, Query, Transport};
use crate::types::ApiUrl;

use super::api_key::ApiKey;
use super::ticket::Ticket;

/// Login endpoint path.
pub const LOGIN: &str = "login";

/// The protocol headers sent with every request, authenticated or not.
///
/// These mirror what the official mobile client sends.
pub fn basic_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("com.digitalshift.hockeyshift"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip,deflate"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

/// A session against the ShiftStats API.
///
/// A session starts unauthenticated. [`Session::login()`] exchanges the API
/// key for a ticket, after which every resource operation carries the ticket
/// in its `Authorization` header. Calling login again replaces the ticket.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`) and are safe to
/// share across tasks. Any number of requests may be in flight at once; only
/// login writes to the shared auth state.
///
/// # Example
///
/// ```no_run
/// use shiftstats::{SeasonType, Session};
///
/// # async fn example() -> Result<(), shiftstats::Error> {
/// let session = Session::new()?;
/// session.login().await?;
///
/// let standings = session
///     .division_standings(4702, SeasonType::RegularSeason)
///     .await?;
/// println!("{}", standings["teams"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api_key: ApiKey,
    transport: Transport,
    auth: RwLock<AuthState>,
}

/// Ticket plus the headers derived from it.
///
/// `headers` is a memo of `basic_headers() + Authorization(ticket)` and is
/// cleared whenever `ticket` is assigned.
struct AuthState {
    ticket: Option<Ticket>,
    headers: Option<HeaderMap>,
}

impl Session {
    /// Create a session with the built-in API key against the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Create a session with the given API key against the public API.
    pub fn with_api_key(api_key: impl Into<ApiKey>) -> Result<Self, Error> {
        Self::builder().api_key(api_key).build()
    }

    /// Restore a session from a ticket obtained earlier, skipping login.
    ///
    /// The caller is responsible for ensuring the ticket is still valid.
    pub fn from_ticket(api_key: impl Into<ApiKey>, ticket: Ticket) -> Result<Self, Error> {
        Self::builder().api_key(api_key).ticket(ticket).build()
    }

    /// Create a builder for configuring a session.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shiftstats::Session;
    ///
    /// # fn main() -> Result<(), shiftstats::Error> {
    /// let session = Session::builder()
    ///     .api_key("my-key")
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    fn from_parts(api_key: ApiKey, transport: Transport, ticket: Option<Ticket>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                api_key,
                transport,
                auth: RwLock::new(AuthState {
                    ticket,
                    headers: None,
                }),
            }),
        }
    }

    /// Exchange the API key for a ticket.
    ///
    /// On success the ticket is stored on the session (replacing any previous
    /// one) and the full decoded login response is returned. On failure the
    /// session is left untouched and the transport error is returned as is;
    /// an unknown key surfaces as [`Error::Status`].
    ///
    /// # Errors
    ///
    /// Any transport error, or [`AuthError::MissingTicket`] if the response
    /// has no `ticket.hash`.
    #[instrument(skip(self), fields(api = %self.inner.transport.api()))]
    pub async fn login(&self) -> Result<Value, Error> {
        info!("Logging in");

        let query: Query = [("key", self.inner.api_key.as_str())].into_iter().collect();

        let response = self
            .inner
            .transport
            .get(LOGIN, &query, basic_headers())
            .await?;

        let hash = response
            .pointer("/ticket/hash")
            .and_then(Value::as_str)
            .ok_or(AuthError::MissingTicket)?;
        let ticket = Ticket::new(hash);

        // Assign the ticket and drop the derived headers in one write
        {
            let mut auth = self.inner.auth.write().await;
            auth.ticket = Some(ticket);
            auth.headers = None;
        }

        debug!("Ticket stored");
        Ok(response)
    }

    /// Returns the protocol headers used for unauthenticated requests.
    pub fn basic_headers(&self) -> HeaderMap {
        basic_headers()
    }

    /// Returns the basic headers plus the ticket-bearing `Authorization` header.
    ///
    /// The result is memoized until the next successful login. Before login
    /// there is no ticket and only the basic headers are returned, so the
    /// server decides how to reject the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the ticket cannot be carried in a header.
    pub async fn auth_headers(&self) -> Result<HeaderMap, Error> {
        {
            let auth = self.inner.auth.read().await;
            if let Some(headers) = &auth.headers {
                return Ok(headers.clone());
            }
        }

        // The memo must derive from the ticket held under this same lock
        let mut auth = self.inner.auth.write().await;
        if let Some(headers) = &auth.headers {
            return Ok(headers.clone());
        }

        let Some(ticket) = auth.ticket.as_ref() else {
            warn!("No ticket; sending request without authorization");
            return Ok(basic_headers());
        };

        let authorization = ticket.authorization()?;
        let mut headers = basic_headers();
        headers.insert(AUTHORIZATION, authorization);

        auth.headers = Some(headers.clone());
        Ok(headers)
    }

    /// Send a request with authenticated headers and return the decoded body.
    ///
    /// Resource operations are built on this; it can also reach endpoints
    /// that have no dedicated method.
    #[instrument(skip(self, request), fields(path = %request.path()))]
    pub async fn send(&self, request: ApiRequest) -> Result<Value, Error> {
        let headers = self.auth_headers().await?;
        self.inner
            .transport
            .get(request.path(), request.query(), headers)
            .await
    }

    /// Returns the current ticket, if logged in.
    pub async fn ticket(&self) -> Option<Ticket> {
        self.inner.auth.read().await.ticket.clone()
    }

    /// Check whether a ticket is held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.auth.read().await.ticket.is_some()
    }

    /// Returns the API key this session logs in with.
    pub fn api_key(&self) -> &ApiKey {
        &self.inner.api_key
    }

    /// Returns the API base URL for this session.
    pub fn api_url(&self) -> &ApiUrl {
        self.inner.transport.api()
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api", self.inner.transport.api())
            .field("api_key", &self.inner.api_key)
            .field("ticket", &"[REDACTED]")
            .finish()
    }
}

/// Builder for configuring a [`Session`].
///
/// Defaults: the built-in API key, the public API host and a default HTTP
/// client.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    api_key: Option<ApiKey>,
    api_url: Option<ApiUrl>,
    client_builder: Option<reqwest::ClientBuilder>,
    ticket: Option<Ticket>,
}

impl SessionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key used by login.
    pub fn api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom API base URL.
    ///
    /// This is useful for testing with mock servers. The URL is parsed and
    /// validated here, catching errors early.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or is not HTTP(S).
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.api_url = Some(ApiUrl::new(url)?);
        Ok(self)
    }

    /// Set an already validated API base URL.
    pub fn api_url(mut self, api_url: ApiUrl) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Provide a custom HTTP client builder (timeouts, proxies, ...).
    pub fn client_builder(mut self, builder: reqwest::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Start the session already holding a ticket.
    pub fn ticket(mut self, ticket: Ticket) -> Self {
        self.ticket = Some(ticket);
        self
    }

    /// Build the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<Session, Error> {
        let api_url = self.api_url.unwrap_or_default();
        let transport = match self.client_builder {
            Some(builder) => Transport::with_client_builder(api_url, builder)?,
            None => Transport::new(api_url)?,
        };

        Ok(Session::from_parts(
            self.api_key.unwrap_or_default(),
            transport,
            self.ticket,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_headers_advertise_json_and_compression() {
        let headers = basic_headers();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[ACCEPT_ENCODING], "gzip,deflate");
        assert_eq!(headers[CONNECTION], "keep-alive");
        assert_eq!(headers["x-requested-with"], "com.digitalshift.hockeyshift");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn new_session_is_unauthenticated() {
        let session = Session::new().unwrap();
        assert!(!session.is_authenticated().await);
        assert!(session.ticket().await.is_none());
        assert!(session.api_key().is_default());
        assert_eq!(session.api_url(), &ApiUrl::default());
    }

    #[tokio::test]
    async fn auth_headers_without_ticket_are_basic() {
        let session = Session::new().unwrap();
        let headers = session.auth_headers().await.unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers, basic_headers());
    }

    #[tokio::test]
    async fn restored_ticket_is_carried_in_auth_headers() {
        let session = Session::from_ticket("key", Ticket::new("restored-hash")).unwrap();
        assert!(session.is_authenticated().await);

        let headers = session.auth_headers().await.unwrap();
        assert_eq!(
            headers[AUTHORIZATION].to_str().unwrap(),
            "StatsAuth ticket=\"restored-hash\""
        );
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[tokio::test]
    async fn auth_headers_are_memoized() {
        let session = Session::from_ticket("key", Ticket::new("h")).unwrap();
        let first = session.auth_headers().await.unwrap();
        assert!(session.inner.auth.read().await.headers.is_some());
        let second = session.auth_headers().await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        assert!(Session::builder().base_url("not a url").is_err());
    }

    #[test]
    fn debug_hides_credentials() {
        let session = Session::from_ticket("super-secret", Ticket::new("ticket-hash")).unwrap();
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("ticket-hash"));
        assert!(debug.contains("api.shiftstats.com"));
    }
}
