//! API key type.

use std::fmt;

/// The shared, non-secret key the public mobile client logs in with.
pub const DEFAULT_API_KEY: &str = "YXBpLnNoaWZ0c3RhdHMuY29tLDE5YjhhZGIwNDVjZjAxMzJhM2E5N2VmZDQ1YTRj";

/// The credential exchanged for a ticket at login.
///
/// The key is fixed for the lifetime of a [`Session`](crate::Session).
/// [`ApiKey::default`] returns the built-in shared key.
///
/// # Security
///
/// The key is never exposed in Debug output.
///
/// # Example
///
/// ```
/// use shiftstats::ApiKey;
///
/// let key = ApiKey::new("my-key");
/// assert!(!format!("{:?}", key).contains("my-key"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key value.
    ///
    /// # Security
    ///
    /// Use this only when constructing the login request.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the built-in shared key.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_API_KEY
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_hides_value_in_debug() {
        let key = ApiKey::new("secret-key-123");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("secret-key-123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_is_shared_key() {
        let key = ApiKey::default();
        assert!(key.is_default());
        assert_eq!(key.as_str(), DEFAULT_API_KEY);
        assert!(!ApiKey::new("a").is_default());
    }
}
