//! Request description and query-string serialization.

use std::fmt;

/// A single query parameter value.
///
/// Scalars are stringified, booleans are sent as `true`/`false` and lists
/// are joined with commas into one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

macro_rules! int_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_query_value!(i32, i64, u16, u32);

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => QueryValue::Int(n),
            Err(_) => QueryValue::Str(value.to_string()),
        }
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::List(values)
    }
}

impl From<&[&str]> for QueryValue {
    fn from(values: &[&str]) -> Self {
        QueryValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(values: [&str; N]) -> Self {
        QueryValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// An ordered query parameter mapping with unique keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, QueryValue)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter. Setting an existing key replaces its value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Check whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Serialize into `(key, value)` string pairs, in insertion order.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_string()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (k, v) in iter {
            query.set(k, v);
        }
        query
    }
}

/// A request against the API: a resource path and its query parameters.
///
/// Headers are not part of the request; the session attaches them when the
/// request is sent.
///
/// # Example
///
/// ```
/// use shiftstats::ApiRequest;
///
/// let request = ApiRequest::new("division/4702/leaders")
///     .param("limit", 5u32)
///     .param("metrics", ["points", "goals"]);
/// assert_eq!(request.path(), "division/4702/leaders");
/// assert_eq!(request.query().pairs()[1], ("metrics", "points,goals".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    query: Query,
}

impl ApiRequest {
    /// Create a request for a resource path (relative to the API base URL).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
        }
    }

    /// Add a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.set(key, value);
        self
    }

    /// Add a query parameter only if `value` is present.
    pub fn param_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Returns the resource path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters.
    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_stringified() {
        let query: Query = [("limit", QueryValue::from(5u32)), ("name", "bears".into())]
            .into_iter()
            .collect();
        assert_eq!(
            query.pairs(),
            vec![("limit", "5".to_string()), ("name", "bears".to_string())]
        );
    }

    #[test]
    fn booleans_use_literal_form() {
        let request = ApiRequest::new("team/1/games")
            .param("future", true)
            .param("today", false);
        assert_eq!(
            request.query().pairs(),
            vec![("future", "true".to_string()), ("today", "false".to_string())]
        );
    }

    #[test]
    fn lists_are_comma_joined_into_one_parameter() {
        let request = ApiRequest::new("division/1/leaders").param("metrics", ["points", "goals"]);
        assert_eq!(request.query().len(), 1);
        assert_eq!(
            request.query().pairs(),
            vec![("metrics", "points,goals".to_string())]
        );
    }

    #[test]
    fn resetting_a_key_keeps_it_unique_and_in_place() {
        let request = ApiRequest::new("teams")
            .param("name", "bears")
            .param("sport", "hockey")
            .param("name", "wolves");
        assert_eq!(
            request.query().pairs(),
            vec![("name", "wolves".to_string()), ("sport", "hockey".to_string())]
        );
    }

    #[test]
    fn optional_params_are_skipped_when_absent() {
        let request = ApiRequest::new("league/3/suspensions")
            .param_opt("status", None::<&str>)
            .param_opt("limit", Some(2u32));
        assert!(request.query().get("status").is_none());
        assert_eq!(request.query().get("limit"), Some(&QueryValue::Int(2)));
    }

    #[test]
    fn huge_ids_fall_back_to_strings() {
        assert_eq!(
            QueryValue::from(u64::MAX).to_string(),
            "18446744073709551615"
        );
    }
}
