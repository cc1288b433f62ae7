//! Raw resource request.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use serde_json::Value;
use shiftstats::{ApiRequest, Session};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resource path relative to the API root, e.g. `division/4702/standings`
    pub path: String,

    /// Query parameters as key=value pairs
    #[arg(value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

pub async fn run(args: GetArgs, session: &Session) -> Result<Value> {
    let request = args
        .params
        .into_iter()
        .fold(ApiRequest::new(&args.path), |req, (key, value)| {
            req.param(key, value)
        });

    session
        .send(request)
        .await
        .with_context(|| format!("Request for '{}' failed", args.path))
}

fn parse_param(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{}'", s))?;
    if key.is_empty() {
        return Err(anyhow!("empty parameter name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value() {
        assert_eq!(
            parse_param("type=Regular Season").unwrap(),
            ("type".to_string(), "Regular Season".to_string())
        );
    }

    #[test]
    fn keeps_equals_in_value() {
        assert_eq!(parse_param("a=b=c").unwrap().1, "b=c");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }
}
