//! Login command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use shiftstats::Session;

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Print the ticket hash (grants API access; handle with care)
    #[arg(long)]
    pub show_ticket: bool,
}

pub fn run(args: LoginArgs, session: &Session, response: &Value) -> Result<()> {
    output::success("Logged in successfully");
    println!();
    output::field("API", session.api_url().as_str());
    output::field(
        "Key",
        if session.api_key().is_default() {
            "built-in shared key"
        } else {
            "custom"
        },
    );

    if let Some(expires) = response.pointer("/ticket/expires").and_then(Value::as_str) {
        output::field("Expires", expires);
    }

    if args.show_ticket
        && let Some(hash) = response.pointer("/ticket/hash").and_then(Value::as_str)
    {
        output::field("Ticket", hash);
    }

    Ok(())
}
