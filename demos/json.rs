//! Reading and writing RFC 3339 values inside JSON documents.
//!
//! Run with: cargo run --example json

use rfc3339_time::{DateTime, FullDate};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Ticket {
    id: u32,
    created: DateTime,
    closed: DateTime,
    due: FullDate,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"{"id":7,"created":"2023-04-04T12:30:00.250-04:00","closed":null,"due":"2023-04-30"}"#;

    let ticket: Ticket = serde_json::from_str(input)?;
    println!("created: {}", ticket.created);
    println!("offset:  {} seconds", ticket.created.offset_seconds());
    println!("closed:  zero value? {}", ticket.closed.is_zero());
    println!("due:     {}", ticket.due);

    // Zero values go back out as null; the fraction loses its trailing zeros.
    let output = serde_json::to_string(&ticket)?;
    println!("\n{}", output);

    let bad = r#"{"id":8,"created":"2023-04-04 12:30:00","closed":null,"due":"2023-04-30"}"#;
    if let Err(e) = serde_json::from_str::<Ticket>(bad) {
        println!("\nrejected: {}", e);
    }

    Ok(())
}
