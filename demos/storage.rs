//! Moving RFC 3339 values through a text column.
//!
//! Run with: cargo run --example storage

use rfc3339_time::{date_time, DateTime, FullDate, Scan, SqlValue, ToSqlValue};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let stored = date_time!("2023-09-27T13:15:00.000-04:00").to_sql_value()?;
    println!("stored:   {}", stored);

    let mut loaded = DateTime::default();
    loaded.scan(stored)?;
    println!("loaded:   {}", loaded);

    // Empty strings reset to the zero value, NULL leaves the value alone.
    loaded.scan(SqlValue::from(""))?;
    println!("reset:    zero value? {}", loaded.is_zero());

    let mut due = FullDate::default();
    match due.scan(SqlValue::Integer(20230930)) {
        Ok(()) => println!("unexpected: {}", due),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
