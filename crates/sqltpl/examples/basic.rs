//! Basic template building: bind a few typed parameters and print the query.
//!
//! Run with: cargo run --example basic

use sqltpl::{QueryError, SqlValue, format_value, template};

fn main() -> Result<(), QueryError> {
    let query = template("SELECT * FROM users WHERE name = {name} AND age >= {age} AND active = {active}")?
        .bind("name", "O'Reilly")?
        .bind("age", 21_i64)?
        .bind("active", true)?
        .build()?;
    println!("{query}");

    // The formatter is usable on its own, without a template.
    println!("uuid     -> {}", format_value(uuid::Uuid::new_v4()));
    println!("bytes    -> {}", format_value(vec![0x12_u8, 0x34, 0x56]));
    println!("interval -> {}", format_value(chrono::Duration::seconds(3723)));
    println!("null     -> {}", format_value(SqlValue::Null));

    Ok(())
}
