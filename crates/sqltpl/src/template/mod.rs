//! Template-driven query building.
//!
//! A [`QueryTemplate`] pairs a template string containing `{name}` placeholder
//! tokens with an ordered list of named parameters, and renders the final
//! query by substituting every placeholder with the SQL literal of its value.
//!
//! The template itself is never mutated: [`QueryTemplate::build`] substitutes
//! into a freshly allocated buffer, so a store can be built any number of
//! times with identical results.
//!
//! # Example
//!
//! ```ignore
//! use sqltpl::template;
//!
//! let query = template("SELECT * FROM users WHERE name = {name} AND age = {age}")?
//!     .bind("name", "John")?
//!     .bind("age", 30_i64)?
//!     .build()?;
//!
//! assert_eq!(query, "SELECT * FROM users WHERE name = 'John' AND age = 30");
//! ```

mod store;


pub use store::{Parameter, QueryTemplate};

use crate::error::QueryResult;

/// Start building a query from a template string.
pub fn template(template: impl Into<String>) -> QueryResult<QueryTemplate> {
    QueryTemplate::new(template)
}
