//! # sqltpl
//!
//! Template-driven SQL string building for Rust.
//!
//! ## Features
//!
//! - **Named placeholders**: templates use `{Name}` tokens, substituted in
//!   parameter insertion order
//! - **Typed literals**: values go through [`SqlValue`], a tagged union with
//!   one SQL rendering rule per kind (use [`format_value`] standalone)
//! - **Repeatable builds**: [`QueryTemplate::build`] never mutates the store,
//!   so a template can be rendered any number of times
//! - **Structured errors**: build failures wrap their specific cause
//!   ([`QueryError::BuildFailed`])
//!
//! The produced string is plain SQL text. This crate does no SQL parsing and
//! no execution; handing the string to a database driver is the caller's job,
//! and inline literals are no substitute for parameterized queries when input
//! is untrusted.
//!
//! ## Example
//!
//! ```ignore
//! use sqltpl::template;
//!
//! let query = template("SELECT * FROM Users WHERE Name = {Name} AND Age = {Age}")?
//!     .bind("Name", "John")?
//!     .bind("Age", 30_i64)?
//!     .build()?;
//!
//! assert_eq!(query, "SELECT * FROM Users WHERE Name = 'John' AND Age = 30");
//! ```

pub mod error;
pub mod template;
pub mod value;

pub use error::{QueryError, QueryResult};
pub use template::{Parameter, QueryTemplate, template};
pub use value::{SqlValue, format_value};
