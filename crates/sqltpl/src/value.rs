//! SQL literal values and their text rendering.
//!
//! [`SqlValue`] is a tagged union over the value kinds this crate can render
//! inline into a query string. Each variant has exactly one rendering rule,
//! applied by exhaustive match in [`SqlValue::to_literal`]. Rendering is a
//! total function: the null case renders as `NULL` rather than erroring.
//!
//! # Example
//! ```ignore
//! use sqltpl::{SqlValue, format_value};
//!
//! assert_eq!(format_value("O'Reilly"), "'O''Reilly'");
//! assert_eq!(format_value(true), "1");
//! assert_eq!(format_value(SqlValue::Null), "NULL");
//! ```

use std::fmt::Write;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use uuid::Uuid;

/// A dynamically-typed value renderable as a SQL literal.
///
/// Construct via the `From` conversions (`42_i64.into()`, `"text".into()`,
/// `Option::<i64>::None.into()`, ...) or name a variant directly. Values that
/// fall outside the supported kinds go through [`SqlValue::other`], which
/// renders the given text unquoted and unescaped.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Absent value, rendered as `NULL`
    Null,
    /// Boolean, rendered as `1` / `0`
    Bool(bool),
    /// Integer, rendered as bare decimal text
    Int(i64),
    /// Floating-point, rendered as shortest round-trip decimal text
    Float(f64),
    /// Text, rendered single-quoted with embedded quotes doubled
    Text(String),
    /// Byte sequence, rendered as `0x` + uppercase hex
    Bytes(Vec<u8>),
    /// UUID, rendered quoted in canonical hyphenated form
    Uuid(Uuid),
    /// Date-time without offset, rendered as `'YYYY-MM-DD HH:MM:SS'`
    DateTime(NaiveDateTime),
    /// Date-time with offset, rendered as `'YYYY-MM-DD HH:MM:SS +HH:MM'`
    DateTimeTz(DateTime<FixedOffset>),
    /// Duration, rendered as `'HH:MM:SS'` (whole seconds, sign-prefixed)
    Interval(Duration),
    /// Arbitrary-precision decimal, rendered as bare decimal text
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
    /// Fallback: pre-rendered text emitted as-is, unquoted and unescaped
    Other(String),
}

impl SqlValue {
    /// Wrap a value of an unsupported kind using its display form.
    ///
    /// The resulting literal is emitted verbatim, so the caller is
    /// responsible for any quoting the target syntax needs.
    pub fn other(value: impl ToString) -> Self {
        SqlValue::Other(value.to_string())
    }

    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Render the value as SQL literal text.
    pub fn to_literal(&self) -> String {
        // Worst-case growth is quote doubling in text; start from the
        // common-case size and let the writer extend when needed.
        let cap = match self {
            SqlValue::Text(s) => s.len() + 2,
            SqlValue::Bytes(b) => b.len() * 2 + 2,
            SqlValue::Other(s) => s.len(),
            _ => 24,
        };
        let mut out = String::with_capacity(cap);
        self.write_literal(&mut out);
        out
    }

    fn write_literal(&self, out: &mut String) {
        match self {
            SqlValue::Null => out.push_str("NULL"),
            SqlValue::Bool(true) => out.push('1'),
            SqlValue::Bool(false) => out.push('0'),
            SqlValue::Int(i) => {
                let _ = write!(out, "{i}");
            }
            SqlValue::Float(f) => {
                let _ = write!(out, "{f}");
            }
            SqlValue::Text(s) => {
                out.push('\'');
                for ch in s.chars() {
                    if ch == '\'' {
                        out.push('\'');
                        out.push('\'');
                    } else {
                        out.push(ch);
                    }
                }
                out.push('\'');
            }
            SqlValue::Bytes(bytes) => {
                out.push_str("0x");
                for b in bytes {
                    let _ = write!(out, "{b:02X}");
                }
            }
            SqlValue::Uuid(u) => {
                let _ = write!(out, "'{u}'");
            }
            SqlValue::DateTime(dt) => {
                let _ = write!(out, "'{}'", dt.format("%Y-%m-%d %H:%M:%S"));
            }
            SqlValue::DateTimeTz(dt) => {
                let _ = write!(out, "'{}'", dt.format("%Y-%m-%d %H:%M:%S %:z"));
            }
            SqlValue::Interval(d) => {
                // Whole seconds only; num_seconds truncates toward zero.
                let secs = d.num_seconds();
                let (sign, secs) = if secs < 0 { ("-", -secs) } else { ("", secs) };
                let _ = write!(
                    out,
                    "'{sign}{:02}:{:02}:{:02}'",
                    secs / 3600,
                    (secs % 3600) / 60,
                    secs % 60
                );
            }
            #[cfg(feature = "rust_decimal")]
            SqlValue::Decimal(d) => {
                let _ = write!(out, "{d}");
            }
            SqlValue::Other(s) => out.push_str(s),
        }
    }
}

/// Render any supported value as its SQL literal text.
///
/// Standalone counterpart of the substitution step in
/// [`QueryTemplate::build`](crate::QueryTemplate::build); usable without a
/// template.
pub fn format_value(value: impl Into<SqlValue>) -> String {
    value.into().to_literal()
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(value: $ty) -> Self {
                    SqlValue::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for SqlValue {
    fn from(value: f32) -> Self {
        SqlValue::Float(value as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(value: &[u8]) -> Self {
        SqlValue::Bytes(value.to_vec())
    }
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        SqlValue::Uuid(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for SqlValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        SqlValue::DateTimeTz(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::DateTimeTz(value.fixed_offset())
    }
}

impl From<Duration> for SqlValue {
    fn from(value: Duration) -> Self {
        SqlValue::Interval(value)
    }
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for SqlValue {
    fn from(value: rust_decimal::Decimal) -> Self {
        SqlValue::Decimal(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => SqlValue::Null,
            serde_json::Value::Bool(b) => SqlValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    SqlValue::Float(f)
                } else {
                    SqlValue::Other(n.to_string())
                }
            }
            serde_json::Value::String(s) => SqlValue::Text(s),
            // Arrays and objects carry their compact JSON text.
            other => SqlValue::Other(other.to_string()),
        }
    }
}
