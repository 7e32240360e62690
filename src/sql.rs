/*!
A driver-neutral adapter for binding [`Time`] values to SQL.

Database drivers represent column values in many different ways. This module
defines [`SqlValue`], a small driver-neutral representation of the values a
driver might hand back for a `TIME` column, together with two operations:

* [`Time::scan`] reads a `Time` from a `SqlValue`. Text and bytes are parsed,
a native datetime has its time-of-day components extracted and `NULL` resets
the time to midnight. Every other kind of value is rejected with an error
reporting [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch).
* [`Time::to_sql_value`] converts a `Time` into a `SqlValue` holding its
canonical `HH:MM:SS` text. This never fails.

Driver specific integrations (like the `sqltime-sqlx` crate) convert their
own value types into a `SqlValue` and delegate to `Time::scan`.

# Example

```
use sqltime::{sql::SqlValue, time, Time};

let mut t = Time::default();
t.scan(SqlValue::from("9:10"))?;
assert_eq!(t, time(9, 10, 0));

let dt = jiff::civil::date(2025, 2, 20).at(17, 30, 5, 0);
t.scan(SqlValue::DateTime(dt))?;
assert_eq!(t, time(17, 30, 5));

t.scan(SqlValue::Null)?;
assert_eq!(t, time(0, 0, 0));

let err = t.scan(SqlValue::Int(42)).unwrap_err();
assert!(err.is_type_mismatch());

assert_eq!(time(18, 5, 0).to_sql_value(), SqlValue::from("18:05:00"));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};

use crate::{error::Error, fmt::TimeParser, Time};

static PARSER: TimeParser = TimeParser::new();

/// A value as read from or written to a database driver.
///
/// Only `Bytes`, `Text`, `DateTime` and `Null` can be
/// [scanned](Time::scan) into a [`Time`]. The other variants exist so that
/// drivers can report what they actually found, which ends up in the error
/// message.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SqlValue<'a> {
    /// A SQL `NULL`.
    Null,
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A sequence of bytes, which is expected to contain text.
    Bytes(Cow<'a, [u8]>),
    /// A text value.
    Text(Cow<'a, str>),
    /// A native datetime value, e.g., from a `TIMESTAMP` column.
    DateTime(jiff::civil::DateTime),
}

impl<'a> SqlValue<'a> {
    /// Returns a short description of the type of this value.
    ///
    /// This is used in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::sql::SqlValue;
    ///
    /// assert_eq!(SqlValue::Int(5).type_name(), "integer");
    /// assert_eq!(SqlValue::from("05:00").type_name(), "text");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match *self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "boolean",
            SqlValue::Int(_) => "integer",
            SqlValue::Float(_) => "float",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Text(_) => "text",
            SqlValue::DateTime(_) => "datetime",
        }
    }

    /// Converts this value into one that owns all of its data.
    pub fn into_owned(self) -> SqlValue<'static> {
        match self {
            SqlValue::Null => SqlValue::Null,
            SqlValue::Bool(b) => SqlValue::Bool(b),
            SqlValue::Int(n) => SqlValue::Int(n),
            SqlValue::Float(n) => SqlValue::Float(n),
            SqlValue::Bytes(bytes) => {
                SqlValue::Bytes(Cow::Owned(bytes.into_owned()))
            }
            SqlValue::Text(text) => {
                SqlValue::Text(Cow::Owned(text.into_owned()))
            }
            SqlValue::DateTime(dt) => SqlValue::DateTime(dt),
        }
    }
}

impl<'a> core::fmt::Display for SqlValue<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use core::fmt::Write;

        match *self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Bool(b) => write!(f, "{b}"),
            SqlValue::Int(n) => write!(f, "{n}"),
            SqlValue::Float(n) => write!(f, "{n}"),
            SqlValue::Bytes(ref bytes) => {
                f.write_str("b\"")?;
                for &byte in bytes.iter() {
                    for b in core::ascii::escape_default(byte) {
                        f.write_char(char::from(b))?;
                    }
                }
                f.write_char('"')
            }
            SqlValue::Text(ref text) => write!(f, "{text:?}"),
            SqlValue::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

impl Time {
    /// Scans a `Time` from a SQL value into this value.
    ///
    /// * `Bytes` and `Text` are parsed like [`Time::parse`].
    /// * `DateTime` has its hour, minute and second extracted. Its date and
    /// sub-second components are dropped.
    /// * `Null` resets this value to midnight.
    ///
    /// # Errors
    ///
    /// This returns an error when parsing fails or when the value is of any
    /// other type. On error, this value is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{sql::SqlValue, time, ErrorKind};
    ///
    /// let mut t = time(12, 0, 0);
    /// t.scan(SqlValue::from(&b"08:56:04"[..]))?;
    /// assert_eq!(t, time(8, 56, 4));
    ///
    /// let err = t.scan(SqlValue::Float(1.5)).unwrap_err();
    /// assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    /// assert_eq!(t, time(8, 56, 4));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn scan(&mut self, src: SqlValue<'_>) -> Result<(), Error> {
        const OP: &str = "Time::scan";

        *self = match src {
            SqlValue::Bytes(ref bytes) => PARSER.parse_with(OP, bytes)?,
            SqlValue::Text(ref text) => {
                PARSER.parse_with(OP, text.as_bytes())?
            }
            SqlValue::DateTime(dt) => Time::from(dt),
            SqlValue::Null => {
                trace!("scanned NULL value, resetting time to midnight");
                Time::midnight()
            }
            ref unsupported => {
                debug!(
                    "cannot scan {} value {unsupported} into a time",
                    unsupported.type_name(),
                );
                return Err(Error::type_mismatch(
                    OP,
                    unsupported.type_name(),
                    unsupported,
                ));
            }
        };
        Ok(())
    }

    /// Converts this time into a SQL value.
    ///
    /// The value is always text in canonical `HH:MM:SS` form.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{sql::SqlValue, time};
    ///
    /// let value = time(8, 5, 0).to_sql_value();
    /// assert_eq!(value.to_string(), r#""08:05:00""#);
    /// assert_eq!(value, SqlValue::from("08:05:00"));
    /// ```
    pub fn to_sql_value(&self) -> SqlValue<'static> {
        SqlValue::Text(Cow::Owned(self.to_string()))
    }
}

/// Scans a new `Time` from a SQL value.
///
/// This is like [`Time::scan`], where `NULL` produces midnight.
impl<'a> TryFrom<SqlValue<'a>> for Time {
    type Error = Error;

    fn try_from(src: SqlValue<'a>) -> Result<Time, Error> {
        let mut t = Time::midnight();
        t.scan(src)?;
        Ok(t)
    }
}

impl From<Time> for SqlValue<'static> {
    fn from(t: Time) -> SqlValue<'static> {
        t.to_sql_value()
    }
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(text: &'a str) -> SqlValue<'a> {
        SqlValue::Text(Cow::Borrowed(text))
    }
}

impl From<String> for SqlValue<'static> {
    fn from(text: String) -> SqlValue<'static> {
        SqlValue::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a [u8]> for SqlValue<'a> {
    fn from(bytes: &'a [u8]) -> SqlValue<'a> {
        SqlValue::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for SqlValue<'static> {
    fn from(bytes: Vec<u8>) -> SqlValue<'static> {
        SqlValue::Bytes(Cow::Owned(bytes))
    }
}

impl From<bool> for SqlValue<'static> {
    fn from(b: bool) -> SqlValue<'static> {
        SqlValue::Bool(b)
    }
}

impl From<i64> for SqlValue<'static> {
    fn from(n: i64) -> SqlValue<'static> {
        SqlValue::Int(n)
    }
}

impl From<f64> for SqlValue<'static> {
    fn from(n: f64) -> SqlValue<'static> {
        SqlValue::Float(n)
    }
}

impl From<jiff::civil::DateTime> for SqlValue<'static> {
    fn from(dt: jiff::civil::DateTime) -> SqlValue<'static> {
        SqlValue::DateTime(dt)
    }
}

/// Converts `None` to `SqlValue::Null`.
impl<'a, T: Into<SqlValue<'a>>> From<Option<T>> for SqlValue<'a> {
    fn from(value: Option<T>) -> SqlValue<'a> {
        value.map_or(SqlValue::Null, Into::into)
    }
}
