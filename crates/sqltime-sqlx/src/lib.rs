/*!
This crate provides integration points for [sqltime](sqltime) and
[SQLx][sqlx].

Note that to use this crate, you'll likely need to enable one of its
[database backend features](#crate-features).

# Organization

This crate defines a [`Time`] type that wraps [`sqltime::Time`]. The wrapper
provides implementations of the [`sqlx_core::types::Type`],
[`sqlx_core::decode::Decode`] and [`sqlx_core::encode::Encode`] traits.

The intended workflow is to use the wrapper type within your wire types for
encoding and decoding data from databases such as PostgreSQL. The wrapper
owns the logic for encoding and decoding the data in database specific
formats. Decoding delegates to [`sqltime::Time::scan`], so text columns are
parsed with the same lenient rules as [`sqltime::Time::parse`].

In order to minimize the annoyance of the wrapper type, the following
conveniences are afforded:

* A [`ToSqlx`] trait is provided and implemented for `sqltime::Time`. It
provides easy conversion to the wrapper type in this crate.
* A concrete [`Time::to_sqltime`] method is provided. This is the reverse of
`ToSqlx`.
* There are `From` trait implementations from the wrapper type to
`sqltime::Time`, and vice versa.

# Database support

* **PostgreSQL** - A `Time` is encoded as a `TIME` value. It can be decoded
from `TIME`, `TIMESTAMP` and `TIMESTAMPTZ` columns (the time-of-day is
extracted) and from text columns (the text is parsed).
* **SQLite** - A `Time` is encoded as `HH:MM:SS` text. It can be decoded from
`TEXT` or `BLOB` values. Decoding `INTEGER` or `REAL` values fails with an
error reporting the incompatible type.

# Example

```
use sqltime_sqlx::ToSqlx;

let t = sqltime::time(18, 5, 0);
let wrapper = t.to_sqlx();
assert_eq!(format!("{wrapper:?}"), "Time(18:05:00)");
assert_eq!(wrapper.to_sqltime(), t);
```

# Crate features

* **postgres** - Enables the `sqlx-postgres` dependency.
* **sqlite** - Enables the `sqlx-sqlite` dependency.

[sqlx]: https://docs.rs/sqlx/0.8
*/

#![deny(missing_docs)]

pub use self::wrappers::{Time, ToSqlx};

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;
mod wrappers;
