/*!
sqltime provides a bounded time-of-day value type for use as a column type in
relational database access layers and for JSON interchange.

A [`Time`] is an hour, minute and second. There is no date, no time zone and
no sub-second component. It is a one-to-one representation of the SQL `TIME`
data type as it is typically used in practice: a wall clock reading.

# Overview

* [`Time`] is the value type. Its components are always in range: the hour is
in `0..=23` and the minute and second are both in `0..=59`.
* [`Time::parse`] (or [`str::parse`]) converts text like `8:56:04`, `9:10` or
`06` into a `Time`. Configurable parsing is available via
[`fmt::TimeParser`].
* The [`Display`](core::fmt::Display) impl renders the canonical `HH:MM:SS`
form.
* With the `serde` feature (enabled by default), `Time` (de)serializes as a
string in canonical form.
* The [`sql`] module provides a driver-neutral binding adapter: scanning a
`Time` from a [`sql::SqlValue`] and converting a `Time` back into one. Driver
specific integrations build on top of it. (See the `sqltime-sqlx` crate.)

# Example

```
use sqltime::Time;

let t: Time = "8:56:4".parse()?;
assert_eq!(t, sqltime::time(8, 56, 4));
assert_eq!(t.to_string(), "08:56:04");

// Missing trailing parts default to zero.
assert_eq!("9:10".parse::<Time>()?, sqltime::time(9, 10, 0));
assert_eq!("06".parse::<Time>()?, sqltime::time(6, 0, 0));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Errors

Every fallible operation returns an [`Error`]. It records which operation
failed, which [`Part`] of the time was being processed (if any) and the
specific cause as an [`ErrorKind`]:

```
use sqltime::{ErrorKind, Part, Time};

let err = "24:57:00".parse::<Time>().unwrap_err();
assert_eq!(err.part(), Some(Part::Hour));
assert_eq!(
    err.kind(),
    &ErrorKind::OutOfRange { given: 24, min: 0, max: 23 },
);
assert_eq!(
    err.to_string(),
    "Time::parse: invalid hour: \
     value 24 is not in the required range of 0..=23",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
[`Error`].
* **alloc** (enabled by default via `std`) - Required. Errors and owned SQL
values use the heap.
* **serde** (enabled by default) - Implements serde's `Serialize` and
`Deserialize` traits for [`Time`].
* **logging** - Emits messages via the `log` crate. This is mostly useful for
debugging.
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Error values carry boxed inner data and SQL values may own their text.
// There isn't a core-only mode.
extern crate alloc;

pub use crate::{
    error::{Error, ErrorKind, ParseIntError, Part},
    time::{time, Time},
};

#[macro_use]
mod logging;

mod error;
pub mod fmt;
pub mod sql;
mod time;
