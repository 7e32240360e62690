/*!
Configurable parsing of [`Time`](crate::Time) values.

Most uses of this crate should use [`Time::parse`](crate::Time::parse) or
the `FromStr` impl on `Time`. This module exposes [`TimeParser`] for callers
that need to pick a different parsing policy.

# Parsing policy

The default policy is lenient. It accepts `H:M:S`, `H:M` or `H`, where each
part is a decimal integer with any number of digits (including leading
zeros) and an optional sign. Missing trailing parts default to zero. Each
part is then checked against its range, so `-2` is reported as out of range
and not as an invalid integer.

The strict policy requires exactly `HH:MM:SS`, i.e., three parts of exactly
two ASCII digits each. Anything else is reported as a single
[`ErrorKind::InvalidLayout`](crate::ErrorKind::InvalidLayout) error.

# Printing

There is only one printed form: the canonical `HH:MM:SS` produced by the
`Display` impl on `Time`. Both policies accept it.

```
use sqltime::{fmt::TimeParser, time};

static STRICT: TimeParser = TimeParser::new().strict(true);

let t = time(8, 56, 4);
assert_eq!(STRICT.parse(t.to_string())?, t);
assert!(STRICT.parse("8:56:4").unwrap_err().is_invalid_layout());

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::parser::TimeParser;

mod parser;
#[cfg(feature = "serde")]
mod serde;
