use crate::{
    error::{Error, ParseIntError, Part},
    Time,
};

/// A parser for converting text into a [`Time`].
///
/// A parser is cheap to construct and can be used in `const` and `static`
/// contexts. By default, it uses the lenient policy described in the
/// [module documentation](crate::fmt).
///
/// # Example
///
/// ```
/// use sqltime::{fmt::TimeParser, time};
///
/// static PARSER: TimeParser = TimeParser::new();
///
/// assert_eq!(PARSER.parse("08:56:04")?, time(8, 56, 4));
/// assert_eq!(PARSER.parse("9:10")?, time(9, 10, 0));
/// assert_eq!(PARSER.parse(b"06")?, time(6, 0, 0));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TimeParser {
    strict: bool,
}

impl TimeParser {
    /// Create a new parser with the default (lenient) policy.
    #[inline]
    pub const fn new() -> TimeParser {
        TimeParser { strict: false }
    }

    /// Enable or disable the strict layout policy.
    ///
    /// When enabled, the input must be exactly `HH:MM:SS`. Any other layout
    /// results in an error that reports
    /// [`ErrorKind::InvalidLayout`](crate::ErrorKind::InvalidLayout) with no
    /// part. Input with a valid layout but out-of-range components is still
    /// reported as out of range for the specific part.
    ///
    /// This is disabled by default.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{fmt::TimeParser, ErrorKind, Part};
    ///
    /// static PARSER: TimeParser = TimeParser::new().strict(true);
    ///
    /// let err = PARSER.parse("08:56").unwrap_err();
    /// assert_eq!(err.kind(), &ErrorKind::InvalidLayout);
    /// assert_eq!(err.part(), None);
    ///
    /// let err = PARSER.parse("24:00:00").unwrap_err();
    /// assert_eq!(err.part(), Some(Part::Hour));
    /// assert!(err.is_range());
    /// ```
    #[inline]
    pub const fn strict(self, yes: bool) -> TimeParser {
        TimeParser { strict: yes }
    }

    /// Parse a time from the given input.
    ///
    /// # Errors
    ///
    /// With the lenient policy, this returns an error when there are more
    /// than three colon-separated parts, when a part isn't an integer or when
    /// a part is out of range. With the strict policy, layout violations are
    /// reported as a single error instead.
    ///
    /// On error, nothing is produced. Callers must not assume any part was
    /// parsed.
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(&self, input: I) -> Result<Time, Error> {
        self.parse_with("TimeParser::parse", input.as_ref())
    }

    /// Parse a time, attributing any error to the `operation` given.
    pub(crate) fn parse_with(
        &self,
        operation: &'static str,
        input: &[u8],
    ) -> Result<Time, Error> {
        let result = if self.strict {
            parse_strict(operation, input)
        } else {
            parse_lenient(operation, input)
        };
        if let Err(ref _err) = result {
            trace!(
                "failed to parse {:?} as a time: {_err}",
                alloc::string::String::from_utf8_lossy(input),
            );
        }
        result
    }
}

impl Default for TimeParser {
    fn default() -> TimeParser {
        TimeParser::new()
    }
}

/// Parses one to three colon-separated integers, positionally.
fn parse_lenient(
    operation: &'static str,
    input: &[u8],
) -> Result<Time, Error> {
    if input.iter().filter(|&&b| b == b':').count() > 2 {
        return Err(Error::too_many_parts(operation));
    }
    let mut parts = input.split(|&b| b == b':');
    // `split` always yields at least one (possibly empty) item.
    let hour = parts.next().unwrap_or_default();
    let hour = parse_part(operation, Part::Hour, hour)?;
    let minute = match parts.next() {
        None => 0,
        Some(bytes) => parse_part(operation, Part::Minute, bytes)?,
    };
    let second = match parts.next() {
        None => 0,
        Some(bytes) => parse_part(operation, Part::Second, bytes)?,
    };
    Ok(Time::constant(hour, minute, second))
}

/// Parses exactly `HH:MM:SS`.
fn parse_strict(
    operation: &'static str,
    input: &[u8],
) -> Result<Time, Error> {
    let &[h1, h2, b':', m1, m2, b':', s1, s2] = input else {
        return Err(Error::invalid_layout(operation));
    };
    if ![h1, h2, m1, m2, s1, s2].iter().all(u8::is_ascii_digit) {
        return Err(Error::invalid_layout(operation));
    }
    let two = |tens: u8, ones: u8| {
        i64::from((tens - b'0') * 10 + (ones - b'0'))
    };
    let hour = Part::Hour.check(operation, two(h1, h2))?;
    let minute = Part::Minute.check(operation, two(m1, m2))?;
    let second = Part::Second.check(operation, two(s1, s2))?;
    Ok(Time::constant(hour, minute, second))
}

/// Parses a single part as an integer and checks that it's in range.
fn parse_part(
    operation: &'static str,
    part: Part,
    bytes: &[u8],
) -> Result<i8, Error> {
    let n = parse_int(bytes)
        .map_err(|err| Error::non_integer(operation, part, err))?;
    part.check(operation, n)
}

/// Parses a signed decimal integer.
///
/// An optional leading `+` or `-` is permitted. At least one digit is
/// required and every other byte must be an ASCII digit.
fn parse_int(bytes: &[u8]) -> Result<i64, ParseIntError> {
    let (negative, digits) = match bytes.split_first() {
        Some((&b'-', rest)) => (true, rest),
        Some((&b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return Err(ParseIntError::NoDigitsFound);
    }
    let mut n: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return Err(ParseIntError::InvalidDigit(byte));
        }
        let digit = i64::from(byte - b'0');
        // Accumulate in the direction of the sign so that `i64::MIN` parses.
        n = n
            .checked_mul(10)
            .and_then(|n| {
                if negative {
                    n.checked_sub(digit)
                } else {
                    n.checked_add(digit)
                }
            })
            .ok_or(ParseIntError::TooBig)?;
    }
    Ok(n)
}
