use alloc::boxed::Box;

pub use self::util::ParseIntError;

mod util;

/// An error that can occur in this crate.
///
/// Errors occur when parsing text into a [`Time`](crate::Time), when
/// constructing a `Time` from out-of-range components and when scanning a
/// `Time` from a SQL value of an incompatible type.
///
/// # Introspection
///
/// Every error records three things:
///
/// * The [operation](Error::operation) that failed, e.g., `Time::parse`
/// or `Time::scan`.
/// * The [part](Error::part) of the time that was being processed when the
/// failure occurred, if any. For example, an out-of-range minute reports
/// [`Part::Minute`], but having too many parts reports no part at all.
/// * The [kind](Error::kind) of error, which is the specific cause.
///
/// Errors implement `PartialEq` and `Eq`, so callers can match on the cause
/// without comparing strings. There are also simple predicates like
/// [`Error::is_range`].
///
/// # Design
///
/// This crate uses one error type for all of its operations. The
/// representation is boxed so that an `Error` is exactly one pointer wide,
/// which keeps `Result<Time, Error>` small.
///
/// # Example
///
/// ```
/// use sqltime::{ErrorKind, ParseIntError, Part, Time};
///
/// let err = "5:hi:47".parse::<Time>().unwrap_err();
/// assert_eq!(err.operation(), "Time::parse");
/// assert_eq!(err.part(), Some(Part::Minute));
/// assert_eq!(
///     err.kind(),
///     &ErrorKind::NonInteger(ParseIntError::InvalidDigit(b'h')),
/// );
/// assert!(err.is_non_integer());
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Error {
    inner: Box<ErrorInner>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct ErrorInner {
    operation: &'static str,
    part: Option<Part>,
    kind: ErrorKind,
}

impl Error {
    /// Returns the name of the operation that produced this error.
    ///
    /// This is one of `Time::parse`, `Time::new`, `Time::scan`,
    /// `Time::deserialize` or `TimeParser::parse`.
    pub fn operation(&self) -> &'static str {
        self.inner.operation
    }

    /// Returns the part of the time that was being processed when this error
    /// occurred.
    ///
    /// This returns `None` when the error doesn't concern a single part. For
    /// example, when the input has too many parts or when a SQL value has an
    /// unsupported type.
    pub fn part(&self) -> Option<Part> {
        self.inner.part
    }

    /// Returns the specific cause of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Returns true when the input had more than three colon-separated parts.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::Time;
    ///
    /// assert!("7:30:13:4".parse::<Time>().unwrap_err().is_too_many_parts());
    /// ```
    pub fn is_too_many_parts(&self) -> bool {
        matches!(*self.kind(), ErrorKind::TooManyParts)
    }

    /// Returns true when a part of the input was not a valid integer.
    pub fn is_non_integer(&self) -> bool {
        matches!(*self.kind(), ErrorKind::NonInteger(_))
    }

    /// Returns true when a part was a valid integer but out of its allowed
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::Time;
    ///
    /// assert!("13:-2:06".parse::<Time>().unwrap_err().is_range());
    /// assert!(Time::new(0, 0, 60).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(*self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns true when a strict parser rejected the layout of the input.
    ///
    /// See [`TimeParser::strict`](crate::fmt::TimeParser::strict).
    pub fn is_invalid_layout(&self) -> bool {
        matches!(*self.kind(), ErrorKind::InvalidLayout)
    }

    /// Returns true when a SQL value of an unsupported type was scanned.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(*self.kind(), ErrorKind::TypeMismatch { .. })
    }
}

impl Error {
    #[inline(never)]
    #[cold]
    fn new(
        operation: &'static str,
        part: Option<Part>,
        kind: ErrorKind,
    ) -> Error {
        Error { inner: Box::new(ErrorInner { operation, part, kind }) }
    }

    /// Creates an error indicating that the input had more than three parts.
    pub(crate) fn too_many_parts(operation: &'static str) -> Error {
        Error::new(operation, None, ErrorKind::TooManyParts)
    }

    /// Creates an error indicating that the given part could not be parsed
    /// as an integer.
    pub(crate) fn non_integer(
        operation: &'static str,
        part: Part,
        err: ParseIntError,
    ) -> Error {
        Error::new(operation, Some(part), ErrorKind::NonInteger(err))
    }

    /// Creates an error indicating that a `given` value for `part` is outside
    /// of the part's range.
    pub(crate) fn range(
        operation: &'static str,
        part: Part,
        given: i64,
    ) -> Error {
        let (min, max) = (part.min(), part.max());
        Error::new(
            operation,
            Some(part),
            ErrorKind::OutOfRange { given, min, max },
        )
    }

    /// Creates an error indicating that strict layout checking failed.
    pub(crate) fn invalid_layout(operation: &'static str) -> Error {
        Error::new(operation, None, ErrorKind::InvalidLayout)
    }

    /// Creates an error indicating that a SQL value of type `found` cannot be
    /// scanned into a `Time`.
    pub(crate) fn type_mismatch(
        operation: &'static str,
        found: &'static str,
        value: impl core::fmt::Display,
    ) -> Error {
        use alloc::string::ToString;

        let value = value.to_string().into_boxed_str();
        Error::new(operation, None, ErrorKind::TypeMismatch { found, value })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.kind() {
            ErrorKind::NonInteger(ref err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: ", self.operation())?;
        if let Some(part) = self.part() {
            write!(f, "invalid {part}: ")?;
        }
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("operation", &self.inner.operation)
                .field("part", &self.inner.part)
                .field("kind", &self.inner.kind)
                .finish()
        }
    }
}

/// The specific cause of an [`Error`].
///
/// This enum is non-exhaustive. New causes may be added in semver compatible
/// releases.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input had more than three colon-separated parts.
    TooManyParts,
    /// A part of the input was not a valid integer. The underlying integer
    /// conversion error is included.
    NonInteger(ParseIntError),
    /// A part of the input was a valid integer, but it was not in the range
    /// `min..=max`.
    ///
    /// Negative values are reported with this kind and not as
    /// [`ErrorKind::NonInteger`].
    OutOfRange {
        /// The value that was found.
        given: i64,
        /// The smallest allowed value, inclusive.
        min: i64,
        /// The largest allowed value, inclusive.
        max: i64,
    },
    /// A strict parser found input that isn't exactly in `HH:MM:SS` form.
    InvalidLayout,
    /// A SQL value was scanned whose type cannot be converted to a `Time`.
    TypeMismatch {
        /// A short description of the type that was found, e.g., `integer`.
        found: &'static str,
        /// A rendering of the value that was found.
        value: Box<str>,
    },
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            TooManyParts => f.write_str(
                "too many parts, expected at most 3 colon-separated parts",
            ),
            NonInteger(ref err) => core::fmt::Display::fmt(err, f),
            OutOfRange { given, min, max } => write!(
                f,
                "value {given} is not in the required range of {min}..={max}",
            ),
            InvalidLayout => {
                f.write_str("invalid layout, expected exactly HH:MM:SS")
            }
            TypeMismatch { found, ref value } => write!(
                f,
                "type sqltime::Time is incompatible with {found} value {value}",
            ),
        }
    }
}

/// A part of a time, i.e., the hour, minute or second.
///
/// This is used to tag errors with the component that was being processed
/// when the error occurred. See [`Error::part`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Part {
    /// The hour, in the range `0..=23`.
    Hour,
    /// The minute, in the range `0..=59`.
    Minute,
    /// The second, in the range `0..=59`.
    Second,
}

impl Part {
    /// Returns a human readable label for this part.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::Part;
    ///
    /// assert_eq!(Part::Hour.label(), "hour");
    /// assert_eq!(Part::Second.to_string(), "second");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Part::Hour => "hour",
            Part::Minute => "minute",
            Part::Second => "second",
        }
    }

    /// Returns the smallest allowed value for this part.
    pub fn min(self) -> i64 {
        0
    }

    /// Returns the largest allowed value for this part.
    pub fn max(self) -> i64 {
        match self {
            Part::Hour => 23,
            Part::Minute | Part::Second => 59,
        }
    }

    /// Returns the inclusive range of allowed values for this part.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::Part;
    ///
    /// assert_eq!(Part::Hour.range(), 0..=23);
    /// assert!(!Part::Minute.range().contains(&60));
    /// ```
    pub fn range(self) -> core::ops::RangeInclusive<i64> {
        self.min()..=self.max()
    }

    /// Returns the given value back when it is in this part's range.
    pub(crate) fn check(
        self,
        operation: &'static str,
        given: i64,
    ) -> Result<i8, Error> {
        if !(self.min()..=self.max()).contains(&given) {
            return Err(Error::range(operation, self, given));
        }
        // OK because every part's maximum fits in an `i8`.
        Ok(given as i8)
    }
}

impl core::fmt::Display for Part {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
