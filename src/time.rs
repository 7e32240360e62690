use core::ops::{Add, AddAssign, Sub, SubAssign};

use jiff::SignedDuration;

use crate::{
    error::{Error, Part},
    fmt::TimeParser,
};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// The parser used by `Time::parse` and the `FromStr` impl.
static PARSER: TimeParser = TimeParser::new();

/// A representation of a time of day, i.e., a wall clock reading.
///
/// A `Time` value is an hour, minute and second. The hour is always in the
/// range `0..=23`, and the minute and second are always in the range
/// `0..=59`. There is no date, no time zone and no sub-second component.
///
/// A `Time` can only be created from valid components. The components are
/// validated by [`Time::new`] and by the parser, or checked at compile time
/// by [`Time::constant`].
///
/// # Default value
///
/// For convenience, this type implements the `Default` trait. Its default
/// value is midnight. i.e., `00:00:00`. This is also the value a `Time` is
/// reset to when it is [scanned](Time::scan) from a SQL `NULL`.
///
/// # Parsing and printing
///
/// `Time` implements both `FromStr` and `Display`. Parsing is lenient:
/// one to three colon-separated integers are accepted, with missing trailing
/// parts defaulting to zero. Printing always uses the canonical `HH:MM:SS`
/// form.
///
/// ```
/// use sqltime::Time;
///
/// let t: Time = "9:10".parse()?;
/// assert_eq!(t.to_string(), "09:10:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Comparisons
///
/// The `Time` type provides both `Eq` and `Ord` trait implementations. When
/// a time `t1` occurs before a time `t2` on the same day, then `t1 < t2`.
///
/// ```
/// use sqltime::time;
///
/// assert!(time(7, 30, 1) < time(8, 10, 0));
/// ```
///
/// # Arithmetic
///
/// Arithmetic always wraps around midnight, since that's how clocks behave.
/// The `Add` and `Sub` trait implementations with a [`SignedDuration`] use
/// [`Time::wrapping_add`] and [`Time::wrapping_sub`]:
///
/// ```
/// use jiff::SignedDuration;
/// use sqltime::time;
///
/// let t = time(23, 30, 0);
/// assert_eq!(t + SignedDuration::from_hours(1), time(0, 30, 0));
/// assert_eq!(t - SignedDuration::from_hours(24), t);
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Time {
    hour: i8,
    minute: i8,
    second: i8,
}

impl Time {
    /// The minimum representable time value.
    ///
    /// This corresponds to `00:00:00`.
    pub const MIN: Time = Time::midnight();

    /// The maximum representable time value.
    ///
    /// This corresponds to `23:59:59`.
    pub const MAX: Time = Time::constant(23, 59, 59);

    /// Creates a new `Time` value from its component hour, minute and second
    /// values.
    ///
    /// # Errors
    ///
    /// This returns an error when any of the components is out of range. The
    /// error reports which [`Part`] was invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{Part, Time};
    ///
    /// let t = Time::new(18, 5, 0)?;
    /// assert_eq!(t.to_string(), "18:05:00");
    ///
    /// let err = Time::new(18, 60, 0).unwrap_err();
    /// assert_eq!(err.part(), Some(Part::Minute));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(hour: i8, minute: i8, second: i8) -> Result<Time, Error> {
        const OP: &str = "Time::new";

        let hour = Part::Hour.check(OP, i64::from(hour))?;
        let minute = Part::Minute.check(OP, i64::from(minute))?;
        let second = Part::Second.check(OP, i64::from(second))?;
        Ok(Time { hour, minute, second })
    }

    /// Creates a new `Time` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics if any of the components is out of range. When evaluated
    /// in a `const` context, this results in a compile error.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::Time;
    ///
    /// const LUNCH: Time = Time::constant(12, 30, 0);
    /// assert_eq!(LUNCH.hour(), 12);
    /// assert_eq!(LUNCH.minute(), 30);
    /// ```
    #[inline]
    pub const fn constant(hour: i8, minute: i8, second: i8) -> Time {
        if hour < 0 || hour > 23 {
            panic!("hour out of range, must be in 0..=23");
        }
        if minute < 0 || minute > 59 {
            panic!("minute out of range, must be in 0..=59");
        }
        if second < 0 || second > 59 {
            panic!("second out of range, must be in 0..=59");
        }
        Time { hour, minute, second }
    }

    /// Returns the first moment of the day, i.e., `00:00:00`.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::Time;
    ///
    /// assert_eq!(Time::midnight(), Time::default());
    /// assert_eq!(Time::midnight().to_string(), "00:00:00");
    /// ```
    #[inline]
    pub const fn midnight() -> Time {
        Time { hour: 0, minute: 0, second: 0 }
    }

    /// Parses a time in `H:M:S`, `H:M` or `H` form.
    ///
    /// This is equivalent to `input.parse::<Time>()`, except it also accepts
    /// raw bytes. For configurable parsing, see
    /// [`TimeParser`](crate::fmt::TimeParser).
    ///
    /// # Errors
    ///
    /// This returns an error when there are more than three parts, when a
    /// part isn't an integer or when a part is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{time, Part, Time};
    ///
    /// assert_eq!(Time::parse("08:56:04")?, time(8, 56, 4));
    /// assert_eq!(Time::parse(b"06")?, time(6, 0, 0));
    ///
    /// let err = Time::parse("20:33:62").unwrap_err();
    /// assert_eq!(err.part(), Some(Part::Second));
    /// assert!(err.is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Time, Error> {
        PARSER.parse_with("Time::parse", input.as_ref())
    }

    /// Parses a time in `H:M:S`, `H:M` or `H` form into this value.
    ///
    /// This is like [`Time::parse`], except it overwrites `self` on success.
    /// On failure, `self` is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{time, Time};
    ///
    /// let mut t = time(1, 2, 3);
    /// t.parse_into("9:10")?;
    /// assert_eq!(t, time(9, 10, 0));
    ///
    /// assert!(t.parse_into("9:61").is_err());
    /// assert_eq!(t, time(9, 10, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse_into<I: AsRef<[u8]>>(
        &mut self,
        input: I,
    ) -> Result<(), Error> {
        *self = Time::parse(input)?;
        Ok(())
    }

    /// Returns the hour of this time, in the range `0..=23`.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the minute of this time, in the range `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the second of this time, in the range `0..=59`.
    #[inline]
    pub fn second(self) -> i8 {
        self.second
    }

    /// Returns the number of seconds elapsed since midnight, in the range
    /// `0..=86399`.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{time, Time};
    ///
    /// assert_eq!(Time::MIN.second_of_day(), 0);
    /// assert_eq!(time(1, 1, 1).second_of_day(), 3661);
    /// assert_eq!(Time::MAX.second_of_day(), 86399);
    /// ```
    #[inline]
    pub fn second_of_day(self) -> i32 {
        i32::from(self.hour) * 3600
            + i32::from(self.minute) * 60
            + i32::from(self.second)
    }

    /// Creates a time from a number of seconds since midnight, wrapping
    /// around when the number is negative or exceeds a day.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::{time, Time};
    ///
    /// assert_eq!(Time::from_second_of_day(3661), time(1, 1, 1));
    /// assert_eq!(Time::from_second_of_day(86400), time(0, 0, 0));
    /// assert_eq!(Time::from_second_of_day(-1), time(23, 59, 59));
    /// ```
    #[inline]
    pub fn from_second_of_day(seconds: i64) -> Time {
        // Euclidean remainder, not `%`, so that negative inputs wrap back
        // from the end of the day.
        let seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        let hour = seconds / SECONDS_PER_HOUR;
        let minute = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let second = seconds % SECONDS_PER_MINUTE;
        // OK because each value is bounded by the arithmetic above.
        Time {
            hour: hour as i8,
            minute: minute as i8,
            second: second as i8,
        }
    }

    /// Adds the given number of seconds to this time, wrapping around
    /// midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use sqltime::time;
    ///
    /// assert_eq!(time(23, 59, 59).wrapping_add_seconds(1), time(0, 0, 0));
    /// assert_eq!(time(0, 0, 0).wrapping_add_seconds(-1), time(23, 59, 59));
    /// assert_eq!(time(12, 0, 0).wrapping_add_seconds(i64::MIN), time(20, 29, 52));
    /// ```
    #[inline]
    pub fn wrapping_add_seconds(self, seconds: i64) -> Time {
        let seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        Time::from_second_of_day(i64::from(self.second_of_day()) + seconds)
    }

    /// Adds the given duration to this time, wrapping around midnight.
    ///
    /// Any sub-second component of the duration is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::SignedDuration;
    /// use sqltime::time;
    ///
    /// let t = time(20, 10, 1);
    /// let d = SignedDuration::from_secs(6599);
    /// assert_eq!(t.wrapping_add(d), time(22, 0, 0));
    /// assert_eq!(t.wrapping_add(-d), time(18, 20, 2));
    /// ```
    #[inline]
    pub fn wrapping_add(self, duration: SignedDuration) -> Time {
        self.wrapping_add_seconds(duration.as_secs())
    }

    /// Subtracts the given duration from this time, wrapping around midnight.
    ///
    /// Any sub-second component of the duration is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::SignedDuration;
    /// use sqltime::time;
    ///
    /// let t = time(0, 15, 0);
    /// assert_eq!(t.wrapping_sub(SignedDuration::from_mins(30)), time(23, 45, 0));
    /// ```
    #[inline]
    pub fn wrapping_sub(self, duration: SignedDuration) -> Time {
        // Reduce first since negating `i64::MIN` overflows.
        let seconds = duration.as_secs().rem_euclid(SECONDS_PER_DAY);
        self.wrapping_add_seconds(-seconds)
    }

    /// Returns the duration from `other` to this time.
    ///
    /// The duration is negative when `other` is later in the day than
    /// `self`. This never wraps around midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::SignedDuration;
    /// use sqltime::time;
    ///
    /// let (t1, t2) = (time(22, 0, 0), time(20, 10, 1));
    /// assert_eq!(t1.duration_since(t2), SignedDuration::from_secs(6599));
    /// assert_eq!(t2.duration_since(t1), SignedDuration::from_secs(-6599));
    /// ```
    #[inline]
    pub fn duration_since(self, other: Time) -> SignedDuration {
        let seconds = self.second_of_day() - other.second_of_day();
        SignedDuration::from_secs(i64::from(seconds))
    }
}

/// Creates a new `Time` value in a `const` context.
///
/// This is a convenience free function for [`Time::constant`].
///
/// # Panics
///
/// This panics if any of the components is out of range.
///
/// # Example
///
/// ```
/// use sqltime::time;
///
/// assert_eq!(time(18, 5, 0).to_string(), "18:05:00");
/// ```
#[inline]
pub const fn time(hour: i8, minute: i8, second: i8) -> Time {
    Time::constant(hour, minute, second)
}

impl Default for Time {
    fn default() -> Time {
        Time::midnight()
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Time, Error> {
        Time::parse(s)
    }
}

/// Adds a duration. This uses wrapping arithmetic.
impl Add<SignedDuration> for Time {
    type Output = Time;

    #[inline]
    fn add(self, rhs: SignedDuration) -> Time {
        self.wrapping_add(rhs)
    }
}

/// Adds a duration in place. This uses wrapping arithmetic.
impl AddAssign<SignedDuration> for Time {
    #[inline]
    fn add_assign(&mut self, rhs: SignedDuration) {
        *self = self.add(rhs);
    }
}

/// Subtracts a duration. This uses wrapping arithmetic.
impl Sub<SignedDuration> for Time {
    type Output = Time;

    #[inline]
    fn sub(self, rhs: SignedDuration) -> Time {
        self.wrapping_sub(rhs)
    }
}

/// Subtracts a duration in place. This uses wrapping arithmetic.
impl SubAssign<SignedDuration> for Time {
    #[inline]
    fn sub_assign(&mut self, rhs: SignedDuration) {
        *self = self.sub(rhs);
    }
}

/// Computes the duration between two times.
///
/// This is negative when the time being subtracted is later in the day.
impl Sub for Time {
    type Output = SignedDuration;

    #[inline]
    fn sub(self, rhs: Time) -> SignedDuration {
        self.duration_since(rhs)
    }
}

/// Converts a Jiff civil time, truncating its sub-second component.
impl From<jiff::civil::Time> for Time {
    fn from(t: jiff::civil::Time) -> Time {
        // Jiff's components are always in range, but clamp the second
        // anyway in case a leap second ever shows up.
        Time::constant(t.hour(), t.minute(), t.second().min(59))
    }
}

/// Converts the time component of a Jiff civil datetime, truncating its
/// sub-second component.
impl From<jiff::civil::DateTime> for Time {
    fn from(dt: jiff::civil::DateTime) -> Time {
        Time::from(dt.time())
    }
}

impl From<Time> for jiff::civil::Time {
    fn from(t: Time) -> jiff::civil::Time {
        jiff::civil::time(t.hour, t.minute, t.second, 0)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        let seconds = <i64 as quickcheck::Arbitrary>::arbitrary(g);
        Time::from_second_of_day(seconds)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Time>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&i64::from(self.second_of_day()))
                .map(Time::from_second_of_day),
        )
    }
}
