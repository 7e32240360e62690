/// An error that occurs when a part of a time is not a valid integer.
///
/// This is the underlying cause carried by
/// [`ErrorKind::NonInteger`](crate::ErrorKind::NonInteger). When the `std`
/// feature is enabled, it's also returned by `Error::source`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseIntError {
    /// The part was empty or contained only a sign.
    NoDigitsFound,
    /// The part contained a byte that isn't an ASCII digit.
    InvalidDigit(u8),
    /// The part is too big to fit in a 64-bit signed integer.
    TooBig,
}

#[cfg(feature = "std")]
impl std::error::Error for ParseIntError {}

impl core::fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseIntError::*;

        match *self {
            NoDigitsFound => write!(f, "invalid number, no digits found"),
            InvalidDigit(got) => {
                write!(f, "invalid digit, expected 0-9 but got {}", Byte(got))
            }
            TooBig => {
                write!(f, "number too big to parse into 64-bit integer")
            }
        }
    }
}

/// Renders a single byte, escaping it when it isn't printable ASCII.
struct Byte(u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use core::fmt::Write;

        for b in core::ascii::escape_default(self.0) {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}
