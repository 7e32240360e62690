/// A trait for convenient conversions from sqltime types to SQLx types.
///
/// # Example
///
/// This shows how to convert a [`sqltime::Time`] to a [`Time`]:
///
/// ```
/// use sqltime_sqlx::ToSqlx;
///
/// let t: sqltime::Time = "8:56:4".parse()?;
/// let wrapper = t.to_sqlx();
/// assert_eq!(format!("{wrapper:?}"), "Time(08:56:04)");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait ToSqlx {
    /// The wrapper type to convert to.
    type Target;

    /// A conversion method that converts a sqltime type to a SQLx wrapper
    /// type.
    fn to_sqlx(self) -> Self::Target;
}

/// A wrapper type for [`sqltime::Time`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Time(sqltime::Time);

impl Time {
    /// Converts this wrapper to a [`sqltime::Time`].
    pub fn to_sqltime(self) -> sqltime::Time {
        self.0
    }
}

impl ToSqlx for sqltime::Time {
    type Target = Time;

    fn to_sqlx(self) -> Time {
        Time(self)
    }
}

impl From<sqltime::Time> for Time {
    fn from(x: sqltime::Time) -> Time {
        Time(x)
    }
}

impl From<Time> for sqltime::Time {
    fn from(x: Time) -> sqltime::Time {
        x.0
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
