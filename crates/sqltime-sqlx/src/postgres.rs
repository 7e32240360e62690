use jiff::civil;
use sqltime::sql::SqlValue;
use sqlx_core::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    types::Type,
    value::ValueRef,
};
use sqlx_postgres::{
    types::Oid, PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat,
    PgValueRef, Postgres,
};

use crate::{Time, ToSqlx};

/// Apparently the actual format of values on the wire is not
/// a documented guarantee of PostgreSQL.[1] The encodings here follow what
/// `sqlx` itself does for `TIME` and `TIMESTAMP` values.
///
/// [1]: https://www.postgresql.org/docs/current/protocol-overview.html#PROTOCOL-FORMAT-CODES
static POSTGRES_EPOCH_DATETIME: civil::DateTime =
    civil::date(2000, 1, 1).at(0, 0, 0, 0);
static MIDNIGHT: civil::Time = civil::Time::midnight();

const MICROS_PER_SECOND: i64 = 1_000_000;

// https://github.com/launchbadge/sqlx/blob/65229f7ff91ecd38be7c10fb61ff3e05bedabe87/sqlx-postgres/src/type_info.rs#L520-L525
const TIME: Oid = Oid(1083);
const TIMESTAMP: Oid = Oid(1114);
const TIMESTAMPTZ: Oid = Oid(1184);

/// The kind of column a value was read from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Column {
    Time,
    Timestamp,
    Text,
}

impl Column {
    fn of(ty: &PgTypeInfo) -> Column {
        if *ty == PgTypeInfo::with_oid(TIME) {
            Column::Time
        } else if *ty == PgTypeInfo::with_oid(TIMESTAMP)
            || *ty == PgTypeInfo::with_oid(TIMESTAMPTZ)
        {
            Column::Timestamp
        } else {
            Column::Text
        }
    }
}

impl Type<Postgres> for Time {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(TIME)
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        Column::of(ty) != Column::Text
            || <str as Type<Postgres>>::compatible(ty)
            || <[u8] as Type<Postgres>>::compatible(ty)
    }
}

impl PgHasArrayType for Time {
    fn array_type_info() -> PgTypeInfo {
        // https://github.com/launchbadge/sqlx/blob/65229f7ff91ecd38be7c10fb61ff3e05bedabe87/sqlx-postgres/src/type_info.rs#L524
        PgTypeInfo::with_oid(Oid(1183))
    }
}

impl Encode<'_, Postgres> for Time {
    fn encode_by_ref(
        &self,
        buf: &mut PgArgumentBuffer,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Postgres>::encode(time_to_micros(self.to_sqltime()), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Time {
    fn decode(value: PgValueRef<'r>) -> Result<Time, BoxDynError> {
        // A NULL carries the column's type but no data, so it has to be
        // handled before looking at either.
        if value.is_null() {
            return Ok(sqltime::Time::try_from(SqlValue::Null)?.to_sqlx());
        }
        let column = Column::of(&value.type_info());
        let src = match (value.format(), column) {
            (PgValueFormat::Binary, Column::Time) => {
                // The encoding is the number of *microseconds* since midnight.
                let micros: i64 = Decode::<Postgres>::decode(value)?;
                return Ok(micros_to_time(micros)?.to_sqlx());
            }
            (PgValueFormat::Binary, Column::Timestamp) => {
                // The encoding is the number of *microseconds* since
                // POSTGRES_EPOCH_DATETIME.
                let micros: i64 = Decode::<Postgres>::decode(value)?;
                SqlValue::DateTime(micros_to_datetime(micros)?)
            }
            (PgValueFormat::Text, Column::Time) => {
                // Native `TIME` text may carry fractional seconds, which
                // the lenient parser rejects. Jiff handles them.
                let t = value.as_str()?.parse::<civil::Time>()?;
                return Ok(sqltime::Time::from(t).to_sqlx());
            }
            (PgValueFormat::Text, Column::Timestamp) => {
                // The `chrono` implementation in `sqlx` does a dance with
                // trying to parse offsets, but Jiff's `civil::DateTime`
                // parser will handle that automatically.
                let dt = value.as_str()?.parse::<civil::DateTime>()?;
                SqlValue::DateTime(dt)
            }
            (_, Column::Text) => SqlValue::from(value.as_bytes()?),
        };
        Ok(sqltime::Time::try_from(src)?.to_sqlx())
    }
}

/// Returns the number of microseconds since midnight for the given time.
fn time_to_micros(t: sqltime::Time) -> i64 {
    i64::from(t.second_of_day()) * MICROS_PER_SECOND
}

/// Converts microseconds since midnight to a time, dropping any sub-second
/// component.
fn micros_to_time(micros: i64) -> Result<sqltime::Time, BoxDynError> {
    let micros = jiff::SignedDuration::from_micros(micros);
    Ok(sqltime::Time::from(MIDNIGHT.checked_add(micros)?))
}

/// Converts microseconds since the PostgreSQL epoch to a civil datetime.
fn micros_to_datetime(micros: i64) -> Result<civil::DateTime, BoxDynError> {
    let micros = jiff::SignedDuration::from_micros(micros);
    Ok(POSTGRES_EPOCH_DATETIME.checked_add(micros)?)
}
