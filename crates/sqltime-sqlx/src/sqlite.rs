use sqltime::sql::SqlValue;
use sqlx_core::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    type_info::TypeInfo,
    types::Type,
    value::ValueRef,
};
use sqlx_sqlite::{
    Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef,
};

use crate::{Time, ToSqlx};

impl Type<Sqlite> for Time {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    // Integers and floats are accepted here so that decoding reports the
    // type mismatch with sqltime's own error.
    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <str as Type<Sqlite>>::compatible(ty)
            || <[u8] as Type<Sqlite>>::compatible(ty)
            || <i64 as Type<Sqlite>>::compatible(ty)
            || <f64 as Type<Sqlite>>::compatible(ty)
    }
}

impl Encode<'_, Sqlite> for Time {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'_>>,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Sqlite>::encode(self.to_sqltime().to_string(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Time {
    fn decode(value: SqliteValueRef<'r>) -> Result<Time, BoxDynError> {
        // A NULL reports the declared type of its column (if any), not a
        // storage class, so it has to be handled first.
        if value.is_null() {
            return Ok(sqltime::Time::try_from(SqlValue::Null)?.to_sqlx());
        }
        // SQLite values carry their storage class, which may differ from
        // the declared type of the column.
        let src = match storage_class(&value.type_info()) {
            StorageClass::Integer => {
                SqlValue::Int(<i64 as Decode<Sqlite>>::decode(value)?)
            }
            StorageClass::Real => {
                SqlValue::Float(<f64 as Decode<Sqlite>>::decode(value)?)
            }
            StorageClass::Text => {
                SqlValue::from(<&[u8] as Decode<Sqlite>>::decode(value)?)
            }
        };
        Ok(sqltime::Time::try_from(src)?.to_sqlx())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum StorageClass {
    Integer,
    Real,
    Text,
}

fn storage_class(ty: &SqliteTypeInfo) -> StorageClass {
    match ty.name() {
        "INTEGER" | "BOOLEAN" => StorageClass::Integer,
        "REAL" => StorageClass::Real,
        // Text, blobs and anything reported with a declared type like `TIME`
        // are read as bytes and parsed.
        _ => StorageClass::Text,
    }
}
