use sqltime::{sql::SqlValue, time, ErrorKind, Part, Time};

use crate::Result;

#[test]
fn scan_supported_values() -> Result {
    let _ = crate::Logger::init();

    let mut t = Time::default();
    t.scan(SqlValue::from("8:56:04"))?;
    assert_eq!(t, time(8, 56, 4));

    t.scan(SqlValue::from(b"9:10".to_vec()))?;
    assert_eq!(t, time(9, 10, 0));

    let dt = jiff::civil::date(2024, 7, 1).at(6, 7, 8, 500_000_000);
    t.scan(SqlValue::from(dt))?;
    assert_eq!(t, time(6, 7, 8));
    Ok(())
}

#[test]
fn scan_null_resets_to_midnight() -> Result {
    let _ = crate::Logger::init();

    let mut t = time(20, 33, 1);
    t.scan(SqlValue::Null)?;
    assert_eq!(t, time(0, 0, 0));
    Ok(())
}

#[test]
fn scan_unsupported_values() {
    let _ = crate::Logger::init();

    let mut t = time(20, 33, 1);
    let err = t.scan(SqlValue::Int(73_981)).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(
        err.kind(),
        &ErrorKind::TypeMismatch {
            found: "integer",
            value: "73981".to_string().into_boxed_str(),
        },
    );
    assert_eq!(
        err.to_string(),
        "Time::scan: type sqltime::Time is incompatible with \
         integer value 73981",
    );
    assert_eq!(t, time(20, 33, 1));

    assert!(t.scan(SqlValue::Float(8.5)).unwrap_err().is_type_mismatch());
    assert!(t.scan(SqlValue::Bool(true)).unwrap_err().is_type_mismatch());
    assert_eq!(t, time(20, 33, 1));
}

#[test]
fn scan_reports_parse_errors() {
    let _ = crate::Logger::init();

    let mut t = time(20, 33, 1);
    let err = t.scan(SqlValue::from("12:30:75")).unwrap_err();
    assert_eq!(err.operation(), "Time::scan");
    assert_eq!(err.part(), Some(Part::Second));
    assert!(err.is_range());
    assert_eq!(t, time(20, 33, 1));

    let err = t.scan(SqlValue::from("1:2:3:4")).unwrap_err();
    assert!(err.is_too_many_parts());
}

#[test]
fn value_then_scan() -> Result {
    for t in [Time::MIN, time(8, 56, 4), Time::MAX] {
        let value = t.to_sql_value();
        assert_eq!(value, SqlValue::from(t.to_string()));
        assert_eq!(Time::try_from(value)?, t);
    }
    Ok(())
}
