use sqltime::{
    fmt::TimeParser, time, Error, ErrorKind, ParseIntError, Part, Time,
};

use crate::Result;

fn range(part: Part, given: i64) -> ErrorKind {
    ErrorKind::OutOfRange { given, min: part.min(), max: part.max() }
}

fn digit(byte: u8) -> ErrorKind {
    ErrorKind::NonInteger(ParseIntError::InvalidDigit(byte))
}

fn parse_err(input: &str) -> Error {
    input.parse::<Time>().unwrap_err()
}

/// Every valid time survives a trip through its canonical form.
#[test]
fn roundtrip_every_second_of_day() -> Result {
    static STRICT: TimeParser = TimeParser::new().strict(true);

    for second in 0..86_400 {
        let t = Time::from_second_of_day(second);
        let printed = t.to_string();
        assert_eq!(printed.len(), 8, "{printed}");
        assert_eq!(Time::parse(&printed)?, t);
        assert_eq!(STRICT.parse(&printed)?, t);
    }
    Ok(())
}

#[test]
fn lenient_layouts() -> Result {
    assert_eq!(Time::parse("08:56:04")?, time(8, 56, 4));
    assert_eq!(Time::parse("9:10")?, time(9, 10, 0));
    assert_eq!(Time::parse("06")?, time(6, 0, 0));
    assert_eq!(Time::parse("0")?, Time::MIN);
    assert_eq!(Time::parse("23:59:59")?, Time::MAX);
    assert_eq!(Time::parse("007:0005:00009")?, time(7, 5, 9));
    assert_eq!(Time::parse("+1:+2:+3")?, time(1, 2, 3));
    assert_eq!(Time::parse("-0:00")?, Time::MIN);
    Ok(())
}

#[test]
fn too_many_parts() {
    let err = parse_err("7:30:13:4");
    assert_eq!(err.kind(), &ErrorKind::TooManyParts);
    assert_eq!(err.part(), None);
    assert!(err.is_too_many_parts());

    // Parts are counted before any of them are parsed.
    assert!(parse_err("99:hi:::").is_too_many_parts());
}

#[test]
fn non_integer_parts() {
    let err = parse_err("hi:5:47");
    assert_eq!(err.part(), Some(Part::Hour));
    assert_eq!(err.kind(), &digit(b'h'));

    let err = parse_err("5:hi:47");
    assert_eq!(err.part(), Some(Part::Minute));
    assert!(err.is_non_integer());

    let err = parse_err("5:47:hi");
    assert_eq!(err.part(), Some(Part::Second));
    assert!(err.is_non_integer());

    let empty = ErrorKind::NonInteger(ParseIntError::NoDigitsFound);
    let err = parse_err("");
    assert_eq!(err.part(), Some(Part::Hour));
    assert_eq!(err.kind(), &empty);

    let err = parse_err("12:");
    assert_eq!(err.part(), Some(Part::Minute));
    assert_eq!(err.kind(), &empty);

    let err = parse_err(" 12:00");
    assert_eq!(err.kind(), &digit(b' '));

    let err = parse_err("12:00:99999999999999999999");
    assert_eq!(err.part(), Some(Part::Second));
    assert_eq!(err.kind(), &ErrorKind::NonInteger(ParseIntError::TooBig));
}

#[test]
fn out_of_range_parts() {
    let err = parse_err("24:57:00");
    assert_eq!(err.part(), Some(Part::Hour));
    assert_eq!(err.kind(), &range(Part::Hour, 24));

    let err = parse_err("13:-2:06");
    assert_eq!(err.part(), Some(Part::Minute));
    assert_eq!(err.kind(), &range(Part::Minute, -2));
    assert!(!err.is_non_integer());

    let err = parse_err("20:33:62");
    assert_eq!(err.part(), Some(Part::Second));
    assert_eq!(err.kind(), &range(Part::Second, 62));

    // The first failing part, from left to right, is reported.
    let err = parse_err("25:hi");
    assert_eq!(err.part(), Some(Part::Hour));
    assert!(err.is_range());
}

#[test]
fn errors_are_comparable() {
    assert_eq!(parse_err("24:00"), parse_err("24:00"));
    assert_ne!(parse_err("24:00"), parse_err("25:00"));

    let err = parse_err("24:00");
    assert_eq!(err.clone(), err);
}

#[test]
fn error_messages() {
    assert_eq!(
        parse_err("7:30:13:4").to_string(),
        "Time::parse: too many parts, \
         expected at most 3 colon-separated parts",
    );
    assert_eq!(
        parse_err("5:hi:47").to_string(),
        "Time::parse: invalid minute: \
         invalid digit, expected 0-9 but got h",
    );
    assert_eq!(
        parse_err("24:57:00").to_string(),
        "Time::parse: invalid hour: \
         value 24 is not in the required range of 0..=23",
    );
    assert_eq!(
        "20:33:62".parse::<Time>().unwrap_err().to_string(),
        "Time::parse: invalid second: \
         value 62 is not in the required range of 0..=59",
    );
}

#[test]
fn error_source() {
    use std::error::Error as _;

    let err = parse_err("5:47:hi");
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "invalid digit, expected 0-9 but got h");
    assert!(parse_err("24:00").source().is_none());
}

#[test]
fn strict_layout() -> Result {
    static STRICT: TimeParser = TimeParser::new().strict(true);

    assert_eq!(STRICT.parse("08:56:04")?, time(8, 56, 4));
    assert_eq!(STRICT.parse(b"23:59:59")?, Time::MAX);

    let bad =
        ["8:56:04", "08:56", "08", "08:56:04:00", "08-56-04", "+8:56:04"];
    for input in bad {
        let err = STRICT.parse(input).unwrap_err();
        assert!(err.is_invalid_layout(), "{input}: {err}");
        assert_eq!(err.operation(), "TimeParser::parse");
    }

    // A correct layout still gets its ranges checked.
    let err = STRICT.parse("24:00:00").unwrap_err();
    assert_eq!(err.part(), Some(Part::Hour));
    assert!(err.is_range());
    Ok(())
}

#[test]
fn new_validates() -> Result {
    assert_eq!(Time::new(8, 56, 4)?, time(8, 56, 4));

    let err = Time::new(24, 0, 0).unwrap_err();
    assert_eq!(err.operation(), "Time::new");
    assert_eq!(err.part(), Some(Part::Hour));

    let err = Time::new(0, 60, 0).unwrap_err();
    assert_eq!(err.kind(), &range(Part::Minute, 60));

    let err = Time::new(0, 0, -1).unwrap_err();
    assert_eq!(err.kind(), &range(Part::Second, -1));
    Ok(())
}

#[test]
fn parse_into_keeps_value_on_error() -> Result {
    let mut t = time(1, 2, 3);
    t.parse_into("4:5")?;
    assert_eq!(t, time(4, 5, 0));

    assert!(t.parse_into("4:5:60").is_err());
    assert_eq!(t, time(4, 5, 0));
    Ok(())
}

#[test]
fn format_zero_pads() {
    assert_eq!(time(8, 56, 4).to_string(), "08:56:04");
    assert_eq!(time(0, 0, 0).to_string(), "00:00:00");
    assert_eq!(format!("{:?}", time(9, 1, 0)), "09:01:00");
}
