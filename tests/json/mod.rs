use sqltime::{time, Time};

#[derive(Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
struct Opening {
    weekday: String,
    open: Time,
    close: Time,
}

#[test]
fn encode_decode() {
    let _ = crate::Logger::init();

    let json = serde_json::to_string(&time(18, 5, 0)).unwrap();
    assert_eq!(json, r#""18:05:00""#);
    let t: Time = serde_json::from_str(&json).unwrap();
    assert_eq!(t, time(18, 5, 0));
}

#[test]
fn nested() {
    let _ = crate::Logger::init();

    let json = r#"{"weekday":"Mon","open":"9:00","close":"17:30:00"}"#;
    let got: Opening = serde_json::from_str(json).unwrap();
    let expected = Opening {
        weekday: "Mon".to_string(),
        open: time(9, 0, 0),
        close: time(17, 30, 0),
    };
    assert_eq!(got, expected);
    assert_eq!(
        serde_json::to_string(&got).unwrap(),
        r#"{"weekday":"Mon","open":"09:00:00","close":"17:30:00"}"#,
    );
}

#[test]
fn errors_propagate() {
    let _ = crate::Logger::init();

    let json = r#"{"weekday":"Mon","open":"9:00","close":"17:60"}"#;
    let err = serde_json::from_str::<Opening>(json).unwrap_err();
    assert!(err.is_data(), "{err}");
    assert!(
        err.to_string().contains(
            "Time::deserialize: invalid minute: \
             value 60 is not in the required range of 0..=59",
        ),
        "{err}",
    );

    let err = serde_json::from_str::<Time>("null").unwrap_err();
    assert!(err.is_data(), "{err}");
    let err = serde_json::from_str::<Time>("[8, 56, 4]").unwrap_err();
    assert!(err.is_data(), "{err}");
}
