/*!
Serde support for [`Time`].

A `Time` serializes as a string in canonical `HH:MM:SS` form. It deserializes
from a string (or bytes) using the default lenient parser, so `"9:10"` is
accepted as `09:10:00`. Anything other than a string is rejected with the
deserializer's own error.
*/

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{fmt::TimeParser, Time};

static PARSER: TimeParser = TimeParser::new();

impl Serialize for Time {
    #[inline]
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Time, D::Error> {
        deserializer.deserialize_str(TimeVisitor)
    }
}

struct TimeVisitor;

impl<'de> de::Visitor<'de> for TimeVisitor {
    type Value = Time;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("a time string in HH:MM:SS form")
    }

    #[inline]
    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Time, E> {
        PARSER
            .parse_with("Time::deserialize", value)
            .map_err(de::Error::custom)
    }

    #[inline]
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Time, E> {
        self.visit_bytes(value.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use serde::de::Visitor;

    use crate::time;

    use super::*;

    #[test]
    fn json_roundtrip() {
        let t = time(18, 5, 0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#""18:05:00""#);
        let got: Time = serde_json::from_str(&json).unwrap();
        assert_eq!(got, t);
    }

    #[test]
    fn json_lenient_input() {
        let got: Time = serde_json::from_str(r#""9:10""#).unwrap();
        assert_eq!(got, time(9, 10, 0));
        let got: Time = serde_json::from_str(r#""06""#).unwrap();
        assert_eq!(got, time(6, 0, 0));
    }

    #[test]
    fn json_in_struct() {
        #[derive(
            Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize,
        )]
        struct Shift {
            start: Time,
            end: Option<Time>,
        }

        let json = r#"{"start":"08:30:00","end":null}"#;
        let got: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(got, Shift { start: time(8, 30, 0), end: None });
        assert_eq!(serde_json::to_string(&got).unwrap(), json);

        let times: Vec<Time> =
            serde_json::from_str(r#"["00:00:00","23:59:59"]"#).unwrap();
        assert_eq!(times, vec![Time::MIN, Time::MAX]);
    }

    #[test]
    fn json_errors() {
        let err = serde_json::from_str::<Time>(r#""24:57:00""#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.starts_with(
                "Time::deserialize: invalid hour: \
                 value 24 is not in the required range of 0..=23",
            ),
            "{msg}",
        );

        let err = serde_json::from_str::<Time>(r#""7:30:13:4""#).unwrap_err();
        assert!(err.to_string().contains("too many parts"), "{err}");

        // Non-string JSON values fail with serde's own type error.
        let err = serde_json::from_str::<Time>("830").unwrap_err();
        assert!(err.is_data(), "{err}");
        assert!(err.to_string().contains("invalid type"), "{err}");
        assert!(
            err.to_string().contains("expected a time string"),
            "{err}",
        );

        // Malformed JSON fails before the parser is ever invoked.
        let err = serde_json::from_str::<Time>(r#""08:56:04"#).unwrap_err();
        assert!(err.is_eof(), "{err}");
    }

    #[test]
    fn from_bytes() {
        let got = TimeVisitor.visit_bytes::<de::value::Error>(b"13:14:15");
        assert_eq!(got.unwrap(), time(13, 14, 15));
    }
}
