use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use super::Reason;

/// The JSON document posted to the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackPayload {
    pub reason: Reason,
    pub comments: String,
    /// Capture time, serialized as ISO-8601 UTC with milliseconds (`...T09:30:00.000Z`).
    #[serde(serialize_with = "iso8601_millis")]
    pub timestamp: DateTime<Utc>,
}

impl FeedbackPayload {
    /// Builds a payload stamped with `timestamp`.
    pub fn new(reason: Reason, comments: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            reason,
            comments: comments.into(),
            timestamp,
        }
    }
}

fn iso8601_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, h, m, s).unwrap()
    }

    #[test]
    fn wire_format() {
        let payload = FeedbackPayload::new(Reason::Waiting, "too slow", at(9, 30, 0));
        let json = serde_json::to_string(&payload).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"reason":"waiting","comments":"too slow","timestamp":"2026-10-17T09:30:00.000Z"}"#
        );
    }

    #[test]
    fn empty_comments_are_sent_as_empty_string() {
        let payload = FeedbackPayload::new(Reason::Other, "", at(0, 0, 0));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["comments"], "");
        assert_eq!(value["reason"], "other");
    }

    #[test]
    fn timestamp_keeps_milliseconds() {
        let ts = at(12, 0, 1) + chrono::Duration::milliseconds(42);
        let payload = FeedbackPayload::new(Reason::Price, "x", ts);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["timestamp"], "2026-10-17T12:00:01.042Z");
    }
}
