use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::core::DateTimeError;

/// An instant in one of the representations callers hand around.
///
/// Values without an offset ([`Timestamp::Naive`], offset-less ISO strings)
/// are read as wall-clock time in the formatter's zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// ISO-8601 text: RFC 3339 with offset, `YYYY-MM-DDTHH:MM[:SS[.fff]]`,
    /// or a bare `YYYY-MM-DD` (midnight).
    Iso(String),
    /// An instant with a known offset.
    DateTime(DateTime<FixedOffset>),
    /// Wall-clock time without an offset.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Resolve to an instant viewed in `offset`.
    pub fn resolve(&self, offset: FixedOffset) -> Result<DateTime<FixedOffset>, DateTimeError> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|utc| utc.with_timezone(&offset))
                .ok_or_else(|| DateTimeError::OutOfRange(ms.to_string())),
            Self::Iso(text) => parse_iso(text, offset),
            Self::DateTime(dt) => Ok(dt.with_timezone(&offset)),
            Self::Naive(naive) => local(*naive, offset),
        }
    }
}

fn local(
    naive: NaiveDateTime,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, DateTimeError> {
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| DateTimeError::OutOfRange(naive.to_string()))
}

const NAIVE_ISO_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_iso(text: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>, DateTimeError> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&offset));
    }

    for fmt in NAIVE_ISO_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return local(naive, offset);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return local(date.and_time(NaiveTime::MIN), offset);
    }

    Err(DateTimeError::Malformed {
        input: text.to_string(),
        expected: "an ISO-8601 date or date-time",
    })
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Self::Iso(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Self::Iso(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::DateTime(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Self::Naive(date.and_time(NaiveTime::MIN))
    }
}
