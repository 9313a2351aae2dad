use chrono::format::ParseErrorKind;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::DateTimeError;

use super::range;
use super::timestamp::Timestamp;

/// UTC offset of America/Sao_Paulo (no daylight saving since 2019).
pub const SAO_PAULO_OFFSET_SECS: i32 = -3 * 3600;

/// Input shape accepted by [`DateFormatter::to_timestamp`].
pub const DATE_TIME_INPUT: &str = "%d/%m/%Y %H:%M";

/// Renders and parses dates as `DD/MM/YYYY` and `HH:mm` in one fixed zone.
///
/// The zone is a fixed UTC offset, never the host's local zone, so output
/// is identical on every machine. The same offset is used to read wall-clock
/// input and as the suffix of [`combine_date_time_string`](Self::combine_date_time_string).
///
/// ```
/// use cadastro::datetime::DateFormatter;
///
/// let fmt = DateFormatter::default();
/// assert_eq!(fmt.format_date_time(1_714_584_600_000_i64).unwrap(), "01/05/2024 14:30");
/// assert_eq!(fmt.to_timestamp("01/05/2024 14:30").unwrap(), "1714584600000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FormatterSettings", into = "FormatterSettings")]
pub struct DateFormatter {
    offset: FixedOffset,
}

impl DateFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// America/Sao_Paulo, UTC-03:00.
    pub fn sao_paulo() -> Self {
        Self::new(
            FixedOffset::east_opt(SAO_PAULO_OFFSET_SECS).expect("-03:00 is a valid UTC offset"),
        )
    }

    /// Build from a whole-hour UTC offset, e.g. `-3` or `-5`.
    pub fn with_offset_hours(hours: i32) -> Result<Self, DateTimeError> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or_else(|| DateTimeError::OutOfRange(format!("UTC offset {hours}h")))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Offset label as it appears in ISO-8601 output, e.g. `-03:00`.
    pub fn offset_label(&self) -> String {
        let secs = self.offset.local_minus_utc();
        let sign = if secs < 0 { '-' } else { '+' };
        let abs = secs.unsigned_abs();
        format!("{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60)
    }

    /// Resolve any supported representation to an instant in this zone.
    pub fn resolve(
        &self,
        ts: impl Into<Timestamp>,
    ) -> Result<DateTime<FixedOffset>, DateTimeError> {
        ts.into().resolve(self.offset)
    }

    /// [`resolve`](Self::resolve), limited to years that render as `YYYY`.
    fn resolve_renderable(
        &self,
        ts: impl Into<Timestamp>,
    ) -> Result<DateTime<FixedOffset>, DateTimeError> {
        let dt = self.resolve(ts)?;
        if !(0..=9999).contains(&dt.year()) {
            return Err(DateTimeError::OutOfRange(format!("year {}", dt.year())));
        }
        Ok(dt)
    }

    /// Calendar date of `ts` in this zone.
    pub fn calendar_date(&self, ts: impl Into<Timestamp>) -> Result<NaiveDate, DateTimeError> {
        Ok(self.resolve(ts)?.date_naive())
    }

    /// `DD/MM/YYYY`. Years outside `0000..=9999` are [`DateTimeError::OutOfRange`].
    pub fn format_date(&self, ts: impl Into<Timestamp>) -> Result<String, DateTimeError> {
        Ok(self.resolve_renderable(ts)?.format("%d/%m/%Y").to_string())
    }

    /// `HH:mm`, 24-hour clock.
    pub fn format_time(&self, ts: impl Into<Timestamp>) -> Result<String, DateTimeError> {
        Ok(self.resolve_renderable(ts)?.format("%H:%M").to_string())
    }

    /// `DD/MM/YYYY HH:mm`.
    pub fn format_date_time(&self, ts: impl Into<Timestamp>) -> Result<String, DateTimeError> {
        Ok(self.resolve_renderable(ts)?.format("%d/%m/%Y %H:%M").to_string())
    }

    /// Parse `DD/MM/YYYY HH:mm` as wall-clock time in this zone.
    ///
    /// Every field must be zero-padded to its full width, so `01/05/24 14:30`
    /// is malformed rather than the year 24. Seconds are always zero.
    pub fn parse_date_time(&self, input: &str) -> Result<DateTime<FixedOffset>, DateTimeError> {
        let trimmed = input.trim();
        if !has_input_shape(trimmed) {
            tracing::debug!(stage = "shape", len = trimmed.len(), "date-time rejected");
            return Err(DateTimeError::Malformed {
                input: trimmed.to_string(),
                expected: "DD/MM/YYYY HH:mm",
            });
        }
        let naive = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_INPUT).map_err(|e| {
            match e.kind() {
                ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                    DateTimeError::OutOfRange(trimmed.to_string())
                }
                _ => DateTimeError::Malformed {
                    input: trimmed.to_string(),
                    expected: "DD/MM/YYYY HH:mm",
                },
            }
        })?;
        self.offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| DateTimeError::OutOfRange(trimmed.to_string()))
    }

    /// Parse `DD/MM/YYYY HH:mm` and return epoch milliseconds as a string.
    ///
    /// Inverse of [`format_date_time`](Self::format_date_time) for instants
    /// with zero seconds; seconds and milliseconds are lost otherwise.
    pub fn to_timestamp(&self, input: &str) -> Result<String, DateTimeError> {
        Ok(self.parse_date_time(input)?.timestamp_millis().to_string())
    }

    /// Join the calendar date of `date` and the clock time of `time` into
    /// `YYYY-MM-DDTHH:mm:ss` followed by this formatter's offset label.
    ///
    /// Fields are taken as they are: neither argument is converted between
    /// zones, so both should already be wall-clock values in this zone.
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use cadastro::datetime::DateFormatter;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
    /// assert_eq!(
    ///     DateFormatter::default().combine_date_time_string(&date, &time),
    ///     "2024-05-01T14:30:00-03:00"
    /// );
    /// ```
    pub fn combine_date_time_string<D: Datelike, T: Timelike>(&self, date: &D, time: &T) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}",
            date.year(),
            date.month(),
            date.day(),
            time.hour(),
            time.minute(),
            time.second(),
            self.offset_label()
        )
    }

    /// Today's calendar date in this zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// Calendar date of `ts` in this zone is strictly after today.
    pub fn is_future_date(&self, ts: impl Into<Timestamp>) -> Result<bool, DateTimeError> {
        Ok(range::is_future_date_on(self.calendar_date(ts)?, self.today()))
    }

    /// Calendar date of `ts` in this zone is strictly before today.
    pub fn is_past_date(&self, ts: impl Into<Timestamp>) -> Result<bool, DateTimeError> {
        Ok(range::is_past_date_on(self.calendar_date(ts)?, self.today()))
    }

    pub fn is_at_least_18_years_old(
        &self,
        birth: impl Into<Timestamp>,
    ) -> Result<bool, DateTimeError> {
        Ok(range::is_at_least_18_years_old_on(
            self.calendar_date(birth)?,
            self.today(),
        ))
    }
}

/// `DD/MM/YYYY HH:mm` with every field at full width and all digits.
fn has_input_shape(input: &str) -> bool {
    input.split_once(' ').is_some_and(|(date, time)| {
        fields_match(date, '/', &[2, 2, 4]) && fields_match(time, ':', &[2, 2])
    })
}

fn fields_match(text: &str, sep: char, widths: &[usize]) -> bool {
    let fields: Vec<&str> = text.split(sep).collect();
    fields.len() == widths.len()
        && fields.iter().zip(widths).all(|(field, &width)| {
            field.len() == width && field.bytes().all(|b| b.is_ascii_digit())
        })
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::sao_paulo()
    }
}

/// Serialized form of a [`DateFormatter`], as it appears in host
/// application settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterSettings {
    /// Offset in seconds east of UTC (`-10800` for Sao Paulo).
    pub utc_offset_secs: i32,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            utc_offset_secs: SAO_PAULO_OFFSET_SECS,
        }
    }
}

impl TryFrom<FormatterSettings> for DateFormatter {
    type Error = DateTimeError;

    fn try_from(setting: FormatterSettings) -> Result<Self, Self::Error> {
        FixedOffset::east_opt(setting.utc_offset_secs)
            .map(Self::new)
            .ok_or_else(|| {
                DateTimeError::OutOfRange(format!("UTC offset {}s", setting.utc_offset_secs))
            })
    }
}

impl From<DateFormatter> for FormatterSettings {
    fn from(fmt: DateFormatter) -> Self {
        Self {
            utc_offset_secs: fmt.offset.local_minus_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Utc};

    use super::*;

    #[test]
    fn zero_padding() {
        let fmt = DateFormatter::default();
        assert_eq!(fmt.format_date("2024-01-02T03:04").unwrap(), "02/01/2024");
        assert_eq!(fmt.format_time("2024-01-02T03:04").unwrap(), "03:04");
        assert_eq!(fmt.format_date_time("2024-01-02T23:59").unwrap(), "02/01/2024 23:59");
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let fmt = DateFormatter::default();
        assert!(matches!(
            fmt.to_timestamp("2024-05-01 14:30").unwrap_err(),
            DateTimeError::Malformed { .. }
        ));
        assert!(matches!(
            fmt.to_timestamp("01/05/2024").unwrap_err(),
            DateTimeError::Malformed { .. }
        ));
    }

    #[test]
    fn parse_requires_full_width_fields() {
        let fmt = DateFormatter::default();
        for input in [
            "01/05/24 14:30",
            "1/5/2024 14:30",
            "01/05/02024 14:30",
            "01/05/2024 4:30",
            "01/05/2024  14:30",
            "01/05/2024 14:30:00",
            "+1/05/2024 14:30",
        ] {
            assert!(
                matches!(fmt.to_timestamp(input), Err(DateTimeError::Malformed { .. })),
                "{input} should be malformed"
            );
        }
        assert!(fmt.to_timestamp(" 01/05/2024 14:30 ").is_ok());
    }

    #[test]
    fn format_rejects_years_beyond_four_digits() {
        let fmt = DateFormatter::default();
        assert!(matches!(
            fmt.format_date(300_000_000_000_000_i64).unwrap_err(),
            DateTimeError::OutOfRange(_)
        ));
        assert!(matches!(
            fmt.format_date_time(-62_198_755_620_000_i64).unwrap_err(),
            DateTimeError::OutOfRange(_)
        ));
        assert_eq!(fmt.format_date("9999-12-31T12:00").unwrap(), "31/12/9999");
        assert_eq!(fmt.format_date("0000-01-01T12:00").unwrap(), "01/01/0000");
    }

    #[test]
    fn range_checks_use_zone_calendar_date() {
        let fmt = DateFormatter::default();
        let tomorrow = fmt.today() + chrono::Days::new(1);
        // 01:00 UTC tomorrow is 22:00 today in Sao Paulo.
        let late_evening = Utc.from_utc_datetime(&tomorrow.and_hms_opt(1, 0, 0).unwrap());
        assert!(!fmt.is_future_date(late_evening).unwrap());
        assert!(fmt.is_future_date(tomorrow).unwrap());
        assert!(fmt.is_past_date("not a date").is_err());
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        let fmt = DateFormatter::default();
        assert!(matches!(
            fmt.to_timestamp("31/02/2024 10:00").unwrap_err(),
            DateTimeError::OutOfRange(_)
        ));
        assert!(matches!(
            fmt.to_timestamp("01/05/2024 25:00").unwrap_err(),
            DateTimeError::OutOfRange(_)
        ));
    }

    #[test]
    fn combine_ignores_input_zone() {
        let fmt = DateFormatter::default();
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 23, 0, 0).unwrap();
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(
            fmt.combine_date_time_string(&date, &time),
            "2024-05-01T14:30:00-03:00"
        );
    }

    #[test]
    fn combine_keeps_seconds() {
        let fmt = DateFormatter::default();
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let time = NaiveTime::from_hms_opt(8, 5, 9).unwrap();
        assert_eq!(
            fmt.combine_date_time_string(&date, &time),
            "2024-12-31T08:05:09-03:00"
        );
    }

    #[test]
    fn other_offsets() {
        let fmt = DateFormatter::with_offset_hours(2).unwrap();
        assert_eq!(fmt.offset_label(), "+02:00");
        assert_eq!(
            fmt.format_date_time("2024-05-01T12:00:00Z").unwrap(),
            "01/05/2024 14:00"
        );
        assert!(DateFormatter::with_offset_hours(30).is_err());
    }

    #[test]
    fn offset_label_default() {
        assert_eq!(DateFormatter::default().offset_label(), "-03:00");
        assert_eq!(DateFormatter::with_offset_hours(0).unwrap().offset_label(), "+00:00");
    }

    #[test]
    fn serde_as_offset_seconds() {
        let json = serde_json::to_string(&DateFormatter::default()).unwrap();
        assert_eq!(json, r#"{"utc_offset_secs":-10800}"#);
        let back: DateFormatter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DateFormatter::default());
        assert!(serde_json::from_str::<DateFormatter>(r#"{"utc_offset_secs":999999}"#).is_err());
    }

    #[test]
    fn calendar_date_in_zone() {
        let fmt = DateFormatter::default();
        // 02:00 UTC is still the previous day in Sao Paulo.
        let date = fmt.calendar_date("2024-05-02T02:00:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }
}
