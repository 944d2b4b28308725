use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Wire format of every timestamp emitted in a JSON payload.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Years that fit the four digit year field of [`TIMESTAMP_FORMAT`].
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("year {0} is outside of the supported range {MIN_YEAR}..={MAX_YEAR}")]
    OutOfRange(i32),
    #[error("invalid calendar date or time of day")]
    InvalidDateTime,
    #[error("could not parse timestamp: {0}")]
    Parse(#[from] chrono::ParseError),
}

/// A calendar date and time in UTC, with a precision of one second.
///
/// Naive inputs are taken to already be in UTC. Timezone-aware inputs are
/// converted to UTC when the timestamp is built, so the value never carries
/// an offset. Fractional seconds are dropped at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema)]
#[schema(value_type = String, example = "2008-09-15T12:30:00Z")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimestampError> {
        let datetime = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or(TimestampError::InvalidDateTime)?;
        Self::from_naive(datetime)
    }

    pub fn from_naive(datetime: NaiveDateTime) -> Result<Self, TimestampError> {
        let year = datetime.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimestampError::OutOfRange(year));
        }
        // Leap seconds are stored as nanoseconds >= 1e9, which also reset here.
        let datetime = datetime
            .with_nanosecond(0)
            .ok_or(TimestampError::InvalidDateTime)?;
        Ok(Self(datetime))
    }

    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, TimestampError> {
        Self::from_naive(datetime.naive_utc())
    }

    pub fn now() -> Self {
        // `Utc::now` is always within the four digit year range.
        let now = Utc::now().naive_utc();
        Self(now.with_nanosecond(0).unwrap_or(now))
    }

    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let datetime = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
        Self::from_naive(datetime)
    }
}

impl TryFrom<NaiveDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(datetime: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_naive(datetime)
    }
}

impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for Timestamp {
    type Error = TimestampError;

    fn try_from(datetime: DateTime<Tz>) -> Result<Self, Self::Error> {
        Self::from_datetime(&datetime)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
