//! Civil birth time and its Julian day.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use swisseph::swe::julday;
use thiserror::Error;

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

// swe_julday calendar flag for Gregorian dates
const GREG_CAL: u32 = 1;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Errors raised while turning user supplied date/time text into a UTC instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("Invalid time '{input}': expected HH:MM:SS")]
    InvalidTime { input: String },
    #[error("Unknown time zone '{zone}': {message}")]
    UnknownZone { zone: String, message: String },
    #[error("Local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: String, zone: String },
    #[error("Local time {local} is ambiguous in {zone}")]
    AmbiguousLocalTime { local: String, zone: String },
}

/// A continuous day count in Universal Time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(pub f64);

impl JulianDay {
    /// Julian day for a UTC instant.
    pub fn from_utc(dt: &DateTime<Utc>) -> Self {
        let seconds = dt.second() as f64 + dt.nanosecond() as f64 / 1e9;
        let hour_decimal = dt.hour() as f64 + dt.minute() as f64 / 60.0 + seconds / 3600.0;
        Self(julday(
            dt.year(),
            dt.month() as i32,
            dt.day() as i32,
            hour_decimal,
            GREG_CAL,
        ))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.0 - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

/// A birth date and wall-clock time in a named time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthMoment {
    local: NaiveDateTime,
    zone: Tz,
    utc: DateTime<Utc>,
}

impl BirthMoment {
    /// Parse date (`YYYY-MM-DD`), time (`HH:MM:SS` or `HH:MM`) and an IANA
    /// zone name. The local time must map to exactly one instant.
    pub fn parse(date: &str, time: &str, zone: &str) -> Result<Self, TimeError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
            TimeError::InvalidDate {
                input: date.to_string(),
            }
        })?;
        let time = parse_time(time)?;
        let zone: Tz = zone.trim().parse().map_err(|e| TimeError::UnknownZone {
            zone: zone.to_string(),
            message: format!("{}", e),
        })?;
        Self::from_local(date.and_time(time), zone)
    }

    pub fn from_local(local: NaiveDateTime, zone: Tz) -> Result<Self, TimeError> {
        match zone.from_local_datetime(&local) {
            LocalResult::Single(dt) => Ok(Self {
                local,
                zone,
                utc: dt.with_timezone(&Utc),
            }),
            LocalResult::Ambiguous(_, _) => Err(TimeError::AmbiguousLocalTime {
                local: local.to_string(),
                zone: zone.name().to_string(),
            }),
            LocalResult::None => Err(TimeError::NonexistentLocalTime {
                local: local.to_string(),
                zone: zone.name().to_string(),
            }),
        }
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_utc(&self.utc)
    }
}

fn parse_time(input: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeError::InvalidTime {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_j2000_epoch() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_abs_diff_eq!(JulianDay::from_utc(&dt).value(), J2000_JD, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_dates() {
        // Meeus example 7.a (1957-10-04.81) and the Unix epoch
        let sputnik = Utc.with_ymd_and_hms(1957, 10, 4, 19, 26, 24).unwrap();
        assert_abs_diff_eq!(JulianDay::from_utc(&sputnik).value(), 2_436_116.31, epsilon = 1e-6);
        let unix = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_abs_diff_eq!(JulianDay::from_utc(&unix).value(), 2_440_587.5, epsilon = 1e-9);
        let jan = Utc.with_ymd_and_hms(1987, 1, 27, 0, 0, 0).unwrap();
        assert_abs_diff_eq!(JulianDay::from_utc(&jan).value(), 2_446_822.5, epsilon = 1e-9);
    }

    #[test]
    fn test_sub_second_precision() {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 6, 45, 0).unwrap();
        let later = base + chrono::Duration::milliseconds(500);
        let delta = JulianDay::from_utc(&later).value() - JulianDay::from_utc(&base).value();
        assert_abs_diff_eq!(delta, 0.5 / 86_400.0, epsilon = 1e-8);
    }

    #[test]
    fn test_centuries_since_j2000() {
        assert_eq!(JulianDay(J2000_JD).centuries_since_j2000(), 0.0);
        assert_abs_diff_eq!(
            JulianDay(J2000_JD + 36_525.0).centuries_since_j2000(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_parse_kolkata_to_utc() {
        let moment = BirthMoment::parse("1990-08-15", "10:30:00", "Asia/Kolkata").unwrap();
        let expected = Utc.with_ymd_and_hms(1990, 8, 15, 5, 0, 0).unwrap();
        assert_eq!(moment.utc(), expected);
        assert_eq!(moment.julian_day(), JulianDay::from_utc(&expected));
    }

    #[test]
    fn test_parse_accepts_hours_and_minutes() {
        let moment = BirthMoment::parse("2024-03-01", "06:45", "UTC").unwrap();
        assert_eq!(moment.utc(), Utc.with_ymd_and_hms(2024, 3, 1, 6, 45, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            BirthMoment::parse("15/08/1990", "10:30:00", "Asia/Kolkata"),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(matches!(
            BirthMoment::parse("1990-08-15", "25:61", "Asia/Kolkata"),
            Err(TimeError::InvalidTime { .. })
        ));
        assert!(matches!(
            BirthMoment::parse("1990-08-15", "10:30:00", "Mars/Olympus"),
            Err(TimeError::UnknownZone { .. })
        ));
    }

    #[test]
    fn test_dst_gap_and_fold() {
        assert!(matches!(
            BirthMoment::parse("2021-03-14", "02:30:00", "America/New_York"),
            Err(TimeError::NonexistentLocalTime { .. })
        ));
        assert!(matches!(
            BirthMoment::parse("2021-11-07", "01:30:00", "America/New_York"),
            Err(TimeError::AmbiguousLocalTime { .. })
        ));
    }
}
