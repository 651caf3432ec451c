//! Reporting time buckets
//!
//! Buckets a `[min_time, max_time]` range of unix seconds into contiguous
//! calendar intervals (UTC). Weeks follow ISO-8601 numbering, so labels stay
//! correct across year boundaries.

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, OffsetDateTime};

/// Reporting bucket width.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(format!(
                "unknown granularity '{other}' (expected day, week, month or year)"
            )),
        }
    }
}

/// One reporting bucket: a label and the bucket's start in unix seconds.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub label: String,
    pub bucket_start: i64,
}

/// Builds ordered calendar buckets covering `[min_time, max_time]`.
///
/// Bucket starts are strictly non-decreasing and at least one bucket is
/// produced even when the range is a single instant.
pub fn time_intervals(granularity: Granularity, min_time: i64, max_time: i64) -> Vec<TimeInterval> {
    let mut buckets = Vec::new();
    let mut date = bucket_floor(granularity, date_of(min_time));

    loop {
        buckets.push(TimeInterval {
            label: bucket_label(granularity, date),
            bucket_start: midnight_ts(date),
        });
        let Some(next) = bucket_successor(granularity, date) else {
            break;
        };
        if midnight_ts(next) > max_time {
            break;
        }
        date = next;
    }

    buckets
}

fn date_of(ts: i64) -> Date {
    OffsetDateTime::from_unix_timestamp(ts)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .date()
}

fn midnight_ts(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp()
}

/// Start of the bucket containing `date`.
fn bucket_floor(granularity: Granularity, date: Date) -> Date {
    match granularity {
        Granularity::Day => date,
        Granularity::Week => {
            let back = Duration::days(date.weekday().number_days_from_monday() as i64);
            date.checked_sub(back).unwrap_or(date)
        }
        Granularity::Month => date.replace_day(1).unwrap_or(date),
        Granularity::Year => Date::from_calendar_date(date.year(), Month::January, 1)
            .unwrap_or(date),
    }
}

/// Start of the bucket after the one starting at `date`.
fn bucket_successor(granularity: Granularity, date: Date) -> Option<Date> {
    match granularity {
        Granularity::Day => date.next_day(),
        Granularity::Week => date.checked_add(Duration::days(7)),
        Granularity::Month => {
            let (year, month) = match date.month() {
                Month::December => (date.year() + 1, Month::January),
                m => (date.year(), m.next()),
            };
            Date::from_calendar_date(year, month, 1).ok()
        }
        Granularity::Year => Date::from_calendar_date(date.year() + 1, Month::January, 1).ok(),
    }
}

fn bucket_label(granularity: Granularity, date: Date) -> String {
    match granularity {
        Granularity::Day => date.to_string(),
        Granularity::Week => format!("Week {}", date.iso_week()),
        Granularity::Month => format!("{} {}", date.month(), date.year()),
        Granularity::Year => date.year().to_string(),
    }
}
