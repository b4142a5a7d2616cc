//! Pure presence statistics: clock-face arithmetic, means, weekday grouping.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::models::{empty_buckets, weekday_index, UserPresence, WeekdayBuckets};

/// Seconds elapsed since 00:00:00 on the same clock face.
///
/// Pure function of the hour/minute/second components; no timezone handling.
pub fn seconds_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 3600 + i64::from(t.minute()) * 60 + i64::from(t.second())
}

/// Signed interval in seconds between two clock times.
///
/// Negative when `end` precedes `start`; callers own the start <= end
/// invariant, nothing is clamped here.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Numeric statistic that keeps the integer-zero / float-mean distinction
/// through JSON serialization (`0` for an empty bucket, `24465.0` otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
}

impl StatValue {
    /// Multiply by a factor without changing the variant.
    pub fn scale(self, factor: f64) -> StatValue {
        match self {
            StatValue::Int(v) => StatValue::Int(v * factor as i64),
            StatValue::Float(v) => StatValue::Float(v * factor),
        }
    }
}

/// Arithmetic mean; integer `0` for an empty input, float otherwise.
pub fn mean(values: &[f64]) -> StatValue {
    if values.is_empty() {
        StatValue::Int(0)
    } else {
        StatValue::Float(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Group one user's day intervals into weekday buckets, Monday=0.
///
/// Each date contributes `interval(start, end)` to its weekday's bucket;
/// weekdays with no entries stay empty.
pub fn group_by_weekday(days: &UserPresence) -> WeekdayBuckets {
    let mut buckets = empty_buckets();
    for (date, day) in days {
        buckets[weekday_index(*date)].push(interval(day.start, day.end));
    }
    buckets
}

/// Per-weekday clock-in and clock-out times, in seconds since midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct StartEndBuckets {
    pub start: WeekdayBuckets,
    pub end: WeekdayBuckets,
}

/// Group one user's clock-in/clock-out times into weekday buckets.
pub fn start_end_by_weekday(days: &UserPresence) -> StartEndBuckets {
    let mut start = empty_buckets();
    let mut end = empty_buckets();
    for (date, day) in days {
        let idx = weekday_index(*date);
        start[idx].push(seconds_since_midnight(day.start));
        end[idx].push(seconds_since_midnight(day.end));
    }
    StartEndBuckets { start, end }
}
