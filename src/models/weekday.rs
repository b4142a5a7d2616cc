use chrono::{Datelike, NaiveDate};

/// Three-letter weekday labels, index 0 = Monday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Seven ordered per-weekday lists of measurements in seconds, index 0 = Monday.
pub type WeekdayBuckets = [Vec<i64>; 7];

/// Empty buckets for all seven weekdays.
pub fn empty_buckets() -> WeekdayBuckets {
    std::array::from_fn(|_| Vec::new())
}

/// Bucket index for a date, Monday=0 .. Sunday=6.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}
