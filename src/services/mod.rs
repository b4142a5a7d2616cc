//! Service layer: pure statistics computed over the loaded presence index.
//!
//! Everything here is a function of its inputs; the HTTP layer loads the
//! dataset and picks a user before calling in.

pub mod analytics;

#[cfg(test)]
#[path = "analytics_tests.rs"]
mod analytics_tests;

pub use analytics::{
    group_by_weekday, interval, mean, seconds_since_midnight, start_end_by_weekday,
    StartEndBuckets, StatValue,
};
