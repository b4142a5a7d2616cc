use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of one employee in the time-clock export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Create a new user id.
    pub fn new(v: i64) -> Self {
        Self(v)
    }

    /// Raw id as i64.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(v: i64) -> Self {
        UserId::new(v)
    }
}

/// One day's clock-in/clock-out pair for a single user.
///
/// `start <= end` is expected from the source data but not enforced here;
/// interval computations pass the difference through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPresence {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Per-date presence entries for a single user.
pub type UserPresence = BTreeMap<NaiveDate, DayPresence>;

/// Full dataset: user id -> calendar date -> start/end pair.
///
/// Built fresh on every load; ordered keys keep iteration deterministic.
pub type PresenceIndex = BTreeMap<UserId, UserPresence>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new() {
        let id = UserId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_user_id_equality() {
        let id1 = UserId::new(10);
        let id2 = UserId::new(10);
        let id3 = UserId::new(11);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_user_id_ordering() {
        let id1 = UserId::new(10);
        let id2 = UserId::new(11);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_user_id_from_i64() {
        let id: UserId = 99.into();
        assert_eq!(id.value(), 99);
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(10).to_string(), "10");
    }

    #[test]
    fn test_day_presence_equality() {
        let t1 = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let t2 = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let a = DayPresence { start: t1, end: t2 };
        let b = DayPresence { start: t1, end: t2 };
        assert_eq!(a, b);
    }
}
