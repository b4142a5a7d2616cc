#[cfg(test)]
mod tests {
    use crate::data::loader::get_data;
    use crate::models::{UserId, UserPresence, WeekdayBuckets};
    use crate::services::analytics::{
        group_by_weekday, interval, mean, seconds_since_midnight, start_end_by_weekday, StatValue,
    };
    use chrono::NaiveTime;

    fn fixture_path() -> String {
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/test_data.csv").to_string()
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_mean_empty_is_integer_zero() {
        // Integer 0, not 0.0 - the distinction survives into JSON
        assert_eq!(mean(&[]), StatValue::Int(0));
        assert_ne!(mean(&[]), StatValue::Float(0.0));
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0]), StatValue::Float(1.5));
        assert_eq!(mean(&[1.5, 2.8]), StatValue::Float(2.15));
    }

    #[test]
    fn test_stat_value_scale_keeps_variant() {
        assert_eq!(StatValue::Int(0).scale(1000.0), StatValue::Int(0));
        assert_eq!(
            StatValue::Float(34745.0).scale(1000.0),
            StatValue::Float(34745000.0)
        );
    }

    #[test]
    fn test_stat_value_serialization() {
        assert_eq!(serde_json::to_string(&StatValue::Int(0)).unwrap(), "0");
        assert_eq!(
            serde_json::to_string(&StatValue::Float(30047.0)).unwrap(),
            "30047.0"
        );
    }

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(seconds_since_midnight(time(0, 0, 1)), 1);
        assert_eq!(seconds_since_midnight(time(15, 57, 44)), 57464);
        assert_eq!(seconds_since_midnight(time(0, 0, 0)), 0);
    }

    #[test]
    fn test_interval() {
        assert_eq!(interval(time(0, 0, 1), time(0, 0, 2)), 1);
        assert_eq!(interval(time(9, 39, 5), time(17, 59, 52)), 30047);
    }

    #[test]
    fn test_interval_negative_when_reversed() {
        // Deliberate pass-through, no clamping
        assert_eq!(interval(time(0, 0, 2), time(0, 0, 1)), -1);
    }

    #[test]
    fn test_group_by_weekday() {
        let data = get_data(fixture_path()).unwrap();
        let buckets = group_by_weekday(&data[&UserId::new(10)]);

        let expected: WeekdayBuckets = [
            vec![],
            vec![30047],
            vec![24465],
            vec![23705],
            vec![],
            vec![],
            vec![],
        ];
        assert_eq!(buckets, expected);
    }

    #[test]
    fn test_group_by_weekday_empty_input() {
        let days = UserPresence::new();
        let buckets = group_by_weekday(&days);
        assert!(buckets.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_start_end_by_weekday() {
        let data = get_data(fixture_path()).unwrap();
        let buckets = start_end_by_weekday(&data[&UserId::new(10)]);

        let expected_start: WeekdayBuckets = [
            vec![],
            vec![34745],
            vec![33592],
            vec![38926],
            vec![],
            vec![],
            vec![],
        ];
        let expected_end: WeekdayBuckets = [
            vec![],
            vec![64792],
            vec![58057],
            vec![62631],
            vec![],
            vec![],
            vec![],
        ];
        assert_eq!(buckets.start, expected_start);
        assert_eq!(buckets.end, expected_end);
    }
}
