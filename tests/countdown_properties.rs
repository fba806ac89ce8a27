// Property-based tests for the countdown arithmetic

use chrono::{Duration, Local, NaiveDate};
use holiday_countdown::services::countdown::{calc_time_left, pad};
use holiday_countdown::utils::date::local_midnight;
use proptest::prelude::*;

const MILLIS_PER_DAY: i64 = 86_400_000;

proptest! {
    /// Property: at the target itself nothing is left
    #[test]
    fn prop_time_left_at_target_is_zero(
        year in 2000..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let target = local_midnight(date).unwrap();

        let state = calc_time_left(target, target);
        prop_assert_eq!((state.days, state.hours, state.minutes, state.seconds), (0, 0, 0, 0));
        prop_assert!(state.remaining_millis <= 0);
    }

    /// Property: components stay within their clock ranges
    #[test]
    fn prop_components_within_bounds(offset_ms in 1i64..(400 * MILLIS_PER_DAY)) {
        let now = Local::now();
        let target = now + Duration::milliseconds(offset_ms);

        let state = calc_time_left(target, now);
        prop_assert_eq!(state.remaining_millis, offset_ms);
        prop_assert_eq!(state.days, offset_ms / MILLIS_PER_DAY);
        prop_assert!((0..=23).contains(&state.hours));
        prop_assert!((0..=59).contains(&state.minutes));
        prop_assert!((0..=59).contains(&state.seconds));
    }

    /// Property: past targets never produce negative components
    #[test]
    fn prop_past_targets_are_zero(offset_ms in 0i64..(400 * MILLIS_PER_DAY)) {
        let now = Local::now();
        let state = calc_time_left(now - Duration::milliseconds(offset_ms), now);
        prop_assert_eq!((state.days, state.hours, state.minutes, state.seconds), (0, 0, 0, 0));
        prop_assert!(state.is_expired());
    }

    /// Property: single digits gain a leading zero, larger values are untouched
    #[test]
    fn prop_pad_width(value in 0i64..100_000) {
        let padded = pad(value);
        if value < 10 {
            prop_assert_eq!(padded.len(), 2);
            prop_assert!(padded.starts_with('0'));
        } else {
            prop_assert_eq!(padded, value.to_string());
        }
    }
}
