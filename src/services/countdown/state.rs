use chrono::{DateTime, Local};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Remaining time until the countdown target, broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownState {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Raw difference `target - now`; zero or negative once the target has passed.
    pub remaining_millis: i64,
}

impl CountdownState {
    pub fn is_expired(&self) -> bool {
        self.remaining_millis <= 0
    }

    /// Zero-padded display strings in days, hours, minutes, seconds order.
    pub fn padded(&self) -> [String; 4] {
        [
            pad(self.days),
            pad(self.hours),
            pad(self.minutes),
            pad(self.seconds),
        ]
    }
}

/// Compute the time left until `target` as seen at `now`.
pub fn calc_time_left(target: DateTime<Local>, now: DateTime<Local>) -> CountdownState {
    let diff = target.signed_duration_since(now).num_milliseconds();
    if diff <= 0 {
        return CountdownState {
            remaining_millis: diff,
            ..CountdownState::default()
        };
    }

    CountdownState {
        days: diff / MILLIS_PER_DAY,
        hours: (diff / MILLIS_PER_HOUR) % 24,
        minutes: (diff / MILLIS_PER_MINUTE) % 60,
        seconds: (diff / MILLIS_PER_SECOND) % 60,
        remaining_millis: diff,
    }
}

/// Pad a component to at least two digits.
pub fn pad(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_case::test_case;

    #[test]
    fn test_decomposes_remaining_time() {
        let now = Local::now();
        let target = now
            + Duration::days(3)
            + Duration::hours(4)
            + Duration::minutes(5)
            + Duration::seconds(6)
            + Duration::milliseconds(700);

        let state = calc_time_left(target, now);
        assert_eq!(
            (state.days, state.hours, state.minutes, state.seconds),
            (3, 4, 5, 6)
        );
        assert!(!state.is_expired());
    }

    #[test]
    fn test_past_target_is_all_zero() {
        let now = Local::now();
        let state = calc_time_left(now - Duration::minutes(90), now);
        assert_eq!(
            (state.days, state.hours, state.minutes, state.seconds),
            (0, 0, 0, 0)
        );
        assert!(state.remaining_millis < 0);
        assert!(state.is_expired());
    }

    #[test]
    fn test_exact_target_is_expired() {
        let now = Local::now();
        let state = calc_time_left(now, now);
        assert_eq!(state.remaining_millis, 0);
        assert!(state.is_expired());
    }

    #[test]
    fn test_sub_second_remaining_shows_zero_but_is_not_expired() {
        let now = Local::now();
        let state = calc_time_left(now + Duration::milliseconds(400), now);
        assert_eq!(state.padded(), ["00", "00", "00", "00"].map(String::from));
        assert!(!state.is_expired());
    }

    #[test_case(0, "00")]
    #[test_case(7, "07")]
    #[test_case(9, "09")]
    #[test_case(10, "10")]
    #[test_case(59, "59")]
    #[test_case(365, "365")]
    fn test_pad(value: i64, expected: &str) {
        assert_eq!(pad(value), expected);
    }
}
