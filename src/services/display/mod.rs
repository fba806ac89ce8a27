//! Display regions for the holiday countdown.
//!
//! Holds the text the window paints: holiday name, localised name, date, the
//! loading indicator and the four digit cells. The egui layer only reads it.

use std::time::{Duration, Instant};

use crate::models::holiday::HolidayRecord;
use crate::models::settings::DisplayLocale;
use crate::services::countdown::CountdownState;
use crate::utils::date::{format_long_date, parse_iso_date};

/// Length of the flip transition played when a digit cell changes.
pub const FLIP_DURATION: Duration = Duration::from_millis(150);

pub const DATE_PLACEHOLDER: &str = "—";

/// A two-or-more character digit display that animates only on real changes.
#[derive(Debug, Clone)]
pub struct DigitCell {
    text: String,
    flip_started: Option<Instant>,
    transitions: u64,
}

impl Default for DigitCell {
    fn default() -> Self {
        Self {
            text: "00".to_string(),
            flip_started: None,
            transitions: 0,
        }
    }
}

impl DigitCell {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of flip transitions started so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Rewrite the cell if `value` differs from what it shows. Returns whether
    /// a transition was started.
    pub fn set(&mut self, value: &str, now: Instant) -> bool {
        if self.text == value {
            return false;
        }

        self.text = value.to_string();
        self.flip_started = Some(now);
        self.transitions += 1;
        true
    }

    /// Progress of the running flip in `0.0..1.0`, `None` once it has finished.
    pub fn flip_progress(&self, now: Instant) -> Option<f32> {
        let started = self.flip_started?;
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= FLIP_DURATION {
            None
        } else {
            Some(elapsed.as_secs_f32() / FLIP_DURATION.as_secs_f32())
        }
    }
}

#[derive(Debug, Clone)]
pub struct HolidayDisplay {
    locale: DisplayLocale,
    name: String,
    local_name: String,
    date: String,
    loading: bool,
    digits: [DigitCell; 4],
}

impl HolidayDisplay {
    pub fn new(locale: DisplayLocale) -> Self {
        Self {
            locale,
            name: String::new(),
            local_name: String::new(),
            date: String::new(),
            loading: false,
            digits: Default::default(),
        }
    }

    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn digits(&self) -> &[DigitCell; 4] {
        &self.digits
    }

    /// Loading shows the spinner and hides the digits; otherwise the reverse.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Write a holiday into the text regions, or the error state for `None`.
    pub fn render_holiday_info(&mut self, record: Option<&HolidayRecord>) {
        let Some(holiday) = record else {
            self.name = self.locale.error_placeholder().to_string();
            self.local_name.clear();
            self.date = DATE_PLACEHOLDER.to_string();
            return;
        };

        self.name = holiday.name.clone();
        self.local_name = holiday
            .distinct_local_name()
            .map(|local| format!("({})", local))
            .unwrap_or_default();

        self.date = match parse_iso_date(&holiday.date) {
            Some(date) => format_long_date(date, self.locale),
            None => {
                log::warn!("Holiday '{}' has unparseable date '{}'", holiday.name, holiday.date);
                DATE_PLACEHOLDER.to_string()
            }
        };
    }

    /// Apply one countdown tick. Returns how many cells actually changed.
    pub fn apply_countdown(&mut self, state: &CountdownState, now: Instant) -> usize {
        let changed = self
            .digits
            .iter_mut()
            .zip(state.padded())
            .filter_map(|(cell, value)| cell.set(&value, now).then_some(()))
            .count();
        self.set_loading(false);
        changed
    }

    /// Whether any digit is mid-flip and the window should keep repainting.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.digits
            .iter()
            .any(|cell| cell.flip_progress(now).is_some())
    }
}
