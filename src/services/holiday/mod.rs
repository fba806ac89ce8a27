mod error;
mod fetcher;

pub use error::HolidayError;
pub use fetcher::{parse_next_holiday, HolidayFetcher};

use crate::models::holiday::HolidayRecord;

/// Source of the next upcoming holiday for a country.
///
/// Implementations are called from a worker thread, never from the UI thread.
#[cfg_attr(test, mockall::automock)]
pub trait HolidaySource: Send + Sync {
    fn fetch_next_holiday(&self, country_code: &str) -> Result<HolidayRecord, HolidayError>;
}
