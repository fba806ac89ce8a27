// Date utility functions

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

use crate::models::settings::DisplayLocale;

const CZECH_MONTHS_GENITIVE: [&str; 12] = [
    "ledna", "února", "března", "dubna", "května", "června", "července", "srpna", "září",
    "října", "listopadu", "prosince",
];

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").ok()
}

/// Midnight at the start of `date` in the local timezone.
///
/// When midnight falls into a DST gap the earliest valid instant of that day
/// is used instead.
pub fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            (1..=3)
                .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
                .find_map(|candidate| Local.from_local_datetime(&candidate).earliest())
        })
}

/// Parse an ISO date string straight to its local midnight.
pub fn parse_local_midnight(date_str: &str) -> Option<DateTime<Local>> {
    parse_iso_date(date_str).and_then(local_midnight)
}

/// Long human readable date, e.g. `1. května 2025` or `May 1, 2025`.
pub fn format_long_date(date: NaiveDate, locale: DisplayLocale) -> String {
    match locale {
        DisplayLocale::Czech => format!(
            "{}. {} {}",
            date.day(),
            CZECH_MONTHS_GENITIVE[date.month0() as usize],
            date.year()
        ),
        DisplayLocale::English => date.format("%B %-d, %Y").to_string(),
    }
}
