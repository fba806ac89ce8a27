use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a country selection and a holiday record.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("API error: {status}")]
    Network { status: StatusCode },

    #[error("No upcoming holidays found.")]
    EmptyResult,

    #[error("Network error during holiday fetch: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Holiday response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Holiday response too large ({actual} bytes > {limit} bytes)")]
    ResponseTooLarge { actual: u64, limit: usize },

    #[error("'{0}' is not a two-letter country code")]
    InvalidCountryCode(String),

    #[error("Holiday date '{0}' is not a valid ISO date")]
    InvalidDate(String),
}
