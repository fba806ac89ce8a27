use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use super::{HolidayError, HolidaySource};
use crate::models::country::normalize_country_code;
use crate::models::holiday::HolidayRecord;
use crate::models::settings::Settings;

/// Fetches the next public holiday from the Nager.Date style API.
///
/// One request per call, no retries: a failure surfaces to the caller as-is.
pub struct HolidayFetcher {
    client: Client,
    base_url: String,
    max_response_bytes: usize,
}

impl HolidayFetcher {
    pub fn new(base_url: &str, timeout: Duration, max_response_bytes: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build holiday HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            max_response_bytes,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
            settings.max_response_bytes,
        )
    }

    pub fn url_for(&self, country_code: &str) -> String {
        format!("{}/{}", self.base_url, country_code)
    }

    fn fetch_once(&self, code: &str) -> Result<HolidayRecord, HolidayError> {
        let url = self.url_for(code);
        log::debug!("Fetching next holiday from {}", url);

        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidayError::Network { status });
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_response_bytes as u64 {
                return Err(HolidayError::ResponseTooLarge {
                    actual: content_length,
                    limit: self.max_response_bytes,
                });
            }
        }

        let bytes = response.bytes()?;
        if bytes.len() > self.max_response_bytes {
            return Err(HolidayError::ResponseTooLarge {
                actual: bytes.len() as u64,
                limit: self.max_response_bytes,
            });
        }

        parse_next_holiday(&bytes)
    }
}

impl HolidaySource for HolidayFetcher {
    fn fetch_next_holiday(&self, country_code: &str) -> Result<HolidayRecord, HolidayError> {
        let code = normalize_country_code(country_code)
            .ok_or_else(|| HolidayError::InvalidCountryCode(country_code.to_string()))?;

        let holiday = self.fetch_once(&code)?;
        log::info!("Next holiday for {}: {} on {}", code, holiday.name, holiday.date);
        Ok(holiday)
    }
}

/// Take the first entry of the API's holiday array.
pub fn parse_next_holiday(body: &[u8]) -> Result<HolidayRecord, HolidayError> {
    let holidays: Option<Vec<HolidayRecord>> = serde_json::from_slice(body)?;
    holidays
        .and_then(|list| list.into_iter().next())
        .ok_or(HolidayError::EmptyResult)
}
