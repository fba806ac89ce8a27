//! Application settings loaded from `settings.toml`.
//!
//! Every field has a default so a partial file (or none at all) still yields
//! a usable configuration.

use serde::{Deserialize, Serialize};

use crate::models::country::{default_countries, normalize_country_code, Country};

pub const DEFAULT_API_BASE_URL: &str = "https://date.nager.at/api/v3/NextPublicHolidays";

/// Language used for the long date, the error placeholder and digit captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLocale {
    #[default]
    Czech,
    English,
}

impl DisplayLocale {
    /// Text shown in place of the holiday name when loading failed.
    pub fn error_placeholder(&self) -> &'static str {
        match self {
            DisplayLocale::Czech => "Chyba načítání",
            DisplayLocale::English => "Failed to load",
        }
    }

    /// Captions under the days/hours/minutes/seconds cells.
    pub fn digit_captions(&self) -> [&'static str; 4] {
        match self {
            DisplayLocale::Czech => ["dní", "hodin", "minut", "sekund"],
            DisplayLocale::English => ["days", "hours", "minutes", "seconds"],
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self {
            DisplayLocale::Czech => "Načítání…",
            DisplayLocale::English => "Loading…",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    /// Country loaded on start-up.
    pub default_country: String,
    pub locale: DisplayLocale,
    pub request_timeout_secs: u64,
    pub max_response_bytes: usize,
    pub countries: Vec<Country>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_country: "CZ".to_string(),
            locale: DisplayLocale::default(),
            request_timeout_secs: 20,
            max_response_bytes: 1024 * 1024,
            countries: default_countries(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(SettingsValidationError::InvalidBaseUrl);
        }

        if normalize_country_code(&self.default_country).is_none() {
            return Err(SettingsValidationError::InvalidCountryCode(
                self.default_country.clone(),
            ));
        }

        if self.countries.is_empty() {
            return Err(SettingsValidationError::NoCountries);
        }

        if let Some(bad) = self
            .countries
            .iter()
            .find(|country| normalize_country_code(&country.code).is_none())
        {
            return Err(SettingsValidationError::InvalidCountryCode(bad.code.clone()));
        }

        if self.request_timeout_secs == 0 {
            return Err(SettingsValidationError::ZeroTimeout);
        }

        if self.max_response_bytes == 0 {
            return Err(SettingsValidationError::ZeroResponseLimit);
        }

        Ok(())
    }

    /// Upper-case every country code so selector matching is exact.
    pub fn normalize_codes(&mut self) {
        if let Some(code) = normalize_country_code(&self.default_country) {
            self.default_country = code;
        }
        for country in &mut self.countries {
            if let Some(code) = normalize_country_code(&country.code) {
                country.code = code;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    InvalidBaseUrl,
    InvalidCountryCode(String),
    NoCountries,
    ZeroTimeout,
    ZeroResponseLimit,
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl => write!(f, "API base URL must start with http:// or https://"),
            Self::InvalidCountryCode(code) => {
                write!(f, "'{}' is not a two-letter country code", code)
            }
            Self::NoCountries => write!(f, "At least one country must be configured"),
            Self::ZeroTimeout => write!(f, "Request timeout must be greater than 0 seconds"),
            Self::ZeroResponseLimit => write!(f, "Response size limit must be greater than 0"),
        }
    }
}

impl std::error::Error for SettingsValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.default_country, "CZ");
        assert_eq!(settings.locale, DisplayLocale::Czech);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let settings = Settings {
            api_base_url: "ftp://example.com".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_rejects_bad_country_in_selector_list() {
        let mut settings = Settings::default();
        settings.countries.push(Country::new("XYZ", "Nowhere"));
        assert_eq!(
            settings.validate(),
            Err(SettingsValidationError::InvalidCountryCode("XYZ".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_country_list() {
        let settings = Settings {
            countries: Vec::new(),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsValidationError::NoCountries));
    }

    #[test]
    fn test_normalize_codes() {
        let mut settings = Settings {
            default_country: "sk".to_string(),
            countries: vec![Country::new(" de", "Deutschland"), Country::new("Sk", "Slovensko")],
            ..Settings::default()
        };
        settings.normalize_codes();
        assert_eq!(settings.default_country, "SK");
        let codes: Vec<&str> = settings.countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["DE", "SK"]);
    }

    #[test]
    fn test_locale_texts() {
        assert_eq!(DisplayLocale::Czech.error_placeholder(), "Chyba načítání");
        assert_eq!(DisplayLocale::English.digit_captions()[3], "seconds");
    }
}
