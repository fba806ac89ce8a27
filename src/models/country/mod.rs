use serde::{Deserialize, Serialize};

/// One country selector control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub label: String,
}

impl Country {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Normalise a country code to the two upper-case ASCII letters the API expects.
pub fn normalize_country_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}

pub fn default_countries() -> Vec<Country> {
    vec![
        Country::new("CZ", "Česko"),
        Country::new("SK", "Slovensko"),
        Country::new("DE", "Deutschland"),
        Country::new("AT", "Österreich"),
        Country::new("PL", "Polska"),
        Country::new("GB", "United Kingdom"),
        Country::new("US", "United States"),
    ]
}
