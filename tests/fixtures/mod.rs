// Test fixtures - reusable test data
// Provides consistent holiday payloads across all test files

#![allow(dead_code)]

use holiday_countdown::models::holiday::HolidayRecord;

/// Raw API bodies as served by the holiday endpoint
pub mod bodies {
    pub const CZ_NEXT: &str = r#"[
        {"date":"2025-05-01","localName":"Svátek práce","name":"Labour Day","countryCode":"CZ","fixed":true,"global":true,"counties":null,"launchYear":null,"types":["Public"]},
        {"date":"2025-05-08","localName":"Den vítězství","name":"Liberation Day","countryCode":"CZ","fixed":true,"global":true,"counties":null,"launchYear":null,"types":["Public"]}
    ]"#;

    pub const GB_NEXT: &str = r#"[
        {"date":"2025-12-25","localName":"Christmas Day","name":"Christmas Day","countryCode":"GB","fixed":false,"global":true,"counties":null,"launchYear":null,"types":["Public"]}
    ]"#;

    pub const EMPTY: &str = "[]";
}

pub fn labour_day() -> HolidayRecord {
    HolidayRecord::new("Labour Day", "Svátek práce", "2025-05-01")
}

pub fn christmas_day() -> HolidayRecord {
    HolidayRecord::new("Christmas Day", "Christmas Day", "2025-12-25")
}
