// Module exports for models

pub mod country;
pub mod holiday;
pub mod settings;
