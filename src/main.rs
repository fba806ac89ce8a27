// Holiday Countdown
// Main entry point

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use holiday_countdown::models::country::normalize_country_code;
use holiday_countdown::services::controller::HolidayController;
use holiday_countdown::services::display::HolidayDisplay;
use holiday_countdown::services::holiday::HolidayFetcher;
use holiday_countdown::services::settings::SettingsService;
use holiday_countdown::ui_egui::HolidayCountdownApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Holiday Countdown");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = settings_service.load_or_initialize();
    log::info!(
        "Loaded settings from {}: default_country={}, locale={:?}",
        settings_service.path().display(),
        settings.default_country,
        settings.locale
    );

    // Countdown ticks run on this runtime; it must outlive the window.
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    let fetcher = HolidayFetcher::from_settings(&settings)?;
    let initial_country =
        normalize_country_code(&settings.default_country).unwrap_or_else(|| "CZ".to_string());
    let controller = HolidayController::new(
        Arc::new(fetcher),
        runtime.handle().clone(),
        initial_country,
        HolidayDisplay::new(settings.locale),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Holiday Countdown")
            .with_inner_size([520.0, 340.0])
            .with_min_inner_size([380.0, 260.0]),
        ..Default::default()
    };

    let countries = settings.countries;
    eframe::run_native(
        "Holiday Countdown",
        options,
        Box::new(move |cc| Ok(Box::new(HolidayCountdownApp::new(cc, controller, countries)))),
    )
    .map_err(|err| anyhow!("Holiday Countdown window failed: {err}"))
}
