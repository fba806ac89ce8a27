mod app;

pub use app::HolidayCountdownApp;
