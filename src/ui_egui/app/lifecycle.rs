use super::HolidayCountdownApp;
use crate::models::country::Country;
use crate::services::controller::HolidayController;
use std::sync::Arc;

impl HolidayCountdownApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut controller: HolidayController,
        countries: Vec<Country>,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        controller.set_waker(Arc::new(move || ctx.request_repaint()));
        controller.start();

        Self {
            controller,
            countries,
        }
    }
}
