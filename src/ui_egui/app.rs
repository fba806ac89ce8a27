mod digits;
mod lifecycle;
mod selector;

use crate::models::country::Country;
use crate::services::controller::HolidayController;
use std::time::Instant;

/// Window showing the next holiday and a live countdown to it.
pub struct HolidayCountdownApp {
    controller: HolidayController,
    /// Selector controls, one button per country
    countries: Vec<Country>,
}

impl eframe::App for HolidayCountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.poll(now);

        self.render_selector(ctx);
        self.render_main_panel(ctx, now);

        // Ticks wake the window themselves; only flips need continuous frames.
        if self.controller.display().is_animating(now) {
            ctx.request_repaint();
        }
    }
}
