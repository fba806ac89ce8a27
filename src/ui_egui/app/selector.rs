use super::HolidayCountdownApp;
use egui::RichText;

impl HolidayCountdownApp {
    /// Country buttons; the active marker follows the click immediately.
    pub(super) fn render_selector(&mut self, ctx: &egui::Context) {
        let mut clicked: Option<String> = None;

        egui::TopBottomPanel::top("country_selector").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for country in &self.countries {
                    let is_active = country.code == self.controller.active_country();
                    let response = ui
                        .selectable_label(is_active, RichText::new(&country.code).strong())
                        .on_hover_text(country.label.as_str());
                    if response.clicked() {
                        clicked = Some(country.code.clone());
                    }
                }
            });
        });

        if let Some(code) = clicked {
            self.controller.select_country(&code);
        }
    }
}
