//! Holiday text and the four flip-digit cells.

use super::HolidayCountdownApp;
use crate::services::display::DigitCell;
use egui::{Align2, Color32, FontId, RichText, Sense};
use std::time::Instant;

const CELL_WIDTH: f32 = 84.0;
const CELL_HEIGHT: f32 = 72.0;
const CELL_ROUNDING: f32 = 8.0;
const DIGIT_FONT_SIZE: f32 = 44.0;

fn cell_colors(is_dark: bool) -> (Color32, Color32) {
    if is_dark {
        (Color32::from_rgb(40, 44, 60), Color32::from_rgb(235, 238, 245))
    } else {
        (Color32::from_rgb(10, 34, 145), Color32::WHITE)
    }
}

/// Text alpha during a flip: fades out to the midpoint, then back in.
fn flip_alpha(progress: Option<f32>) -> f32 {
    progress.map_or(1.0, |p| (1.0 - 2.0 * p).abs())
}

impl HolidayCountdownApp {
    pub(super) fn render_main_panel(&self, ctx: &egui::Context, now: Instant) {
        let display = self.controller.display();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new(display.name()).size(26.0));
                if !display.local_name().is_empty() {
                    ui.label(RichText::new(display.local_name()).italics());
                }
                ui.label(RichText::new(display.date()).size(16.0));
                ui.add_space(16.0);

                if display.is_loading() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(display.locale().loading_text());
                    });
                    return;
                }

                let captions = display.locale().digit_captions();
                let is_dark = ui.visuals().dark_mode;
                ui.horizontal(|ui| {
                    for (cell, caption) in display.digits().iter().zip(captions) {
                        ui.vertical(|ui| {
                            render_digit_cell(ui, cell, now, is_dark);
                            ui.label(RichText::new(caption).small());
                        });
                    }
                });
            });
        });
    }
}

fn render_digit_cell(ui: &mut egui::Ui, cell: &DigitCell, now: Instant, is_dark: bool) {
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(CELL_WIDTH, CELL_HEIGHT), Sense::hover());
    let (background, foreground) = cell_colors(is_dark);
    let alpha = flip_alpha(cell.flip_progress(now));

    let painter = ui.painter();
    painter.rect_filled(rect, CELL_ROUNDING, background);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        cell.text(),
        FontId::monospace(DIGIT_FONT_SIZE),
        foreground.gamma_multiply(alpha),
    );
}

#[cfg(test)]
mod tests {
    use super::flip_alpha;

    #[test]
    fn test_flip_alpha_dips_at_midpoint() {
        assert_eq!(flip_alpha(None), 1.0);
        assert_eq!(flip_alpha(Some(0.0)), 1.0);
        assert_eq!(flip_alpha(Some(0.5)), 0.0);
        assert!(flip_alpha(Some(0.75)) > 0.4);
    }
}
