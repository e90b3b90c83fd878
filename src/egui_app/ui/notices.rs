use eframe::egui::{self, Align2, Frame, Margin, RichText, Stroke};

use super::RiskDeskApp;
use super::style;

impl RiskDeskApp {
    /// Stacked notices in the top-right corner, each with its own dismiss
    /// button. Expiry itself happens in the controller's poll step.
    pub(super) fn render_notices(&mut self, ctx: &egui::Context) {
        if self.controller.ui.notices.is_empty() {
            return;
        }
        let palette = style::palette();
        let mut dismissed = Vec::new();
        egui::Area::new(egui::Id::new("notice_stack"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 40.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                for notice in self.controller.ui.notices.iter() {
                    let tone = style::severity_color(notice.severity);
                    Frame::new()
                        .fill(palette.bg_tertiary)
                        .stroke(Stroke::new(1.0, tone))
                        .inner_margin(Margin::symmetric(8, 6))
                        .corner_radius(4.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&notice.message).color(tone));
                                if ui.small_button("✕").clicked() {
                                    dismissed.push(notice.id);
                                }
                            });
                        });
                    ui.add_space(6.0);
                }
            });
        for id in dismissed {
            self.controller.ui.notices.dismiss(id);
        }
    }
}
