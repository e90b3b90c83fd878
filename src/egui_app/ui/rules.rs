use eframe::egui::{self, Frame, Margin, RichText, Stroke, Ui};

use super::{RiskDeskApp, style};
use crate::egui_app::view_model::pretty_json;

impl RiskDeskApp {
    pub(super) fn render_rules(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Security Rules");
        ui.add_space(8.0);

        if self.controller.ui.rules.rows.is_empty() {
            ui.label(RichText::new("No rules configured").color(palette.text_muted));
            return;
        }
        for rule in &self.controller.ui.rules.rows {
            Frame::new()
                .fill(palette.bg_tertiary)
                .stroke(Stroke::new(1.0, palette.panel_outline))
                .inner_margin(Margin::symmetric(10, 8))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(&rule.rule_id)
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.label(RichText::new(&rule.condition_type).color(palette.accent));
                        let (state, tone) = if rule.is_active {
                            ("active", palette.success)
                        } else {
                            ("inactive", palette.text_muted)
                        };
                        ui.label(RichText::new(state).color(tone));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("priority {}", rule.priority))
                                    .color(palette.text_muted),
                            );
                        });
                    });
                    ui.collapsing(format!("Definition##{}", rule.rule_id), |ui| {
                        ui.label(RichText::new("Condition").color(palette.text_muted));
                        ui.label(RichText::new(pretty_json(&rule.condition_json)).monospace());
                        ui.label(RichText::new("Action").color(palette.text_muted));
                        ui.label(RichText::new(pretty_json(&rule.action_json)).monospace());
                    });
                });
            ui.add_space(6.0);
        }
    }
}
