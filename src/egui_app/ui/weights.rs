use eframe::egui::{self, RichText, SliderClamping, Ui};

use super::{RiskDeskApp, style};
use crate::egui_app::state::Indicator;
use crate::egui_app::view_model::percent_label;

impl RiskDeskApp {
    /// Weight editor. Each row shows a slider and a numeric field bound to
    /// the same authoritative value, so edits through either control stay in
    /// step within the frame.
    pub(super) fn render_weights(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Scoring Weights");
        ui.label(
            RichText::new("Weights are applied together and must sum to 1.0")
                .color(palette.text_muted),
        );
        ui.add_space(8.0);

        if self.controller.ui.weights.rows.is_empty() {
            ui.label(RichText::new("No weights loaded").color(palette.text_muted));
            return;
        }

        let mut edits: Vec<(Indicator, f32)> = Vec::new();
        let mut save = false;
        egui::Grid::new("weight_editor")
            .num_columns(5)
            .spacing(egui::vec2(16.0, 10.0))
            .show(ui, |ui| {
                for row in &self.controller.ui.weights.rows {
                    ui.label(RichText::new(row.indicator.label()).color(palette.text_primary));
                    let mut value = row.value;
                    if ui
                        .add(
                            egui::Slider::new(&mut value, 0.0..=1.0)
                                .step_by(0.05)
                                .show_value(false)
                                .clamping(SliderClamping::Always),
                        )
                        .changed()
                    {
                        edits.push((row.indicator, value));
                    }
                    let mut numeric = row.value;
                    if ui
                        .add(
                            egui::DragValue::new(&mut numeric)
                                .speed(0.05)
                                .range(0.0..=1.0)
                                .fixed_decimals(2),
                        )
                        .changed()
                    {
                        edits.push((row.indicator, numeric));
                    }
                    ui.label(RichText::new(percent_label(row.value)).color(palette.text_muted));
                    ui.label(
                        RichText::new(&row.calculation_method)
                            .small()
                            .color(palette.text_muted),
                    );
                    ui.end_row();
                }
            });

        let sum: f32 = self
            .controller
            .ui
            .weights
            .rows
            .iter()
            .map(|row| row.value)
            .sum();
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            save = ui.button("Save weights").clicked();
            ui.label(RichText::new(format!("Sum: {sum:.2}")).color(palette.text_muted));
        });

        for (indicator, value) in edits {
            self.controller.set_weight(indicator, value);
        }
        if save {
            self.controller.save_weights();
        }
    }
}
