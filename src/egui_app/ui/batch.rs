use eframe::egui::{self, RichText, Ui};

use super::{RiskDeskApp, style};

impl RiskDeskApp {
    pub(super) fn render_batch(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Batch Assessment");
        ui.label(
            RichText::new("Paste a JSON array of data objects to score them in one call")
                .color(palette.text_muted),
        );
        ui.add_space(8.0);

        ui.add(
            egui::TextEdit::multiline(&mut self.controller.ui.batch.input)
                .id_salt("batch_input")
                .code_editor()
                .desired_rows(10)
                .desired_width(f32::INFINITY)
                .hint_text(r#"[{"name": "trajectory-7", "spatial_scale": 0.8, ...}]"#),
        );
        ui.add_space(8.0);
        let run = ui.button("Run assessment").clicked();

        if !self.controller.ui.batch.results.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new("Results").strong().color(palette.text_primary));
            egui::Grid::new("batch_results")
                .striped(true)
                .num_columns(3)
                .spacing(egui::vec2(16.0, 6.0))
                .show(ui, |ui| {
                    for header in ["Name", "Score", "Level"] {
                        ui.label(RichText::new(header).strong().color(palette.text_muted));
                    }
                    ui.end_row();
                    for row in &self.controller.ui.batch.results {
                        ui.label(&row.name);
                        ui.label(format!("{:.2}", row.security_score));
                        ui.label(
                            RichText::new(&row.security_level)
                                .color(style::level_color(&row.security_level)),
                        );
                        ui.end_row();
                    }
                });
        }

        if run {
            self.controller.run_batch_assessment();
        }
    }
}
