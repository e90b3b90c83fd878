use eframe::egui::{self, RichText, Ui};

use super::{RiskDeskApp, style};
use crate::egui_app::view_model::{format_datetime, short_event_id};

impl RiskDeskApp {
    pub(super) fn render_events(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Security Events");
        ui.add_space(8.0);

        if self.controller.ui.events.rows.is_empty() {
            ui.label(RichText::new("No events recorded").color(palette.text_muted));
            return;
        }
        egui::Grid::new("events_table")
            .striped(true)
            .num_columns(5)
            .spacing(egui::vec2(16.0, 6.0))
            .show(ui, |ui| {
                for header in ["ID", "Trigger", "Strategy", "Result", "Time"] {
                    ui.label(RichText::new(header).strong().color(palette.text_muted));
                }
                ui.end_row();
                for event in &self.controller.ui.events.rows {
                    ui.label(
                        RichText::new(short_event_id(&event.event_id))
                            .monospace()
                            .color(palette.text_muted),
                    );
                    ui.label(&event.trigger_condition);
                    ui.label(&event.executed_strategy);
                    ui.label(&event.result);
                    ui.label(format_datetime(&event.event_time));
                    ui.end_row();
                }
            });
    }
}
