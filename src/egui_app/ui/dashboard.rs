use eframe::egui::{self, Frame, Margin, RichText, Stroke, Ui};

use super::charts::draw_chart;
use super::{RiskDeskApp, style};
use crate::egui_app::state::ChartSlot;
use crate::egui_app::view_model::format_datetime;

impl RiskDeskApp {
    pub(super) fn render_dashboard(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let mut refresh = false;
        ui.horizontal(|ui| {
            ui.heading("Security Overview");
            if self.controller.ui.dashboard.loading {
                ui.spinner();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                refresh = ui.button("Refresh").clicked();
            });
        });
        ui.add_space(8.0);

        match &self.controller.ui.dashboard.summary {
            Some(summary) => {
                ui.horizontal(|ui| {
                    total_card(ui, "Data objects", summary.total_data_objects);
                    total_card(ui, "Threats", summary.total_threats);
                    total_card(ui, "Active rules", summary.total_rules);
                });
                ui.add_space(12.0);

                let half = ui.available_width() / 2.0 - 8.0;
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(half);
                        if let Some(model) = self.controller.charts().get(ChartSlot::SecurityLevels)
                        {
                            draw_chart(ui, "Objects by security level", model);
                        }
                    });
                    ui.vertical(|ui| {
                        ui.set_width(half);
                        if let Some(model) =
                            self.controller.charts().get(ChartSlot::LifecycleStages)
                        {
                            draw_chart(ui, "Objects by lifecycle stage", model);
                        }
                    });
                });
                ui.add_space(12.0);
                if let Some(model) = self.controller.charts().get(ChartSlot::ThreatStatistics) {
                    draw_chart(ui, "Threats per stage (avg risk overlay)", model);
                }
                ui.add_space(12.0);

                ui.label(
                    RichText::new("Recent events")
                        .strong()
                        .color(palette.text_primary),
                );
                if summary.recent_events.is_empty() {
                    ui.label(RichText::new("No recent events").color(palette.text_muted));
                } else {
                    for event in &summary.recent_events {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format_datetime(&event.event_time))
                                    .color(palette.text_muted),
                            );
                            ui.label(
                                RichText::new(&event.trigger_condition).color(palette.accent),
                            );
                            ui.label(&event.result);
                        });
                    }
                }
            }
            None => {
                ui.label(RichText::new("Loading dashboard…").color(palette.text_muted));
            }
        }

        if refresh {
            self.controller.refresh_dashboard();
        }
    }
}

fn total_card(ui: &mut Ui, caption: &str, value: i64) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_tertiary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .inner_margin(Margin::symmetric(16, 10))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(value.to_string())
                        .heading()
                        .color(palette.accent),
                );
                ui.label(RichText::new(caption).color(palette.text_muted));
            });
        });
}
