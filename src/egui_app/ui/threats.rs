use eframe::egui::{self, Frame, Margin, RichText, Stroke, Ui};

use super::{RiskDeskApp, style};
use crate::api::Threat;
use crate::egui_app::state::LIFECYCLE_STAGES;

impl RiskDeskApp {
    pub(super) fn render_threats(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let mut new_filter = None;
        let mut filter_changed = false;
        ui.horizontal(|ui| {
            ui.heading("Threats");
            ui.add_space(16.0);
            ui.label(RichText::new("Stage").color(palette.text_muted));
            let current = self.controller.ui.threats.stage_filter.clone();
            egui::ComboBox::from_id_salt("threat_stage_filter")
                .selected_text(current.as_deref().unwrap_or("All stages").to_string())
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(current.is_none(), "All stages")
                        .clicked()
                    {
                        new_filter = None;
                        filter_changed = true;
                    }
                    for stage in LIFECYCLE_STAGES {
                        let selected = current.as_deref() == Some(stage);
                        if ui.selectable_label(selected, stage).clicked() {
                            new_filter = Some(stage.to_string());
                            filter_changed = true;
                        }
                    }
                });
        });
        ui.add_space(8.0);

        if self.controller.ui.threats.rows.is_empty() {
            ui.label(RichText::new("No threats identified").color(palette.text_muted));
        } else {
            for threat in &self.controller.ui.threats.rows {
                Frame::new()
                    .fill(palette.bg_tertiary)
                    .stroke(Stroke::new(1.0, palette.panel_outline))
                    .inner_margin(Margin::symmetric(10, 8))
                    .corner_radius(4.0)
                    .show(ui, |ui| {
                        let (title, id_badge, stage) = header_texts(threat);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(title).strong().color(palette.text_primary));
                            ui.label(
                                RichText::new(id_badge)
                                    .monospace()
                                    .color(palette.text_muted),
                            );
                            ui.label(RichText::new(stage).color(palette.accent));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(format!("risk {:.1}", threat.risk_level))
                                            .color(risk_color(threat.risk_level)),
                                    );
                                },
                            );
                        });
                        if !threat.description.is_empty() {
                            ui.label(&threat.description);
                        }
                        if !threat.impact_scope.is_empty() {
                            ui.label(
                                RichText::new(format!("Impact: {}", threat.impact_scope))
                                    .color(palette.text_muted),
                            );
                        }
                    });
                ui.add_space(6.0);
            }
        }

        if filter_changed {
            self.controller.set_stage_filter(new_filter);
        }
    }
}

fn risk_color(risk: f64) -> egui::Color32 {
    let palette = style::palette();
    if risk >= 0.7 {
        palette.danger
    } else if risk >= 0.4 {
        palette.warning
    } else {
        palette.success
    }
}

/// Header texts for one threat card: type, id badge, stage. Every field
/// shown in the header comes through here.
fn header_texts(threat: &Threat) -> (String, String, String) {
    (
        threat.threat_type.clone(),
        format!("#{}", threat.threat_id),
        threat.stage.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_header_carries_the_backend_threat_id() {
        let threat = Threat {
            threat_id: "t-417".to_string(),
            threat_type: "unauthorized_access".to_string(),
            stage: "storage".to_string(),
            risk_level: 0.8,
            description: String::new(),
            impact_scope: String::new(),
        };
        let (title, id_badge, stage) = header_texts(&threat);
        assert_eq!(title, "unauthorized_access");
        assert_eq!(id_badge, "#t-417");
        assert_eq!(stage, "storage");
    }
}

