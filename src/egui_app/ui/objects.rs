use eframe::egui::{self, Align2, RichText, Sense, SliderClamping, Stroke, Ui};

use super::{RiskDeskApp, style};
use crate::egui_app::state::{Indicator, LIFECYCLE_STAGES};
use crate::egui_app::view_model::format_datetime;

enum RowAction {
    None,
    Delete { id: i64, name: String },
}

impl RiskDeskApp {
    pub(super) fn render_objects(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let mut add_clicked = false;
        let mut refresh = false;
        ui.horizontal(|ui| {
            ui.heading("Data Objects");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                add_clicked = ui.button("Add object").clicked();
                refresh = ui.button("Refresh").clicked();
            });
        });
        ui.add_space(8.0);

        if self.controller.ui.objects.rows.is_empty() {
            ui.label(RichText::new("No data objects").color(palette.text_muted));
        } else {
            let mut action = RowAction::None;
            let rows = self.controller.ui.objects.rows.clone();
            egui::Grid::new("objects_table")
                .striped(true)
                .num_columns(8)
                .spacing(egui::vec2(16.0, 6.0))
                .show(ui, |ui| {
                    for header in [
                        "ID", "Name", "Type", "Stage", "Score", "Level", "Updated", "",
                    ] {
                        ui.label(RichText::new(header).strong().color(palette.text_muted));
                    }
                    ui.end_row();
                    for row in &rows {
                        ui.label(row.id.to_string());
                        ui.label(&row.name);
                        ui.label(&row.data_type);
                        ui.label(&row.lifecycle_stage);
                        score_bar(ui, row.security_score);
                        ui.label(
                            RichText::new(&row.security_level)
                                .color(style::level_color(&row.security_level)),
                        );
                        ui.label(format_datetime(&row.updated_at));
                        if ui.small_button("Delete").clicked() {
                            action = RowAction::Delete {
                                id: row.id,
                                name: row.name.clone(),
                            };
                        }
                        ui.end_row();
                    }
                });
            if let RowAction::Delete { id, name } = action {
                self.controller.request_delete_object(id, name);
            }
        }

        if add_clicked {
            self.controller.open_add_object();
        }
        if refresh {
            self.controller.refresh_objects();
        }
    }

    pub(super) fn render_object_modals(&mut self, ctx: &egui::Context) {
        self.render_add_object_window(ctx);
        self.render_delete_confirm_window(ctx);
    }

    fn render_add_object_window(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.objects.add_open {
            return;
        }
        let mut open = true;
        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Add data object")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .open(&mut open)
            .show(ctx, |ui| {
                let form = &mut self.controller.ui.objects.add_form;
                egui::Grid::new("add_object_form")
                    .num_columns(2)
                    .spacing(egui::vec2(12.0, 8.0))
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut form.name);
                        ui.end_row();
                        ui.label("Data type");
                        ui.text_edit_singleline(&mut form.data_type);
                        ui.end_row();
                        ui.label("Lifecycle stage");
                        egui::ComboBox::from_id_salt("add_object_stage")
                            .selected_text(form.lifecycle_stage.clone())
                            .show_ui(ui, |ui| {
                                for stage in LIFECYCLE_STAGES {
                                    if ui
                                        .selectable_label(form.lifecycle_stage == stage, stage)
                                        .clicked()
                                    {
                                        form.lifecycle_stage = stage.to_string();
                                    }
                                }
                            });
                        ui.end_row();
                        indicator_slider(ui, Indicator::S, &mut form.spatial_scale);
                        indicator_slider(ui, Indicator::P, &mut form.position_accuracy);
                        indicator_slider(ui, Indicator::C, &mut form.content_sensitivity);
                        indicator_slider(ui, Indicator::F, &mut form.data_flow);
                        indicator_slider(ui, Indicator::H, &mut form.historical_risk);
                    });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    submit = ui.button("Create").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });
        if submit {
            self.controller.submit_add_object();
        } else if cancel || !open {
            self.controller.cancel_add_object();
        }
    }

    fn render_delete_confirm_window(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.controller.ui.objects.pending_delete.clone() else {
            return;
        };
        let palette = style::palette();
        let mut open = true;
        let mut confirm = false;
        let mut cancel = false;
        egui::Window::new("Delete data object")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!("Delete \"{}\"?", pending.name));
                ui.label(RichText::new("This cannot be undone.").color(palette.danger));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    confirm = ui.button("Delete").clicked();
                    cancel = ui.button("Keep").clicked();
                });
            });
        if confirm {
            self.controller.confirm_delete_object();
        } else if cancel || !open {
            self.controller.cancel_delete_object();
        }
    }
}

fn indicator_slider(ui: &mut Ui, indicator: Indicator, value: &mut f32) {
    ui.label(indicator.label());
    ui.add(
        egui::Slider::new(value, 0.0..=1.0)
            .step_by(0.05)
            .clamping(SliderClamping::Always),
    );
    ui.end_row();
}

/// Numeric score with a small filled gauge behind it.
fn score_bar(ui: &mut Ui, score: f64) {
    let palette = style::palette();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(72.0, 14.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, palette.bg_primary);
    let fraction = score.clamp(0.0, 1.0) as f32;
    let mut fill = rect;
    fill.set_width(rect.width() * fraction);
    painter.rect_filled(fill, 2.0, palette.accent);
    painter.rect_stroke(
        rect,
        2.0,
        Stroke::new(1.0, palette.panel_outline),
        egui::StrokeKind::Inside,
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{score:.2}"),
        egui::TextStyle::Small.resolve(ui.style()),
        palette.text_primary,
    );
}
