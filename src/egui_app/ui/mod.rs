//! egui renderer: one file per dashboard section plus shared chrome.

use std::time::Duration;

use eframe::egui;

use crate::config::Settings;
use crate::egui_app::controller::Controller;
use crate::egui_app::state::Section;

mod batch;
mod charts;
mod dashboard;
mod events;
mod notices;
mod objects;
mod rules;
pub(crate) mod style;
mod threats;
mod weights;

/// Smallest usable window for the six-section layout.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Top-level eframe application.
pub struct RiskDeskApp {
    pub(super) controller: Controller,
    visuals_set: bool,
}

impl RiskDeskApp {
    /// Builds the app and starts the initial data loads.
    pub fn new(settings: &Settings) -> Result<Self, String> {
        let mut controller = Controller::new(settings).map_err(|err| err.to_string())?;
        controller.load_initial();
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn prepare_frame(&mut self, ctx: &egui::Context) {
        if !self.visuals_set {
            let mut visuals = egui::Visuals::dark();
            style::apply_visuals(&mut visuals);
            ctx.set_visuals(visuals);
            self.visuals_set = true;
        }
    }

    fn render_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("section_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("riskdesk")
                        .strong()
                        .color(style::palette().accent),
                );
                ui.separator();
                let mut clicked = None;
                for section in Section::ALL {
                    let selected = self.controller.ui.section == section;
                    if ui.selectable_label(selected, section.label()).clicked() && !selected {
                        clicked = Some(section);
                    }
                }
                if let Some(section) = clicked {
                    self.controller.activate(section);
                }
            });
        });
    }

    fn render_active_section(&mut self, ctx: &egui::Context) {
        let section = self.controller.ui.section;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("section_scroll")
                .show(ui, |ui| match section {
                    Section::Dashboard => self.render_dashboard(ui),
                    Section::DataObjects => self.render_objects(ui),
                    Section::Threats => self.render_threats(ui),
                    Section::Weights => self.render_weights(ui),
                    Section::Rules => self.render_rules(ui),
                    Section::Events => self.render_events(ui),
                    Section::Assessment => self.render_batch(ui),
                });
        });
    }
}

impl eframe::App for RiskDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.prepare_frame(ctx);
        self.controller.poll_jobs();
        self.render_nav(ctx);
        self.render_active_section(ctx);
        self.render_object_modals(ctx);
        self.render_notices(ctx);
        // Keep polling while work is outstanding or notices need to expire.
        if self.controller.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}
