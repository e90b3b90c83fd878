use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::Severity;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub info: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(16, 18, 22),
        bg_secondary: Color32::from_rgb(28, 31, 36),
        bg_tertiary: Color32::from_rgb(42, 46, 53),
        panel_outline: Color32::from_rgb(54, 60, 70),
        text_primary: Color32::from_rgb(198, 204, 212),
        text_muted: Color32::from_rgb(138, 145, 155),
        accent: Color32::from_rgb(108, 174, 255),
        info: Color32::from_rgb(96, 156, 220),
        success: Color32::from_rgb(96, 186, 128),
        warning: Color32::from_rgb(222, 168, 62),
        danger: Color32::from_rgb(222, 92, 92),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget_tone(&mut visuals.widgets.inactive, palette);
    set_widget_tone(&mut visuals.widgets.hovered, palette);
    set_widget_tone(&mut visuals.widgets.active, palette);
    set_widget_tone(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.menu_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_widget_tone(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn severity_color(severity: Severity) -> Color32 {
    let palette = palette();
    match severity {
        Severity::Info => palette.info,
        Severity::Success => palette.success,
        Severity::Warning => palette.warning,
        Severity::Danger => palette.danger,
    }
}

/// Badge tone for a backend security level.
pub fn level_color(level: &str) -> Color32 {
    let palette = palette();
    match level {
        "core" => palette.danger,
        "important" => palette.warning,
        "internal" => palette.info,
        "public" => palette.success,
        _ => palette.text_muted,
    }
}

/// Fixed series colors for chart segments, cycled by index.
pub fn chart_color(index: usize) -> Color32 {
    const SERIES: [Color32; 6] = [
        Color32::from_rgb(108, 174, 255),
        Color32::from_rgb(96, 186, 128),
        Color32::from_rgb(222, 168, 62),
        Color32::from_rgb(222, 92, 92),
        Color32::from_rgb(168, 126, 222),
        Color32::from_rgb(92, 196, 196),
    ];
    SERIES[index % SERIES.len()]
}
