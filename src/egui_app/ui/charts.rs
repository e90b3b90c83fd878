//! Immediate-mode chart painting for the dashboard.
//!
//! Bars and doughnuts are drawn directly with the painter. The doughnut is
//! built from circular sectors no wider than a quarter turn so every painted
//! polygon stays convex, with the hole overpainted in the panel fill.

use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, TextStyle, Ui};

use super::style;
use crate::egui_app::state::{ChartKind, ChartModel};

const CHART_HEIGHT: f32 = 220.0;
const MAX_SECTOR_SWEEP: f32 = TAU / 4.0;
const ARC_STEP: f32 = 0.15;

pub(super) fn draw_chart(ui: &mut Ui, title: &str, model: &ChartModel) {
    ui.label(
        egui::RichText::new(title)
            .strong()
            .color(style::palette().text_primary),
    );
    if model.values.is_empty() {
        ui.label(egui::RichText::new("No data").color(style::palette().text_muted));
        return;
    }
    match model.kind {
        ChartKind::Bars => draw_bars(ui, model),
        ChartKind::Doughnut => draw_doughnut(ui, model),
    }
}

fn draw_bars(ui: &mut Ui, model: &ChartModel) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let palette = style::palette();
    let font = TextStyle::Small.resolve(ui.style());

    let label_band = 18.0;
    let value_band = 14.0;
    let plot = Rect::from_min_max(
        rect.min + egui::vec2(4.0, value_band),
        rect.max - egui::vec2(4.0, label_band),
    );
    let max = model.values.iter().cloned().fold(0.0_f64, f64::max);
    let count = model.values.len();
    let slot = plot.width() / count as f32;
    let bar_width = (slot * 0.6).min(64.0);

    let mut centers = Vec::with_capacity(count);
    for (index, value) in model.values.iter().enumerate() {
        let fraction = bar_fraction(*value, max);
        let center_x = plot.left() + slot * (index as f32 + 0.5);
        let top = plot.bottom() - plot.height() * fraction;
        let bar = Rect::from_min_max(
            Pos2::new(center_x - bar_width / 2.0, top),
            Pos2::new(center_x + bar_width / 2.0, plot.bottom()),
        );
        painter.rect_filled(bar, 2.0, style::chart_color(index));
        painter.text(
            Pos2::new(center_x, top - 2.0),
            Align2::CENTER_BOTTOM,
            format_value(*value),
            font.clone(),
            palette.text_muted,
        );
        painter.text(
            Pos2::new(center_x, rect.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            &model.labels[index],
            font.clone(),
            palette.text_muted,
        );
        centers.push(center_x);
    }
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, palette.panel_outline),
    );

    if let Some(secondary) = &model.secondary {
        draw_overlay_line(&painter, &plot, &centers, secondary, &font, palette.warning);
    }
}

/// Polyline on an independent 0.0-1.0 scale spanning the full plot height,
/// with a point marker and value caption at each category.
fn draw_overlay_line(
    painter: &egui::Painter,
    plot: &Rect,
    centers: &[f32],
    values: &[f64],
    font: &FontId,
    color: Color32,
) {
    let points: Vec<Pos2> = centers
        .iter()
        .zip(values)
        .map(|(&x, &value)| {
            let clamped = value.clamp(0.0, 1.0) as f32;
            Pos2::new(x, plot.bottom() - plot.height() * clamped)
        })
        .collect();
    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(1.5, color));
    }
    for (point, value) in points.iter().zip(values) {
        painter.circle_filled(*point, 3.0, color);
        painter.text(
            *point + egui::vec2(0.0, -5.0),
            Align2::CENTER_BOTTOM,
            format!("{value:.2}"),
            font.clone(),
            color,
        );
    }
}

fn draw_doughnut(ui: &mut Ui, model: &ChartModel) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let palette = style::palette();
    let font = TextStyle::Small.resolve(ui.style());

    let radius = (rect.height() / 2.0 - 10.0).min(rect.width() / 4.0);
    let center = Pos2::new(rect.left() + rect.width() * 0.33, rect.center().y);
    let total: f64 = model.values.iter().sum();
    if total <= 0.0 {
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "No data",
            font,
            palette.text_muted,
        );
        return;
    }

    for (index, (start, end)) in slice_angles(&model.values).into_iter().enumerate() {
        fill_sector(&painter, center, radius, start, end, style::chart_color(index));
    }
    painter.circle_filled(center, radius * 0.55, palette.bg_secondary);

    // Legend with per-slice share, to the right of the ring.
    let legend_x = center.x + radius + 16.0;
    let mut legend_y = center.y - model.labels.len() as f32 * 9.0;
    for (index, label) in model.labels.iter().enumerate() {
        let share = model.values[index] / total * 100.0;
        let swatch = Rect::from_min_size(Pos2::new(legend_x, legend_y), egui::vec2(10.0, 10.0));
        painter.rect_filled(swatch, 2.0, style::chart_color(index));
        painter.text(
            Pos2::new(legend_x + 16.0, legend_y - 1.0),
            Align2::LEFT_TOP,
            format!("{label} ({share:.0}%)"),
            font.clone(),
            palette.text_primary,
        );
        legend_y += 18.0;
    }
}

/// Fills one circular sector, split into quarter-turn chunks so each painted
/// polygon is convex.
fn fill_sector(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let mut chunk_start = start;
    while chunk_start < end {
        let chunk_end = (chunk_start + MAX_SECTOR_SWEEP).min(end);
        let mut points = vec![center];
        let mut angle = chunk_start;
        while angle < chunk_end {
            points.push(arc_point(center, radius, angle));
            angle += ARC_STEP;
        }
        points.push(arc_point(center, radius, chunk_end));
        painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
        chunk_start = chunk_end;
    }
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    // Angle 0 points up; slices proceed clockwise like the source data order.
    Pos2::new(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

/// Start/end angles in radians for each value's share of the full turn.
/// Returns an empty set when the values sum to zero or less.
fn slice_angles(values: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angles = Vec::with_capacity(values.len());
    let mut cursor = 0.0_f64;
    for value in values {
        let sweep = value.max(0.0) / total * f64::from(TAU);
        angles.push((cursor as f32, (cursor + sweep) as f32));
        cursor += sweep;
    }
    angles
}

fn bar_fraction(value: f64, max: f64) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0) as f32
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
