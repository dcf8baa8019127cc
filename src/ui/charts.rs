use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color;
use crate::data::model::{Medal, MedalCounts};

const PLOT_HEIGHT: f32 = 300.0;
/// Horizontal space a category's bars may occupy.
const SLOT_WIDTH: f64 = 0.8;

/// One named run of values, one value per category.
pub struct Series<'a> {
    pub name: &'a str,
    pub color: Color32,
    pub values: Vec<f64>,
}

/// Gold, silver and bronze series over a list of per-category counts.
pub fn medal_series(counts: &[MedalCounts]) -> Vec<Series<'static>> {
    Medal::ALL
        .iter()
        .map(|&m| Series {
            name: m.label(),
            color: color::medal_color(m),
            values: counts.iter().map(|c| c.get(m) as f64).collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category bar charts (egui_plot)
// ---------------------------------------------------------------------------

/// One bar per category, each with its own colour.
pub fn bar_chart(
    ui: &mut Ui,
    id: &str,
    labels: &[String],
    values: &[f64],
    colors: &[Color32],
    y_label: &str,
) {
    let bars: Vec<Bar> = labels
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, &v))| {
            let c = colors
                .get(i % colors.len().max(1))
                .copied()
                .unwrap_or(Color32::LIGHT_BLUE);
            solid_bar(i as f64, v, SLOT_WIDTH, c).name(label)
        })
        .collect();
    show_categories(ui, id, labels, y_label, vec![BarChart::new(bars).name(y_label)]);
}

/// Series stacked on top of each other per category.
pub fn stacked_bar_chart(
    ui: &mut Ui,
    id: &str,
    labels: &[String],
    series: &[Series],
    y_label: &str,
) {
    let mut charts: Vec<BarChart> = Vec::with_capacity(series.len());
    for s in series {
        let bars = series_bars(labels, s, 0.0, SLOT_WIDTH);
        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(s.name)
            .color(s.color)
            .stack_on(&below);
        charts.push(chart);
    }
    show_categories(ui, id, labels, y_label, charts);
}

/// Series side by side within each category.
pub fn grouped_bar_chart(
    ui: &mut Ui,
    id: &str,
    labels: &[String],
    series: &[Series],
    y_label: &str,
) {
    let k = series.len().max(1) as f64;
    let width = SLOT_WIDTH / k;
    let charts = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let offset = (i as f64 - (k - 1.0) / 2.0) * width;
            BarChart::new(series_bars(labels, s, offset, width))
                .name(s.name)
                .color(s.color)
        })
        .collect();
    show_categories(ui, id, labels, y_label, charts);
}

fn series_bars(labels: &[String], s: &Series, offset: f64, width: f64) -> Vec<Bar> {
    labels
        .iter()
        .zip(&s.values)
        .enumerate()
        .map(|(i, (label, &v))| {
            solid_bar(i as f64 + offset, v, width, s.color).name(format!("{label} – {}", s.name))
        })
        .collect()
}

fn solid_bar(x: f64, value: f64, width: f64, color: Color32) -> Bar {
    Bar::new(x, value)
        .width(width)
        .fill(color)
        .stroke(Stroke::new(1.0, color))
}

fn show_categories(ui: &mut Ui, id: &str, labels: &[String], y_label: &str, charts: Vec<BarChart>) {
    let labels = labels.to_vec();
    Plot::new(id)
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .y_axis_label(y_label)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Axis text for a grid mark: the category name at whole positions, nothing between.
pub fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if idx < 0.0 || (value - idx).abs() > 1e-6 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Pie chart (painter)
// ---------------------------------------------------------------------------

/// A wedge to paint: label, fraction of the whole, colour.
pub struct Wedge<'a> {
    pub label: &'a str,
    pub fraction: f64,
    pub color: Color32,
}

/// Pie with each wedge's label outside and its percentage inside.
/// Zero-sized wedges are skipped.
pub fn pie_chart(ui: &mut Ui, wedges: &[Wedge]) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(280.0), Sense::hover());
    let center = response.rect.center();
    let radius = response.rect.width() * 0.36;
    let text_color = ui.visuals().text_color();

    let at = |angle: f32, r: f32| center + Vec2::new(angle.cos(), -angle.sin()) * r;

    let mut start = 0.0_f32;
    for w in wedges.iter().filter(|w| w.fraction > 0.0) {
        let sweep = w.fraction as f32 * TAU;
        // Thin triangles keep every piece convex, whatever the sweep.
        let steps = ((w.fraction * 72.0).ceil() as usize).max(1);
        for k in 0..steps {
            let a0 = start + sweep * k as f32 / steps as f32;
            let a1 = start + sweep * (k + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![center, at(a0, radius), at(a1, radius)],
                w.color,
                Stroke::NONE,
            ));
        }

        let mid = start + sweep / 2.0;
        painter.text(
            at(mid, radius * 1.2),
            Align2::CENTER_CENTER,
            w.label,
            FontId::proportional(14.0),
            text_color,
        );
        painter.text(
            at(mid, radius * 0.6),
            Align2::CENTER_CENTER,
            format!("{:.1}%", w.fraction * 100.0),
            FontId::proportional(13.0),
            Color32::BLACK,
        );
        start += sweep;
    }
}

// ---------------------------------------------------------------------------
// Annotated heatmap (painter)
// ---------------------------------------------------------------------------

const CELL: f32 = 72.0;
const AXIS_MARGIN: f32 = 64.0;
const SCALE_WIDTH: f32 = 18.0;

/// Square matrix of values in `[-1, 1]` on a diverging scale centred at zero.
/// `None` cells are drawn grey and annotated "n/a".
pub fn heatmap<const N: usize>(ui: &mut Ui, labels: [&str; N], matrix: &[[Option<f64>; N]; N]) {
    let grid = CELL * N as f32;
    let size = Vec2::new(AXIS_MARGIN + grid + 2.0 * SCALE_WIDTH + 40.0, grid + AXIS_MARGIN * 0.5);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min + Vec2::new(AXIS_MARGIN, 0.0);
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(14.0);

    for (i, row) in matrix.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            let cell = Rect::from_min_size(
                origin + Vec2::new(j as f32 * CELL, i as f32 * CELL),
                Vec2::splat(CELL),
            );
            let (fill, text) = match value {
                Some(v) => (color::diverging(*v), format!("{v:.2}")),
                None => (Color32::GRAY, "n/a".to_string()),
            };
            painter.rect_filled(cell.shrink(1.0), 0.0, fill);
            let ink = match value {
                Some(v) if v.abs() > 0.6 => Color32::WHITE,
                _ => Color32::BLACK,
            };
            painter.text(cell.center(), Align2::CENTER_CENTER, text, font.clone(), ink);
        }
    }

    for (k, label) in labels.iter().enumerate() {
        let along = (k as f32 + 0.5) * CELL;
        painter.text(
            origin + Vec2::new(-6.0, along),
            Align2::RIGHT_CENTER,
            *label,
            font.clone(),
            text_color,
        );
        painter.text(
            origin + Vec2::new(along, grid + 6.0),
            Align2::CENTER_TOP,
            *label,
            font.clone(),
            text_color,
        );
    }

    // Colour scale from -1 (bottom) to 1 (top).
    let scale_left = origin.x + grid + SCALE_WIDTH;
    let steps = 40;
    let step_h = grid / steps as f32;
    for s in 0..steps {
        let v = 1.0 - 2.0 * (s as f64 + 0.5) / steps as f64;
        let rect = Rect::from_min_size(
            Pos2::new(scale_left, origin.y + s as f32 * step_h),
            Vec2::new(SCALE_WIDTH, step_h + 0.5),
        );
        painter.rect_filled(rect, 0.0, color::diverging(v));
    }
    for (v, y) in [(1.0, 0.0), (0.0, grid / 2.0), (-1.0, grid)] {
        painter.text(
            Pos2::new(scale_left + SCALE_WIDTH + 4.0, origin.y + y),
            Align2::LEFT_CENTER,
            format!("{v:.0}"),
            FontId::proportional(12.0),
            text_color,
        );
    }
}

/// Placeholder shown where a chart has nothing to draw.
pub fn empty_chart(ui: &mut Ui, message: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(message).italics().weak());
    ui.add_space(8.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let labels = vec!["USA".to_string(), "CHN".to_string()];
        assert_eq!(category_label(&labels, 0.0), "USA");
        assert_eq!(category_label(&labels, 1.0000001), "CHN");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
