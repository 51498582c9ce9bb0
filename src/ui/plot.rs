use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points, uniform_grid_spacer};

use crate::dashboard::CategoryPanel;
use crate::data::aggregate::HourlyMean;

const SERIES_COLOR: Color32 = Color32::from_rgb(65, 105, 225);

// ---------------------------------------------------------------------------
// Hourly line chart
// ---------------------------------------------------------------------------

/// Mean rentals per hour, with a marker on every hour present.
pub fn hourly_line_chart(ui: &mut Ui, hourly: &[HourlyMean], height: f32) {
    ui.label("Average Bike Rentals Based on Hours");

    let points: Vec<[f64; 2]> = hourly
        .iter()
        .map(|h| [f64::from(h.hour), h.mean])
        .collect();

    Plot::new("hourly_plot")
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(0.0)
        .include_x(23.0)
        .include_y(0.0)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 3.0, 6.0]))
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format!("{:.0}", mark.value)
        })
        .label_formatter(|_name, value| format!("hour {:.0}\n{:.1} rentals", value.x, value.y))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name("count")
                    .color(SERIES_COLOR)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .color(SERIES_COLOR)
                    .radius(3.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Category bar charts
// ---------------------------------------------------------------------------

/// Bar chart of a category's means in `panel.chart` order.
///
/// Horizontal charts list the first entry at the top, vertical charts at the
/// left.
pub fn category_bar_chart(
    ui: &mut Ui,
    id: &str,
    title: &str,
    panel: &CategoryPanel,
    horizontal: bool,
    height: f32,
) {
    ui.label(title);

    let n = panel.chart.len();
    // bar position → label
    let mut labels = vec![String::new(); n];
    let bars: Vec<Bar> = panel
        .chart
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let pos = if horizontal { n - 1 - i } else { i };
            labels[pos] = m.label.clone();
            Bar::new(pos as f64, m.value)
                .name(&m.label)
                .width(0.7)
                .fill(SERIES_COLOR)
        })
        .collect();

    let mut chart = BarChart::new(bars).color(SERIES_COLOR).name("count");
    if horizontal {
        chart = chart.horizontal();
    }

    let mut plot = Plot::new(id)
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false);

    let formatter = move |mark: GridMark, _range: &RangeInclusive<f64>| {
        category_tick(&labels, mark.value)
    };
    plot = if horizontal {
        plot.include_x(0.0)
            .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
            .y_axis_formatter(formatter)
    } else {
        plot.include_y(0.0)
            .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
            .x_axis_formatter(formatter)
    };

    plot.show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

/// Axis tick text for a bar position; blank between bars and off the ends.
fn category_tick(labels: &[String], value: f64) -> String {
    if value < 0.0 || value.fract().abs() > 1e-6 {
        return String::new();
    }
    labels.get(value.round() as usize).cloned().unwrap_or_default()
}
