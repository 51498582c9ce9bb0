use std::fmt::Display;

use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::config::DashboardConfig;
use crate::dashboard::CategoryPanel;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Left side panel – date range selection
// ---------------------------------------------------------------------------

/// Render the left panel with the date pickers.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // the pickers are unbounded; AppState clamps the picked dates
    ui.strong("Date Range");

    let mut start = state.selection.start;
    let mut end = state.selection.end;

    egui::Grid::new("date_range")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("From");
            let from = ui.add(DatePickerButton::new(&mut start).id_salt("start_date"));
            ui.end_row();

            ui.label("To");
            let to = ui.add(DatePickerButton::new(&mut end).id_salt("end_date"));
            ui.end_row();

            if from.changed() {
                state.set_start(start);
            }
            if to.changed() {
                state.set_end(end);
            }
        });

    ui.add_space(4.0);
    if ui.button("Reset").clicked() {
        state.reset_selection();
    }

    ui.separator();
    ui.label(format!("Showing {}", state.view.range));
    ui.label(format!(
        "{} of {} rows selected",
        state.view.rows,
        state.dataset.len()
    ));
    ui.label(
        RichText::new(format!(
            "Data: {} – {}",
            state.dataset.min_date(),
            state.dataset.max_date()
        ))
        .weak(),
    );
}

// ---------------------------------------------------------------------------
// Central panel – metrics and charts
// ---------------------------------------------------------------------------

pub fn dashboard(ui: &mut Ui, state: &AppState, config: &DashboardConfig) {
    let view = &state.view;

    ui.heading("Bike Sharing");
    ui.add_space(8.0);

    ui.strong("Statistics");
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Renter", view.totals.total);
        metric(&mut cols[1], "Casual", view.totals.casual);
        metric(&mut cols[2], "Registered", view.totals.registered);
    });
    plot::hourly_line_chart(ui, &view.hourly, config.line_chart_height);

    // season bars run horizontally, weather bars vertically
    category_section(ui, &view.season, true, config);
    category_section(ui, &view.weather, false, config);
}

fn category_section(
    ui: &mut Ui,
    panel: &CategoryPanel,
    horizontal: bool,
    config: &DashboardConfig,
) {
    let name = panel.category.name();
    ui.add_space(16.0);
    ui.strong(format!("Based on {name}"));
    ui.columns(panel.metrics.len().max(1), |cols: &mut [Ui]| {
        for (col, m) in cols.iter_mut().zip(&panel.metrics) {
            metric(col, &m.label, format_mean(m.value));
        }
    });
    plot::category_bar_chart(
        ui,
        &format!("{}_plot", name.to_lowercase()),
        &format!("Average Bike Rentals Based on {name}"),
        panel,
        horizontal,
        config.bar_chart_height,
    );
}

/// Small caption over a large value.
fn metric(ui: &mut Ui, label: &str, value: impl Display) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value.to_string()).size(24.0).strong());
    });
}

/// Rounded mean without trailing zeros, keeping one decimal: `15.0`, `38.3333`.
fn format_mean(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0');
    if s.ends_with('.') {
        format!("{s}0")
    } else {
        s.to_string()
    }
}
