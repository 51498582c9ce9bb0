use crate::data::aggregate::{Aggregator, CategoryMean, HourlyMean};
use crate::data::filter::{DateRange, filter_dataset};
use crate::data::model::{Category, Column, Dataset};

// ---------------------------------------------------------------------------
// Render description
// ---------------------------------------------------------------------------

/// Everything the UI draws for one date selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub range: DateRange,
    /// Rows in the filtered set.
    pub rows: usize,
    pub totals: Totals,
    pub hourly: Vec<HourlyMean>,
    pub season: CategoryPanel,
    pub weather: CategoryPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total: u64,
    pub casual: u64,
    pub registered: u64,
}

/// Metric tiles (code order) and bar chart (descending) for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPanel {
    pub category: Category,
    pub metrics: Vec<CategoryMean>,
    pub chart: Vec<CategoryMean>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Build the view for `range`. Reads `dataset` only.
pub fn render(dataset: &Dataset, range: DateRange) -> DashboardView {
    let rows = filter_dataset(dataset, &range);
    let agg = Aggregator::new(rows);
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => {
            log::trace!("render {range}: rows {}..={}", first.index, last.index)
        }
        _ => log::trace!("render {range}: no rows"),
    }

    DashboardView {
        range,
        rows: agg.len(),
        totals: Totals {
            total: agg.total(Column::Count),
            casual: agg.total(Column::Casual),
            registered: agg.total(Column::Registered),
        },
        hourly: agg.mean_by_hour(),
        season: category_panel(&agg, Category::Season),
        weather: category_panel(&agg, Category::Weather),
    }
}

fn category_panel(agg: &Aggregator<'_>, category: Category) -> CategoryPanel {
    let codes = Category::codes();
    let chart = agg.mean_by_category(Column::Count, category, &codes);

    let mut metrics = chart.clone();
    metrics.sort_by_key(|m| m.code);

    CategoryPanel {
        category,
        metrics,
        chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{date, record};

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record(date(2011, 1, 1), 8, 1, 1, 2, 8),
            record(date(2011, 1, 1), 9, 1, 2, 4, 16),
            record(date(2011, 1, 2), 8, 2, 1, 1, 4),
            record(date(2011, 6, 1), 8, 3, 3, 10, 90),
        ])
        .unwrap()
    }

    #[test]
    fn full_range_view() {
        let ds = dataset();
        let view = render(&ds, DateRange::full(&ds));

        assert_eq!(view.rows, 4);
        assert_eq!(
            view.totals,
            Totals {
                total: 135,
                casual: 17,
                registered: 118
            }
        );
        assert_eq!(view.totals.total, view.totals.casual + view.totals.registered);

        let hours: Vec<u8> = view.hourly.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![8, 9]);
        // (10 + 5 + 100) / 3
        assert_eq!(view.hourly[0].mean, 115.0 / 3.0);

        fn labels(means: &[CategoryMean]) -> Vec<String> {
            means.iter().map(|m| m.label.clone()).collect()
        }
        assert_eq!(labels(&view.season.metrics), ["Summer", "Fall", "Winter", "Spring"]);
        let chart_labels = labels(&view.season.chart);
        assert_eq!(chart_labels, vec!["Winter", "Summer", "Fall", "Spring"]);

        let weather: Vec<f64> = view.weather.metrics.iter().map(|m| m.value).collect();
        assert_eq!(weather, vec![7.5, 20.0, 100.0, 0.0]);
    }

    #[test]
    fn narrowed_range() {
        let ds = dataset();
        let view = render(&ds, DateRange::new(date(2011, 1, 2), date(2011, 1, 31)));

        assert_eq!(view.rows, 1);
        assert_eq!(view.totals.total, 5);
        assert_eq!(view.season.chart[0].label, "Fall");
        assert_eq!(view.season.chart[0].value, 5.0);
    }

    #[test]
    fn empty_selection_still_has_every_category() {
        let ds = dataset();
        let view = render(&ds, DateRange::new(date(2011, 3, 1), date(2011, 2, 1)));

        assert_eq!(view.rows, 0);
        assert_eq!(view.totals, Totals::default());
        assert!(view.hourly.is_empty());
        assert_eq!(view.season.metrics.len(), 4);
        assert_eq!(view.weather.chart.len(), 4);
        assert!(view.weather.chart.iter().all(|m| m.value == 0.0));
    }

    #[test]
    fn render_is_repeatable() {
        let ds = dataset();
        let range = DateRange::full(&ds);
        assert_eq!(render(&ds, range), render(&ds, range));
    }
}
