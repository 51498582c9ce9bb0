use chrono::NaiveDate;

use crate::dashboard::{self, DashboardView};
use crate::data::filter::DateRange;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Dataset,

    /// Current date-picker selection, always within the dataset bounds.
    pub selection: DateRange,

    /// View for `selection` (cached).
    pub view: DashboardView,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let selection = DateRange::full(&dataset);
        let view = dashboard::render(&dataset, selection);
        Self {
            dataset,
            selection,
            view,
        }
    }

    /// Apply a new selection, clamped to the dataset bounds. Recomputes the
    /// view only when the selection actually changed.
    pub fn set_selection(&mut self, range: DateRange) {
        let clamped = range.clamp_to(self.dataset.bounds());
        if clamped != range {
            log::warn!("selection {range} clamped to {clamped}");
        }
        if clamped == self.selection {
            return;
        }
        log::debug!("selection changed to {clamped}");
        self.selection = clamped;
        self.view = dashboard::render(&self.dataset, clamped);
    }

    pub fn set_start(&mut self, start: NaiveDate) {
        self.set_selection(DateRange::new(start, self.selection.end));
    }

    pub fn set_end(&mut self, end: NaiveDate) {
        self.set_selection(DateRange::new(self.selection.start, end));
    }

    /// Select the whole dataset again.
    pub fn reset_selection(&mut self) {
        self.set_selection(DateRange::full(&self.dataset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{date, record};

    fn state() -> AppState {
        AppState::new(
            Dataset::new(vec![
                record(date(2011, 1, 1), 0, 1, 1, 1, 1),
                record(date(2011, 1, 5), 0, 1, 1, 2, 2),
                record(date(2011, 1, 9), 0, 1, 1, 3, 3),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn starts_with_full_range() {
        let s = state();
        assert_eq!(s.selection, DateRange::new(date(2011, 1, 1), date(2011, 1, 9)));
        assert_eq!(s.view.rows, 3);
    }

    #[test]
    fn narrowing_recomputes_view() {
        let mut s = state();
        s.set_start(date(2011, 1, 4));
        assert_eq!(s.view.rows, 2);
        s.set_end(date(2011, 1, 6));
        assert_eq!(s.view.rows, 1);
        assert_eq!(s.view.totals.total, 4);
        assert_eq!(s.view.range, s.selection);
    }

    #[test]
    fn selection_is_clamped_to_bounds() {
        let mut s = state();
        s.set_selection(DateRange::new(date(2010, 1, 1), date(2011, 1, 3)));
        assert_eq!(s.selection.start, date(2011, 1, 1));
        s.set_end(date(2020, 1, 1));
        assert_eq!(s.selection.end, date(2011, 1, 9));
    }

    #[test]
    fn picked_dates_outside_the_data_are_pulled_in() {
        let mut s = state();
        s.set_start(date(2011, 1, 4));
        s.set_end(date(2011, 1, 6));
        assert_eq!(s.view.rows, 1);

        s.set_start(date(2009, 3, 1));
        assert_eq!(s.selection.start, date(2011, 1, 1));
        assert_eq!(s.view.range, s.selection);
        assert_eq!(s.view.rows, 2);
        assert_eq!(s.view.totals.total, 6);

        s.set_end(date(2015, 7, 1));
        assert_eq!(s.selection.end, date(2011, 1, 9));
        assert_eq!(s.view.range, s.selection);
        assert_eq!(s.view.rows, 3);
        assert_eq!(s.view.totals.total, 12);

        // both ends past max collapse onto the last day
        s.set_start(date(2012, 1, 1));
        assert_eq!(s.selection, DateRange::new(date(2011, 1, 9), date(2011, 1, 9)));
        assert_eq!(s.view.rows, 1);
    }

    #[test]
    fn start_after_end_selects_nothing() {
        let mut s = state();
        s.set_start(date(2011, 1, 8));
        s.set_end(date(2011, 1, 2));
        assert_eq!(s.view.rows, 0);
        assert_eq!(s.view.season.metrics.len(), 4);

        s.reset_selection();
        assert_eq!(s.view.rows, 3);
    }
}
