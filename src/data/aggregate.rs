use std::collections::BTreeMap;

use super::model::{Category, Column, RentalRecord};

/// Mean of one category code, labelled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMean {
    pub code: u8,
    pub label: String,
    pub value: f64,
}

/// Mean rentals for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyMean {
    pub hour: u8,
    pub mean: f64,
}

/// Round to 4 decimal places, half away from zero.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

// ---------------------------------------------------------------------------
// Aggregator – sums and grouped means over a filtered slice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    rows: &'a [RentalRecord],
}

impl<'a> Aggregator<'a> {
    pub fn new(rows: &'a [RentalRecord]) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Sum of `column`; 0 for an empty set.
    pub fn total(&self, column: Column) -> u64 {
        self.rows.iter().map(|r| u64::from(column.value(r))).sum()
    }

    /// Mean of `column` over rows with `category == code`, rounded to 4
    /// places. 0 when no row matches.
    pub fn category_mean(&self, column: Column, category: Category, code: u8) -> f64 {
        let (sum, n) = self
            .rows
            .iter()
            .filter(|r| category.column().value(r) == u32::from(code))
            .fold((0u64, 0usize), |(sum, n), r| (sum + u64::from(column.value(r)), n + 1));

        if n == 0 {
            return 0.0;
        }
        round4(sum as f64 / n as f64)
    }

    /// One entry per code in `codes`, sorted descending by mean. Ties keep
    /// the order of `codes`.
    pub fn mean_by_category(
        &self,
        column: Column,
        category: Category,
        codes: &[u8],
    ) -> Vec<CategoryMean> {
        let mut means: Vec<CategoryMean> = codes
            .iter()
            .map(|&code| CategoryMean {
                code,
                label: category
                    .label(code)
                    .map_or_else(|| code.to_string(), str::to_string),
                value: self.category_mean(column, category, code),
            })
            .collect();

        // stable, so equal values stay in code order
        means.sort_by(|a, b| b.value.total_cmp(&a.value));
        means
    }

    /// Mean `count` for each hour present, ascending by hour.
    pub fn mean_by_hour(&self) -> Vec<HourlyMean> {
        let mut by_hour: BTreeMap<u8, (u64, usize)> = BTreeMap::new();
        for r in self.rows {
            let slot = by_hour.entry(r.hour).or_default();
            slot.0 += u64::from(r.count);
            slot.1 += 1;
        }

        by_hour
            .into_iter()
            .map(|(hour, (sum, n))| HourlyMean {
                hour,
                mean: sum as f64 / n as f64,
            })
            .collect()
    }
}
