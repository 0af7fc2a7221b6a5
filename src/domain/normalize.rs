//! Cumulative-value rescaling of aligned price columns.

use crate::domain::align::{AlignedTable, TableColumn};

/// Rescale a price column so the first value equals `initial_capital` and
/// every later value keeps the price ratio to that first row. The base is
/// the first value of the slice as given: for chart columns that must be
/// the first row of the aligned table, not of the original fetched series.
pub fn rescale(values: &[f64], initial_capital: f64) -> Vec<f64> {
    let Some(&base) = values.first() else {
        return Vec::new();
    };

    values
        .iter()
        .map(|&v| if base > 0.0 { v / base * initial_capital } else { 0.0 })
        .collect()
}

/// Rescale every column of an aligned table into cumulative investment value.
pub fn normalize_table(table: &AlignedTable, initial_capital: f64) -> AlignedTable {
    AlignedTable {
        dates: table.dates.clone(),
        columns: table
            .columns
            .iter()
            .map(|c| TableColumn {
                id: c.id.clone(),
                values: rescale(&c.values, initial_capital),
            })
            .collect(),
    }
}
