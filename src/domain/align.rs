//! Date alignment of price series (inner join on date).

use crate::domain::error::EtfSimError;
use crate::domain::series::PriceSeries;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone)]
pub struct TableColumn {
    pub id: String,
    pub values: Vec<f64>,
}

/// A date-indexed table with one column per fund. Every column has exactly
/// one value per date; partial rows cannot be represented.
#[derive(Debug, Clone)]
pub struct AlignedTable {
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<TableColumn>,
}

impl AlignedTable {
    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn column(&self, id: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.id == id)
    }
}

/// Align series onto the dates present in every one of them. Column order
/// follows input order. Fails when the intersection is empty.
pub fn align(series: &[PriceSeries]) -> Result<AlignedTable, EtfSimError> {
    let mut common: Option<BTreeSet<NaiveDate>> = None;

    for s in series {
        let dates: BTreeSet<NaiveDate> = s.points.iter().map(|p| p.date).collect();
        common = Some(match common {
            None => dates,
            Some(acc) => acc.intersection(&dates).copied().collect(),
        });
    }

    let dates: Vec<NaiveDate> = common.unwrap_or_default().into_iter().collect();
    if dates.is_empty() {
        return Err(EtfSimError::EmptyAlignment {
            symbols: join_symbols(series),
        });
    }

    let columns = series
        .iter()
        .map(|s| {
            let by_date: HashMap<NaiveDate, f64> =
                s.points.iter().map(|p| (p.date, p.price)).collect();
            TableColumn {
                id: s.symbol.clone(),
                // every date is in the intersection, so the lookup cannot miss
                values: dates.iter().map(|d| by_date[d]).collect(),
            }
        })
        .collect();

    Ok(AlignedTable { dates, columns })
}

/// Inner-join one more series against an existing table's date index,
/// appending it as the last column. Rows the series does not cover are
/// dropped from every column.
pub fn append_aligned(
    table: &AlignedTable,
    series: &PriceSeries,
) -> Result<AlignedTable, EtfSimError> {
    let by_date: HashMap<NaiveDate, f64> =
        series.points.iter().map(|p| (p.date, p.price)).collect();

    let keep: Vec<usize> = table
        .dates
        .iter()
        .enumerate()
        .filter(|&(_, d)| by_date.contains_key(d))
        .map(|(i, _)| i)
        .collect();

    if keep.is_empty() {
        return Err(EtfSimError::EmptyAlignment {
            symbols: format!(
                "{}, {}",
                table
                    .columns
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                series.symbol
            ),
        });
    }

    let dates: Vec<NaiveDate> = keep.iter().map(|&i| table.dates[i]).collect();
    let mut columns: Vec<TableColumn> = table
        .columns
        .iter()
        .map(|c| TableColumn {
            id: c.id.clone(),
            values: keep.iter().map(|&i| c.values[i]).collect(),
        })
        .collect();
    columns.push(TableColumn {
        id: series.symbol.clone(),
        values: dates.iter().map(|d| by_date[d]).collect(),
    });

    Ok(AlignedTable { dates, columns })
}

fn join_symbols(series: &[PriceSeries]) -> String {
    series
        .iter()
        .map(|s| s.symbol.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
