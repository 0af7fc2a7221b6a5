//! CSV file market-data adapter.
//!
//! Reads per-symbol files named `<SYMBOL>.csv` with `date,adj_close`
//! columns. Predefined periods are anchored at the last date present in
//! the file, so `1y` means the final year of available history.

use crate::domain::catalog;
use crate::domain::error::EtfSimError;
use crate::domain::series::{PricePoint, PriceSeries};
use crate::domain::simulation::DateWindow;
use crate::ports::market_data_port::MarketDataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvMarketData {
    base_path: PathBuf,
}

impl CsvMarketData {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol.to_uppercase()))
    }

    fn read_all_points(&self, symbol: &str) -> Result<Vec<PricePoint>, EtfSimError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| EtfSimError::Fetch {
            symbol: symbol.to_string(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| EtfSimError::Fetch {
                symbol: symbol.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| EtfSimError::Fetch {
                symbol: symbol.to_string(),
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                EtfSimError::Fetch {
                    symbol: symbol.to_string(),
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let price: f64 = record
                .get(1)
                .ok_or_else(|| EtfSimError::Fetch {
                    symbol: symbol.to_string(),
                    reason: "missing adj_close column".into(),
                })?
                .parse()
                .map_err(|e| EtfSimError::Fetch {
                    symbol: symbol.to_string(),
                    reason: format!("invalid adj_close value: {}", e),
                })?;

            points.push(PricePoint { date, price });
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}

impl MarketDataPort for CsvMarketData {
    fn fetch_price_series(
        &self,
        symbol: &str,
        window: &DateWindow,
    ) -> Result<PriceSeries, EtfSimError> {
        let points = self.read_all_points(symbol)?;

        let filtered: Vec<PricePoint> = match window {
            DateWindow::Range { start, end } => points
                .into_iter()
                .filter(|p| p.date >= *start && p.date <= *end)
                .collect(),
            DateWindow::Period(period) => match points.last() {
                Some(last) => {
                    let start = period.start_from(last.date);
                    points.into_iter().filter(|p| p.date >= start).collect()
                }
                None => Vec::new(),
            },
        };

        PriceSeries::new(
            symbol.to_uppercase(),
            catalog::label_for(symbol),
            filtered,
        )
    }

    fn list_symbols(&self) -> Result<Vec<String>, EtfSimError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| EtfSimError::Fetch {
            symbol: "*".to_string(),
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(EtfSimError::Io)?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(stem) = name_str.strip_suffix(".csv") {
                symbols.push(stem.to_uppercase());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, EtfSimError> {
        let points = self.read_all_points(symbol)?;
        Ok(match (points.first(), points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date, points.len())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::PredefinedPeriod;
    use tempfile::TempDir;

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        let spy = "date,adj_close\n\
            2024-01-15,400.0\n\
            2024-01-16,404.0\n\
            2024-01-17,402.0\n";
        fs::write(path.join("SPY.csv"), spy).unwrap();

        // two years of month-start rows
        let mut gld = String::from("date,adj_close\n");
        for (i, month) in (1..=12).cycle().take(24).enumerate() {
            let year = 2023 + (i / 12) as i32;
            gld.push_str(&format!("{}-{:02}-01,{}\n", year, month, 180.0 + i as f64));
        }
        fs::write(path.join("GLD.csv"), gld).unwrap();

        fs::write(path.join("EEM.csv"), "date,adj_close\n").unwrap();

        (dir, path)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fetch_range_returns_rows_in_window() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        let window = DateWindow::Range {
            start: date(2024, 1, 16),
            end: date(2024, 1, 17),
        };
        let series = adapter.fetch_price_series("SPY", &window).unwrap();

        assert_eq!(series.symbol, "SPY");
        assert_eq!(series.label, "AZ SPDR S&P 500 ETF TRUST");
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].price, 404.0);
    }

    #[test]
    fn fetch_accepts_lowercase_symbol() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        let window = DateWindow::Range {
            start: date(2024, 1, 1),
            end: date(2024, 1, 31),
        };
        let series = adapter.fetch_price_series("spy", &window).unwrap();

        assert_eq!(series.symbol, "SPY");
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn fetch_period_anchors_at_last_available_date() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        // GLD ends 2024-12-01; 6mo keeps 2024-06-01 onward
        let window = DateWindow::Period(PredefinedPeriod::SixMonths);
        let series = adapter.fetch_price_series("GLD", &window).unwrap();

        assert_eq!(series.points.first().unwrap().date, date(2024, 6, 1));
        assert_eq!(series.points.last().unwrap().date, date(2024, 12, 1));
        assert_eq!(series.len(), 7);
    }

    #[test]
    fn fetch_ytd_starts_january_first_of_anchor_year() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        let window = DateWindow::Period(PredefinedPeriod::YearToDate);
        let series = adapter.fetch_price_series("GLD", &window).unwrap();

        assert_eq!(series.points.first().unwrap().date, date(2024, 1, 1));
        assert_eq!(series.len(), 12);
    }

    #[test]
    fn fetch_empty_file_yields_empty_series() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        let window = DateWindow::Period(PredefinedPeriod::OneYear);
        let series = adapter.fetch_price_series("EEM", &window).unwrap();

        assert!(series.is_empty());
    }

    #[test]
    fn fetch_missing_file_is_an_error() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        let window = DateWindow::Period(PredefinedPeriod::OneYear);
        let result = adapter.fetch_price_series("XYZ", &window);

        assert!(matches!(
            result,
            Err(EtfSimError::Fetch { symbol, .. }) if symbol == "XYZ"
        ));
    }

    #[test]
    fn list_symbols_scans_directory() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        let symbols = adapter.list_symbols().unwrap();
        assert_eq!(symbols, vec!["EEM", "GLD", "SPY"]);
    }

    #[test]
    fn get_data_range_reports_span_and_count() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvMarketData::new(path);

        let range = adapter.get_data_range("SPY").unwrap();
        assert_eq!(range, Some((date(2024, 1, 15), date(2024, 1, 17), 3)));

        let range = adapter.get_data_range("EEM").unwrap();
        assert_eq!(range, None);
    }
}
