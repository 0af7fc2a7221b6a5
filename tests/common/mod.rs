#![allow(dead_code)]

use chrono::NaiveDate;
use etfsim::domain::error::EtfSimError;
use etfsim::domain::series::{PricePoint, PriceSeries};
use etfsim::domain::simulation::{DateWindow, SimulationConfig};
use etfsim::ports::market_data_port::MarketDataPort;
use std::collections::HashMap;

/// In-memory market data source. Serves preloaded series as-is; the
/// requested window is ignored.
pub struct MockMarketData {
    pub data: HashMap<String, PriceSeries>,
    pub errors: HashMap<String, String>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.data.insert(series.symbol.clone(), series);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketData {
    fn fetch_price_series(
        &self,
        symbol: &str,
        _window: &DateWindow,
    ) -> Result<PriceSeries, EtfSimError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(EtfSimError::Fetch {
                symbol: symbol.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self
            .data
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| PriceSeries::empty(symbol.to_string(), symbol.to_string())))
    }

    fn list_symbols(&self) -> Result<Vec<String>, EtfSimError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, EtfSimError> {
        Ok(self.data.get(symbol).and_then(|series| {
            series
                .date_range()
                .map(|(first, last)| (first, last, series.len()))
        }))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_series(symbol: &str, rows: &[(&str, f64)]) -> PriceSeries {
    let points = rows
        .iter()
        .map(|&(date_str, price)| PricePoint {
            date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
            price,
        })
        .collect();
    PriceSeries::new(symbol.to_string(), symbol.to_string(), points).unwrap()
}

/// `count` consecutive daily prices starting at `start`, stepping by
/// `daily_step` per day.
pub fn generate_series(
    symbol: &str,
    start: NaiveDate,
    count: usize,
    start_price: f64,
    daily_step: f64,
) -> PriceSeries {
    let points = (0..count)
        .map(|i| PricePoint {
            date: start + chrono::Duration::days(i as i64),
            price: start_price + daily_step * i as f64,
        })
        .collect();
    PriceSeries::new(symbol.to_string(), symbol.to_string(), points).unwrap()
}

pub fn sample_config() -> SimulationConfig {
    SimulationConfig {
        initial_capital: 1000.0,
        window: DateWindow::Range {
            start: date(2020, 1, 1),
            end: date(2030, 12, 31),
        },
        risk_free_rate: 2.0,
        benchmark_symbol: "SPY".to_string(),
        include_benchmark: true,
    }
}
