//! Comparison report orchestration.
//!
//! Fetches each selected fund, aligns the survivors onto common dates,
//! appends the benchmark, normalizes the joined table into cumulative
//! investment value, and computes per-fund metrics from each fund's own
//! fetched series. Per-fund failures degrade to warnings; the run only
//! fails when no fund produced data or the funds share no dates.

use crate::domain::align::{align, append_aligned, AlignedTable};
use crate::domain::error::EtfSimError;
use crate::domain::metrics::PerformanceMetrics;
use crate::domain::normalize::normalize_table;
use crate::domain::selection::{Instrument, InstrumentSelection};
use crate::domain::series::PriceSeries;
use crate::domain::simulation::SimulationConfig;
use crate::ports::market_data_port::MarketDataPort;

#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Cumulative-value table for charting: one column per surviving fund,
    /// plus the benchmark column when its data covers the joined dates.
    pub chart: AlignedTable,
    /// Per-fund metrics, in selection order. The benchmark is charted but
    /// never gets a metrics row.
    pub metrics: Vec<(String, PerformanceMetrics)>,
    pub warnings: Vec<String>,
}

pub fn build_report(
    data_port: &dyn MarketDataPort,
    selection: &InstrumentSelection,
    config: &SimulationConfig,
) -> Result<ComparisonReport, EtfSimError> {
    let mut warnings = Vec::new();
    let mut fetched: Vec<(Instrument, PriceSeries)> = Vec::new();

    for instrument in &selection.instruments {
        match data_port.fetch_price_series(&instrument.symbol, &config.window) {
            Ok(series) if series.is_empty() => {
                warnings.push(format!(
                    "skipping {}: no data in the selected window",
                    instrument.symbol
                ));
            }
            Ok(series) => fetched.push((instrument.clone(), series)),
            Err(e) => warnings.push(format!("skipping {}: {}", instrument.symbol, e)),
        }
    }

    if fetched.is_empty() {
        return Err(EtfSimError::NoDataAvailable {
            symbols: selection.joined_symbols(),
        });
    }

    let series: Vec<PriceSeries> = fetched.iter().map(|(_, s)| s.clone()).collect();
    let mut table = align(&series)?;

    // skip the join when the benchmark is already one of the selected funds
    if config.include_benchmark && table.column(&config.benchmark_symbol).is_none() {
        match fetch_benchmark(data_port, config) {
            Ok(benchmark) => match append_aligned(&table, &benchmark) {
                Ok(joined) => table = joined,
                Err(e) => warnings.push(format!(
                    "benchmark {} not charted: {}",
                    config.benchmark_symbol, e
                )),
            },
            Err(e) => warnings.push(format!(
                "benchmark {} not charted: {}",
                config.benchmark_symbol, e
            )),
        }
    }

    let chart = normalize_table(&table, config.initial_capital);

    let mut metrics = Vec::new();
    for (instrument, series) in &fetched {
        match PerformanceMetrics::compute(series, config.initial_capital, config.risk_free_rate) {
            Ok(m) => metrics.push((instrument.symbol.clone(), m)),
            Err(e) => warnings.push(format!("metrics unavailable for {}: {}", instrument.symbol, e)),
        }
    }

    Ok(ComparisonReport {
        chart,
        metrics,
        warnings,
    })
}

fn fetch_benchmark(
    data_port: &dyn MarketDataPort,
    config: &SimulationConfig,
) -> Result<PriceSeries, EtfSimError> {
    let series = data_port.fetch_price_series(&config.benchmark_symbol, &config.window)?;
    if series.is_empty() {
        return Err(EtfSimError::Fetch {
            symbol: config.benchmark_symbol.clone(),
            reason: "no data in the selected window".into(),
        });
    }
    Ok(series)
}
