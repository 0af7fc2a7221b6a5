//! Performance and risk metrics for a single fund.

use crate::domain::error::EtfSimError;
use crate::domain::series::PriceSeries;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Metrics are computed from a fund's own fetched series for the selected
/// window, not from the date-intersected chart table. Funds listed on
/// different calendars therefore keep their full return history even when
/// the chart is clipped to the common dates.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub final_value: f64,
    pub annualized_return_pct: f64,
    pub annualized_volatility_pct: f64,
    pub sharpe_ratio: f64,
}

impl PerformanceMetrics {
    pub fn compute(
        series: &PriceSeries,
        initial_capital: f64,
        risk_free_rate: f64,
    ) -> Result<Self, EtfSimError> {
        if series.len() < 2 {
            return Err(EtfSimError::InsufficientData {
                symbol: series.symbol.clone(),
                points: series.len(),
            });
        }

        let returns: Vec<f64> = series
            .points
            .windows(2)
            .map(|w| w[1].price / w[0].price - 1.0)
            .collect();

        let n = returns.len() as f64;
        let mean: f64 = returns.iter().sum::<f64>() / n;

        let annualized_return_pct = ((1.0 + mean).powf(TRADING_DAYS_PER_YEAR) - 1.0) * 100.0;

        // sample stddev (ddof = 1); undefined for a single return, treated as 0
        let stddev = if returns.len() > 1 {
            let variance: f64 =
                returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };
        let annualized_volatility_pct = stddev * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;

        let excess_return = annualized_return_pct - risk_free_rate;
        let sharpe_ratio = if annualized_volatility_pct > 0.0 {
            excess_return / annualized_volatility_pct
        } else {
            0.0
        };

        let first = series.points[0].price;
        let last = series.points[series.len() - 1].price;
        let final_value = last / first * initial_capital;

        Ok(PerformanceMetrics {
            final_value,
            annualized_return_pct,
            annualized_volatility_pct,
            sharpe_ratio,
        })
    }
}
