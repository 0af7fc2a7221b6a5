//! Daily adjusted-close price series.

use crate::domain::error::EtfSimError;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// One fund's fetched price history. Dates strictly increasing, prices
/// positive; both are checked on construction and never revalidated.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub symbol: String,
    pub label: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(
        symbol: String,
        label: String,
        points: Vec<PricePoint>,
    ) -> Result<Self, EtfSimError> {
        for (i, point) in points.iter().enumerate() {
            if point.price <= 0.0 || !point.price.is_finite() {
                return Err(EtfSimError::InvalidSeries {
                    symbol,
                    reason: format!("non-positive price {} on {}", point.price, point.date),
                });
            }
            if i > 0 && points[i - 1].date >= point.date {
                return Err(EtfSimError::InvalidSeries {
                    symbol,
                    reason: format!(
                        "dates not strictly increasing at {} (previous {})",
                        point.date,
                        points[i - 1].date
                    ),
                });
            }
        }
        Ok(Self {
            symbol,
            label,
            points,
        })
    }

    /// An empty series for a symbol that returned no rows.
    pub fn empty(symbol: String, label: String) -> Self {
        Self {
            symbol,
            label,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, price: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            price,
        }
    }

    #[test]
    fn new_accepts_increasing_dates() {
        let series = PriceSeries::new(
            "SPY".into(),
            "AZ SPDR S&P 500 ETF TRUST".into(),
            vec![point("2024-01-01", 100.0), point("2024-01-02", 101.0)],
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(
            series.date_range(),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
            ))
        );
    }

    #[test]
    fn new_rejects_duplicate_dates() {
        let result = PriceSeries::new(
            "SPY".into(),
            "SPY".into(),
            vec![point("2024-01-01", 100.0), point("2024-01-01", 101.0)],
        );

        assert!(matches!(
            result,
            Err(EtfSimError::InvalidSeries { symbol, .. }) if symbol == "SPY"
        ));
    }

    #[test]
    fn new_rejects_out_of_order_dates() {
        let result = PriceSeries::new(
            "SPY".into(),
            "SPY".into(),
            vec![point("2024-01-02", 100.0), point("2024-01-01", 101.0)],
        );

        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_non_positive_price() {
        let result = PriceSeries::new(
            "GLD".into(),
            "AZ Oro".into(),
            vec![point("2024-01-01", 0.0)],
        );

        assert!(matches!(
            result,
            Err(EtfSimError::InvalidSeries { symbol, .. }) if symbol == "GLD"
        ));
    }

    #[test]
    fn empty_series() {
        let series = PriceSeries::empty("EEM".into(), "AZ Mercados Emergentes".into());
        assert!(series.is_empty());
        assert_eq!(series.date_range(), None);
    }
}
