//! Market data access port trait.

use crate::domain::error::EtfSimError;
use crate::domain::series::PriceSeries;
use crate::domain::simulation::DateWindow;
use chrono::NaiveDate;

/// External market-data collaborator. Returns adjusted-close series; any
/// transport or lookup failure surfaces as a per-symbol error which the
/// report builder downgrades to a warning.
pub trait MarketDataPort {
    fn fetch_price_series(
        &self,
        symbol: &str,
        window: &DateWindow,
    ) -> Result<PriceSeries, EtfSimError>;

    fn list_symbols(&self) -> Result<Vec<String>, EtfSimError>;

    fn get_data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, EtfSimError>;
}
