//! Simulation parameters and date windows.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_RISK_FREE_RATE: f64 = 2.0;
pub const DEFAULT_BENCHMARK: &str = "SPY";

/// Named lookback windows matching the market-data source's period tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedPeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    YearToDate,
    FiveYears,
    TenYears,
}

impl PredefinedPeriod {
    pub const ALL: [PredefinedPeriod; 7] = [
        PredefinedPeriod::OneMonth,
        PredefinedPeriod::ThreeMonths,
        PredefinedPeriod::SixMonths,
        PredefinedPeriod::OneYear,
        PredefinedPeriod::YearToDate,
        PredefinedPeriod::FiveYears,
        PredefinedPeriod::TenYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PredefinedPeriod::OneMonth => "1mo",
            PredefinedPeriod::ThreeMonths => "3mo",
            PredefinedPeriod::SixMonths => "6mo",
            PredefinedPeriod::OneYear => "1y",
            PredefinedPeriod::YearToDate => "ytd",
            PredefinedPeriod::FiveYears => "5y",
            PredefinedPeriod::TenYears => "10y",
        }
    }

    /// First date of the window when the period ends at `anchor`.
    /// `ytd` starts on January 1 of the anchor's year.
    pub fn start_from(&self, anchor: NaiveDate) -> NaiveDate {
        let months = match self {
            PredefinedPeriod::OneMonth => 1,
            PredefinedPeriod::ThreeMonths => 3,
            PredefinedPeriod::SixMonths => 6,
            PredefinedPeriod::OneYear => 12,
            PredefinedPeriod::FiveYears => 60,
            PredefinedPeriod::TenYears => 120,
            PredefinedPeriod::YearToDate => {
                return NaiveDate::from_ymd_opt(anchor.year(), 1, 1).unwrap_or(anchor);
            }
        };
        anchor
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl FromStr for PredefinedPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1mo" => Ok(PredefinedPeriod::OneMonth),
            "3mo" => Ok(PredefinedPeriod::ThreeMonths),
            "6mo" => Ok(PredefinedPeriod::SixMonths),
            "1y" => Ok(PredefinedPeriod::OneYear),
            "ytd" => Ok(PredefinedPeriod::YearToDate),
            "5y" => Ok(PredefinedPeriod::FiveYears),
            "10y" => Ok(PredefinedPeriod::TenYears),
            other => Err(format!(
                "unknown period '{}', expected one of 1mo, 3mo, 6mo, 1y, ytd, 5y, 10y",
                other
            )),
        }
    }
}

impl fmt::Display for PredefinedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The time window for a simulation: an explicit date range or a named
/// lookback period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    Range { start: NaiveDate, end: NaiveDate },
    Period(PredefinedPeriod),
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindow::Range { start, end } => write!(f, "{} to {}", start, end),
            DateWindow::Period(period) => write!(f, "period {}", period),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub initial_capital: f64,
    pub window: DateWindow,
    /// Annual risk-free rate, in percent.
    pub risk_free_rate: f64,
    pub benchmark_symbol: String,
    pub include_benchmark: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_round_trips_through_strings() {
        for period in PredefinedPeriod::ALL {
            assert_eq!(period.as_str().parse::<PredefinedPeriod>(), Ok(period));
        }
    }

    #[test]
    fn period_parse_rejects_unknown_token() {
        assert!("2wk".parse::<PredefinedPeriod>().is_err());
    }

    #[test]
    fn period_start_one_year_back() {
        let start = PredefinedPeriod::OneYear.start_from(date(2024, 6, 15));
        assert_eq!(start, date(2023, 6, 15));
    }

    #[test]
    fn period_start_ytd_is_january_first() {
        let start = PredefinedPeriod::YearToDate.start_from(date(2024, 6, 15));
        assert_eq!(start, date(2024, 1, 1));
    }

    #[test]
    fn period_start_clamps_month_end() {
        // 2024-03-31 minus one month lands on the shorter February
        let start = PredefinedPeriod::OneMonth.start_from(date(2024, 3, 31));
        assert_eq!(start, date(2024, 2, 29));
    }

    #[test]
    fn window_display() {
        let range = DateWindow::Range {
            start: date(2020, 1, 1),
            end: date(2024, 12, 31),
        };
        assert_eq!(range.to_string(), "2020-01-01 to 2024-12-31");

        let period = DateWindow::Period(PredefinedPeriod::FiveYears);
        assert_eq!(period.to_string(), "period 5y");
    }
}
