//! Configuration validation.
//!
//! Validates all simulation config fields before a run.

use crate::domain::error::EtfSimError;
use crate::domain::selection::parse_selection;
use crate::domain::simulation::PredefinedPeriod;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub fn validate_simulation_config(config: &dyn ConfigPort) -> Result<(), EtfSimError> {
    validate_initial_capital(config)?;
    validate_risk_free_rate(config)?;
    validate_funds(config)?;
    validate_benchmark(config)?;
    validate_window(config)?;
    Ok(())
}

fn validate_initial_capital(config: &dyn ConfigPort) -> Result<(), EtfSimError> {
    let value = config.get_double("simulation", "initial_capital", 0.0);
    if value <= 0.0 {
        return Err(EtfSimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "initial_capital".to_string(),
            reason: "initial_capital must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_risk_free_rate(config: &dyn ConfigPort) -> Result<(), EtfSimError> {
    let value = config.get_double("simulation", "risk_free_rate", 2.0);
    if !(0.0..100.0).contains(&value) {
        return Err(EtfSimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "risk_free_rate".to_string(),
            reason: "risk_free_rate is an annual percentage between 0 and 100".to_string(),
        });
    }
    Ok(())
}

fn validate_funds(config: &dyn ConfigPort) -> Result<(), EtfSimError> {
    let funds = config
        .get_string("simulation", "funds")
        .ok_or_else(|| EtfSimError::ConfigMissing {
            section: "simulation".to_string(),
            key: "funds".to_string(),
        })?;

    parse_selection(&funds).map_err(|e| EtfSimError::ConfigInvalid {
        section: "simulation".to_string(),
        key: "funds".to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn validate_benchmark(config: &dyn ConfigPort) -> Result<(), EtfSimError> {
    match config.get_string("simulation", "benchmark") {
        Some(s) if s.trim().is_empty() => Err(EtfSimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "benchmark".to_string(),
            reason: "benchmark must not be empty when set".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_window(config: &dyn ConfigPort) -> Result<(), EtfSimError> {
    let mode = config
        .get_string("simulation", "date_mode")
        .unwrap_or_else(|| "range".to_string());

    match mode.as_str() {
        "range" => {
            let start = parse_date(config, "start_date")?;
            let end = parse_date(config, "end_date")?;
            if start >= end {
                return Err(EtfSimError::ConfigInvalid {
                    section: "simulation".to_string(),
                    key: "start_date".to_string(),
                    reason: "start_date must be before end_date".to_string(),
                });
            }
            Ok(())
        }
        "period" => {
            let period =
                config
                    .get_string("simulation", "period")
                    .ok_or_else(|| EtfSimError::ConfigMissing {
                        section: "simulation".to_string(),
                        key: "period".to_string(),
                    })?;
            period
                .parse::<PredefinedPeriod>()
                .map_err(|reason| EtfSimError::ConfigInvalid {
                    section: "simulation".to_string(),
                    key: "period".to_string(),
                    reason,
                })?;
            Ok(())
        }
        other => Err(EtfSimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "date_mode".to_string(),
            reason: format!("unknown date_mode '{}', expected range or period", other),
        }),
    }
}

fn parse_date(config: &dyn ConfigPort, field: &str) -> Result<NaiveDate, EtfSimError> {
    match config.get_string("simulation", field) {
        None => Err(EtfSimError::ConfigMissing {
            section: "simulation".to_string(),
            key: field.to_string(),
        }),
        Some(s) => {
            NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| EtfSimError::ConfigInvalid {
                section: "simulation".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            })
        }
    }
}
