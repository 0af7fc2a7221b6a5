//! Fund selection parsing and validation.
//!
//! Accepts a comma-separated list of catalog labels or raw ticker symbols,
//! resolved against the built-in catalog. One to three funds per run.

use crate::domain::catalog;
use crate::domain::error::SelectionError;
use std::collections::HashSet;

pub const MAX_SELECTED_FUNDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub symbol: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct InstrumentSelection {
    pub instruments: Vec<Instrument>,
}

impl InstrumentSelection {
    pub fn count(&self) -> usize {
        self.instruments.len()
    }

    pub fn joined_symbols(&self) -> String {
        self.instruments
            .iter()
            .map(|i| i.symbol.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn parse_selection(input: &str) -> Result<InstrumentSelection, SelectionError> {
    if input.trim().is_empty() {
        return Err(SelectionError::Empty);
    }

    let mut instruments = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(SelectionError::EmptyToken);
        }

        let instrument = match catalog::by_label(trimmed) {
            Some(fund) => Instrument {
                symbol: fund.symbol.to_string(),
                label: fund.label.to_string(),
            },
            None => {
                let symbol = trimmed.to_uppercase();
                Instrument {
                    label: catalog::label_for(&symbol),
                    symbol,
                }
            }
        };

        if seen.contains(&instrument.symbol) {
            return Err(SelectionError::DuplicateFund(instrument.symbol));
        }
        seen.insert(instrument.symbol.clone());
        instruments.push(instrument);
    }

    if instruments.len() > MAX_SELECTED_FUNDS {
        return Err(SelectionError::TooMany {
            count: instruments.len(),
            max: MAX_SELECTED_FUNDS,
        });
    }

    Ok(InstrumentSelection { instruments })
}
