//! Domain error types.

/// Errors raised while parsing a fund selection string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no funds selected")]
    Empty,

    #[error("empty token in fund list")]
    EmptyToken,

    #[error("duplicate fund: {0}")]
    DuplicateFund(String),

    #[error("too many funds selected: {count} (maximum {max})")]
    TooMany { count: usize, max: usize },
}

/// Top-level error type for etfsim.
#[derive(Debug, thiserror::Error)]
pub enum EtfSimError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("failed to fetch {symbol}: {reason}")]
    Fetch { symbol: String, reason: String },

    #[error("no data available for any selected fund ({symbols})")]
    NoDataAvailable { symbols: String },

    #[error("no overlapping dates across {symbols}")]
    EmptyAlignment { symbols: String },

    #[error("insufficient data for {symbol}: have {points} price points, need at least 2")]
    InsufficientData { symbol: String, points: usize },

    #[error("invalid price series for {symbol}: {reason}")]
    InvalidSeries { symbol: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&EtfSimError> for std::process::ExitCode {
    fn from(err: &EtfSimError) -> Self {
        let code: u8 = match err {
            EtfSimError::Io(_) => 1,
            EtfSimError::ConfigParse { .. }
            | EtfSimError::ConfigMissing { .. }
            | EtfSimError::ConfigInvalid { .. } => 2,
            EtfSimError::Fetch { .. } | EtfSimError::NoDataAvailable { .. } => 3,
            EtfSimError::Selection(_) => 4,
            EtfSimError::EmptyAlignment { .. }
            | EtfSimError::InsufficientData { .. }
            | EtfSimError::InvalidSeries { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
