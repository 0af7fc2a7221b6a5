//! Built-in fund catalog.
//!
//! The funds offered by the simulator, keyed by their display label with the
//! underlying ticker symbol. Descriptions exist for a subset only.

pub struct FundInfo {
    pub label: &'static str,
    pub symbol: &'static str,
    pub description: Option<&'static str>,
}

pub const FUNDS: &[FundInfo] = &[
    FundInfo {
        label: "AZ China",
        symbol: "ASHR",
        description: Some("Tracks the CSI 300 index of large-cap Chinese equities."),
    },
    FundInfo {
        label: "AZ MSCI TAIWAN INDEX FD",
        symbol: "EWT",
        description: Some("Tracks the MSCI Taiwan index of large-cap Taiwanese companies."),
    },
    FundInfo {
        label: "AZ RUSSELL 2000",
        symbol: "IWM",
        description: Some("Tracks the Russell 2000 index of US small-cap stocks."),
    },
    FundInfo {
        label: "AZ Brasil",
        symbol: "EWZ",
        description: Some("Tracks the MSCI Brazil index of large Brazilian companies."),
    },
    FundInfo {
        label: "AZ MSCI UNITED KINGDOM",
        symbol: "EWU",
        description: None,
    },
    FundInfo {
        label: "AZ DJ US FINANCIAL SECT",
        symbol: "IYF",
        description: Some("Tracks the DJ US Financials index of large US financial stocks."),
    },
    FundInfo {
        label: "AZ BRIC",
        symbol: "BKF",
        description: None,
    },
    FundInfo {
        label: "AZ MSCI SOUTH KOREA IND",
        symbol: "EWY",
        description: None,
    },
    FundInfo {
        label: "AZ BARCLAYS AGGREGATE",
        symbol: "AGG",
        description: None,
    },
    FundInfo {
        label: "AZ Mercados Emergentes",
        symbol: "EEM",
        description: None,
    },
    FundInfo {
        label: "AZ MSCI EMU",
        symbol: "EZU",
        description: None,
    },
    FundInfo {
        label: "AZ FTSE/XINHUA CHINA 25",
        symbol: "FXI",
        description: None,
    },
    FundInfo {
        label: "AZ Oro",
        symbol: "GLD",
        description: None,
    },
    FundInfo {
        label: "AZ LATIXX MEX CETETRAC",
        symbol: "MXX",
        description: None,
    },
    FundInfo {
        label: "AZ QQQ NASDAQ 100",
        symbol: "QQQ",
        description: None,
    },
    FundInfo {
        label: "AZ MSCI ASIA EX-JAPAN",
        symbol: "AAXJ",
        description: None,
    },
    FundInfo {
        label: "AZ SPDR S&P 500 ETF TRUST",
        symbol: "SPY",
        description: Some("Tracks the S&P 500, the leading US large-cap index."),
    },
    FundInfo {
        label: "AZ DJ US OIL & GAS EXPL",
        symbol: "IEO",
        description: None,
    },
];

pub fn by_symbol(symbol: &str) -> Option<&'static FundInfo> {
    FUNDS.iter().find(|f| f.symbol.eq_ignore_ascii_case(symbol))
}

pub fn by_label(label: &str) -> Option<&'static FundInfo> {
    FUNDS.iter().find(|f| f.label.eq_ignore_ascii_case(label))
}

/// Display label for a symbol, falling back to the symbol itself for
/// tickers outside the catalog.
pub fn label_for(symbol: &str) -> String {
    by_symbol(symbol)
        .map(|f| f.label.to_string())
        .unwrap_or_else(|| symbol.to_uppercase())
}
