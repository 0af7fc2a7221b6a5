//! HTML fragments for the report: summary, result cards, metrics table,
//! warnings list.

use crate::domain::metrics::PerformanceMetrics;
use crate::domain::report::ComparisonReport;
use crate::domain::selection::InstrumentSelection;
use crate::domain::simulation::SimulationConfig;

pub fn render_summary(selection: &InstrumentSelection, config: &SimulationConfig) -> String {
    let mut output = String::from("<table class=\"summary\">\n");
    output.push_str(&format!(
        "<tr><th>Funds</th><td>{}</td></tr>\n",
        escape(&selection.joined_symbols())
    ));
    output.push_str(&format!(
        "<tr><th>Initial capital</th><td>${}</td></tr>\n",
        format_money(config.initial_capital)
    ));
    output.push_str(&format!(
        "<tr><th>Window</th><td>{}</td></tr>\n",
        config.window
    ));
    output.push_str(&format!(
        "<tr><th>Risk-free rate</th><td>{:.2}%</td></tr>\n",
        config.risk_free_rate
    ));
    if config.include_benchmark {
        output.push_str(&format!(
            "<tr><th>Benchmark</th><td>{}</td></tr>\n",
            escape(&config.benchmark_symbol)
        ));
    }
    output.push_str("</table>\n");
    output
}

/// One result card per fund with a metrics row, in the order metrics were
/// computed. Mirrors the hosted UI's per-fund result blocks.
pub fn render_fund_cards(
    report: &ComparisonReport,
    selection: &InstrumentSelection,
    config: &SimulationConfig,
) -> String {
    let mut output = String::new();

    for (symbol, metrics) in &report.metrics {
        let label = selection
            .instruments
            .iter()
            .find(|i| &i.symbol == symbol)
            .map(|i| i.label.as_str())
            .unwrap_or(symbol.as_str());

        output.push_str("<div class=\"card\">\n");
        output.push_str(&format!("<h4>{}</h4>\n", escape(label)));
        output.push_str(&format!(
            "<p>An initial investment of <strong>${}</strong> over the selected window \
             would now be worth <strong class=\"final\">${}</strong>.</p>\n",
            format_money(config.initial_capital),
            format_money(metrics.final_value)
        ));
        output.push_str("<ul>\n");
        output.push_str(&format!(
            "<li>Annualized return: {:.2}%</li>\n",
            metrics.annualized_return_pct
        ));
        output.push_str(&format!(
            "<li>Annualized volatility: {:.2}%</li>\n",
            metrics.annualized_volatility_pct
        ));
        output.push_str(&format!(
            "<li>Sharpe ratio: {:.2}</li>\n",
            metrics.sharpe_ratio
        ));
        output.push_str("</ul>\n</div>\n");
    }

    output
}

pub fn render_metrics_table(metrics: &[(String, PerformanceMetrics)]) -> String {
    if metrics.is_empty() {
        return "<p>No metrics available.</p>\n".to_string();
    }

    let mut output = String::from(
        "<table class=\"metrics\">\n<tr><th>Fund</th><th>Final value</th>\
         <th>Annualized return</th><th>Volatility</th><th>Sharpe</th></tr>\n",
    );
    for (symbol, m) in metrics {
        output.push_str(&format!(
            "<tr><td>{}</td><td>${}</td><td>{:.2}%</td><td>{:.2}%</td><td>{:.2}</td></tr>\n",
            escape(symbol),
            format_money(m.final_value),
            m.annualized_return_pct,
            m.annualized_volatility_pct,
            m.sharpe_ratio
        ));
    }
    output.push_str("</table>\n");
    output
}

pub fn render_warnings(warnings: &[String]) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut output = String::from("<div class=\"warnings\">\n<h3>Warnings</h3>\n<ul>\n");
    for warning in warnings {
        output.push_str(&format!("<li>{}</li>\n", escape(warning)));
    }
    output.push_str("</ul>\n</div>\n");
    output
}

/// Two decimal places with thousands separators: 1234567.891 -> 1,234,567.89
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
