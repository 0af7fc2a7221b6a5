//! HTML report adapter implementing ReportPort.
//!
//! Orchestrates placeholder resolution: takes an HTML template (the
//! built-in default or a custom file), resolves all `{{PLACEHOLDER}}`
//! markers with helpers from `chart_svg` and `tables`, and writes the
//! final file. Stands in for the hosted UI's report download.

pub mod chart_svg;
pub mod default_template;
pub mod tables;

use std::fs;
use std::path::Path;

use crate::domain::error::EtfSimError;
use crate::domain::report::ComparisonReport;
use crate::domain::selection::InstrumentSelection;
use crate::domain::simulation::SimulationConfig;
use crate::ports::report_port::ReportPort;

/// Context for resolving template placeholders.
pub struct ReportContext<'a> {
    pub report: &'a ComparisonReport,
    pub selection: &'a InstrumentSelection,
    pub config: &'a SimulationConfig,
}

/// Resolve all `{{PLACEHOLDER}}`s in the given template string and return
/// the final HTML document.
pub fn resolve(template: &str, ctx: &ReportContext) -> String {
    let mut output = template.to_string();

    let summary = tables::render_summary(ctx.selection, ctx.config);
    output = output.replace("{{SUMMARY_TABLE}}", &summary);

    let chart = chart_svg::render_value_chart(&ctx.report.chart);
    let chart_html = if chart.is_empty() {
        "<p>No chart data.</p>".to_string()
    } else {
        chart
    };
    output = output.replace("{{VALUE_CHART_SVG}}", &chart_html);

    let cards = tables::render_fund_cards(ctx.report, ctx.selection, ctx.config);
    output = output.replace("{{FUND_CARDS}}", &cards);

    let metrics = tables::render_metrics_table(&ctx.report.metrics);
    output = output.replace("{{METRICS_TABLE}}", &metrics);

    let warnings = tables::render_warnings(&ctx.report.warnings);
    output = output.replace("{{WARNINGS}}", &warnings);

    output
}

pub struct HtmlReportAdapter {
    template: Option<String>,
}

impl HtmlReportAdapter {
    pub fn new() -> Self {
        Self { template: None }
    }

    /// Use a custom template instead of the built-in one.
    pub fn with_template(template: String) -> Self {
        Self {
            template: Some(template),
        }
    }
}

impl Default for HtmlReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for HtmlReportAdapter {
    fn write(
        &self,
        report: &ComparisonReport,
        selection: &InstrumentSelection,
        config: &SimulationConfig,
        output_path: &str,
    ) -> Result<(), EtfSimError> {
        let ctx = ReportContext {
            report,
            selection,
            config,
        };
        let template = self
            .template
            .as_deref()
            .unwrap_or_else(|| default_template::template());
        let html = resolve(template, &ctx);

        let path = Path::new(output_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(EtfSimError::Io)?;
        }
        fs::write(path, html).map_err(EtfSimError::Io)?;

        Ok(())
    }
}
