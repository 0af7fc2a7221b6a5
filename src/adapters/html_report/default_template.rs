//! Built-in HTML report template with `{{PLACEHOLDER}}` substitution.

pub fn template() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Investment Simulation Report</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; color: #1e293b; }
h1 { color: #003366; text-align: center; }
h2 { color: #336699; border-bottom: 1px solid #cbd5e1; padding-bottom: 0.3rem; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #cbd5e1; padding: 0.4rem 0.8rem; text-align: left; }
th { background: #f0f2f6; }
.card { background: #f0f2f6; padding: 0.8rem 1rem; border-radius: 10px; margin: 1rem 0; }
.card h4 { color: #003366; margin: 0 0 0.5rem 0; }
.final { color: #2e8b57; }
.warnings { background: #fef9c3; padding: 0.5rem 1rem; border-radius: 6px; }
svg { width: 100%; height: auto; }
</style>
</head>
<body>
<h1>Investment Simulation Report</h1>

<h2>Parameters</h2>
{{SUMMARY_TABLE}}

<h2>Cumulative value</h2>
{{VALUE_CHART_SVG}}

<h2>Results</h2>
{{FUND_CARDS}}

<h2>Metrics</h2>
{{METRICS_TABLE}}

{{WARNINGS}}
</body>
</html>
"#
}
