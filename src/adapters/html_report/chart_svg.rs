//! SVG chart rendering for the cumulative-value comparison.

use crate::domain::align::AlignedTable;

const PALETTE: &[&str] = &["#2563eb", "#16a34a", "#d97706", "#7c3aed"];

/// Multi-series line chart of the cumulative-value table. Returns an empty
/// string when there is nothing to plot.
pub fn render_value_chart(table: &AlignedTable) -> String {
    if table.dates.is_empty() || table.columns.is_empty() {
        return String::new();
    }

    let width = 640.0;
    let height = 320.0;
    let padding = 45.0;

    let plot_width = width - 2.0 * padding;
    let plot_height = height - 2.0 * padding;

    let min_value = table
        .columns
        .iter()
        .flat_map(|c| c.values.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let max_value = table
        .columns
        .iter()
        .flat_map(|c| c.values.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);

    let range = max_value - min_value;
    let scale_y = if range > 0.0 { plot_height / range } else { 1.0 };
    let scale_x = if table.dates.len() > 1 {
        plot_width / (table.dates.len() - 1) as f64
    } else {
        0.0
    };

    let mut svg = format!(
        r##"<svg viewBox="0 0 {width:.0} {height:.0}" xmlns="http://www.w3.org/2000/svg">
<rect width="{width:.0}" height="{height:.0}" fill="white"/>
<line x1="{pad:.0}" y1="{pad:.0}" x2="{pad:.0}" y2="{y0:.0}" stroke="#94a3b8"/>
<line x1="{pad:.0}" y1="{y0:.0}" x2="{x1:.0}" y2="{y0:.0}" stroke="#94a3b8"/>
"##,
        width = width,
        height = height,
        pad = padding,
        y0 = height - padding,
        x1 = width - padding,
    );

    for (i, column) in table.columns.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<String> = column
            .values
            .iter()
            .enumerate()
            .map(|(j, &v)| {
                let x = padding + j as f64 * scale_x;
                let y = height - padding - (v - min_value) * scale_y;
                format!("{:.1},{:.1}", x, y)
            })
            .collect();

        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" points=\"{}\"/>\n",
            color,
            points.join(" ")
        ));

        // legend swatch + label, stacked top-left
        let legend_y = padding + 14.0 * i as f64;
        svg.push_str(&format!(
            "<rect x=\"{:.0}\" y=\"{:.0}\" width=\"10\" height=\"10\" fill=\"{}\"/>\n",
            padding + 8.0,
            legend_y,
            color
        ));
        svg.push_str(&format!(
            "<text x=\"{:.0}\" y=\"{:.0}\" font-size=\"11\" fill=\"#334155\">{}</text>\n",
            padding + 22.0,
            legend_y + 9.0,
            column.id
        ));
    }

    let first_date = table.dates[0];
    let last_date = table.dates[table.dates.len() - 1];
    svg.push_str(&format!(
        "<text x=\"{:.0}\" y=\"{:.0}\" font-size=\"11\" fill=\"#334155\">{}</text>\n",
        padding,
        height - padding + 16.0,
        first_date
    ));
    svg.push_str(&format!(
        "<text x=\"{:.0}\" y=\"{:.0}\" font-size=\"11\" fill=\"#334155\" text-anchor=\"end\">{}</text>\n",
        width - padding,
        height - padding + 16.0,
        last_date
    ));
    svg.push_str(&format!(
        "<text x=\"{:.0}\" y=\"{:.0}\" font-size=\"11\" fill=\"#334155\" text-anchor=\"end\">{:.0}</text>\n",
        padding - 6.0,
        padding + 4.0,
        max_value
    ));
    svg.push_str(&format!(
        "<text x=\"{:.0}\" y=\"{:.0}\" font-size=\"11\" fill=\"#334155\" text-anchor=\"end\">{:.0}</text>\n",
        padding - 6.0,
        height - padding + 4.0,
        min_value
    ));

    svg.push_str("</svg>\n");
    svg
}
