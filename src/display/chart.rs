//! Ring chart rendering: a terminal table of segments and a standalone SVG

use tabled::{settings::Style, Table, Tabled};

use super::report::format_percentage;
use crate::engine::chart::CANVAS_SIZE;
use crate::engine::RingChart;

#[derive(Tabled)]
struct SegmentRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Color")]
    color: String,
}

/// Format segment angles (in degrees) and the center text
pub fn format_chart_table(chart: &RingChart) -> String {
    let mut output = String::new();

    if !chart.is_empty() {
        let rows: Vec<SegmentRow> = chart
            .segments
            .iter()
            .map(|seg| SegmentRow {
                category: seg.category.label().to_string(),
                share: format_percentage(seg.percentage),
                start: format!("{:.1}°", seg.start_angle.to_degrees()),
                end: format!("{:.1}°", seg.end_angle.to_degrees()),
                label: seg
                    .label
                    .as_ref()
                    .map(|l| l.text.clone())
                    .unwrap_or_default(),
                color: seg.color.to_string(),
            })
            .collect();

        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output.push_str(&chart.center.title);
    output.push('\n');
    if let Some(value) = &chart.center.value {
        output.push_str(value);
        output.push('\n');
    }
    if let Some(caption) = &chart.center.caption {
        output.push_str(caption);
        output.push('\n');
    }
    output
}

/// Render the chart as a standalone SVG document
pub fn render_svg(chart: &RingChart) -> String {
    let layout = &chart.layout;
    let size = if layout.outer_radius * 2.0 <= CANVAS_SIZE {
        CANVAS_SIZE
    } else {
        (layout.outer_radius * 2.05).ceil()
    };
    let half = size / 2.0;
    let theme = chart.theme;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\" \
         width=\"{size}\" height=\"{size}\" role=\"img\" \
         aria-label=\"Radial budget breakdown chart\">\n",
        size = size
    ));
    svg.push_str(&format!(
        "  <g transform=\"translate({},{})\" font-family=\"-apple-system, Helvetica, Arial, sans-serif\" text-anchor=\"middle\">\n",
        half, half
    ));

    if let Some(placeholder) = &chart.placeholder {
        svg.push_str(&format!(
            "    <path d=\"{}\" fill=\"{}\" fill-rule=\"evenodd\"/>\n",
            placeholder.path, placeholder.color
        ));
        svg.push_str(&format!(
            "    <text dy=\"0.35em\" font-size=\"16\" font-weight=\"600\" fill=\"#9ca3af\">{}</text>\n",
            escape(&chart.center.title)
        ));
        svg.push_str("  </g>\n</svg>\n");
        return svg;
    }

    for seg in chart.segments.iter().filter(|s| !s.path.is_empty()) {
        svg.push_str(&format!(
            "    <path d=\"{}\" fill=\"{}\" fill-rule=\"evenodd\"><title>{}</title></path>\n",
            seg.path,
            seg.color,
            escape(seg.category.label())
        ));
    }

    for label in chart.segments.iter().filter_map(|s| s.label.as_ref()) {
        svg.push_str(&format!(
            "    <text x=\"{:.3}\" y=\"{:.3}\" dy=\"0.35em\" font-size=\"13\" font-weight=\"800\" fill=\"white\">{}</text>\n",
            label.x,
            label.y,
            escape(&label.text)
        ));
    }

    svg.push_str(&format!(
        "    <circle r=\"{:.3}\" fill=\"{}\"/>\n",
        (layout.inner_radius - 2.0).max(0.0),
        theme.center_color()
    ));

    svg.push_str(&format!(
        "    <text dy=\"-0.6em\" font-size=\"14\" font-weight=\"600\" fill=\"{}\">{}</text>\n",
        theme.secondary_text_color(),
        escape(&chart.center.title)
    ));
    if let Some(value) = &chart.center.value {
        svg.push_str(&format!(
            "    <text dy=\"0.7em\" font-size=\"28\" font-weight=\"900\" fill=\"{}\">{}</text>\n",
            theme.primary_text_color(),
            escape(value)
        ));
    }
    if let Some(caption) = &chart.center.caption {
        svg.push_str(&format!(
            "    <text dy=\"3.2em\" font-size=\"12\" font-weight=\"700\" fill=\"#007AFF\">{}</text>\n",
            escape(caption)
        ));
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
