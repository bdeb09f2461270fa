use crate::error::Result;
use crate::model::ChartRecord;
use crate::render::templates::{fill, STANDALONE_TEMPLATE};
use crate::render::{escape_html, script_json};

/// Render a self-contained HTML document that plots the chart on load.
///
/// `data` and `layout` are inlined as JS literals; the only external
/// resource is the charting library at `plotly_url`.
pub fn render_standalone(chart: &ChartRecord, plotly_url: &str) -> Result<String> {
    let data = script_json(&chart.data)?;
    let layout = script_json(&chart.layout)?;
    let title = escape_html(&chart.title);
    let plotly_url = escape_html(plotly_url);

    Ok(fill(
        STANDALONE_TEMPLATE,
        &[
            ("title", title.as_str()),
            ("plotly_url", plotly_url.as_str()),
            ("data", data.as_str()),
            ("layout", layout.as_str()),
        ],
    ))
}
