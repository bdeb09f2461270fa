use std::fmt::Write;

use crate::config::RenderSettings;
use crate::error::Result;
use crate::model::ChartRecord;
use crate::render::templates::{fill, CHART_JS, PAGE_TEMPLATE, STYLES_CSS};
use crate::render::escape_html;
use crate::router::View;

/// Render any view to a complete HTML page
pub fn render_view(view: &View<'_>, settings: &RenderSettings) -> Result<String> {
    match view {
        View::Index(charts) => Ok(render_index(charts, settings)),
        View::Chart(chart) => render_chart(chart, settings),
        View::ChartNotFound(_) => Ok(render_not_found("Chart Not Found", settings)),
        View::NotFound => Ok(render_not_found("404 - Page Not Found", settings)),
    }
}

/// Gallery index: one card per chart, in the given order
pub fn render_index(charts: &[ChartRecord], settings: &RenderSettings) -> String {
    let mut body = String::new();

    body.push_str("<div class=\"container\">\n");
    body.push_str("<header class=\"gallery-header\">\n");
    let _ = writeln!(body, "<h1>{}</h1>", brand_heading(&settings.gallery_title));
    let _ = writeln!(body, "<p class=\"subtitle\">{}</p>", escape_html(&settings.subtitle));
    body.push_str("</header>\n");

    if charts.is_empty() {
        body.push_str("<p class=\"empty-state\">No charts found.</p>\n");
    } else {
        body.push_str("<div class=\"chart-grid\">\n");
        for chart in charts {
            body.push_str(&render_card(chart));
        }
        body.push_str("</div>\n");
    }
    body.push_str("</div>");

    page(&settings.gallery_title, "", &body)
}

fn render_card(chart: &ChartRecord) -> String {
    let href = chart_href(&chart.id);
    let title = escape_html(&chart.title);
    let id = escape_html(&chart.id);

    format!(
        "<div class=\"chart-card\">\n\
         <a class=\"chart-link\" href=\"{href}\">{title}</a>\n\
         <div class=\"chart-name\">{id}</div>\n\
         <div class=\"button-group\"><a class=\"btn btn-primary\" href=\"{href}\">View Chart</a></div>\n\
         </div>\n"
    )
}

/// Single chart page. The payload rides on a data attribute and is drawn client side.
pub fn render_chart(chart: &ChartRecord, settings: &RenderSettings) -> Result<String> {
    let payload = serde_json::to_string(&chart.payload())?;

    let head = format!(
        "<script src=\"{}\" async></script>",
        escape_html(&settings.plotly_url)
    );
    let body = format!(
        "<div class=\"chart-page\">\n\
         <div id=\"plotly-chart-container\" data-chart=\"{}\"></div>\n\
         </div>\n\
         <script>\n{}</script>",
        escape_html(&payload),
        CHART_JS
    );

    Ok(page(&chart.title, &head, &body))
}

fn render_not_found(heading: &str, settings: &RenderSettings) -> String {
    let body = format!(
        "<div class=\"container not-found\">\n\
         <h1>{}</h1>\n\
         <a href=\"/\">Back to Gallery</a>\n\
         </div>",
        escape_html(heading)
    );
    let title = format!("{} | {}", heading, settings.gallery_title);
    page(&title, "", &body)
}

/// Link to a chart page, percent-encoding anything outside the unreserved set
pub fn chart_href(id: &str) -> String {
    format!("/chart/{}", urlencoding::encode(id))
}

/// Highlight the first word of the gallery title
fn brand_heading(title: &str) -> String {
    match title.split_once(' ') {
        Some((brand, rest)) => format!(
            "<span class=\"brand\">{}</span> {}",
            escape_html(brand),
            escape_html(rest)
        ),
        None => escape_html(title),
    }
}

fn page(title: &str, head: &str, body: &str) -> String {
    let title = escape_html(title);
    fill(
        PAGE_TEMPLATE,
        &[
            ("title", title.as_str()),
            ("styles", STYLES_CSS),
            ("head", head),
            ("body", body),
        ],
    )
}
