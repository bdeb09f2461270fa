//! Maps request paths to gallery views.

use crate::loader::Gallery;
use crate::model::ChartRecord;

const CHART_PREFIX: &str = "/chart/";

/// A parsed request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Chart(String),
    NotFound,
}

impl Route {
    /// Parse a request target. Query strings and fragments are ignored.
    pub fn parse(target: &str) -> Self {
        let path = target
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if path.is_empty() || path == "/" {
            Route::Index
        } else if let Some(id) = path.strip_prefix(CHART_PREFIX) {
            Route::Chart(percent_decode(id))
        } else {
            Route::NotFound
        }
    }
}

/// What to render for a route
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Index(&'a [ChartRecord]),
    Chart(&'a ChartRecord),
    ChartNotFound(&'a str),
    NotFound,
}

impl View<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, View::ChartNotFound(_) | View::NotFound)
    }
}

/// Resolve a route against the loaded gallery
pub fn resolve<'a>(route: &'a Route, gallery: &'a Gallery) -> View<'a> {
    match route {
        Route::Index => View::Index(gallery.charts()),
        Route::Chart(id) => match gallery.find(id) {
            Some(chart) => View::Chart(chart),
            None => View::ChartNotFound(id),
        },
        Route::NotFound => View::NotFound,
    }
}

/// Decode `%XX` escapes, keeping the raw id if the result is not UTF-8
fn percent_decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use std::path::PathBuf;

    fn gallery() -> Gallery {
        Gallery::new(vec![ChartRecord {
            id: "q1 sales".to_string(),
            title: "Q1 Sales".to_string(),
            source_path: PathBuf::from("json/q1 sales.json"),
            data: Vec::new(),
            layout: Map::new(),
        }])
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Index);
        assert_eq!(Route::parse("/"), Route::Index);
        assert_eq!(Route::parse("/?x=1"), Route::Index);
        assert_eq!(Route::parse("/chart/abc"), Route::Chart("abc".to_string()));
        assert_eq!(Route::parse("/chart/"), Route::Chart(String::new()));
        assert_eq!(Route::parse("/charts"), Route::NotFound);
        assert_eq!(Route::parse("/about"), Route::NotFound);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(Route::parse("/chart/q1%20sales"), Route::Chart("q1 sales".to_string()));
        assert_eq!(Route::parse("/chart/100%"), Route::Chart("100%".to_string()));
        assert_eq!(Route::parse("/chart/%zz"), Route::Chart("%zz".to_string()));
        assert_eq!(Route::parse("/chart/%+5abc"), Route::Chart("%+5abc".to_string()));
        assert_eq!(Route::parse("/chart/%FF"), Route::Chart("%FF".to_string()));
        assert_eq!(Route::parse("/chart/caf%C3%A9"), Route::Chart("café".to_string()));
    }

    #[test]
    fn test_unknown_chart_is_not_found() {
        let gallery = gallery();
        let route = Route::parse("/chart/abc");
        let view = resolve(&route, &gallery);
        assert_eq!(view, View::ChartNotFound("abc"));
        assert!(view.is_not_found());
    }

    #[test]
    fn test_known_chart() {
        let gallery = gallery();
        let route = Route::parse("/chart/q1%20sales");
        match resolve(&route, &gallery) {
            View::Chart(chart) => assert_eq!(chart.title, "Q1 Sales"),
            other => panic!("expected chart view, got {:?}", other),
        }
    }

    #[test]
    fn test_index_lists_all() {
        let gallery = gallery();
        let route = Route::parse("/");
        assert!(matches!(resolve(&route, &gallery), View::Index(charts) if charts.len() == 1));
    }
}
