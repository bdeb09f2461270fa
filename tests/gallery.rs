use std::fs;
use std::path::Path;

use chart_gallery::{Gallery, GalleryApp, RenderSettings};
use tempfile::tempdir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn loads_sorted_and_skips_invalid_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write(root, "zeta.json", r#"{"data":[],"layout":{"title":"Alpha"}}"#);
    write(root, "sub/monthly-revenue.json", r#"{"data":[{"y":[1]}]}"#);
    write(root, "sub/deeper/beta.json", r#"{"layout":{"title":{"text":"Beta"}}}"#);
    write(root, "broken.json", "{");
    write(root, "empty-list.json", "[]");

    let gallery = Gallery::load(root);
    let titles: Vec<_> = gallery.charts().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Monthly Revenue"]);
    assert!(gallery.find("empty-list").is_none());

    let revenue = gallery.find("monthly-revenue").unwrap();
    assert_eq!(revenue.data.len(), 1);
    assert!(revenue.layout.is_empty());
    assert!(revenue.source_path.ends_with("sub/monthly-revenue.json"));
}

#[test]
fn missing_directory_gives_empty_gallery() {
    let dir = tempdir().unwrap();
    let gallery = Gallery::load(dir.path().join("json"));
    assert!(gallery.is_empty());
}

#[test]
fn serves_pages_from_loaded_directory() {
    let dir = tempdir().unwrap();
    write(dir.path(), "sales.json", r#"{"data":[{"type":"pie"}],"layout":{"title":"Sales","width":640}}"#);

    let app = GalleryApp::new(Gallery::load(dir.path()), RenderSettings::default());

    let index = app.handle("GET", "/");
    assert_eq!(index.status, 200);
    assert!(index.body.contains(r#"<a class="chart-link" href="/chart/sales">Sales</a>"#));

    let chart = app.handle("GET", "/chart/sales");
    assert_eq!(chart.status, 200);
    assert!(chart.body.contains("&quot;type&quot;:&quot;pie&quot;"));

    let missing = app.handle("GET", "/chart/abc");
    assert_eq!(missing.status, 404);
    assert!(missing.body.contains("Back to Gallery"));
}
