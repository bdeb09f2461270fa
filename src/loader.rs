//! Chart discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{GalleryError, Result};
use crate::model::{resolve_title, ChartFile, ChartRecord};

/// Read-only snapshot of every chart found under a root directory, sorted by title
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    charts: Vec<ChartRecord>,
}

impl Gallery {
    /// Build a gallery from already loaded records
    pub fn new(mut charts: Vec<ChartRecord>) -> Self {
        charts.sort_by(|a, b| a.title.cmp(&b.title));
        Self { charts }
    }

    /// Load every chart under `root`. A missing root yields an empty gallery.
    pub fn load<P: AsRef<Path>>(root: P) -> Self {
        Self::new(load_charts(root.as_ref()))
    }

    pub fn charts(&self) -> &[ChartRecord] {
        &self.charts
    }

    /// First chart (in title order) whose id matches
    pub fn find(&self, id: &str) -> Option<&ChartRecord> {
        self.charts.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

/// Recursively collect `*.json` files under `root` in directory-walk order.
///
/// Entries of each directory are visited in file name order. Subdirectories
/// that cannot be read are logged and skipped; an unreadable root is an error.
pub fn find_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(GalleryError::MissingDirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    walk(root, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            if let Err(e) = walk(&path, files) {
                warn!("Skipping directory {}: {}", path.display(), e);
            }
        } else if is_json(&path) && path.is_file() {
            files.push(path);
        }
    }

    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension().map(|e| e == "json").unwrap_or(false)
}

/// Read and parse a chart export. The top-level value must be a JSON object.
pub fn read_chart_file(path: &Path) -> Result<ChartFile> {
    let invalid = |reason: String| GalleryError::InvalidChart {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = fs::read(path)?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| invalid(e.to_string()))?;
    match value {
        Value::Object(map) => {
            serde_json::from_value(Value::Object(map)).map_err(|e| invalid(e.to_string()))
        }
        other => Err(invalid(format!("expected a JSON object, found {}", json_kind(&other)))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// File stem used as the chart id
pub fn chart_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load a single chart record
pub fn load_chart(path: &Path) -> Result<ChartRecord> {
    let file = read_chart_file(path)?;
    let id = chart_id(path);
    let title = resolve_title(&file.layout, &id);

    Ok(ChartRecord {
        id,
        title,
        source_path: path.to_path_buf(),
        data: file.data,
        layout: file.layout,
    })
}

/// Load every chart under `root`, skipping files that fail to parse.
///
/// The result is sorted by title.
pub fn load_charts(root: &Path) -> Vec<ChartRecord> {
    let files = match find_json_files(root) {
        Ok(files) => files,
        Err(e) => {
            warn!("No charts loaded from {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut charts = Vec::with_capacity(files.len());
    for path in files {
        match load_chart(&path) {
            Ok(chart) => {
                debug!("Loaded {} ({})", path.display(), chart.title);
                charts.push(chart);
            }
            Err(e) => warn!("Error loading {}: {}", path.display(), e),
        }
    }

    charts.sort_by(|a, b| a.title.cmp(&b.title));
    info!("Loaded {} chart(s) from {}", charts.len(), root.display());
    charts
}
