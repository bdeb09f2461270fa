use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// On-disk shape of a chart export: `{ "data": [...], "layout": {...} }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartFile {
    /// Trace objects, opaque to this crate
    #[serde(default)]
    pub data: Vec<Value>,
    /// Layout object (axes, title, margins, ...)
    #[serde(default)]
    pub layout: Map<String, Value>,
}

/// A loaded chart, immutable once built by the loader
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    /// File stem of the source JSON file
    pub id: String,
    /// Display title, never empty
    pub title: String,
    pub source_path: PathBuf,
    pub data: Vec<Value>,
    pub layout: Map<String, Value>,
}

/// Payload handed to the charting library
#[derive(Debug, Serialize)]
pub struct PlotPayload<'a> {
    pub data: &'a [Value],
    pub layout: &'a Map<String, Value>,
}

impl ChartRecord {
    pub fn payload(&self) -> PlotPayload<'_> {
        PlotPayload {
            data: &self.data,
            layout: &self.layout,
        }
    }
}
