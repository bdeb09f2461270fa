//! Static conversion of chart exports into standalone HTML files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::{ConvertConfig, NamingScheme};
use crate::error::{GalleryError, Result};
use crate::loader::{find_json_files, load_chart};
use crate::model::ChartRecord;
use crate::render::render_standalone;
use crate::sanitize::sanitize_filename;

/// Result of converting one input file
#[derive(Debug)]
pub enum FileOutcome {
    Converted { source: PathBuf, output: PathBuf },
    Failed { source: PathBuf, error: GalleryError },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Converted { source, .. } | FileOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }
}

/// Per-file outcomes of a conversion run, in processing order
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub outcomes: Vec<FileOutcome>,
    /// Outputs written more than once in this run; the last writer wins
    pub overwritten: Vec<PathBuf>,
}

impl ConversionSummary {
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    /// e.g. `Converted 2 file(s), 0 failed`
    pub fn summary_line(&self) -> String {
        format!("Converted {} file(s), {} failed", self.converted(), self.failed())
    }
}

/// Converts every chart export under an input tree, mirroring its layout
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// List input files. A missing input directory is fatal.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        find_json_files(&self.config.input)
    }

    /// Where the HTML for `chart` (read from `source`) is written
    pub fn output_path(&self, source: &Path, chart: &ChartRecord) -> PathBuf {
        let relative = source
            .strip_prefix(&self.config.input)
            .unwrap_or(source);
        let subdir = relative.parent().unwrap_or_else(|| Path::new(""));

        let file_name = match self.config.naming {
            NamingScheme::Title => PathBuf::from(format!("{}.html", sanitize_filename(&chart.title))),
            NamingScheme::Source => {
                let name = relative.file_name().map(PathBuf::from).unwrap_or_default();
                name.with_extension("html")
            }
        };

        self.config.output.join(subdir).join(file_name)
    }

    /// Convert a single file, returning the path written
    pub fn convert_file(&self, source: &Path) -> Result<PathBuf> {
        let chart = load_chart(source)?;
        let html = render_standalone(&chart, &self.config.plotly_url)?;
        let output = self.output_path(source, &chart);

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output, html)?;

        debug!("Wrote {} ({} trace(s))", output.display(), chart.data.len());
        Ok(output)
    }

    /// Convert `files` in order. Failures are recorded and never stop the run.
    ///
    /// `on_outcome` sees each outcome as soon as it is known.
    pub fn run<F>(&self, files: &[PathBuf], mut on_outcome: F) -> Result<ConversionSummary>
    where
        F: FnMut(&FileOutcome),
    {
        fs::create_dir_all(&self.config.output)?;

        let mut summary = ConversionSummary::default();
        let mut written = HashSet::new();
        for source in files {
            let outcome = match self.convert_file(source) {
                Ok(output) => {
                    if !written.insert(output.clone()) {
                        warn!("Overwrote {} (from {})", output.display(), source.display());
                        summary.overwritten.push(output.clone());
                    }
                    FileOutcome::Converted {
                        source: source.clone(),
                        output,
                    }
                }
                Err(error) => FileOutcome::Failed {
                    source: source.clone(),
                    error,
                },
            };
            on_outcome(&outcome);
            summary.outcomes.push(outcome);
        }

        info!("{}", summary.summary_line());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn chart(title: &str) -> ChartRecord {
        ChartRecord {
            id: "c".to_string(),
            title: title.to_string(),
            source_path: PathBuf::from("json/b/c.json"),
            data: Vec::new(),
            layout: Map::new(),
        }
    }

    fn converter(naming: NamingScheme) -> Converter {
        Converter::new(ConvertConfig {
            naming,
            ..ConvertConfig::default()
        })
    }

    #[test]
    fn test_output_path_by_title() {
        let c = converter(NamingScheme::Title);
        assert_eq!(
            c.output_path(Path::new("json/b/c.json"), &chart("Q1: Sales!")),
            PathBuf::from("charts/b/Q1-Sales.html")
        );
        assert_eq!(
            c.output_path(Path::new("json/a.json"), &chart("Sales")),
            PathBuf::from("charts/Sales.html")
        );
    }

    #[test]
    fn test_output_path_title_fallback() {
        let c = converter(NamingScheme::Title);
        assert_eq!(
            c.output_path(Path::new("json/x.json"), &chart("???")),
            PathBuf::from("charts/chart.html")
        );
    }

    #[test]
    fn test_output_path_by_source() {
        let c = converter(NamingScheme::Source);
        assert_eq!(
            c.output_path(Path::new("json/b/c.json"), &chart("Anything")),
            PathBuf::from("charts/b/c.html")
        );
    }

    #[test]
    fn test_summary_counts() {
        let summary = ConversionSummary {
            overwritten: Vec::new(),
            outcomes: vec![
                FileOutcome::Converted {
                    source: PathBuf::from("json/a.json"),
                    output: PathBuf::from("charts/A.html"),
                },
                FileOutcome::Failed {
                    source: PathBuf::from("json/bad.json"),
                    error: GalleryError::InvalidChart {
                        path: PathBuf::from("json/bad.json"),
                        reason: "expected value at line 1 column 1".to_string(),
                    },
                },
            ],
        };
        assert_eq!(summary.converted(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.summary_line(), "Converted 1 file(s), 1 failed");
        assert_eq!(summary.outcomes[1].source(), Path::new("json/bad.json"));
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let c = Converter::new(ConvertConfig {
            input: PathBuf::from("no/such/input/dir"),
            ..ConvertConfig::default()
        });
        assert!(matches!(c.discover(), Err(GalleryError::MissingDirectory { .. })));
    }

    #[test]
    fn test_overwrite_only_within_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("json");
        let output = dir.path().join("charts");
        fs::create_dir_all(input.join("b")).unwrap();
        fs::write(input.join("one.json"), r#"{"layout":{"title":"Same"}}"#).unwrap();
        fs::write(input.join("two.json"), r#"{"layout":{"title":"Same"}}"#).unwrap();
        fs::write(input.join("b/three.json"), r#"{"layout":{"title":"Same"}}"#).unwrap();

        let c = Converter::new(ConvertConfig {
            input,
            output: output.clone(),
            ..ConvertConfig::default()
        });
        let files = c.discover().unwrap();

        let first = c.run(&files, |_| {}).unwrap();
        assert_eq!(first.converted(), 3);
        assert_eq!(first.overwritten, vec![output.join("Same.html")]);

        // leftovers from the previous run are not collisions
        let second = c.run(&files[2..], |_| {}).unwrap();
        assert_eq!(second.converted(), 1);
        assert!(second.overwritten.is_empty());
    }
}
