//! Settings shared by the server and the converter.

use std::path::PathBuf;

/// Charting library build compatible with Chart Studio exports
pub const DEFAULT_PLOTLY_URL: &str = "https://cdn.plot.ly/plotly-1.58.5.min.js";
pub const DEFAULT_JSON_DIR: &str = "json";
pub const DEFAULT_OUTPUT_DIR: &str = "charts";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// Page-level settings for rendered HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub plotly_url: String,
    pub gallery_title: String,
    pub subtitle: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            plotly_url: DEFAULT_PLOTLY_URL.to_string(),
            gallery_title: "Plotly Chart Gallery".to_string(),
            subtitle: "Charts previously hosted on Plotly Chart Studio".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub json_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub render: RenderSettings,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            json_dir: PathBuf::from(DEFAULT_JSON_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            render: RenderSettings::default(),
        }
    }
}

/// How converted files are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NamingScheme {
    /// Sanitized chart title, e.g. `Sales.html`
    #[default]
    Title,
    /// Source file name with `.json` replaced by `.html`
    Source,
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub naming: NamingScheme,
    pub plotly_url: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_JSON_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            naming: NamingScheme::default(),
            plotly_url: DEFAULT_PLOTLY_URL.to_string(),
        }
    }
}
