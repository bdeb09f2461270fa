pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod router;
pub mod sanitize;
pub mod server;

pub use config::{ConvertConfig, NamingScheme, RenderSettings, ServerConfig};
pub use convert::{ConversionSummary, Converter, FileOutcome};
pub use error::{GalleryError, Result};
pub use loader::{load_chart, load_charts, Gallery};
pub use model::{resolve_title, ChartRecord};
pub use router::{resolve, Route, View};
pub use sanitize::sanitize_filename;
pub use server::{serve, GalleryApp, PageResponse};
