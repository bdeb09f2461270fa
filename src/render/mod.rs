//! HTML rendering for gallery pages and standalone chart documents.

pub mod pages;
pub mod standalone;
pub mod templates;

pub use pages::*;
pub use standalone::*;

use serde::Serialize;

use crate::error::Result;

/// HTML-escape text for element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize a value as a JSON literal that is safe inside a `<script>` element
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
