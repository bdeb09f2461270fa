use serde_json::{Map, Value};

/// Title used when neither the layout nor the file name yields any text
pub const UNTITLED: &str = "Untitled";

/// Resolve the display title of a chart.
///
/// Order: `layout.title` as a plain string, then `layout.title.text`, then a
/// title derived from the file stem. Empty strings are skipped.
pub fn resolve_title(layout: &Map<String, Value>, stem: &str) -> String {
    let explicit = match layout.get("title") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Object(title)) => title.get("text").and_then(Value::as_str),
        _ => None,
    };

    match explicit {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => title_from_stem(stem),
    }
}

/// Turn a file stem like `q1-sales-report` into `Q1 Sales Report`
pub fn title_from_stem(stem: &str) -> String {
    let spaced = stem.replace('-', " ");
    let title = title_case(&spaced);
    if title.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

/// Uppercase the first letter of every run of cased letters and lowercase the rest.
///
/// Uncased characters (digits, punctuation, CJK ideographs) end a run.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
