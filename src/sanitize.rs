//! Output file names derived from chart titles.

use std::sync::LazyLock;

use regex::Regex;

/// Name used when a title has no usable characters
pub const DEFAULT_FILE_STEM: &str = "chart";

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Turn a chart title into a file-system safe stem.
///
/// `"My Chart: Q1!!"` becomes `"My-Chart-Q1"`. Titles that reduce to nothing
/// become [`DEFAULT_FILE_STEM`].
pub fn sanitize_filename(title: &str) -> String {
    let kept = DISALLOWED_RE.replace_all(title, "");
    let hyphenated = WHITESPACE_RE.replace_all(&kept, "-");
    let collapsed = HYPHENS_RE.replace_all(&hyphenated, "-");
    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}
