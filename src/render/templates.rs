/// Shared page shell for gallery views
pub const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Self-contained document written by the converter
pub const STANDALONE_TEMPLATE: &str = include_str!("../../templates/standalone.html");

/// Embedded CSS
pub const STYLES_CSS: &str = include_str!("../../templates/styles.css");

/// Client-side chart renderer
pub const CHART_JS: &str = include_str!("../../templates/chart.js");

/// Substitute `{{name}}` placeholders in a single pass.
///
/// Inserted values are never rescanned. Unknown placeholders are left as-is.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_values() {
        let out = fill("<b>{{a}}</b>{{b}}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "<b>x</b>y");
    }

    #[test]
    fn test_inserted_values_not_rescanned() {
        let out = fill("{{a}}|{{b}}", &[("a", "{{b}}"), ("b", "2")]);
        assert_eq!(out, "{{b}}|2");
    }

    #[test]
    fn test_unknown_and_unterminated() {
        assert_eq!(fill("{{nope}} ok", &[]), "{{nope}} ok");
        assert_eq!(fill("tail {{open", &[("open", "x")]), "tail {{open");
    }

    #[test]
    fn test_templates_have_placeholders() {
        for key in ["{{title}}", "{{styles}}", "{{head}}", "{{body}}"] {
            assert!(PAGE_TEMPLATE.contains(key), "page template missing {}", key);
        }
        for key in ["{{title}}", "{{plotly_url}}", "{{data}}", "{{layout}}"] {
            assert!(STANDALONE_TEMPLATE.contains(key), "standalone template missing {}", key);
        }
    }
}
