//! HTML emission for the dropdown control.
//!
//! Kept separate from option construction so the option list stays a
//! pure, testable value.

use crate::selector::options::TemplateOption;
use std::fmt::Write;

/// Render the dropdown `<select>` with its label.
pub fn render_select(control_id: &str, options: &[TemplateOption]) -> String {
    let mut html = String::new();
    let id = escape(control_id);

    let _ = writeln!(html, "<label for=\"{id}\">Select Template</label>");
    let _ = writeln!(html, "<select id=\"{id}\" name=\"{id}\">");
    for option in options {
        let selected = if option.selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            "  <option value=\"{}\"{}>{}</option>",
            escape(&option.value),
            selected,
            escape(&option.label)
        );
    }
    html.push_str("</select>\n");

    html
}

/// Escape a value for use in HTML text or attribute position.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str, label: &str, selected: bool) -> TemplateOption {
        TemplateOption {
            value: value.to_string(),
            label: label.to_string(),
            selected,
        }
    }

    #[test]
    fn selected_option_carries_attribute() {
        let html = render_select("page_template", &[option("default", "Default", true)]);
        assert!(html.contains("<option value=\"default\" selected>Default</option>"));
    }

    #[test]
    fn unselected_option_has_no_attribute() {
        let html = render_select("page_template", &[option("fancy.php", "Fancy", false)]);
        assert!(html.contains("<option value=\"fancy.php\">Fancy</option>"));
    }

    #[test]
    fn values_and_labels_are_escaped() {
        let html = render_select(
            "page_template",
            &[option("\"><script>", "R&D <Layout>", false)],
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains("R&amp;D &lt;Layout&gt;"));
    }

    #[test]
    fn escape_passes_plain_text_through() {
        assert_eq!(escape("fancy.php"), "fancy.php");
    }
}
