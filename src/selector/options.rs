//! Dropdown option construction.

use crate::entry::DEFAULT_TEMPLATE;
use crate::theme::ThemeTemplate;
use serde::Serialize;

/// One row of the template dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateOption {
    /// Value submitted when the row is chosen.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Whether the row is pre-selected.
    pub selected: bool,
}

/// Build the option list for the template dropdown.
///
/// "Default" always comes first. The saved value selects its matching
/// template; a saved value that matches nothing (stale after a theme
/// change, or hand-edited) falls back to selecting "Default" rather
/// than leaving no row marked. Exactly one row ends up selected.
pub fn build(templates: &[ThemeTemplate], saved: &str) -> Vec<TemplateOption> {
    let mut options = Vec::with_capacity(templates.len() + 1);
    options.push(TemplateOption {
        value: DEFAULT_TEMPLATE.to_string(),
        label: "Default".to_string(),
        selected: false,
    });

    let mut matched = false;
    for template in templates {
        let value = template.value();
        let selected = value == saved;
        matched |= selected;
        options.push(TemplateOption {
            value,
            label: template.name.clone(),
            selected,
        });
    }

    if !matched {
        options[0].selected = true;
    }

    options
}
