//! Checkbox: toggle state and leaf renderer.

use crate::element::Style;
use crate::render::block::Block;
use crate::render::strip::CellStyle;
use crate::style::{resolve, Theme};

/// Label shown when a checkbox has none.
pub const DEFAULT_LABEL: &str = "Checkbox";

/// Checked state of one checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckboxState {
    checked: bool,
}

impl CheckboxState {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flip the checked state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    /// `[x]` when checked, `[ ]` otherwise.
    pub fn glyph(&self) -> &'static str {
        if self.checked {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// Render a checkbox.
///
/// Wider than `theme.checkbox_inline_threshold` columns it reads
/// `label [x]` on one line; otherwise the glyph sits above the label.
pub fn render(
    label: &str,
    state: CheckboxState,
    style: &Style,
    assigned: usize,
    focused: bool,
    theme: &Theme,
) -> Block {
    let mut cell = CellStyle::from_resolved(&resolve(style));
    if focused {
        cell = cell.with_fg(theme.highlight.clone());
    }
    let label = if label.is_empty() { DEFAULT_LABEL } else { label };
    let text = if assigned > theme.checkbox_inline_threshold {
        format!("{label} {}", state.glyph())
    } else {
        format!("{}\n{label}", state.glyph())
    };
    Block::text(&text, cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip() {
        let mut state = CheckboxState::new(false);
        assert!(state.toggle());
        assert_eq!(state.glyph(), "[x]");
        assert!(!state.toggle());
        assert_eq!(state, CheckboxState::new(false));
    }

    #[test]
    fn stacked_when_narrow() {
        let theme = Theme::default();
        let block = render("Agree", CheckboxState::new(true), &Style::default(), 40, false, &theme);
        assert_eq!(block.to_plain_string(), "[x]  \nAgree");
    }

    #[test]
    fn inline_when_wide() {
        let theme = Theme::default();
        let block = render("Agree", CheckboxState::new(false), &Style::default(), 41, false, &theme);
        assert_eq!(block.to_plain_string(), "Agree [ ]");
    }

    #[test]
    fn default_label_and_focus_color() {
        let theme = Theme::default();
        let block = render("", CheckboxState::default(), &Style::default().with_color("blue"), 80, true, &theme);
        assert_eq!(block.to_plain_string(), "Checkbox [ ]");
        assert_eq!(block.cell(0, 0).unwrap().style.fg.as_deref(), Some("205"));
    }
}
