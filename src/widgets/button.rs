//! Button leaf renderer: a bordered, padded label.
//!
//! Buttons hold no state. Focus only changes the border color.

use crate::element::Style;
use crate::geometry::{Align, Spacing};
use crate::render::block::Block;
use crate::render::boxes::bordered;
use crate::render::strip::{text_width, truncate_to_width, CellStyle};
use crate::style::{resolve, Theme};

/// Label shown when a button has none.
pub const DEFAULT_LABEL: &str = "Button";

/// Render a button.
///
/// The interior (padding + label) is `explicit_width` columns when set, with
/// the label centered; otherwise the label plus one cell of padding per side.
pub fn render(
    label: &str,
    style: &Style,
    explicit_width: usize,
    focused: bool,
    theme: &Theme,
) -> Block {
    let resolved = resolve(style);
    let content_style = CellStyle::from_resolved(&resolved);
    let pad_style = content_style.background_only();
    let mut border_style = pad_style.clone();
    if focused {
        border_style = border_style.with_fg(theme.highlight.clone());
    }

    let label = if label.is_empty() { DEFAULT_LABEL } else { label };
    let text_area = if explicit_width > 0 {
        explicit_width.saturating_sub(2)
    } else {
        text_width(label)
    };

    let mut content = Block::text(truncate_to_width(label, text_area), content_style);
    content.set_width(text_area, Align::Center, pad_style.clone());
    content.pad(Spacing::symmetric(0, 1), pad_style);
    bordered(content, &resolved.glyphs, border_style)
}

// ===========================================================================
// Tests
// ===========================================================================
