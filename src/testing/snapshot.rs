//! Snapshot rendering helpers.
//!
//! Functions for turning elements, trees and rendered blocks into plain-text
//! strings suitable for snapshot testing and assertions. Unlike
//! [`Block::to_plain_string`], these trim trailing spaces from every row so
//! expected output can be written without padding.

use crate::element::{Element, ElementTree, LayoutMode};
use crate::geometry::Size;
use crate::render::block::Block;
use crate::render::dispatch::{render_frame, RenderContext};
use crate::session::SessionState;
use crate::style::Theme;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a single element, unfocused, as the only root of a `width`-column
/// viewport.
///
/// # Examples
///
/// ```
/// use loom_tui::element::Element;
/// use loom_tui::testing::render_to_string;
///
/// assert_eq!(render_to_string(Element::text("Hello"), 20), "Hello");
/// ```
pub fn render_to_string(element: Element, width: usize) -> String {
    let tree = ElementTree::build(LayoutMode::Column, [element]);
    render_tree_to_string(&tree, Size::new(width, Size::DEFAULT_VIEWPORT.height))
}

/// Render a whole tree with fresh session state and no focus.
pub fn render_tree_to_string(tree: &ElementTree, viewport: Size) -> String {
    let session = SessionState::from_tree(tree);
    let theme = Theme::default();
    let ctx = RenderContext {
        tree,
        session: &session,
        focused: None,
        viewport,
        theme: &theme,
    };
    block_to_string(&render_frame(&ctx))
}

/// Convert a block to text, one row per line, trailing spaces trimmed.
pub fn block_to_string(block: &Block) -> String {
    trim_lines(&block.to_plain_string())
}

/// Trim trailing spaces from every line of `text`.
pub fn trim_lines(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_lines_strips_padding() {
        assert_eq!(trim_lines("ab  \n c \n   "), "ab\n c\n");
        assert_eq!(trim_lines(""), "");
    }

    #[test]
    fn render_single_element() {
        assert_eq!(render_to_string(Element::text("Hello"), 20), "Hello");
        assert_eq!(
            render_to_string(Element::button("b", "Go"), 20),
            "┌────┐\n│ Go │\n└────┘"
        );
    }

    #[test]
    fn render_tree() {
        let tree = ElementTree::build(
            LayoutMode::Flex,
            [Element::text("left"), Element::text("right")],
        );
        assert_eq!(render_tree_to_string(&tree, Size::new(12, 24)), "left  right");
    }
}
