//! Box-model primitives: borders around a block, with an optional label fused
//! into the top edge.

use crate::style::BorderGlyphs;

use super::block::Block;
use super::strip::{text_width, truncate_to_width, CellStyle, Strip};

/// Cells of the top border drawn before a fused label.
pub const LABEL_INSET: usize = 2;

/// Surround `content` with a border drawn from `glyphs` in `style`.
///
/// The result is `content.width() + 2` columns by `content.height() + 2` lines.
pub fn bordered(content: Block, glyphs: &BorderGlyphs, style: CellStyle) -> Block {
    bordered_with_label(content, glyphs, "", style)
}

/// Like [`bordered`], with `label` fused into the top edge:
/// `TL + H×2 + " label " + H×rest + TR`.
///
/// A label that does not fit is truncated; an empty label draws a plain top
/// edge.
pub fn bordered_with_label(
    content: Block,
    glyphs: &BorderGlyphs,
    label: &str,
    style: CellStyle,
) -> Block {
    let width = content.width();
    let mut lines = Vec::with_capacity(content.height() + 2);
    lines.push(top_edge(width, glyphs, label, &style));
    for line in content.into_lines() {
        let mut row = Strip::new();
        row.push(glyphs.vertical, style.clone());
        row.extend(line);
        row.push(glyphs.vertical, style.clone());
        lines.push(row);
    }
    let mut bottom = Strip::new();
    bottom.push(glyphs.bottom_left, style.clone());
    bottom.push_repeat(glyphs.horizontal, width, style.clone());
    bottom.push(glyphs.bottom_right, style);
    lines.push(bottom);
    Block::from_lines(lines)
}

fn top_edge(width: usize, glyphs: &BorderGlyphs, label: &str, style: &CellStyle) -> Strip {
    let mut top = Strip::new();
    top.push(glyphs.top_left, style.clone());
    if label.is_empty() {
        top.push_repeat(glyphs.horizontal, width, style.clone());
    } else {
        let inset = LABEL_INSET.min(width);
        let segment = format!(" {label} ");
        let shown = truncate_to_width(&segment, width - inset);
        top.push_repeat(glyphs.horizontal, inset, style.clone());
        top.push_str(shown, style.clone());
        top.push_repeat(
            glyphs.horizontal,
            width - inset - text_width(shown),
            style.clone(),
        );
    }
    top.push(glyphs.top_right, style.clone());
    top
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Block {
        Block::text(s, CellStyle::default())
    }

    #[test]
    fn plain_border() {
        let block = bordered(text("hi"), &BorderGlyphs::NORMAL, CellStyle::default());
        insta::assert_snapshot!(block.to_plain_string(), @r"
        ┌──┐
        │hi│
        └──┘
        ");
    }

    #[test]
    fn fused_label() {
        let mut content = text("");
        content.set_width(12, crate::geometry::Align::Start, CellStyle::default());
        let block = bordered_with_label(content, &BorderGlyphs::ROUNDED, "Name", CellStyle::default());
        insta::assert_snapshot!(block.to_plain_string(), @r"
        ╭── Name ────╮
        │            │
        ╰────────────╯
        ");
    }

    #[test]
    fn long_label_is_truncated() {
        let block = bordered_with_label(
            text("abcd"),
            &BorderGlyphs::NORMAL,
            "Description",
            CellStyle::default(),
        );
        assert_eq!(block.lines()[0].to_plain(), "┌── D┐");
        assert_eq!(block.width(), 6);
    }

    #[test]
    fn border_style_applies_to_glyphs_only() {
        let style = CellStyle::default().with_fg("205");
        let block = bordered(text("x"), &BorderGlyphs::NORMAL, style);
        assert_eq!(block.cell(0, 1).unwrap().style.fg.as_deref(), Some("205"));
        assert!(block.cell(1, 1).unwrap().style.fg.is_none());
    }

    #[test]
    fn empty_content_still_draws_box() {
        let block = bordered(Block::empty(), &BorderGlyphs::DOUBLE, CellStyle::default());
        assert_eq!(block.to_plain_string(), "╔╗\n╚╝");
    }
}
