//! Static text leaf renderer.

use crate::element::Style;
use crate::geometry::Align;
use crate::render::block::Block;
use crate::render::strip::CellStyle;
use crate::style::resolve;

/// Render `value`, one line per `\n`, clipped or padded to `width` columns
/// when `width` is non-zero. Text never has a border.
pub fn render(value: &str, style: &Style, width: usize) -> Block {
    let cell = CellStyle::from_resolved(&resolve(style));
    let mut block = Block::text(value, cell.clone());
    if width > 0 {
        block.set_width(width, Align::Start, cell.background_only());
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_width() {
        let block = render("hello\nhi", &Style::default(), 0);
        assert_eq!(block.to_plain_string(), "hello\nhi   ");
    }

    #[test]
    fn clipped_and_padded() {
        assert_eq!(render("hello", &Style::default(), 3).to_plain_string(), "hel");
        assert_eq!(render("hi", &Style::default(), 4).to_plain_string(), "hi  ");
    }

    #[test]
    fn wide_characters_clip_on_column_boundary() {
        let block = render("日本語", &Style::default(), 5);
        assert_eq!(block.width(), 5);
        assert_eq!(block.to_plain_string(), "日本 ");
    }

    #[test]
    fn colors_applied() {
        let block = render("x", &Style::default().with_color("red").with_background("blue"), 3);
        let cell = block.cell(0, 0).unwrap();
        assert_eq!(cell.style.fg.as_deref(), Some("red"));
        assert_eq!(cell.style.bg.as_deref(), Some("blue"));
        let pad = block.cell(2, 0).unwrap();
        assert_eq!(pad.style.bg.as_deref(), Some("blue"));
    }
}
