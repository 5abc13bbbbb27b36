//! Strip: a horizontal line of styled terminal cells.
//!
//! A `Strip` is the fundamental rendering primitive in loom-tui. It represents a
//! single row of `StyledCell`s. Widths are measured in display columns, so a
//! double-width character occupies two columns but a single cell.

use unicode_width::UnicodeWidthChar;

use crate::style::ResolvedStyle;

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are opaque tokens forwarded from the element tree. Only the terminal
/// driver gives them meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
}

impl CellStyle {
    /// Create a new `CellStyle` with all attributes unset/false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Content style for a resolved element style: its foreground and background.
    pub fn from_resolved(style: &ResolvedStyle) -> Self {
        CellStyle {
            fg: style.fg.clone(),
            bg: style.bg.clone(),
            bold: false,
        }
    }

    /// Same style with the foreground replaced.
    pub fn with_fg(mut self, fg: impl Into<String>) -> Self {
        self.fg = Some(fg.into());
        self
    }

    /// Same style with bold switched on or off.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Style for padding cells: keeps only the background.
    pub fn background_only(&self) -> Self {
        CellStyle {
            fg: None,
            bg: self.bg.clone(),
            bold: false,
        }
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub fn blank() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }

    /// A blank (space) cell with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }

    /// Number of terminal columns this cell occupies.
    #[inline]
    pub fn width(&self) -> usize {
        char_width(self.ch)
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Display width of a single character. Control characters count as zero.
#[inline]
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Display width of a string in terminal columns.
pub fn text_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Longest prefix of `text` that fits in `width` columns.
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = char_width(ch);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal line of styled terminal cells, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Strip {
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create a new empty strip.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// A strip of `width` blank cells in the given style.
    pub fn blank(width: usize, style: CellStyle) -> Self {
        Self {
            cells: vec![StyledCell::blank_styled(style); width],
        }
    }

    /// A strip holding `text` in a single style.
    pub fn styled(text: &str, style: CellStyle) -> Self {
        let mut strip = Self::new();
        strip.push_str(text, style);
        strip
    }

    /// Push a single character with the given style.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        for ch in text.chars() {
            self.cells.push(StyledCell::new(ch, style.clone()));
        }
    }

    /// Push `count` copies of `ch`.
    pub fn push_repeat(&mut self, ch: char, count: usize, style: CellStyle) {
        for _ in 0..count {
            self.cells.push(StyledCell::new(ch, style.clone()));
        }
    }

    /// Append all cells of `other`.
    pub fn extend(&mut self, other: Strip) {
        self.cells.extend(other.cells);
    }

    /// The width of this strip in terminal columns.
    pub fn width(&self) -> usize {
        self.cells.iter().map(StyledCell::width).sum()
    }

    /// Pad or truncate the strip to exactly `width` columns.
    ///
    /// A double-width character that would straddle the edge is replaced by a
    /// blank so the result is never wider than requested.
    pub fn fill(&mut self, width: usize, style: CellStyle) {
        let mut used = 0;
        let mut keep = self.cells.len();
        for (i, cell) in self.cells.iter().enumerate() {
            let w = cell.width();
            if used + w > width {
                keep = i;
                break;
            }
            used += w;
        }
        if keep < self.cells.len() {
            self.cells.truncate(keep);
        }
        while used < width {
            self.cells.push(StyledCell::blank_styled(style.clone()));
            used += 1;
        }
    }

    /// Add `left` blank cells before and `right` blank cells after the content.
    pub fn pad(&mut self, left: usize, right: usize, style: CellStyle) {
        if left > 0 {
            let mut cells = vec![StyledCell::blank_styled(style.clone()); left];
            cells.append(&mut self.cells);
            self.cells = cells;
        }
        for _ in 0..right {
            self.cells.push(StyledCell::blank_styled(style.clone()));
        }
    }

    /// The characters of this strip without styling.
    pub fn to_plain(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red_style() -> CellStyle {
        CellStyle {
            fg: Some("red".into()),
            ..CellStyle::default()
        }
    }

    // -----------------------------------------------------------------------
    // CellStyle
    // -----------------------------------------------------------------------

    #[test]
    fn cell_style_default_is_empty() {
        let s = CellStyle::default();
        assert!(s.fg.is_none());
        assert!(s.bg.is_none());
        assert!(!s.bold);
    }

    #[test]
    fn cell_style_from_resolved_copies_colors() {
        let resolved = ResolvedStyle {
            fg: Some("red".into()),
            bg: Some("#ff00ff".into()),
            ..ResolvedStyle::default()
        };
        let cs = CellStyle::from_resolved(&resolved);
        assert_eq!(cs.fg.as_deref(), Some("red"));
        assert_eq!(cs.bg.as_deref(), Some("#ff00ff"));
    }

    #[test]
    fn background_only_drops_foreground() {
        let cs = CellStyle {
            fg: Some("red".into()),
            bg: Some("blue".into()),
            bold: true,
        };
        let padding = cs.background_only();
        assert!(padding.fg.is_none());
        assert_eq!(padding.bg.as_deref(), Some("blue"));
        assert!(!padding.bold);
    }

    // -----------------------------------------------------------------------
    // Width measurement
    // -----------------------------------------------------------------------

    #[test]
    fn text_width_counts_columns_not_bytes() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("héllo"), 5);
        assert_eq!(text_width("日本"), 4);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn truncate_to_width_respects_wide_chars() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("日本語", 3), "日");
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("ab", 10), "ab");
    }

    // -----------------------------------------------------------------------
    // Strip — construction
    // -----------------------------------------------------------------------

    #[test]
    fn strip_new_empty() {
        let s = Strip::new();
        assert!(s.cells.is_empty());
        assert_eq!(s.width(), 0);
    }

    #[test]
    fn strip_push_str() {
        let mut s = Strip::new();
        s.push_str("Hello", red_style());
        assert_eq!(s.width(), 5);
        assert_eq!(s.cells[0].ch, 'H');
        assert_eq!(s.cells[4].ch, 'o');
        for cell in &s.cells {
            assert_eq!(cell.style, red_style());
        }
    }

    #[test]
    fn strip_wide_chars_count_double() {
        let s = Strip::styled("日x", CellStyle::default());
        assert_eq!(s.cells.len(), 2);
        assert_eq!(s.width(), 3);
    }

    #[test]
    fn strip_push_repeat() {
        let mut s = Strip::new();
        s.push_repeat('─', 4, CellStyle::default());
        assert_eq!(s.to_plain(), "────");
    }

    // -----------------------------------------------------------------------
    // Strip — fill / pad
    // -----------------------------------------------------------------------

    #[test]
    fn strip_fill_pad() {
        let mut s = Strip::styled("Hi", red_style());
        s.fill(5, CellStyle::default());
        assert_eq!(s.width(), 5);
        assert_eq!(s.to_plain(), "Hi   ");
        assert_eq!(s.cells[4].style, CellStyle::default());
    }

    #[test]
    fn strip_fill_truncate() {
        let mut s = Strip::styled("Hello World", red_style());
        s.fill(5, CellStyle::default());
        assert_eq!(s.to_plain(), "Hello");
    }

    #[test]
    fn strip_fill_splits_wide_char_into_blank() {
        let mut s = Strip::styled("日本", CellStyle::default());
        s.fill(3, CellStyle::default());
        assert_eq!(s.width(), 3);
        assert_eq!(s.to_plain(), "日 ");
    }

    #[test]
    fn strip_fill_zero() {
        let mut s = Strip::styled("abc", red_style());
        s.fill(0, CellStyle::default());
        assert_eq!(s.width(), 0);
    }

    #[test]
    fn strip_pad_both_sides() {
        let mut s = Strip::styled("ab", red_style());
        s.pad(2, 1, CellStyle::default());
        assert_eq!(s.to_plain(), "  ab ");
        assert_eq!(s.cells[2].style, red_style());
    }

    #[test]
    fn strip_extend() {
        let mut a = Strip::styled("ab", CellStyle::default());
        a.extend(Strip::styled("cd", red_style()));
        assert_eq!(a.to_plain(), "abcd");
        assert_eq!(a.cells[3].style, red_style());
    }
}
