//! Block: a rectangular stack of strips, the unit every renderer produces.
//!
//! All lines of a block have the same display width. Constructors and the
//! padding helpers maintain that invariant, so joins never need to re-measure.

use crate::geometry::{Align, Spacing};

use super::strip::{CellStyle, Strip, StyledCell};

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell that changed between two frames.
///
/// Used by the driver to repaint only what differs from the previous frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: StyledCell,
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A rectangle of styled text: `height()` strips, each `width()` columns wide.
///
/// A block may have a width and no lines (a horizontal spacer) or lines of
/// zero width (a vertical spacer).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    lines: Vec<Strip>,
    width: usize,
}

impl Block {
    /// The empty block: no lines, no width.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a block from strips, padding every line to the widest one.
    pub fn from_lines(lines: Vec<Strip>) -> Self {
        Self::from_lines_padded(lines, CellStyle::default())
    }

    /// Like [`Block::from_lines`], padding short lines with `pad` cells.
    pub fn from_lines_padded(lines: Vec<Strip>, pad: CellStyle) -> Self {
        let width = lines.iter().map(Strip::width).max().unwrap_or(0);
        let mut block = Self { lines, width: 0 };
        block.set_width(width, Align::Start, pad);
        block
    }

    /// A block of `text` in one style, one line per `\n`-separated segment.
    ///
    /// Short lines are padded with the style's background so it covers the
    /// whole rectangle.
    pub fn text(text: &str, style: CellStyle) -> Self {
        let lines = text
            .split('\n')
            .map(|line| Strip::styled(line.trim_end_matches('\r'), style.clone()))
            .collect();
        Self::from_lines_padded(lines, style.background_only())
    }

    /// A `width` x `height` block of blank cells.
    pub fn blank(width: usize, height: usize, style: CellStyle) -> Self {
        Self {
            lines: (0..height)
                .map(|_| Strip::blank(width, style.clone()))
                .collect(),
            width,
        }
    }

    /// A spacer `width` columns wide with no lines, for horizontal joins.
    pub fn horizontal_spacer(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            width,
        }
    }

    /// A spacer `height` lines tall with zero width, for vertical joins.
    pub fn vertical_spacer(height: usize) -> Self {
        Self {
            lines: vec![Strip::new(); height],
            width: 0,
        }
    }

    /// Width in display columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in lines.
    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Whether the block covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.lines.is_empty()
    }

    /// The block's lines, top to bottom.
    pub fn lines(&self) -> &[Strip] {
        &self.lines
    }

    /// Consume the block, yielding its lines.
    pub fn into_lines(self) -> Vec<Strip> {
        self.lines
    }

    /// The cell at column `x`, row `y`, counting cells rather than columns.
    pub fn cell(&self, x: usize, y: usize) -> Option<&StyledCell> {
        self.lines.get(y).and_then(|line| line.cells.get(x))
    }

    /// Restyle every cell in place.
    pub fn restyle(&mut self, mut f: impl FnMut(&mut CellStyle)) {
        for line in &mut self.lines {
            for cell in &mut line.cells {
                f(&mut cell.style);
            }
        }
    }

    // -- sizing --------------------------------------------------------------

    /// Pad (using `align`) or crop every line to exactly `width` columns.
    pub fn set_width(&mut self, width: usize, align: Align, style: CellStyle) {
        for line in &mut self.lines {
            let current = line.width();
            if current < width {
                let (left, right) = align.split(width - current);
                line.pad(left, right, style.clone());
            } else if current > width {
                line.fill(width, style.clone());
            }
        }
        self.width = width;
    }

    /// Pad to at least `width` columns. Never crops.
    pub fn pad_to_width(&mut self, width: usize, align: Align, style: CellStyle) {
        if width > self.width {
            self.set_width(width, align, style);
        }
    }

    /// Pad with blank lines (using `align`) or crop from the bottom to exactly
    /// `height` lines.
    pub fn set_height(&mut self, height: usize, align: Align, style: CellStyle) {
        let current = self.lines.len();
        if current > height {
            self.lines.truncate(height);
        } else if current < height {
            let (top, bottom) = align.split(height - current);
            self.pad_lines(top, bottom, style);
        }
    }

    /// Pad to at least `height` lines. Never crops.
    pub fn pad_to_height(&mut self, height: usize, align: Align, style: CellStyle) {
        if height > self.lines.len() {
            self.set_height(height, align, style);
        }
    }

    /// Add blank lines above and below.
    pub fn pad_lines(&mut self, top: usize, bottom: usize, style: CellStyle) {
        if top > 0 {
            let mut lines: Vec<Strip> = (0..top)
                .map(|_| Strip::blank(self.width, style.clone()))
                .collect();
            lines.append(&mut self.lines);
            self.lines = lines;
        }
        for _ in 0..bottom {
            self.lines.push(Strip::blank(self.width, style.clone()));
        }
    }

    /// Add blank cells on every side.
    pub fn pad(&mut self, spacing: Spacing, style: CellStyle) {
        if spacing.left > 0 || spacing.right > 0 {
            for line in &mut self.lines {
                line.pad(spacing.left, spacing.right, style.clone());
            }
            self.width += spacing.width();
        }
        self.pad_lines(spacing.top, spacing.bottom, style);
    }

    // -- output --------------------------------------------------------------

    /// The block as newline-separated plain text, one line per row.
    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(Strip::to_plain)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Compare this frame against `previous` and return only the changed cells.
    ///
    /// Cells are matched by screen column, so a cell that shifts because a
    /// wide character before it changed width is repainted. Cells outside
    /// `previous` always count as changed; cells of `previous` outside this
    /// frame are not reported (the driver clears on resize).
    pub fn diff(&self, previous: &Block) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for (y, line) in self.lines.iter().enumerate() {
            let before = previous.lines.get(y).map(columns).unwrap_or_default();
            for (x, slot) in columns(line).into_iter().enumerate() {
                let Some(cell) = slot else {
                    continue;
                };
                if before.get(x).copied().flatten() != Some(cell) {
                    updates.push(CellUpdate {
                        x: x.min(u16::MAX as usize) as u16,
                        y: y.min(u16::MAX as usize) as u16,
                        cell: cell.clone(),
                    });
                }
            }
        }
        updates
    }
}

/// Lay a strip out by screen column. Columns covered by the right half of a
/// wide character are `None`.
fn columns(line: &Strip) -> Vec<Option<&StyledCell>> {
    let mut grid = Vec::with_capacity(line.cells.len());
    for cell in &line.cells {
        grid.push(Some(cell));
        for _ in 1..cell.width() {
            grid.push(None);
        }
    }
    grid
}

// ===========================================================================
// Tests
// ===========================================================================
