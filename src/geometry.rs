//! Core geometry types: Size, Spacing, Align.
//!
//! Everything in loom-tui is measured in terminal columns and rows. Widths are
//! display widths (a CJK character counts as two columns), never byte lengths.

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in terminal cells (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// The viewport assumed before the driver reports a real terminal size.
    pub const DEFAULT_VIEWPORT: Size = Size { width: 80, height: 24 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Replace zero dimensions with the matching dimension of `fallback`.
    #[inline]
    pub const fn or(self, fallback: Size) -> Size {
        Size {
            width: if self.width == 0 { fallback.width } else { self.width },
            height: if self.height == 0 { fallback.height } else { self.height },
        }
    }

    /// Whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Size::new(width as usize, height as usize)
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Padding around a block's content, in cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    /// No spacing on any side.
    pub const ZERO: Spacing = Spacing { top: 0, right: 0, bottom: 0, left: 0 };

    /// Same spacing on all four sides.
    pub const fn all(n: usize) -> Self {
        Self { top: n, right: n, bottom: n, left: n }
    }

    /// `vertical` cells above and below, `horizontal` cells left and right.
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Total horizontal spacing (`left + right`).
    #[inline]
    pub const fn width(self) -> usize {
        self.left + self.right
    }

    /// Total vertical spacing (`top + bottom`).
    #[inline]
    pub const fn height(self) -> usize {
        self.top + self.bottom
    }
}

// ---------------------------------------------------------------------------
// Align
// ---------------------------------------------------------------------------

/// Position of a smaller extent inside a larger one along a single axis.
///
/// The same three values serve both axes: `Start` is left (horizontal) or top
/// (vertical), `End` is right or bottom.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Parse an alignment token. Unknown or empty tokens fall back to `Start`.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "center" | "middle" => Align::Center,
            "right" | "bottom" | "flex-end" | "end" => Align::End,
            _ => Align::Start,
        }
    }

    /// Split `slack` cells into `(before, after)` for this alignment.
    ///
    /// Centering puts the odd cell after the content.
    #[inline]
    pub const fn split(self, slack: usize) -> (usize, usize) {
        match self {
            Align::Start => (0, slack),
            Align::Center => (slack / 2, slack - slack / 2),
            Align::End => (slack, 0),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
