//! Rendering constants shared by every widget.

/// Glyphs, colors and thresholds the leaf renderers consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Color token used for the focused widget's border or text.
    pub highlight: String,
    /// Replacement character shown for each character of a password input.
    pub mask_glyph: char,
    /// Marker drawn at the cursor position of the focused input.
    pub cursor_glyph: char,
    /// Checkboxes assigned more columns than this render on a single line.
    pub checkbox_inline_threshold: usize,
    /// Interior width of an input that has no explicit width.
    pub input_width: usize,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: "205".to_owned(),
            mask_glyph: '*',
            cursor_glyph: '│',
            checkbox_inline_threshold: 40,
            input_width: 30,
        }
    }
}

impl Theme {
    /// Set the highlight color token (builder).
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight = highlight.into();
        self
    }

    /// Set the password mask glyph (builder).
    pub fn with_mask_glyph(mut self, glyph: char) -> Self {
        self.mask_glyph = glyph;
        self
    }

    /// Set the cursor marker glyph (builder).
    pub fn with_cursor_glyph(mut self, glyph: char) -> Self {
        self.cursor_glyph = glyph;
        self
    }

    /// Set the default input interior width (builder).
    pub fn with_input_width(mut self, width: usize) -> Self {
        self.input_width = width;
        self
    }
}
