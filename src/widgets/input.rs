//! Text input: editing state machine and bordered leaf renderer.
//!
//! The cursor is a character index into the value (not a byte offset), so it
//! is always between `0` and the number of characters. Password masking and
//! the cursor marker are display transforms only.

use crate::element::{InputKind, InputProps, Style};
use crate::event::{Key, KeyEvent};
use crate::geometry::{Align, Spacing};
use crate::render::block::Block;
use crate::render::boxes::bordered_with_label;
use crate::render::strip::{truncate_to_width, CellStyle};
use crate::style::{resolve_with_border, BorderKind, Theme};

// ---------------------------------------------------------------------------
// TextInputState
// ---------------------------------------------------------------------------

/// Editable value and cursor of one text input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputState {
    value: String,
    /// Cursor position in characters, `0..=value.chars().count()`.
    cursor: usize,
    kind: InputKind,
}

impl TextInputState {
    /// Create a state holding `value`, with the cursor at the start.
    pub fn new(value: impl Into<String>, kind: InputKind) -> Self {
        Self {
            value: value.into(),
            cursor: 0,
            kind,
        }
    }

    /// Initial state for an input element.
    pub fn from_props(props: &InputProps) -> Self {
        Self::new(props.value.clone(), props.kind)
    }

    /// Return the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Return the cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The validation policy of this input.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether `ch` may be inserted at the current cursor position.
    pub fn accepts(&self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.kind {
            InputKind::Number => ch.is_ascii_digit() || (ch == '-' && self.cursor == 0),
            InputKind::Text | InputKind::Password => true,
        }
    }

    /// Insert a character at the cursor. Returns `false` if the input kind
    /// rejects it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.accepts(ch) {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.drain(start..end);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor (delete forward).
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.drain(start..end);
        true
    }

    /// Move the cursor left by one character.
    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor right by one character.
    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor to the start of the input.
    pub fn move_cursor_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    /// Move the cursor to the end of the input.
    pub fn move_cursor_end(&mut self) -> bool {
        let end = self.len();
        let moved = self.cursor != end;
        self.cursor = end;
        moved
    }

    /// Apply one key. Returns `true` if the value or cursor changed.
    ///
    /// Printable characters are inserted subject to the input kind; editing
    /// and cursor keys behave as usual; anything else is rejected.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(ch) = key.printable() {
            return self.insert_char(ch);
        }
        match key.code {
            Key::Backspace => self.delete_char(),
            Key::Delete => self.delete_forward(),
            Key::Left => self.move_cursor_left(),
            Key::Right => self.move_cursor_right(),
            Key::Home => self.move_cursor_home(),
            Key::End => self.move_cursor_end(),
            _ => false,
        }
    }

    /// Display text: the value (masked for passwords), with the cursor marker
    /// inserted when focused.
    pub fn display(&self, focused: bool, theme: &Theme) -> String {
        let mut shown: Vec<char> = match self.kind {
            InputKind::Password => vec![theme.mask_glyph; self.len()],
            InputKind::Text | InputKind::Number => self
                .value
                .chars()
                .map(|ch| if ch.is_control() { ' ' } else { ch })
                .collect(),
        };
        if focused {
            shown.insert(self.cursor.min(shown.len()), theme.cursor_glyph);
        }
        shown.into_iter().collect()
    }

    /// Byte offset of the character at index `chars` (or the end).
    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map_or(self.value.len(), |(idx, _)| idx)
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Interior width (padding + text) of an input box.
///
/// An explicit width is used as is. Otherwise the theme default, shrunk so
/// the bordered box fits in a non-zero `assigned` width.
pub fn interior_width(explicit: usize, assigned: usize, theme: &Theme) -> usize {
    if explicit > 0 {
        return explicit;
    }
    if assigned > 0 && theme.input_width + 2 > assigned {
        assigned.saturating_sub(2)
    } else {
        theme.input_width
    }
}

/// Render an input as a three-line bordered box.
///
/// A non-empty label is fused into the top border. Inputs default to a
/// rounded border; the border turns the highlight color when focused.
pub fn render(
    props: &InputProps,
    state: &TextInputState,
    style: &Style,
    explicit_width: usize,
    assigned: usize,
    focused: bool,
    theme: &Theme,
) -> Block {
    let resolved = resolve_with_border(style, BorderKind::Rounded);
    let content_style = CellStyle::from_resolved(&resolved);
    let mut border_style = content_style.background_only();
    if focused {
        border_style = border_style.with_fg(theme.highlight.clone());
    }

    let interior = interior_width(explicit_width, assigned, theme);
    let text_area = interior.saturating_sub(2);
    let display = state.display(focused, theme);
    let shown = truncate_to_width(&display, text_area);

    let mut content = Block::text(shown, content_style.clone());
    content.set_width(text_area, Align::Start, content_style.background_only());
    if interior >= 2 {
        content.pad(Spacing::symmetric(0, 1), content_style.background_only());
    } else {
        content.set_width(interior, Align::Start, content_style.background_only());
    }

    bordered_with_label(content, &resolved.glyphs, &props.label, border_style)
}

// ===========================================================================
// Tests
// ===========================================================================
