//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) and provides methods to
//! simulate user input (key presses, key tokens, typing, resize) and to read
//! back the rendered frame and widget state.

use crate::app::{App, AppConfig, EventOutcome};
use crate::element::{ElementTree, UiConfig};
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers};
use crate::event::token::{parse_key_token, KeyTokenError};

use super::snapshot::trim_lines;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```
/// use loom_tui::element::{Element, ElementTree, LayoutMode};
/// use loom_tui::testing::Pilot;
///
/// let tree = ElementTree::build(LayoutMode::Column, [Element::input("name")]);
/// let mut pilot = Pilot::new(tree);
/// pilot.type_text("hi");
/// assert_eq!(pilot.input_value("name"), Some("hi"));
/// ```
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// Drive a session over `tree` with the default 80x24 viewport.
    pub fn new(tree: ElementTree) -> Self {
        Self::with_config(tree, AppConfig::default())
    }

    /// Drive a session over `tree` with the given config.
    pub fn with_config(tree: ElementTree, config: AppConfig) -> Self {
        Self {
            app: App::new(tree, config),
        }
    }

    /// Load a tree description and drive a session over it.
    pub fn from_json(json: &str) -> Result<Self, crate::element::ConfigError> {
        let ui = UiConfig::from_json(json)?;
        Ok(Self {
            app: App::from_ui(ui, AppConfig::default()),
        })
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) -> EventOutcome {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> EventOutcome {
        self.app.handle_input(InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    /// Simulate a key press given as a token such as `"tab"` or `"ctrl+c"`.
    pub fn press(&mut self, token: &str) -> Result<EventOutcome, KeyTokenError> {
        let key = parse_key_token(token)?;
        Ok(self.app.handle_input(InputEvent::Key(key)))
    }

    /// Press every token in order, stopping at the first invalid one.
    pub fn press_all<'a>(
        &mut self,
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), KeyTokenError> {
        for token in tokens {
            self.press(token)?;
        }
        Ok(())
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Simulate a terminal resize to the given dimensions.
    pub fn resize(&mut self, width: u16, height: u16) -> EventOutcome {
        self.app.handle_input(InputEvent::Resize { width, height })
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.app.focused_id()
    }

    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.app.input_value(id)
    }

    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.app.is_checked(id)
    }

    /// The current frame exactly as rendered, padding included.
    pub fn frame(&self) -> String {
        self.app.render()
    }

    /// The current frame with trailing spaces trimmed from every row.
    pub fn frame_text(&self) -> String {
        trim_lines(&self.app.render())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
