//! App struct: session state, focus, key handling and frame rendering.
//!
//! [`App`] owns everything one interactive session needs: the immutable element
//! tree, the widget states, the focus chain, the key bindings and the viewport.
//! It never touches the terminal; `main.rs` feeds it events and paints the
//! frames it returns, and tests drive it headlessly.

use tracing::{debug, info, trace};

use crate::element::{ElementKind, ElementTree, NodeId, UiConfig};
use crate::event::binding::{BindingAction, KeyBindingRegistry};
use crate::event::input::{InputEvent, KeyEvent};
use crate::focus::FocusChain;
use crate::geometry::Size;
use crate::render::block::Block;
use crate::render::dispatch::{render_frame, RenderContext};
use crate::session::SessionState;
use crate::style::Theme;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Initial viewport, replaced by the first resize event.
    pub viewport: Size,
    /// Glyphs, colors and thresholds used by the renderers.
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport: Size::DEFAULT_VIEWPORT,
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial viewport (builder). Zero dimensions fall back to 80x24.
    pub fn with_viewport(mut self, width: usize, height: usize) -> Self {
        self.viewport = Size::new(width, height).or(Size::DEFAULT_VIEWPORT);
        self
    }

    /// Set the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

// ---------------------------------------------------------------------------
// EventOutcome
// ---------------------------------------------------------------------------

/// What handling one input event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Focus, widget state or the viewport changed.
    Handled,
    /// The event had no effect.
    Ignored,
    /// The quit binding was pressed.
    Quit,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// One interactive session over an element tree.
pub struct App {
    tree: ElementTree,
    session: SessionState,
    focus: FocusChain,
    /// Key binding registry.
    pub bindings: KeyBindingRegistry,
    viewport: Size,
    theme: Theme,
    /// Whether the quit binding has been pressed.
    quit: bool,
}

impl App {
    /// Start a session: seed widget states from the tree and focus the first
    /// focusable element.
    pub fn new(tree: ElementTree, config: AppConfig) -> Self {
        let session = SessionState::from_tree(&tree);
        let focus = FocusChain::from_tree(&tree);
        info!(
            nodes = tree.len(),
            focusable = focus.len(),
            stateful = session.len(),
            "session started"
        );
        Self {
            tree,
            session,
            focus,
            bindings: KeyBindingRegistry::with_defaults(),
            viewport: config.viewport.or(Size::DEFAULT_VIEWPORT),
            theme: config.theme,
            quit: false,
        }
    }

    /// Start a session from a loaded (and validated) tree description.
    pub fn from_ui(ui: UiConfig, config: AppConfig) -> Self {
        Self::new(ui.into_tree(), config)
    }

    // -- events --------------------------------------------------------------

    /// Process one event to completion and return the new frame.
    pub fn dispatch(&mut self, event: InputEvent) -> String {
        self.handle_input(event);
        self.render()
    }

    /// Process one event to completion.
    ///
    /// Keys are handled in this order: a printable character goes to a
    /// focused input; otherwise the key bindings apply; any remaining key goes
    /// to a focused input or is ignored.
    pub fn handle_input(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Key(key) => self.handle_key(&key),
            InputEvent::Resize { width, height } => {
                self.viewport = Size::from((width, height)).or(Size::DEFAULT_VIEWPORT);
                debug!(width = self.viewport.width, height = self.viewport.height, "viewport resized");
                EventOutcome::Handled
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventOutcome {
        let input = self.focused_input_id();
        if let Some(id) = input.as_deref() {
            if key.printable().is_some() {
                return self.edit_input(id, key);
            }
        }

        match self.bindings.resolve(key) {
            Some(BindingAction::Quit) => {
                debug!("quit requested");
                self.quit = true;
                EventOutcome::Quit
            }
            Some(BindingAction::FocusNext) => {
                let node = self.focus.focus_next();
                self.focus_moved(node)
            }
            Some(BindingAction::FocusPrevious) => {
                let node = self.focus.focus_previous();
                self.focus_moved(node)
            }
            Some(BindingAction::Activate) => self.activate(),
            None => match input.as_deref() {
                Some(id) => self.edit_input(id, key),
                None => {
                    trace!(key = %key, "key ignored");
                    EventOutcome::Ignored
                }
            },
        }
    }

    fn focus_moved(&self, node: Option<NodeId>) -> EventOutcome {
        match node {
            Some(node) => {
                debug!(
                    index = self.focus.current_index(),
                    id = self.tree.element_id(node),
                    "focus moved"
                );
                EventOutcome::Handled
            }
            None => EventOutcome::Ignored,
        }
    }

    /// Activate the focused element: checkboxes toggle, everything else
    /// ignores activation.
    fn activate(&mut self) -> EventOutcome {
        let Some(element) = self.focus.current_node().and_then(|node| self.tree.get(node)) else {
            return EventOutcome::Ignored;
        };
        if !matches!(element.kind, ElementKind::Checkbox { .. }) {
            return EventOutcome::Ignored;
        }
        let Some(id) = element.id.as_deref() else {
            return EventOutcome::Ignored;
        };
        match self.session.checkbox_mut(id) {
            Some(state) => {
                let checked = state.toggle();
                debug!(id, checked, "checkbox toggled");
                EventOutcome::Handled
            }
            None => EventOutcome::Ignored,
        }
    }

    fn edit_input(&mut self, id: &str, key: &KeyEvent) -> EventOutcome {
        let Some(state) = self.session.input_mut(id) else {
            return EventOutcome::Ignored;
        };
        if state.handle_key(key) {
            trace!(id, cursor = state.cursor(), len = state.len(), "input edited");
            EventOutcome::Handled
        } else {
            trace!(id, key = %key, "input rejected key");
            EventOutcome::Ignored
        }
    }

    fn focused_input_id(&self) -> Option<String> {
        let element = self.tree.get(self.focus.current_node()?)?;
        match element.kind {
            ElementKind::Input(_) => element.id.clone(),
            _ => None,
        }
    }

    // -- rendering -----------------------------------------------------------

    /// Render the current session into a styled frame.
    pub fn frame(&self) -> Block {
        let ctx = RenderContext {
            tree: &self.tree,
            session: &self.session,
            focused: self.focus.current_node(),
            viewport: self.viewport,
            theme: &self.theme,
        };
        render_frame(&ctx)
    }

    /// Render the current session as plain text, one line per row.
    pub fn render(&self) -> String {
        self.frame().to_plain_string()
    }

    // -- accessors -----------------------------------------------------------

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn focus(&self) -> &FocusChain {
        &self.focus
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Element id of the focused element.
    pub fn focused_id(&self) -> Option<&str> {
        self.tree.element_id(self.focus.current_node()?)
    }

    /// Focus the element with the given id. Returns `false` if it is not
    /// focusable or does not exist.
    pub fn focus_id(&mut self, id: &str) -> bool {
        match self.tree.find(id) {
            Some(node) => self.focus.focus_node(node),
            None => false,
        }
    }

    /// Current value of the input `id`.
    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.session.input(id).map(|state| state.value())
    }

    /// Cursor position (in characters) of the input `id`.
    pub fn input_cursor(&self, id: &str) -> Option<usize> {
        self.session.input(id).map(|state| state.cursor())
    }

    /// Checked state of the checkbox `id`.
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.session.checkbox(id).map(|state| state.is_checked())
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
