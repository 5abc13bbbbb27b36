//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to [`BindingAction`]s.
//! The `with_defaults()` constructor installs the engine's navigation keys
//! (Tab, Shift+Tab, Enter, Space, Ctrl+C).

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};
use super::token::{parse_key_token, KeyTokenError};

// ---------------------------------------------------------------------------
// BindingAction
// ---------------------------------------------------------------------------

/// Action to take when a key binding is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingAction {
    /// Quit the application.
    Quit,
    /// Move focus to the next focusable element.
    FocusNext,
    /// Move focus to the previous focusable element.
    FocusPrevious,
    /// Activate the focused element (toggles checkboxes).
    Activate,
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings, mapping (Key, Modifiers) -> BindingAction.
#[derive(Debug, Clone)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), BindingAction>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the standard bindings.
    ///
    /// Defaults:
    /// - `Ctrl+C` -> Quit
    /// - `Tab` -> FocusNext
    /// - `BackTab` / `Shift+Tab` -> FocusPrevious
    /// - `Enter`, `Space` -> Activate
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::Char('c'), Modifiers::CTRL, BindingAction::Quit);
        registry.bind(Key::Tab, Modifiers::NONE, BindingAction::FocusNext);
        // Terminals disagree on how Shift+Tab arrives.
        registry.bind(Key::BackTab, Modifiers::NONE, BindingAction::FocusPrevious);
        registry.bind(Key::BackTab, Modifiers::SHIFT, BindingAction::FocusPrevious);
        registry.bind(Key::Tab, Modifiers::SHIFT, BindingAction::FocusPrevious);
        registry.bind(Key::Enter, Modifiers::NONE, BindingAction::Activate);
        registry.bind(Key::Char(' '), Modifiers::NONE, BindingAction::Activate);
        registry
    }

    /// Register a key binding.
    ///
    /// If a binding already exists for this key+modifier combination, it is replaced.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: BindingAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Register a binding from a textual key token such as `"ctrl+q"`.
    pub fn bind_token(&mut self, token: &str, action: BindingAction) -> Result<(), KeyTokenError> {
        let event = parse_key_token(token)?;
        self.bind(event.code, event.modifiers, action);
        Ok(())
    }

    /// Remove a key binding.
    ///
    /// Returns the removed action, if any.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<BindingAction> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the action for a given key event (exact key + modifiers match).
    pub fn resolve(&self, event: &KeyEvent) -> Option<BindingAction> {
        self.bindings.get(&(event.code, event.modifiers)).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_token(reg: &KeyBindingRegistry, token: &str) -> Option<BindingAction> {
        reg.resolve(&parse_key_token(token).unwrap())
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_registry_is_empty() {
        let reg = KeyBindingRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(KeyBindingRegistry::default().is_empty());
    }

    #[test]
    fn with_defaults_has_seven_bindings() {
        assert_eq!(KeyBindingRegistry::with_defaults().len(), 7);
    }

    // ── Bind / Unbind ────────────────────────────────────────────────

    #[test]
    fn bind_and_resolve_with_modifiers() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind(Key::Char('q'), Modifiers::CTRL, BindingAction::Quit);
        assert_eq!(reg.resolve(&KeyEvent::plain(Key::Char('q'))), None);
        assert_eq!(
            reg.resolve(&KeyEvent::new(Key::Char('q'), Modifiers::CTRL)),
            Some(BindingAction::Quit)
        );
    }

    #[test]
    fn bind_token() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind_token("ctrl+q", BindingAction::Quit).unwrap();
        assert_eq!(resolve_token(&reg, "ctrl+q"), Some(BindingAction::Quit));
        assert!(reg.bind_token("hyper+q", BindingAction::Quit).is_err());
    }

    #[test]
    fn bind_overwrites_and_unbind_removes() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind(Key::Enter, Modifiers::NONE, BindingAction::Quit);
        reg.bind(Key::Enter, Modifiers::NONE, BindingAction::Activate);
        assert_eq!(reg.len(), 1);
        assert_eq!(
            reg.unbind(Key::Enter, Modifiers::NONE),
            Some(BindingAction::Activate)
        );
        assert!(reg.is_empty());
        assert_eq!(reg.unbind(Key::Enter, Modifiers::NONE), None);
    }

    // ── Default bindings ─────────────────────────────────────────────

    #[test]
    fn default_navigation_tokens() {
        let reg = KeyBindingRegistry::with_defaults();
        assert_eq!(resolve_token(&reg, "tab"), Some(BindingAction::FocusNext));
        assert_eq!(resolve_token(&reg, "shift+tab"), Some(BindingAction::FocusPrevious));
        assert_eq!(resolve_token(&reg, "backtab"), Some(BindingAction::FocusPrevious));
        assert_eq!(resolve_token(&reg, "enter"), Some(BindingAction::Activate));
        assert_eq!(resolve_token(&reg, " "), Some(BindingAction::Activate));
        assert_eq!(resolve_token(&reg, "ctrl+c"), Some(BindingAction::Quit));
        assert_eq!(resolve_token(&reg, "a"), None);
    }
}
