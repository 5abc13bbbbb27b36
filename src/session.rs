//! Per-session widget state, keyed by element id.
//!
//! The element tree is immutable; everything a key press can change lives
//! here. States are created once from each element's initial `value` or
//! `checked` and dropped with the session.

use std::collections::HashMap;

use crate::element::{ElementKind, ElementTree};
use crate::widgets::checkbox::CheckboxState;
use crate::widgets::input::TextInputState;

/// Mutable state of one stateful widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    Input(TextInputState),
    Checkbox(CheckboxState),
}

/// Widget states of every input and checkbox in a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    states: HashMap<String, WidgetState>,
}

impl SessionState {
    /// Seed states from the tree's initial values. Elements without an id
    /// get no state (and render with their initial values).
    pub fn from_tree(tree: &ElementTree) -> Self {
        let mut states = HashMap::new();
        for node in tree.walk_depth_first() {
            let Some(element) = tree.get(node) else {
                continue;
            };
            let Some(id) = element.id.as_ref() else {
                continue;
            };
            let state = match &element.kind {
                ElementKind::Input(props) => WidgetState::Input(TextInputState::from_props(props)),
                ElementKind::Checkbox { checked, .. } => {
                    WidgetState::Checkbox(CheckboxState::new(*checked))
                }
                _ => continue,
            };
            states.entry(id.clone()).or_insert(state);
        }
        Self { states }
    }

    pub fn get(&self, id: &str) -> Option<&WidgetState> {
        self.states.get(id)
    }

    /// The text input state for `id`, if `id` is an input.
    pub fn input(&self, id: &str) -> Option<&TextInputState> {
        match self.states.get(id) {
            Some(WidgetState::Input(state)) => Some(state),
            _ => None,
        }
    }

    pub fn input_mut(&mut self, id: &str) -> Option<&mut TextInputState> {
        match self.states.get_mut(id) {
            Some(WidgetState::Input(state)) => Some(state),
            _ => None,
        }
    }

    /// The checkbox state for `id`, if `id` is a checkbox.
    pub fn checkbox(&self, id: &str) -> Option<&CheckboxState> {
        match self.states.get(id) {
            Some(WidgetState::Checkbox(state)) => Some(state),
            _ => None,
        }
    }

    pub fn checkbox_mut(&mut self, id: &str) -> Option<&mut CheckboxState> {
        match self.states.get_mut(id) {
            Some(WidgetState::Checkbox(state)) => Some(state),
            _ => None,
        }
    }

    /// Number of stateful widgets.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
