//! # loom-tui
//!
//! A declarative terminal form renderer. A JSON (or builder-made) element tree
//! of containers, text, inputs, checkboxes, buttons and tables is laid out into
//! bordered, styled text blocks, and keyboard events move focus and edit
//! widget state.
//!
//! ## Core Systems
//!
//! - **[`element`]** — Typed element tree, slotmap arena, JSON loader
//! - **[`style`]** — Border glyph sets, color tokens, theme constants
//! - **[`widgets`]** — Leaf renderers and the input/checkbox state machines
//! - **[`layout`]** — Column and flex container layout with align/justify
//! - **[`render`]** — Strips, blocks, joins, the render dispatcher and crossterm driver
//! - **[`focus`]** — Tab-order focus chain
//! - **[`session`]** — Per-session widget state keyed by element id
//! - **[`event`]** — Input events, key tokens, key bindings
//! - **[`app`]** — The engine: `(event, session) -> (session', frame)`
//! - **[`testing`]** — Headless pilot and snapshot helpers
//! - **[`geometry`]** — Size, Spacing, Align primitives

// Foundation
pub mod geometry;

// Model
pub mod element;
pub mod style;

// Rendering
pub mod layout;
pub mod render;
pub mod widgets;

// Interaction
pub mod event;
pub mod focus;
pub mod session;

// Application
pub mod app;
pub mod testing;

pub use app::{App, AppConfig, EventOutcome};
pub use element::{ConfigError, Element, ElementTree, UiConfig};
pub use event::{InputEvent, Key, KeyEvent};
pub use render::Block;
