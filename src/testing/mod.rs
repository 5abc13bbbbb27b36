//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive an [`App`](crate::app::App) with key presses
//! and key tokens without a real terminal. Use [`render_to_string`] and related
//! helpers to capture rendered output as plain text for snapshot-style
//! assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{block_to_string, render_to_string, render_tree_to_string, trim_lines};
