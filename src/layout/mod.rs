//! Layout engine: column and flex container layout over rendered blocks.

pub mod engine;

pub use engine::{distribute, layout_container, layout_root};
