//! Declarative element tree: typed nodes, the arena they are flattened into,
//! and the JSON loader.

pub mod loader;
pub mod node;
pub mod tree;

pub use loader::{ConfigError, UiConfig};
pub use node::{
    Container, Element, ElementKind, FlexDirection, InputKind, InputProps, Justify, LayoutMode,
    NodeId, Style,
};
pub use tree::ElementTree;
