//! Event system: input events, textual key tokens, key bindings.

pub mod binding;
pub mod input;
pub mod token;

pub use binding::{BindingAction, KeyBindingRegistry};
pub use input::{InputEvent, Key, KeyEvent, Modifiers};
pub use token::{parse_key_token, KeyTokenError};
