//! Style resolution: border glyph sets, color pass-through, theme constants.

pub mod border;
pub mod resolve;
pub mod theme;

pub use border::{BorderGlyphs, BorderKind};
pub use resolve::{resolve, resolve_with_border, ResolvedStyle};
pub use theme::Theme;
