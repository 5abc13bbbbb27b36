//! Maps element style tokens to renderer-ready descriptors.
//!
//! Resolution never fails: unknown border tokens degrade to the normal border and
//! color tokens are forwarded untouched for the terminal driver to interpret.

use crate::element::Style;

use super::border::{BorderGlyphs, BorderKind};

/// A style with its border token resolved to a glyph set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Foreground color token, `None` for the terminal default.
    pub fg: Option<String>,
    /// Background color token, `None` for the terminal default.
    pub bg: Option<String>,
    /// Whether the element asked for a border explicitly.
    pub has_border: bool,
    pub border: BorderKind,
    pub glyphs: BorderGlyphs,
}

/// Resolve a style, using [`BorderKind::Normal`] when no usable border token is set.
pub fn resolve(style: &Style) -> ResolvedStyle {
    resolve_with_border(style, BorderKind::Normal)
}

/// Resolve a style with a caller-chosen border for a missing or blank token.
/// Unknown tokens still resolve to [`BorderKind::Normal`].
pub fn resolve_with_border(style: &Style, default_border: BorderKind) -> ResolvedStyle {
    let token = style.border.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let border = match token {
        Some(token) => BorderKind::from_token(token).unwrap_or(BorderKind::Normal),
        None => default_border,
    };
    ResolvedStyle {
        fg: color_token(style.color.as_deref()),
        bg: color_token(style.background.as_deref()),
        has_border: token.is_some(),
        border,
        glyphs: border.glyphs(),
    }
}

fn color_token(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}
