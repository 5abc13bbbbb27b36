//! Border kinds and their box-drawing glyph sets.

/// The fixed set of border styles a box can be drawn with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderKind {
    #[default]
    Normal,
    Rounded,
    Double,
    Thick,
}

impl BorderKind {
    /// Parse a border token. Returns `None` for empty or unknown tokens so the
    /// caller can pick its own default.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "normal" | "solid" => Some(BorderKind::Normal),
            "rounded" | "round" => Some(BorderKind::Rounded),
            "double" => Some(BorderKind::Double),
            "thick" | "heavy" => Some(BorderKind::Thick),
            _ => None,
        }
    }

    /// The glyph set used to draw this border.
    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderKind::Normal => BorderGlyphs::NORMAL,
            BorderKind::Rounded => BorderGlyphs::ROUNDED,
            BorderKind::Double => BorderGlyphs::DOUBLE,
            BorderKind::Thick => BorderGlyphs::THICK,
        }
    }
}

/// Box-drawing characters for the four corners and the two edge directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderGlyphs {
    pub const NORMAL: BorderGlyphs = BorderGlyphs {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUNDED: BorderGlyphs = BorderGlyphs {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    pub const DOUBLE: BorderGlyphs = BorderGlyphs {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    pub const THICK: BorderGlyphs = BorderGlyphs {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        BorderGlyphs::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens() {
        assert_eq!(BorderKind::from_token("normal"), Some(BorderKind::Normal));
        assert_eq!(BorderKind::from_token("solid"), Some(BorderKind::Normal));
        assert_eq!(BorderKind::from_token("rounded"), Some(BorderKind::Rounded));
        assert_eq!(BorderKind::from_token("Double"), Some(BorderKind::Double));
        assert_eq!(BorderKind::from_token("thick"), Some(BorderKind::Thick));
    }

    #[test]
    fn unknown_tokens_are_none() {
        assert_eq!(BorderKind::from_token(""), None);
        assert_eq!(BorderKind::from_token("dotted"), None);
    }

    #[test]
    fn glyph_sets_are_distinct() {
        assert_eq!(BorderKind::Normal.glyphs().top_left, '┌');
        assert_eq!(BorderKind::Rounded.glyphs().top_left, '╭');
        assert_eq!(BorderKind::Double.glyphs().horizontal, '═');
        assert_eq!(BorderKind::Thick.glyphs().vertical, '┃');
    }
}
