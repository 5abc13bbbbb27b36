//! Textual key tokens: `"tab"`, `"shift+tab"`, `"ctrl+c"`, `"a"`, `" "`.
//!
//! Tokens are lexed with logos into words, `+` separators and single
//! characters, then parsed as `modifier+modifier+key`. A lone `+` (or a
//! trailing `++`) names the plus key itself.

use std::str::FromStr;

use logos::Logos;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// KeyTokenError
// ---------------------------------------------------------------------------

/// Error parsing a key token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyTokenError {
    #[error("empty key token")]
    Empty,
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
    #[error("unknown modifier: {0:?}")]
    UnknownModifier(String),
}

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

/// Lexeme of a key token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    /// `+` between modifiers and the key.
    #[token("+")]
    Plus,

    /// A key or modifier name of two or more characters: `tab`, `ctrl`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_-]+")]
    Word,

    /// Any single character other than `+`, including space.
    #[regex(r"[^+]")]
    Char,
}

fn lex(input: &str) -> Result<Vec<(Lexeme, &str)>, KeyTokenError> {
    Lexeme::lexer(input)
        .spanned()
        .map(|(result, span)| {
            result
                .map(|lexeme| (lexeme, &input[span]))
                .map_err(|_| KeyTokenError::UnknownKey(input.to_owned()))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

fn modifier(word: &str) -> Option<Modifiers> {
    match word.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifiers::CTRL),
        "shift" => Some(Modifiers::SHIFT),
        "alt" | "meta" | "option" => Some(Modifiers::ALT),
        _ => None,
    }
}

fn named_key(word: &str) -> Option<Key> {
    let key = match word.to_ascii_lowercase().as_str() {
        "tab" => Key::Tab,
        "backtab" => Key::BackTab,
        "enter" | "return" => Key::Enter,
        "space" => Key::Char(' '),
        "esc" | "escape" => Key::Escape,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "home" => Key::Home,
        "end" => Key::End,
        _ => return None,
    };
    Some(key)
}

/// Parse a textual key token into a key event.
///
/// `shift+tab` is normalized to [`Key::BackTab`] with shift held (what
/// terminals report), and `shift+<letter>` to the uppercase letter.
pub fn parse_key_token(token: &str) -> Result<KeyEvent, KeyTokenError> {
    if token.is_empty() {
        return Err(KeyTokenError::Empty);
    }
    let lexemes = lex(token)?;

    let mut modifiers = Modifiers::NONE;
    let mut rest = lexemes.as_slice();
    while let [(Lexeme::Word, word), (Lexeme::Plus, _), tail @ ..] = rest {
        if tail.is_empty() {
            break;
        }
        match modifier(word) {
            Some(m) => modifiers = modifiers | m,
            None => return Err(KeyTokenError::UnknownModifier((*word).to_owned())),
        }
        rest = tail;
    }

    let code = match rest {
        [(Lexeme::Char, text)] => match text.chars().next() {
            Some(ch) => Key::Char(ch),
            None => return Err(KeyTokenError::UnknownKey(token.to_owned())),
        },
        [(Lexeme::Plus, _)] => Key::Char('+'),
        [(Lexeme::Word, word)] => {
            named_key(word).ok_or_else(|| KeyTokenError::UnknownKey(token.to_owned()))?
        }
        _ => return Err(KeyTokenError::UnknownKey(token.to_owned())),
    };

    let code = match code {
        Key::Tab if modifiers.contains(Modifiers::SHIFT) => Key::BackTab,
        Key::Char(ch) if modifiers.contains(Modifiers::SHIFT) && ch.is_ascii_lowercase() => {
            Key::Char(ch.to_ascii_uppercase())
        }
        other => other,
    };
    Ok(KeyEvent::new(code, modifiers))
}

impl FromStr for KeyEvent {
    type Err = KeyTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_token(s)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(token: &str) -> KeyEvent {
        parse_key_token(token).unwrap()
    }

    #[test]
    fn single_characters() {
        assert_eq!(parse("a"), KeyEvent::plain(Key::Char('a')));
        assert_eq!(parse("7"), KeyEvent::plain(Key::Char('7')));
        assert_eq!(parse("-"), KeyEvent::plain(Key::Char('-')));
        assert_eq!(parse("é"), KeyEvent::plain(Key::Char('é')));
    }

    #[test]
    fn space_forms() {
        assert_eq!(parse(" "), KeyEvent::plain(Key::Char(' ')));
        assert_eq!(parse("space"), KeyEvent::plain(Key::Char(' ')));
    }

    #[test]
    fn plus_key() {
        assert_eq!(parse("+"), KeyEvent::plain(Key::Char('+')));
        assert_eq!(parse("ctrl++"), KeyEvent::new(Key::Char('+'), Modifiers::CTRL));
    }

    #[test]
    fn named_keys_case_insensitive() {
        assert_eq!(parse("tab"), KeyEvent::plain(Key::Tab));
        assert_eq!(parse("Enter"), KeyEvent::plain(Key::Enter));
        assert_eq!(parse("BACKSPACE"), KeyEvent::plain(Key::Backspace));
        assert_eq!(parse("left"), KeyEvent::plain(Key::Left));
        assert_eq!(parse("right"), KeyEvent::plain(Key::Right));
        assert_eq!(parse("esc"), KeyEvent::plain(Key::Escape));
    }

    #[test]
    fn modifiers() {
        assert_eq!(parse("ctrl+c"), KeyEvent::new(Key::Char('c'), Modifiers::CTRL));
        assert_eq!(
            parse("ctrl+alt+delete"),
            KeyEvent::new(Key::Delete, Modifiers::CTRL | Modifiers::ALT)
        );
    }

    #[test]
    fn shift_tab_is_backtab() {
        assert_eq!(parse("shift+tab"), KeyEvent::new(Key::BackTab, Modifiers::SHIFT));
    }

    #[test]
    fn shift_letter_is_uppercase() {
        assert_eq!(parse("shift+a"), KeyEvent::new(Key::Char('A'), Modifiers::SHIFT));
    }

    #[test]
    fn errors() {
        assert_eq!(parse_key_token(""), Err(KeyTokenError::Empty));
        assert_eq!(
            parse_key_token("pageup"),
            Err(KeyTokenError::UnknownKey("pageup".into()))
        );
        assert_eq!(
            parse_key_token("hyper+a"),
            Err(KeyTokenError::UnknownModifier("hyper".into()))
        );
        assert_eq!(
            parse_key_token("ctrl+"),
            Err(KeyTokenError::UnknownKey("ctrl+".into()))
        );
        assert_eq!(
            parse_key_token("ab c"),
            Err(KeyTokenError::UnknownKey("ab c".into()))
        );
    }

    #[test]
    fn from_str_round_trips_display() {
        for token in ["ctrl+c", "shift+tab", "a", "space", "backspace", "alt+x"] {
            let event: KeyEvent = token.parse().unwrap();
            let reparsed: KeyEvent = event.to_string().parse().unwrap();
            assert_eq!(event, reparsed, "token {token}");
        }
    }
}
