//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer and provides methods for entering/leaving
//! alternate screen, painting frames as cell diffs, and controlling the cursor.
//! Color tokens are parsed as named colors, `#rrggbb` hex values or ANSI
//! 256-color indices (`"205"`).

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::block::{Block, CellUpdate};
use super::strip::CellStyle;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// Wraps a `BufWriter<Stdout>` for efficient batched writes. The driver does NOT
/// automatically enter alternate screen on creation — call `enter_alt_screen` explicitly.
pub struct Driver {
    writer: BufWriter<Stdout>,
}

impl Driver {
    /// Create a new driver wrapping stdout.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
        })
    }

    /// Enter alternate screen and enable raw mode.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Leave alternate screen and disable raw mode. Both steps always run;
    /// the first failure is returned.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        let raw = terminal::disable_raw_mode();
        let screen = execute!(self.writer, LeaveAlternateScreen);
        first_error([raw, screen])
    }

    /// Undo everything an interactive session changed: show the cursor,
    /// disable raw mode and leave the alternate screen. Every step runs even
    /// when an earlier one fails.
    pub fn restore(&mut self) -> io::Result<()> {
        let cursor = self.show_cursor();
        let screen = self.leave_alt_screen();
        first_error([cursor, screen])
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All))
    }

    /// Paint `frame`, sending only the cells that differ from `previous`.
    ///
    /// With no previous frame the screen is cleared and every cell is sent.
    pub fn paint(&mut self, frame: &Block, previous: Option<&Block>) -> io::Result<()> {
        let updates = match previous {
            Some(previous) => frame.diff(previous),
            None => {
                self.clear()?;
                frame.diff(&Block::empty())
            }
        };
        self.apply_updates(&updates)?;
        self.flush()
    }

    /// Apply a batch of cell updates to the terminal.
    ///
    /// For each update, the cursor is moved to the cell's position, the style
    /// is applied, and the character is printed. Uses `queue!` for batching;
    /// call `flush()` afterward to send to the terminal.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.apply_cell_style(&update.cell.style)?;
            queue!(self.writer, Print(update.cell.ch))?;
            queue!(self.writer, ResetColor)?;
            if update.cell.style.bold {
                queue!(self.writer, SetAttribute(Attribute::Reset))?;
            }
        }
        Ok(())
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Hide the cursor.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    /// Show the cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }

    /// Queue crossterm style commands for a given `CellStyle`.
    fn apply_cell_style(&mut self, style: &CellStyle) -> io::Result<()> {
        if let Some(color) = style.fg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetForegroundColor(color))?;
        }
        if let Some(color) = style.bg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetBackgroundColor(color))?;
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

/// Collapse results of steps that all ran into the first error, if any.
fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a color token into a crossterm `Color`.
///
/// Supports:
/// - ANSI 256-color indices: `0` to `255`
/// - Hex colors: `#rrggbb` or `#rgb`
/// - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`, `white`,
///   `dark_red`, `dark_green`, `dark_yellow`, `dark_blue`, `dark_magenta`, `dark_cyan`, `dark_grey`/`dark_gray`,
///   `grey`/`gray`
///
/// Returns `None` if the token cannot be parsed; the cell then keeps the
/// terminal default.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u8>().ok().map(Color::AnsiValue);
    }

    // Named colors (case-insensitive)
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "dark_red" | "darkred" => Some(Color::DarkRed),
        "dark_green" | "darkgreen" => Some(Color::DarkGreen),
        "dark_yellow" | "darkyellow" => Some(Color::DarkYellow),
        "dark_blue" | "darkblue" => Some(Color::DarkBlue),
        "dark_magenta" | "darkmagenta" => Some(Color::DarkMagenta),
        "dark_cyan" | "darkcyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Some(Color::DarkGrey),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

/// Parse a hex color string (without the leading `#`).
///
/// Supports 6-digit (`rrggbb`) and 3-digit (`rgb`) formats.
fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            // Expand: 0xA -> 0xAA
            Some(Color::Rgb {
                r: r * 16 + r,
                g: g * 16 + g,
                b: b * 16 + b,
            })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    // -----------------------------------------------------------------------
    // Color parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_ansi_index() {
        assert_eq!(parse_color("205"), Some(Color::AnsiValue(205)));
        assert_eq!(parse_color("0"), Some(Color::AnsiValue(0)));
        assert_eq!(parse_color("256"), None);
    }

    #[test]
    fn parse_hex() {
        assert_eq!(parse_color("#ff8800"), Some(Color::Rgb { r: 255, g: 136, b: 0 }));
        assert_eq!(parse_color("#abc"), Some(Color::Rgb { r: 0xaa, g: 0xbb, b: 0xcc }));
        assert_eq!(parse_color("#ff00"), None);
        assert_eq!(parse_color("#gghhii"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn parse_named() {
        assert_eq!(parse_color("Red"), Some(Color::Red));
        assert_eq!(parse_color("dark_grey"), Some(Color::DarkGrey));
        assert_eq!(parse_color("gray"), Some(Color::Grey));
        assert_eq!(parse_color("  cyan "), Some(Color::Cyan));
    }

    #[test]
    fn parse_unknown_color() {
        assert_eq!(parse_color("rainbow"), None);
        assert_eq!(parse_color(""), None);
    }

    // -----------------------------------------------------------------------
    // Driver
    // -----------------------------------------------------------------------

    #[test]
    fn first_error_keeps_earliest_failure() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());
        let err = first_error([
            Ok(()),
            Err(io::Error::other("cursor")),
            Err(io::Error::other("screen")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "cursor");
    }

    #[test]
    fn driver_new_succeeds() {
        assert!(Driver::new().is_ok());
    }
}
