//! Leaf renderers: Text, Button, Checkbox, Input, Table.
//!
//! [`render_leaf`] is the box renderer entry point: one non-container element
//! plus its widget state and assigned width in, one rectangular block out.

pub mod button;
pub mod checkbox;
pub mod input;
pub mod table;
pub mod text;

pub use checkbox::CheckboxState;
pub use input::TextInputState;

use crate::element::{Element, ElementKind};
use crate::geometry::Align;
use crate::render::block::Block;
use crate::render::strip::CellStyle;
use crate::session::WidgetState;
use crate::style::{resolve, Theme};

/// What the layout hands a leaf renderer besides the element itself.
#[derive(Debug, Clone, Copy)]
pub struct LeafContext<'a> {
    /// Width assigned by the parent layout, 0 for "natural width".
    pub width: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

/// Render one leaf element.
///
/// `state` is the element's session state; without one the element's initial
/// value is shown. An explicit element height pads or crops the block.
/// Containers and unknown kinds render as an empty block here.
pub fn render_leaf(element: &Element, state: Option<&WidgetState>, ctx: &LeafContext<'_>) -> Block {
    let mut block = match &element.kind {
        ElementKind::Text { value } => text::render(value, &element.style, ctx.width),
        ElementKind::Button { label } => {
            button::render(label, &element.style, element.width, ctx.focused, ctx.theme)
        }
        ElementKind::Checkbox { label, checked } => {
            let state = match state {
                Some(WidgetState::Checkbox(state)) => *state,
                _ => CheckboxState::new(*checked),
            };
            checkbox::render(label, state, &element.style, ctx.width, ctx.focused, ctx.theme)
        }
        ElementKind::Input(props) => {
            let initial;
            let state = match state {
                Some(WidgetState::Input(state)) => state,
                _ => {
                    initial = TextInputState::from_props(props);
                    &initial
                }
            };
            input::render(
                props,
                state,
                &element.style,
                element.width,
                ctx.width,
                ctx.focused,
                ctx.theme,
            )
        }
        ElementKind::Table { headers, rows } => table::render(headers, rows, &element.style),
        ElementKind::Container(_) | ElementKind::Unknown(_) => Block::empty(),
    };
    if element.height > 0 {
        let pad = CellStyle::from_resolved(&resolve(&element.style)).background_only();
        block.set_height(element.height, Align::Start, pad);
    }
    block
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::InputKind;

    fn ctx(theme: &Theme, width: usize, focused: bool) -> LeafContext<'_> {
        LeafContext {
            width,
            focused,
            theme,
        }
    }

    #[test]
    fn unknown_kind_is_empty() {
        let theme = Theme::default();
        let element = Element::new(ElementKind::Unknown("slider".into()));
        assert!(render_leaf(&element, None, &ctx(&theme, 20, false)).is_empty());
    }

    #[test]
    fn explicit_height_pads_and_crops() {
        let theme = Theme::default();
        let tall = Element::text("a").with_height(3);
        assert_eq!(
            render_leaf(&tall, None, &ctx(&theme, 2, false)).to_plain_string(),
            "a \n  \n  "
        );
        let short = Element::button("ok", "OK").with_height(2);
        let block = render_leaf(&short, None, &ctx(&theme, 0, false));
        assert_eq!(block.to_plain_string(), "┌────┐\n│ OK │");
    }

    #[test]
    fn session_state_overrides_initial_values() {
        let theme = Theme::default();
        let element = Element::checkbox("c", "C").with_checked(false);
        let state = WidgetState::Checkbox(CheckboxState::new(true));
        let block = render_leaf(&element, Some(&state), &ctx(&theme, 0, false));
        assert_eq!(block.lines()[0].to_plain(), "[x]");

        let input = Element::input("i").with_value("abc").with_width(6);
        let state = TextInputState::new("xyz", InputKind::Text);
        let block = render_leaf(&input, Some(&WidgetState::Input(state)), &ctx(&theme, 0, true));
        assert_eq!(block.lines()[1].to_plain(), "│ │xyz │");
    }

    #[test]
    fn missing_state_shows_initial_value() {
        let theme = Theme::default();
        let input = Element::input("i").with_value("hey").with_width(6);
        let block = render_leaf(&input, None, &ctx(&theme, 0, false));
        assert_eq!(block.lines()[1].to_plain(), "│ hey  │");
    }
}
