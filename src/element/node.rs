//! Element types: NodeId, Element, ElementKind and the layout directive enums.
//!
//! An [`Element`] carries the fields every node shares (id, explicit size,
//! style) and an [`ElementKind`] payload holding only what that kind uses.

use serde::Deserialize;
use slotmap::new_key_type;

use crate::geometry::Align;

new_key_type! {
    /// Arena key of a node inside an [`ElementTree`](super::ElementTree).
    pub struct NodeId;
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Optional style tokens. `None` means "use the renderer default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub color: Option<String>,
    pub background: Option<String>,
    pub border: Option<String>,
}

impl Style {
    /// Set the foreground color token (builder).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color token (builder).
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Set the border kind token (builder).
    pub fn with_border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Layout directives
// ---------------------------------------------------------------------------

/// How a container arranges its children.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    #[default]
    Column,
    Flex,
}

impl LayoutMode {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "flex" => LayoutMode::Flex,
            _ => LayoutMode::Column,
        }
    }
}

/// Main axis of a flex container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "column" | "col" => FlexDirection::Column,
            _ => FlexDirection::Row,
        }
    }
}

/// Main-axis distribution of leftover space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
}

impl Justify {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "center" => Justify::Center,
            "flex-end" | "end" | "right" | "bottom" => Justify::End,
            "space-between" => Justify::SpaceBetween,
            "space-around" => Justify::SpaceAround,
            _ => Justify::Start,
        }
    }
}

/// Validation policy of a text input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Number,
}

impl InputKind {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "password" => InputKind::Password,
            "number" => InputKind::Number,
            _ => InputKind::Text,
        }
    }
}

// ---------------------------------------------------------------------------
// ElementKind
// ---------------------------------------------------------------------------

/// Layout directives and children of a container element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub layout: LayoutMode,
    pub flex_direction: FlexDirection,
    pub align: Align,
    pub justify: Justify,
    /// Ordered children. Emptied when the element is moved into an arena; the
    /// arena keeps the child links instead.
    pub children: Vec<Element>,
}

/// Configuration of a text input element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    pub label: String,
    pub value: String,
    pub kind: InputKind,
}

/// Per-kind payload of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Container(Container),
    Text { value: String },
    Input(InputProps),
    Checkbox { label: String, checked: bool },
    Button { label: String },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    /// An element type this renderer does not know. Renders as nothing.
    Unknown(String),
}

impl ElementKind {
    /// The kind's name as it appears in the tree format.
    pub fn name(&self) -> &str {
        match self {
            ElementKind::Container(_) => "container",
            ElementKind::Text { .. } => "text",
            ElementKind::Input(_) => "input",
            ElementKind::Checkbox { .. } => "checkbox",
            ElementKind::Button { .. } => "button",
            ElementKind::Table { .. } => "table",
            ElementKind::Unknown(name) => name,
        }
    }

    /// Whether elements of this kind take part in keyboard focus.
    pub fn is_focusable(&self) -> bool {
        matches!(
            self,
            ElementKind::Input(_) | ElementKind::Checkbox { .. } | ElementKind::Button { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// One node of the declarative UI tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Stable identifier; required (and unique) for focusable kinds.
    pub id: Option<String>,
    /// Explicit width in cells, 0 for automatic.
    pub width: usize,
    /// Explicit height in lines, 0 for automatic.
    pub height: usize,
    pub style: Style,
    pub kind: ElementKind,
}

impl Element {
    /// Create an element of the given kind with no id, size or style.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: None,
            width: 0,
            height: 0,
            style: Style::default(),
            kind,
        }
    }

    /// A column container holding `children`.
    pub fn container(children: impl IntoIterator<Item = Element>) -> Self {
        Self::new(ElementKind::Container(Container {
            children: children.into_iter().collect(),
            ..Container::default()
        }))
    }

    /// A flex container holding `children` (row direction by default).
    pub fn flex(children: impl IntoIterator<Item = Element>) -> Self {
        Self::new(ElementKind::Container(Container {
            layout: LayoutMode::Flex,
            children: children.into_iter().collect(),
            ..Container::default()
        }))
    }

    /// A static text element.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(ElementKind::Text { value: value.into() })
    }

    /// A text input with the given id.
    pub fn input(id: impl Into<String>) -> Self {
        Self::new(ElementKind::Input(InputProps::default())).with_id(id)
    }

    /// A checkbox with the given id.
    pub fn checkbox(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ElementKind::Checkbox {
            label: label.into(),
            checked: false,
        })
        .with_id(id)
    }

    /// A button with the given id.
    pub fn button(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ElementKind::Button { label: label.into() }).with_id(id)
    }

    /// A table with headers and data rows.
    pub fn table<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::new(ElementKind::Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        })
    }

    /// Set the element id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the explicit width (builder).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the explicit height (builder).
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the style (builder).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the label of an input, checkbox or button (builder). Ignored for
    /// other kinds.
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        match &mut self.kind {
            ElementKind::Input(props) => props.label = text.into(),
            ElementKind::Checkbox { label, .. } | ElementKind::Button { label } => {
                *label = text.into()
            }
            _ => {}
        }
        self
    }

    /// Set the initial value of an input or text element (builder).
    pub fn with_value(mut self, text: impl Into<String>) -> Self {
        match &mut self.kind {
            ElementKind::Input(props) => props.value = text.into(),
            ElementKind::Text { value } => *value = text.into(),
            _ => {}
        }
        self
    }

    /// Set the validation policy of an input (builder).
    pub fn with_input_kind(mut self, kind: InputKind) -> Self {
        if let ElementKind::Input(props) = &mut self.kind {
            props.kind = kind;
        }
        self
    }

    /// Set the initial checked state of a checkbox (builder).
    pub fn with_checked(mut self, value: bool) -> Self {
        if let ElementKind::Checkbox { checked, .. } = &mut self.kind {
            *checked = value;
        }
        self
    }

    /// Set a container's flex direction (builder).
    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        if let ElementKind::Container(c) = &mut self.kind {
            c.flex_direction = direction;
        }
        self
    }

    /// Set a container's cross-axis alignment (builder).
    pub fn with_align(mut self, align: Align) -> Self {
        if let ElementKind::Container(c) = &mut self.kind {
            c.align = align;
        }
        self
    }

    /// Set a container's main-axis justification (builder).
    pub fn with_justify(mut self, justify: Justify) -> Self {
        if let ElementKind::Container(c) = &mut self.kind {
            c.justify = justify;
        }
        self
    }

    /// Whether this element takes part in keyboard focus.
    pub fn is_focusable(&self) -> bool {
        self.kind.is_focusable()
    }
}
