//! JSON tree loader and configuration validation.
//!
//! The wire format is a flat record per node with a `type` discriminator and a
//! superset of fields. [`UiConfig::from_json`] parses it into typed
//! [`Element`]s and rejects trees the engine cannot run: focusable elements
//! without an id, and any id used more than once.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::geometry::Align;

use super::node::{
    Container, Element, ElementKind, FlexDirection, InputKind, InputProps, Justify, LayoutMode,
    Style,
};
use super::tree::ElementTree;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error loading or validating a UI tree.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tree file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tree: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{kind} element is focusable and needs a non-empty id")]
    MissingId { kind: String },
    #[error("duplicate element id: {0}")]
    DuplicateId(String),
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    layout: String,
    elements: Vec<RawElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawElement {
    #[serde(rename = "type")]
    kind: String,
    id: Option<String>,
    label: String,
    value: String,
    style: Style,
    children: Vec<RawElement>,
    width: usize,
    height: usize,
    checked: bool,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    layout: String,
    flex_direction: String,
    align: String,
    justify: String,
    #[serde(alias = "inputType")]
    input_kind: String,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let kind = match raw.kind.trim().to_ascii_lowercase().as_str() {
            "container" | "div" => ElementKind::Container(Container {
                layout: LayoutMode::from_token(&raw.layout),
                flex_direction: FlexDirection::from_token(&raw.flex_direction),
                align: Align::from_token(&raw.align),
                justify: Justify::from_token(&raw.justify),
                children: raw.children.into_iter().map(Element::from).collect(),
            }),
            "text" => ElementKind::Text { value: raw.value },
            "input" => ElementKind::Input(InputProps {
                label: raw.label,
                value: raw.value,
                kind: InputKind::from_token(&raw.input_kind),
            }),
            "checkbox" => ElementKind::Checkbox {
                label: raw.label,
                checked: raw.checked,
            },
            "button" => ElementKind::Button { label: raw.label },
            "table" => ElementKind::Table {
                headers: raw.headers,
                rows: raw.rows,
            },
            _ => ElementKind::Unknown(raw.kind),
        };
        Element {
            id: raw.id.filter(|id| !id.is_empty()),
            width: raw.width,
            height: raw.height,
            style: raw.style,
            kind,
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// A validated UI description: root layout plus the root element list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiConfig {
    pub layout: LayoutMode,
    pub elements: Vec<Element>,
}

impl UiConfig {
    /// Parse and validate a JSON tree description.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let config = UiConfig {
            layout: LayoutMode::from_token(&raw.layout),
            elements: raw.elements.into_iter().map(Element::from).collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON tree file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check id requirements: focusable elements need ids, no id repeats.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&Element> = self.elements.iter().rev().collect();
        while let Some(element) = stack.pop() {
            match &element.id {
                Some(id) => {
                    if !seen.insert(id.as_str()) {
                        return Err(ConfigError::DuplicateId(id.clone()));
                    }
                }
                None if element.is_focusable() => {
                    return Err(ConfigError::MissingId {
                        kind: element.kind.name().to_owned(),
                    });
                }
                None => {}
            }
            if let ElementKind::Container(container) = &element.kind {
                stack.extend(container.children.iter().rev());
            }
        }
        Ok(())
    }

    /// Flatten into the engine's arena representation.
    pub fn into_tree(self) -> ElementTree {
        ElementTree::build(self.layout, self.elements)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
