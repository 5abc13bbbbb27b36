//! Render dispatcher: walks the element tree and produces the frame block.
//!
//! Containers go to the layout engine, every other kind to its leaf renderer.
//! Rendering reads the tree and session state and never fails.

use crate::element::{ElementKind, ElementTree, NodeId};
use crate::geometry::Size;
use crate::layout::{layout_container, layout_root};
use crate::session::SessionState;
use crate::style::Theme;
use crate::widgets::{render_leaf, LeafContext};

use super::block::Block;

/// Everything one render pass reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub tree: &'a ElementTree,
    pub session: &'a SessionState,
    /// The node that currently has keyboard focus.
    pub focused: Option<NodeId>,
    pub viewport: Size,
    pub theme: &'a Theme,
}

/// Render the whole tree into one frame.
pub fn render_frame(ctx: &RenderContext<'_>) -> Block {
    layout_root(ctx)
}

/// Render one node at the given assigned width.
pub fn render_node(ctx: &RenderContext<'_>, node: NodeId, width: usize) -> Block {
    let Some(element) = ctx.tree.get(node) else {
        return Block::empty();
    };
    match &element.kind {
        ElementKind::Container(_) => layout_container(ctx, node, width),
        _ => {
            let state = element.id.as_deref().and_then(|id| ctx.session.get(id));
            let leaf = LeafContext {
                width,
                focused: ctx.focused == Some(node),
                theme: ctx.theme,
            };
            render_leaf(element, state, &leaf)
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
