//! Container layout: width assignment, joining and justification.
//!
//! Layout is a single top-down pass. A container decides each child's width,
//! renders the children through the dispatcher, joins the resulting blocks and
//! sizes the result. Heights are never assigned; they fall out of the content
//! unless an element sets one explicitly.

use crate::element::{ElementKind, FlexDirection, LayoutMode, NodeId};
use crate::geometry::Align;
use crate::render::block::Block;
use crate::render::boxes::bordered;
use crate::render::compositor::{join_horizontal, join_vertical, justify_column, justify_row};
use crate::render::dispatch::{render_node, RenderContext};
use crate::render::strip::CellStyle;
use crate::style::resolve;

// ---------------------------------------------------------------------------
// Width distribution
// ---------------------------------------------------------------------------

/// Split `width` columns over children whose explicit widths are `explicit`
/// (0 = automatic).
///
/// Explicit children keep their width. The remainder is shared evenly by the
/// automatic children, rounding down; leftover columns stay unused.
pub fn distribute(width: usize, explicit: &[usize]) -> Vec<usize> {
    let fixed: usize = explicit.iter().sum();
    let auto = explicit.iter().filter(|&&w| w == 0).count();
    let share = if auto == 0 {
        0
    } else {
        width.saturating_sub(fixed) / auto
    };
    explicit
        .iter()
        .map(|&w| if w > 0 { w } else { share })
        .collect()
}

/// The width a child gets when it does not share its parent's row.
fn own_or(ctx: &RenderContext<'_>, node: NodeId, width: usize) -> usize {
    match ctx.tree.get(node) {
        Some(element) if element.width > 0 => element.width,
        _ => width,
    }
}

/// Render a flex item into its share, cropping anything wider. A share of 0
/// stays 0 columns rather than falling back to the item's natural width.
fn render_share(ctx: &RenderContext<'_>, node: NodeId, share: usize) -> Block {
    let mut block = render_node(ctx, node, share);
    if block.width() > share {
        block.set_width(share, Align::Start, CellStyle::default());
    }
    block
}

fn explicit_widths(ctx: &RenderContext<'_>, nodes: &[NodeId]) -> Vec<usize> {
    nodes
        .iter()
        .map(|&node| ctx.tree.get(node).map_or(0, |e| e.width))
        .collect()
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

/// Lay out a container node at `assigned` columns.
///
/// The container is its explicit width when set, else `assigned`. A border
/// token on the container wraps the content and shrinks the interior by two.
/// Nodes that are not containers render as an empty block.
pub fn layout_container(ctx: &RenderContext<'_>, node: NodeId, assigned: usize) -> Block {
    let Some(element) = ctx.tree.get(node) else {
        return Block::empty();
    };
    let ElementKind::Container(container) = &element.kind else {
        return Block::empty();
    };

    let resolved = resolve(&element.style);
    let inset = if resolved.has_border { 2 } else { 0 };
    let width = if element.width > 0 {
        element.width
    } else {
        assigned
    };
    let interior = width.saturating_sub(inset);
    let children = ctx.tree.children(node);

    let mut content = match (container.layout, container.flex_direction) {
        (LayoutMode::Column, _) => {
            let blocks = children
                .iter()
                .map(|&child| render_node(ctx, child, own_or(ctx, child, interior)))
                .collect();
            join_vertical(blocks, container.align)
        }
        (LayoutMode::Flex, FlexDirection::Row) => {
            let widths = distribute(interior, &explicit_widths(ctx, children));
            let blocks = children
                .iter()
                .zip(widths)
                .map(|(&child, w)| render_share(ctx, child, w))
                .collect();
            justify_row(blocks, container.justify, interior, container.align)
        }
        (LayoutMode::Flex, FlexDirection::Column) => {
            let blocks = children
                .iter()
                .map(|&child| render_node(ctx, child, own_or(ctx, child, interior)))
                .collect();
            let extent = if element.height > 0 {
                element.height.saturating_sub(inset)
            } else {
                ctx.viewport.height
            };
            justify_column(blocks, container.justify, extent, container.align)
        }
    };

    // In a flex row `align` is the cross axis; justify already placed the slack.
    let across = match (container.layout, container.flex_direction) {
        (LayoutMode::Flex, FlexDirection::Row) => Align::Start,
        _ => container.align,
    };
    let fill = CellStyle::from_resolved(&resolved).background_only();
    if interior > 0 {
        content.set_width(interior, across, fill.clone());
    }
    if element.height > 0 {
        content.set_height(element.height.saturating_sub(inset), Align::Start, fill);
    }

    // Children without their own colors inherit the container's.
    if resolved.fg.is_some() || resolved.bg.is_some() {
        content.restyle(|cell| {
            if cell.fg.is_none() {
                cell.fg = resolved.fg.clone();
            }
            if cell.bg.is_none() {
                cell.bg = resolved.bg.clone();
            }
        });
    }

    if resolved.has_border {
        bordered(content, &resolved.glyphs, CellStyle::from_resolved(&resolved))
    } else {
        content
    }
}

/// Lay out the root-level nodes across the viewport.
///
/// A column root stacks every node at the viewport width (or its own width);
/// a flex root shares the viewport width like a flex row, top-aligned.
pub fn layout_root(ctx: &RenderContext<'_>) -> Block {
    let roots = ctx.tree.roots();
    let width = ctx.viewport.width;
    match ctx.tree.layout() {
        LayoutMode::Column => {
            let blocks = roots
                .iter()
                .map(|&node| render_node(ctx, node, own_or(ctx, node, width)))
                .collect();
            join_vertical(blocks, Align::Start)
        }
        LayoutMode::Flex => {
            let widths = distribute(width, &explicit_widths(ctx, roots));
            let blocks = roots
                .iter()
                .zip(widths)
                .map(|(&node, w)| render_share(ctx, node, w))
                .collect();
            let mut joined = join_horizontal(blocks, Align::Start);
            if joined.width() > width {
                joined.set_width(width, Align::Start, CellStyle::default());
            }
            joined
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
