//! Table leaf renderer: a grid of individually bordered cells.
//!
//! Every header and data cell is its own bordered, padded box. Each row is a
//! horizontal join of its cells and the rows are stacked, so a table with `r`
//! data rows is `3 * (r + 1)` lines tall.

use crate::element::Style;
use crate::geometry::{Align, Spacing};
use crate::render::block::Block;
use crate::render::boxes::bordered;
use crate::render::compositor::{join_horizontal, join_vertical};
use crate::render::strip::{text_width, CellStyle};
use crate::style::{resolve, ResolvedStyle};

/// Column widths: the widest header or cell text of each column.
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| text_width(cell))
                .chain(std::iter::once(text_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Render a table. No headers means an empty block; missing data cells render
/// empty and cells beyond the header count are ignored.
pub fn render(headers: &[String], rows: &[Vec<String>], style: &Style) -> Block {
    if headers.is_empty() {
        return Block::empty();
    }
    let resolved = resolve(style);
    let widths = column_widths(headers, rows);

    let header_style = CellStyle::from_resolved(&resolved).with_bold(true);
    let header_row = render_row(headers.iter().map(String::as_str), &widths, &resolved, &header_style);

    let body_style = CellStyle::from_resolved(&resolved);
    let mut stacked = Vec::with_capacity(rows.len() + 1);
    stacked.push(header_row);
    for row in rows {
        let cells = (0..widths.len()).map(|col| row.get(col).map_or("", String::as_str));
        stacked.push(render_row(cells, &widths, &resolved, &body_style));
    }
    join_vertical(stacked, Align::Start)
}

fn render_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    resolved: &ResolvedStyle,
    text_style: &CellStyle,
) -> Block {
    let border_style = CellStyle {
        fg: resolved.fg.clone(),
        bg: None,
        bold: false,
    };
    let blocks = cells
        .zip(widths)
        .map(|(text, &width)| {
            let mut content = Block::text(text, text_style.clone());
            content.set_width(width, Align::Start, text_style.background_only());
            content.pad(Spacing::symmetric(0, 1), text_style.background_only());
            bordered(content, &resolved.glyphs, border_style.clone())
        })
        .collect();
    join_horizontal(blocks, Align::Start)
}

// ===========================================================================
// Tests
// ===========================================================================
