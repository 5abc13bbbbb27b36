//! Block joining and main-axis spacing.
//!
//! `join_horizontal` and `join_vertical` are the only ways blocks are combined.
//! Every sibling is padded to the tallest (horizontal join) or widest
//! (vertical join) block with the given alignment before concatenation, so the
//! result is always rectangular.

use crate::element::Justify;
use crate::geometry::Align;

use super::block::Block;
use super::strip::{CellStyle, Strip};

// ---------------------------------------------------------------------------
// Joins
// ---------------------------------------------------------------------------

/// Place blocks side by side, left to right.
///
/// Shorter blocks are padded vertically according to `align` (`Start` = top).
/// Width of the result is the sum of widths; height is the maximum height.
pub fn join_horizontal(blocks: Vec<Block>, align: Align) -> Block {
    let height = blocks.iter().map(Block::height).max().unwrap_or(0);
    let width: usize = blocks.iter().map(Block::width).sum();
    let mut lines = vec![Strip::new(); height];
    for mut block in blocks {
        block.set_height(height, align, CellStyle::default());
        for (line, strip) in lines.iter_mut().zip(block.into_lines()) {
            line.extend(strip);
        }
    }
    let mut joined = Block::from_lines(lines);
    // A row of zero-height blocks still spans the sum of their widths.
    joined.pad_to_width(width, Align::Start, CellStyle::default());
    joined
}

/// Stack blocks top to bottom.
///
/// Narrower blocks are padded horizontally according to `align` (`Start` =
/// left). Width of the result is the maximum width; height is the sum of
/// heights.
pub fn join_vertical(blocks: Vec<Block>, align: Align) -> Block {
    let width = blocks.iter().map(Block::width).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(blocks.iter().map(Block::height).sum());
    for mut block in blocks {
        block.set_width(width, align, CellStyle::default());
        lines.extend(block.into_lines());
    }
    let mut joined = Block::from_lines(lines);
    // A stack of zero-height blocks still has the widest sibling's width.
    joined.pad_to_width(width, Align::Start, CellStyle::default());
    joined
}

// ---------------------------------------------------------------------------
// Justify
// ---------------------------------------------------------------------------

/// Split `slack` cells into the `n + 1` gaps around `n` items.
///
/// Index 0 is the leading gap, index `n` the trailing gap, and index `i` in
/// between is the gap before item `i`. The gaps always sum to `slack`. When a
/// split is uneven, earlier gaps take the extra cells.
pub fn distribute_slack(justify: Justify, slack: usize, n: usize) -> Vec<usize> {
    let mut gaps = vec![0; n + 1];
    match justify {
        _ if n == 0 => gaps[0] = slack,
        Justify::Start => gaps[n] = slack,
        Justify::Center => {
            gaps[0] = slack / 2;
            gaps[n] = slack - slack / 2;
        }
        Justify::End => gaps[0] = slack,
        Justify::SpaceBetween if n == 1 => gaps[n] = slack,
        Justify::SpaceBetween => spread(&mut gaps[1..n], slack),
        Justify::SpaceAround => spread(&mut gaps, slack),
    }
    gaps
}

fn spread(gaps: &mut [usize], slack: usize) {
    let count = gaps.len();
    if count == 0 {
        return;
    }
    let (base, extra) = (slack / count, slack % count);
    for (i, gap) in gaps.iter_mut().enumerate() {
        *gap = base + usize::from(i < extra);
    }
}

/// Join `blocks` left to right, spreading the space left over in `extent`
/// columns according to `justify`.
///
/// With no slack, or `Justify::Start`, this is a plain [`join_horizontal`].
pub fn justify_row(blocks: Vec<Block>, justify: Justify, extent: usize, align: Align) -> Block {
    let content: usize = blocks.iter().map(Block::width).sum();
    let slack = extent.saturating_sub(content);
    if slack == 0 || justify == Justify::Start {
        return join_horizontal(blocks, align);
    }
    let gaps = distribute_slack(justify, slack, blocks.len());
    join_horizontal(interleave(blocks, &gaps, Block::horizontal_spacer), align)
}

/// Stack `blocks` top to bottom, spreading the space left over in `extent`
/// lines according to `justify`.
pub fn justify_column(blocks: Vec<Block>, justify: Justify, extent: usize, align: Align) -> Block {
    let content: usize = blocks.iter().map(Block::height).sum();
    let slack = extent.saturating_sub(content);
    if slack == 0 || justify == Justify::Start {
        return join_vertical(blocks, align);
    }
    let gaps = distribute_slack(justify, slack, blocks.len());
    join_vertical(interleave(blocks, &gaps, Block::vertical_spacer), align)
}

fn interleave(blocks: Vec<Block>, gaps: &[usize], spacer: fn(usize) -> Block) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len() * 2 + 1);
    for (block, &gap) in blocks.into_iter().zip(gaps) {
        if gap > 0 {
            out.push(spacer(gap));
        }
        out.push(block);
    }
    if let Some(&trailing) = gaps.last() {
        if trailing > 0 {
            out.push(spacer(trailing));
        }
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn text(s: &str) -> Block {
        Block::text(s, CellStyle::default())
    }

    // -----------------------------------------------------------------------
    // join_horizontal
    // -----------------------------------------------------------------------

    #[test]
    fn horizontal_top_aligned() {
        let joined = join_horizontal(vec![text("a\nb\nc"), text("xy")], Align::Start);
        assert_eq!(joined.to_plain_string(), "axy\nb  \nc  ");
        assert_eq!((joined.width(), joined.height()), (3, 3));
    }

    #[test]
    fn horizontal_center_puts_odd_line_below() {
        let joined = join_horizontal(vec![text("a\nb\nc\nd"), text("x")], Align::Center);
        assert_eq!(joined.to_plain_string(), "a \nbx\nc \nd ");
    }

    #[test]
    fn horizontal_bottom_aligned() {
        let joined = join_horizontal(vec![text("a\nb"), text("x")], Align::End);
        assert_eq!(joined.to_plain_string(), "a \nbx");
    }

    #[test]
    fn horizontal_spacers_keep_their_width() {
        let joined = join_horizontal(
            vec![Block::horizontal_spacer(2), Block::horizontal_spacer(3)],
            Align::Start,
        );
        assert_eq!((joined.width(), joined.height()), (5, 0));
    }

    #[test]
    fn horizontal_empty_input() {
        let joined = join_horizontal(Vec::new(), Align::Start);
        assert!(joined.is_empty());
        assert_eq!(joined.to_plain_string(), "");
    }

    // -----------------------------------------------------------------------
    // join_vertical
    // -----------------------------------------------------------------------

    #[test]
    fn vertical_alignments() {
        let blocks = || vec![text("abcd"), text("x")];
        assert_eq!(join_vertical(blocks(), Align::Start).to_plain_string(), "abcd\nx   ");
        assert_eq!(join_vertical(blocks(), Align::Center).to_plain_string(), "abcd\n x  ");
        assert_eq!(join_vertical(blocks(), Align::End).to_plain_string(), "abcd\n   x");
    }

    #[test]
    fn vertical_keeps_every_line() {
        let joined = join_vertical(vec![text("one"), text("two")], Align::Start);
        assert_eq!(joined.height(), 2);
        assert_eq!(joined.to_plain_string(), "one\ntwo");
    }

    #[test]
    fn vertical_of_spacers_keeps_width() {
        let joined = join_vertical(vec![Block::horizontal_spacer(4)], Align::Start);
        assert_eq!(joined.width(), 4);
        assert_eq!(joined.height(), 0);
    }

    // -----------------------------------------------------------------------
    // distribute_slack
    // -----------------------------------------------------------------------

    #[test]
    fn slack_start_center_end() {
        assert_eq!(distribute_slack(Justify::Start, 5, 2), vec![0, 0, 5]);
        assert_eq!(distribute_slack(Justify::Center, 5, 2), vec![2, 0, 3]);
        assert_eq!(distribute_slack(Justify::End, 5, 2), vec![5, 0, 0]);
    }

    #[test]
    fn slack_space_between() {
        assert_eq!(distribute_slack(Justify::SpaceBetween, 5, 3), vec![0, 3, 2, 0]);
        assert_eq!(distribute_slack(Justify::SpaceBetween, 5, 1), vec![0, 5]);
    }

    #[test]
    fn slack_space_around() {
        assert_eq!(distribute_slack(Justify::SpaceAround, 7, 2), vec![3, 2, 2]);
    }

    #[test]
    fn slack_without_items() {
        assert_eq!(distribute_slack(Justify::SpaceBetween, 4, 0), vec![4]);
    }

    // -----------------------------------------------------------------------
    // justify_row / justify_column
    // -----------------------------------------------------------------------

    #[test]
    fn row_center() {
        let row = justify_row(vec![text("ab")], Justify::Center, 6, Align::Start);
        assert_eq!(row.to_plain_string(), "  ab  ");
    }

    #[test]
    fn row_end() {
        let row = justify_row(vec![text("ab"), text("c")], Justify::End, 6, Align::Start);
        assert_eq!(row.to_plain_string(), "   abc");
    }

    #[test]
    fn row_space_between_touches_edges() {
        let row = justify_row(
            vec![text("a"), text("b"), text("c")],
            Justify::SpaceBetween,
            7,
            Align::Start,
        );
        assert_eq!(row.to_plain_string(), "a  b  c");
    }

    #[test]
    fn row_space_around() {
        let row = justify_row(vec![text("a"), text("b")], Justify::SpaceAround, 8, Align::Start);
        assert_eq!(row.to_plain_string(), "  a  b  ");
    }

    #[test]
    fn row_without_slack_is_noop() {
        let row = justify_row(vec![text("abc")], Justify::Center, 2, Align::Start);
        assert_eq!(row.to_plain_string(), "abc");
    }

    #[test]
    fn column_center() {
        let col = justify_column(vec![text("a")], Justify::Center, 4, Align::Start);
        assert_eq!(col.to_plain_string(), " \na\n \n ");
    }

    #[test]
    fn column_space_between() {
        let col = justify_column(vec![text("a"), text("b")], Justify::SpaceBetween, 4, Align::Start);
        assert_eq!(col.to_plain_string(), "a\n \n \nb");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn block_strategy() -> impl Strategy<Value = Block> {
        (0usize..6, 0usize..5).prop_map(|(w, h)| Block::blank(w, h, CellStyle::default()))
    }

    fn justify_strategy() -> impl Strategy<Value = Justify> {
        prop_oneof![
            Just(Justify::Start),
            Just(Justify::Center),
            Just(Justify::End),
            Just(Justify::SpaceBetween),
            Just(Justify::SpaceAround),
        ]
    }

    proptest! {
        #[test]
        fn vertical_join_width_is_max(blocks in prop::collection::vec(block_strategy(), 0..6)) {
            let max_w = blocks.iter().map(Block::width).max().unwrap_or(0);
            let sum_h: usize = blocks.iter().map(Block::height).sum();
            let joined = join_vertical(blocks, Align::Center);
            prop_assert_eq!(joined.width(), max_w);
            prop_assert_eq!(joined.height(), sum_h);
            for line in joined.lines() {
                prop_assert_eq!(line.width(), max_w);
            }
        }

        #[test]
        fn horizontal_join_height_is_max(blocks in prop::collection::vec(block_strategy(), 0..6)) {
            let max_h = blocks.iter().map(Block::height).max().unwrap_or(0);
            let joined = join_horizontal(blocks, Align::End);
            prop_assert_eq!(joined.height(), max_h);
            let w = joined.width();
            for line in joined.lines() {
                prop_assert_eq!(line.width(), w);
            }
        }

        #[test]
        fn gaps_sum_to_slack(justify in justify_strategy(), slack in 0usize..200, n in 0usize..12) {
            let gaps = distribute_slack(justify, slack, n);
            prop_assert_eq!(gaps.len(), n + 1);
            prop_assert_eq!(gaps.iter().sum::<usize>(), slack);
        }
    }
}
