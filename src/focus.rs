//! Focus chain: tab order over the focusable elements of a tree.
//!
//! [`FocusChain`] is built once from [`ElementTree::focus_order`] and never
//! changes shape. A non-empty chain starts focused on its first node; the
//! index only ever moves by wrapping arithmetic, so it stays in bounds.

use crate::element::{ElementTree, NodeId};

/// Ordered list of focusable nodes plus the index of the focused one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusChain {
    /// Focusable nodes in tab order (pre-order).
    nodes: Vec<NodeId>,
    /// Index of the focused node. `Some(i)` with `i < nodes.len()` whenever
    /// the chain is non-empty, `None` otherwise.
    current: Option<usize>,
}

impl FocusChain {
    /// Build the chain from a tree's focus order, focusing the first node.
    pub fn from_tree(tree: &ElementTree) -> Self {
        Self::from_nodes(tree.focus_order().to_vec())
    }

    /// Build the chain from an explicit node order, focusing the first node.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        let current = if nodes.is_empty() { None } else { Some(0) };
        Self { nodes, current }
    }

    /// The currently focused node, if any.
    pub fn current_node(&self) -> Option<NodeId> {
        self.current.and_then(|idx| self.nodes.get(idx).copied())
    }

    /// Index of the focused node within the chain.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Move focus to the next node in the chain. Wraps around.
    ///
    /// Returns the newly focused node, or `None` if the chain is empty.
    pub fn focus_next(&mut self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }
        let next = match self.current {
            Some(idx) => (idx + 1) % self.nodes.len(),
            None => 0,
        };
        self.current = Some(next);
        self.nodes.get(next).copied()
    }

    /// Move focus to the previous node in the chain. Wraps around.
    ///
    /// Returns the newly focused node, or `None` if the chain is empty.
    pub fn focus_previous(&mut self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }
        let len = self.nodes.len();
        let prev = match self.current {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.current = Some(prev);
        self.nodes.get(prev).copied()
    }

    /// Focus a specific node. Returns `true` if the node is in the chain.
    pub fn focus_node(&mut self, id: NodeId) -> bool {
        if let Some(pos) = self.nodes.iter().position(|&n| n == id) {
            self.current = Some(pos);
            true
        } else {
            false
        }
    }

    /// Whether `id` is the focused node.
    pub fn is_focused(&self, id: NodeId) -> bool {
        self.current_node() == Some(id)
    }

    /// Focusable nodes in tab order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of focusable nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, LayoutMode};
    use proptest::prelude::*;

    fn three_widgets() -> ElementTree {
        ElementTree::build(
            LayoutMode::Column,
            [
                Element::input("name"),
                Element::text("between"),
                Element::container([Element::checkbox("agree", "Agree")]),
                Element::button("ok", "OK"),
            ],
        )
    }

    fn focused_id<'a>(chain: &FocusChain, tree: &'a ElementTree) -> Option<&'a str> {
        chain.current_node().and_then(|id| tree.element_id(id))
    }

    #[test]
    fn starts_on_first_node() {
        let tree = three_widgets();
        let chain = FocusChain::from_tree(&tree);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.current_index(), Some(0));
        assert_eq!(focused_id(&chain, &tree), Some("name"));
    }

    #[test]
    fn focus_next_cycles() {
        let tree = three_widgets();
        let mut chain = FocusChain::from_tree(&tree);
        let mut seen = Vec::new();
        for _ in 0..3 {
            chain.focus_next();
            seen.push(focused_id(&chain, &tree).unwrap());
        }
        assert_eq!(seen, vec!["agree", "ok", "name"]);
    }

    #[test]
    fn focus_previous_wraps_from_first() {
        let tree = three_widgets();
        let mut chain = FocusChain::from_tree(&tree);
        chain.focus_previous();
        assert_eq!(chain.current_index(), Some(2));
        assert_eq!(focused_id(&chain, &tree), Some("ok"));
    }

    #[test]
    fn empty_chain_is_inert() {
        let mut chain = FocusChain::from_nodes(Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.current_node(), None);
        assert_eq!(chain.focus_next(), None);
        assert_eq!(chain.focus_previous(), None);
        assert_eq!(chain.current_index(), None);
    }

    #[test]
    fn focus_node_by_id() {
        let tree = three_widgets();
        let mut chain = FocusChain::from_tree(&tree);
        let ok = tree.find("ok").unwrap();
        assert!(chain.focus_node(ok));
        assert!(chain.is_focused(ok));

        let text = tree.find("between").unwrap();
        assert!(!chain.focus_node(text));
        assert!(chain.is_focused(ok));
    }

    proptest! {
        #[test]
        fn n_steps_return_to_start(n in 1usize..12, start in 0usize..12, forward in any::<bool>()) {
            let tree = ElementTree::build(
                LayoutMode::Column,
                (0..n).map(|i| Element::button(format!("b{i}"), "B")),
            );
            let mut chain = FocusChain::from_tree(&tree);
            for _ in 0..(start % n) {
                chain.focus_next();
            }
            let before = chain.current_index();
            for _ in 0..n {
                if forward { chain.focus_next(); } else { chain.focus_previous(); }
                let idx = chain.current_index().unwrap();
                prop_assert!(idx < n);
            }
            prop_assert_eq!(chain.current_index(), before);
        }
    }
}
