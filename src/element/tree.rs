//! The element arena: a flattened, immutable copy of the declarative tree.

use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{Element, ElementKind, LayoutMode, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// An element tree flattened into a slotmap arena.
///
/// Built once from the root element list. Parent/child links live in secondary
/// maps; container elements stored in the arena have their `children` vec
/// emptied. The focus order (pre-order, focusable kinds only) is collected in
/// the same pass. The tree never changes shape after construction.
#[derive(Debug, Clone)]
pub struct ElementTree {
    nodes: SlotMap<NodeId, Element>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    roots: Vec<NodeId>,
    layout: LayoutMode,
    focus_order: Vec<NodeId>,
    ids: HashMap<String, NodeId>,
}

impl ElementTree {
    /// Flatten `elements` into an arena, laid out at the root with `layout`.
    ///
    /// Duplicate ids are not rejected here; lookups by id return the first node
    /// in document order. Use the loader to validate trees from untrusted input.
    pub fn build(layout: LayoutMode, elements: impl IntoIterator<Item = Element>) -> Self {
        let mut tree = Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            roots: Vec::new(),
            layout,
            focus_order: Vec::new(),
            ids: HashMap::new(),
        };
        for element in elements {
            let id = tree.insert(None, element);
            tree.roots.push(id);
        }
        tree
    }

    /// Insert `element` and, recursively, its children. Pre-order, so the focus
    /// order matches document order.
    fn insert(&mut self, parent: Option<NodeId>, mut element: Element) -> NodeId {
        let kids = match &mut element.kind {
            ElementKind::Container(container) => std::mem::take(&mut container.children),
            _ => Vec::new(),
        };
        let focusable = element.is_focusable();
        let key = element.id.clone();

        let id = self.nodes.insert(element);
        self.children.insert(id, Vec::with_capacity(kids.len()));
        if let Some(parent) = parent {
            self.parent.insert(id, parent);
        }
        if focusable {
            self.focus_order.push(id);
        }
        if let Some(key) = key {
            self.ids.entry(key).or_insert(id);
        }

        for kid in kids {
            let child = self.insert(Some(id), kid);
            if let Some(list) = self.children.get_mut(id) {
                list.push(child);
            }
        }
        id
    }

    /// Immutable access to a node.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id)
    }

    /// Look up a node by its element id.
    pub fn find(&self, element_id: &str) -> Option<NodeId> {
        self.ids.get(element_id).copied()
    }

    /// The element id of a node, if it has one.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).and_then(|e| e.id.as_deref())
    }

    /// Children of a node in document order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// The parent of a node, `None` for root-level nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Root-level nodes in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Layout mode used to arrange the root-level nodes.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Focusable nodes (inputs, checkboxes, buttons) in pre-order.
    pub fn focus_order(&self) -> &[NodeId] {
        &self.focus_order
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order traversal of every node, roots in document order.
    pub fn walk_depth_first(&self) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::build(LayoutMode::Column, [])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///   form            note
    ///   /   \
    /// name   row
    ///        / \
    ///     agree  ok
    /// ```
    fn build_tree() -> ElementTree {
        ElementTree::build(
            LayoutMode::Column,
            [
                Element::container([
                    Element::input("name"),
                    Element::flex([Element::checkbox("agree", "Agree"), Element::button("ok", "OK")])
                        .with_id("row"),
                ])
                .with_id("form"),
                Element::text("note").with_id("note"),
            ],
        )
    }

    #[test]
    fn roots_in_document_order() {
        let tree = build_tree();
        let roots = tree.roots();
        assert_eq!(roots.len(), 2);
        assert_eq!(tree.element_id(roots[0]), Some("form"));
        assert_eq!(tree.element_id(roots[1]), Some("note"));
    }

    #[test]
    fn parent_child_relationship() {
        let tree = build_tree();
        let form = tree.find("form").unwrap();
        let name = tree.find("name").unwrap();
        let row = tree.find("row").unwrap();
        let ok = tree.find("ok").unwrap();
        assert_eq!(tree.children(form), &[name, row]);
        assert_eq!(tree.parent(ok), Some(row));
        assert_eq!(tree.parent(form), None);
        assert!(tree.children(name).is_empty());
    }

    #[test]
    fn arena_containers_do_not_keep_children() {
        let tree = build_tree();
        let form = tree.find("form").unwrap();
        match &tree.get(form).unwrap().kind {
            ElementKind::Container(c) => assert!(c.children.is_empty()),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn focus_order_is_preorder_of_focusable_kinds() {
        let tree = build_tree();
        let ids: Vec<&str> = tree
            .focus_order()
            .iter()
            .filter_map(|&id| tree.element_id(id))
            .collect();
        assert_eq!(ids, vec!["name", "agree", "ok"]);
    }

    #[test]
    fn walk_depth_first() {
        let tree = build_tree();
        let ids: Vec<&str> = tree
            .walk_depth_first()
            .into_iter()
            .filter_map(|id| tree.element_id(id))
            .collect();
        assert_eq!(ids, vec!["form", "name", "row", "agree", "ok", "note"]);
    }

    #[test]
    fn find_returns_first_of_duplicates() {
        let tree = ElementTree::build(
            LayoutMode::Column,
            [Element::text("a").with_id("dup"), Element::text("b").with_id("dup")],
        );
        let first = tree.roots()[0];
        assert_eq!(tree.find("dup"), Some(first));
        assert_eq!(tree.find("missing"), None);
    }

    #[test]
    fn len_and_is_empty() {
        let tree = build_tree();
        assert_eq!(tree.len(), 6);
        assert!(!tree.is_empty());

        let empty = ElementTree::default();
        assert!(empty.is_empty());
        assert!(empty.focus_order().is_empty());
        assert_eq!(empty.layout(), LayoutMode::Column);
    }
}
