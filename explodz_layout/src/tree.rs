// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{LayoutBox, NodeFlags, NodeId};

/// A tree of resolved layout boxes.
///
/// Boxes are stored as upstream layout produced them: each node's [`LayoutBox::rect`] origin is
/// relative to its offset parent (see [`LayoutTree::offset_parent`]), not to its immediate parent
/// and not to the root. Children keep their insertion order, which is document order.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use explodz_layout::{LayoutBox, LayoutTree};
///
/// let mut tree = LayoutTree::new();
/// let body = tree.insert(None, LayoutBox::element(Point::ZERO, Size::new(800.0, 600.0)));
/// let card = tree.insert(
///     Some(body),
///     LayoutBox::element(Point::new(10.0, 20.0), Size::new(100.0, 50.0)).positioned(),
/// );
/// let label = tree.insert(
///     Some(card),
///     LayoutBox::element(Point::new(5.0, 5.0), Size::new(20.0, 10.0)),
/// );
///
/// // `card` owns a coordinate frame, so `label` is positioned relative to it.
/// assert_eq!(tree.offset_parent(label), Some(card));
/// // Nothing above `card` is positioned, so it falls back to the root.
/// assert_eq!(tree.offset_parent(card), Some(body));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: LayoutBox,
}

impl Node {
    fn new(generation: u32, layout: LayoutBox) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            layout,
        }
    }
}

impl LayoutTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if the tree holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` is ignored and the node becomes a root.
    pub fn insert(&mut self, parent: Option<NodeId>, layout: LayoutBox) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, layout));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, layout)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(idx as u32, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node (and its subtree) from the tree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Update the resolved rectangle of a node.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.layout.rect = rect;
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.layout.flags = flags;
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Returns the resolved box of a live node.
    pub fn layout_box(&self, id: NodeId) -> Option<&LayoutBox> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&self.node(id).layout)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).parent
    }

    /// Get the children of a node in document order, or an empty slice if the node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        if !self.is_alive(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// Returns the node relative to which `id`'s rectangle is expressed.
    ///
    /// This is the nearest ancestor flagged [`NodeFlags::POSITIONED`]. When no ancestor is
    /// positioned, the root of `id`'s tree is used, the way a document body anchors unpositioned
    /// content. Roots and stale ids have no offset parent.
    pub fn offset_parent(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.parent_of(id)?;
        loop {
            let node = self.node(current);
            if node.layout.is_positioned() {
                return Some(current);
            }
            match node.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
    }

    /// Number of edges between `id` and the root of its tree, or `None` for stale ids.
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        if !self.is_alive(id) {
            return None;
        }
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        Some(depth)
    }

    /// Get the next node in depth-first (document) order.
    ///
    /// Returns `None` if no next node exists or if the current node is stale.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.is_alive(current) {
            return None;
        }
        if let Some(&first_child) = self.node(current).children.first() {
            return Some(first_child);
        }
        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = parent;
        }
        None
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_of(node)?;
        let siblings = &self.node(parent).children;
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::{Point, Size};

    fn el(x: f64, y: f64, w: f64, h: f64) -> LayoutBox {
        LayoutBox::element(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn children_keep_document_order() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(None, el(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert(Some(root), el(0.0, 0.0, 10.0, 10.0));
        let t = tree.insert(Some(root), LayoutBox::text());
        let b = tree.insert(Some(root), el(0.0, 10.0, 10.0, 10.0));
        assert_eq!(tree.children_of(root), &[a, t, b]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn offset_parent_falls_back_to_root() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(None, el(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert(Some(root), el(1.0, 1.0, 10.0, 10.0));
        let b = tree.insert(Some(a), el(2.0, 2.0, 5.0, 5.0));
        assert_eq!(tree.offset_parent(root), None, "roots have no offset parent");
        assert_eq!(tree.offset_parent(a), Some(root));
        assert_eq!(
            tree.offset_parent(b),
            Some(root),
            "unpositioned ancestors are skipped"
        );
    }

    #[test]
    fn offset_parent_is_nearest_positioned_ancestor() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(None, el(0.0, 0.0, 100.0, 100.0));
        let frame = tree.insert(Some(root), el(1.0, 1.0, 50.0, 50.0).positioned());
        let plain = tree.insert(Some(frame), el(2.0, 2.0, 20.0, 20.0));
        let leaf = tree.insert(Some(plain), el(3.0, 3.0, 5.0, 5.0));
        assert_eq!(tree.offset_parent(plain), Some(frame));
        assert_eq!(tree.offset_parent(leaf), Some(frame));

        tree.set_flags(plain, NodeFlags::POSITIONED);
        assert_eq!(tree.offset_parent(leaf), Some(plain));
    }

    #[test]
    fn remove_drops_subtree_and_reuses_slots() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(None, el(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert(Some(root), el(0.0, 0.0, 10.0, 10.0));
        let b = tree.insert(Some(a), el(0.0, 0.0, 5.0, 5.0));
        tree.remove(a);
        assert!(!tree.is_alive(a), "removed node must be stale");
        assert!(!tree.is_alive(b), "removed subtree must be stale");
        assert!(tree.children_of(root).is_empty());
        assert_eq!(tree.offset_parent(b), None);

        let c = tree.insert(Some(root), el(0.0, 0.0, 1.0, 1.0));
        assert!(tree.is_alive(c));
        assert_ne!(c, a, "reused slots get a new generation");
        assert_ne!(c, b, "reused slots get a new generation");
        assert!(tree.layout_box(a).is_none());
    }

    #[test]
    fn set_rect_updates_live_nodes_only() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(None, el(0.0, 0.0, 100.0, 100.0));
        tree.set_rect(root, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            tree.layout_box(root).map(|b| b.rect),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
        tree.remove(root);
        tree.set_rect(root, Rect::ZERO);
        assert!(tree.is_empty());
    }

    #[test]
    fn depth_first_traversal_and_depth() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(None, el(0.0, 0.0, 100.0, 100.0));
        let a = tree.insert(Some(root), el(0.0, 0.0, 10.0, 10.0));
        let a1 = tree.insert(Some(a), el(0.0, 0.0, 5.0, 5.0));
        let b = tree.insert(Some(root), el(0.0, 0.0, 10.0, 10.0));

        let mut order = vec![root];
        let mut cur = root;
        while let Some(next) = tree.next_depth_first(cur) {
            order.push(next);
            cur = next;
        }
        assert_eq!(order, vec![root, a, a1, b]);
        assert_eq!(tree.depth_of(root), Some(0));
        assert_eq!(tree.depth_of(a1), Some(2));
        assert_eq!(tree.depth_of(b), Some(1));
    }

    #[test]
    fn stale_parent_makes_a_root() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(None, el(0.0, 0.0, 1.0, 1.0));
        tree.remove(root);
        let orphan = tree.insert(Some(root), el(0.0, 0.0, 1.0, 1.0));
        assert_eq!(tree.parent_of(orphan), None);
    }
}
