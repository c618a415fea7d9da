// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the layout tree: node identifiers, kinds, flags, and resolved boxes.

use kurbo::{Point, Rect, Size};

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What kind of content a node holds.
///
/// Only [`NodeKind::Element`] nodes take part in the exploded scene. Text runs are carried so
/// that a tree mirrors a rendered document faithfully, but they have no box of their own.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// A box-generating element.
    #[default]
    Element,
    /// A text run.
    Text,
}

bitflags::bitflags! {
    /// Node flags controlling how descendants resolve their coordinates.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node establishes a coordinate frame: descendants whose nearest positioned ancestor
        /// is this node express their position relative to it.
        const POSITIONED = 0b0000_0001;
    }
}

/// Resolved geometry for a node.
#[derive(Clone, Debug)]
pub struct LayoutBox {
    /// Border box. The origin is relative to the node's offset parent.
    pub rect: Rect,
    /// Element or text.
    pub kind: NodeKind,
    /// Coordinate frame flags.
    pub flags: NodeFlags,
}

impl LayoutBox {
    /// An element box at `origin` (relative to its offset parent) with the given size.
    pub fn element(origin: Point, size: Size) -> Self {
        Self {
            rect: Rect::from_origin_size(origin, size),
            kind: NodeKind::Element,
            flags: NodeFlags::empty(),
        }
    }

    /// A text run. Its geometry is never consulted by the scene walker.
    pub fn text() -> Self {
        Self {
            rect: Rect::ZERO,
            kind: NodeKind::Text,
            flags: NodeFlags::empty(),
        }
    }

    /// Mark this box as establishing a coordinate frame.
    #[must_use]
    pub fn positioned(mut self) -> Self {
        self.flags |= NodeFlags::POSITIONED;
        self
    }

    /// Returns true if this box establishes a coordinate frame.
    pub fn is_positioned(&self) -> bool {
        self.flags.contains(NodeFlags::POSITIONED)
    }
}

impl Default for LayoutBox {
    fn default() -> Self {
        Self::element(Point::ZERO, Size::ZERO)
    }
}
