// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explodz Layout: a resolved, kurbo-native layout tree.
//!
//! This crate holds the output of a layout pass in the shape a rendered document has:
//! - A hierarchy of element and text nodes in document order.
//! - One resolved rectangle per element, expressed relative to the element's offset parent.
//! - A per-node [`NodeFlags::POSITIONED`] flag marking nodes that establish a coordinate frame.
//!
//! ## Not a layout engine
//!
//! Nothing here measures or arranges content. Upstream code computes positions and sizes and
//! records them with [`LayoutTree::insert`] or [`LayoutTree::set_rect`]. The tree only answers
//! structural questions: children in order, the parent, and the offset parent (nearest
//! positioned ancestor, falling back to the root).
//!
//! ## API overview
//!
//! - [`LayoutTree`]: container of nodes.
//! - [`LayoutBox`]: per-node resolved rectangle, [`NodeKind`], and [`NodeFlags`].
//! - [`NodeId`]: generational handle of a node.
//!
//! Key operations:
//! - [`LayoutTree::insert`] → [`NodeId`], [`LayoutTree::remove`]
//! - [`LayoutTree::children_of`], [`LayoutTree::parent_of`], [`LayoutTree::offset_parent`]
//! - [`LayoutTree::next_depth_first`] and [`LayoutTree::depth_of`]
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::LayoutTree;
pub use types::{LayoutBox, NodeFlags, NodeId, NodeKind};
