// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view of a resolved layout that the walker consumes.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Size};

/// Read access to an already laid-out tree.
///
/// Positions are local: a node's [`position`](LayoutSource::position) is relative to its
/// [`nearest_positioned_ancestor`](LayoutSource::nearest_positioned_ancestor), which may sit
/// several levels above its parent.
pub trait LayoutSource {
    /// Node handle.
    type Id: Copy + Eq + Hash + Debug;

    /// Returns true for box-generating nodes. Other nodes (text runs) are skipped entirely.
    fn is_element(&self, id: Self::Id) -> bool;

    /// Top-left corner relative to the node's nearest positioned ancestor.
    fn position(&self, id: Self::Id) -> Point;

    /// Border-box size.
    fn size(&self, id: Self::Id) -> Size;

    /// Children in document order.
    fn children(&self, id: Self::Id) -> &[Self::Id];

    /// The ancestor relative to which [`LayoutSource::position`] is expressed, if any.
    fn nearest_positioned_ancestor(&self, id: Self::Id) -> Option<Self::Id>;
}
