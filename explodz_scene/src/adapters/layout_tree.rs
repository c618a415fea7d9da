// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Explodz Layout.
//!
//! ## Feature
//!
//! Enable with `layout_tree_adapter` (on by default).
//!
//! ## Notes
//!
//! [`LayoutTree`] implements [`LayoutSource`] directly, so it can be walked with
//! [`explode`](crate::explode). [`TreeHost`] wraps a tree and keeps the presentation applied to
//! it, which makes it a [`PresentationHost`] for [`SceneAssembler`](crate::SceneAssembler).
//! Stale node ids read as empty text nodes.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use explodz_layout::{LayoutTree, NodeId, NodeKind};
use hashbrown::HashMap;
use kurbo::{Point, Size};

use crate::css::OverlayBox;
use crate::face::Face;
use crate::host::{LayerStyle, PresentationHost, Rotation, StageStyle};
use crate::source::LayoutSource;

impl LayoutSource for LayoutTree {
    type Id = NodeId;

    fn is_element(&self, id: NodeId) -> bool {
        self.layout_box(id)
            .is_some_and(|b| b.kind == NodeKind::Element)
    }

    fn position(&self, id: NodeId) -> Point {
        self.layout_box(id)
            .map(|b| b.rect.origin())
            .unwrap_or(Point::ZERO)
    }

    fn size(&self, id: NodeId) -> Size {
        self.layout_box(id)
            .map(|b| b.rect.size())
            .unwrap_or(Size::ZERO)
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.children_of(id)
    }

    fn nearest_positioned_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.offset_parent(id)
    }
}

/// A [`LayoutTree`] together with the presentation applied to it.
#[derive(Clone, Debug, Default)]
pub struct TreeHost {
    tree: LayoutTree,
    layers: HashMap<NodeId, LayerStyle>,
    stage: Option<(NodeId, StageStyle)>,
    overlay: Vec<Face>,
    overlay_visible: bool,
    rotation: Option<Rotation>,
}

impl TreeHost {
    /// Wrap `tree` with no presentation applied.
    pub fn new(tree: LayoutTree) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    /// The wrapped tree.
    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// The layer style applied to `id`, if any.
    pub fn layer_style(&self, id: NodeId) -> Option<&LayerStyle> {
        self.layers.get(&id)
    }

    /// The stage root and its style, once applied.
    pub fn stage(&self) -> Option<(NodeId, &StageStyle)> {
        self.stage.as_ref().map(|(root, style)| (*root, style))
    }

    /// Faces held by the overlay.
    pub fn overlay_faces(&self) -> &[Face] {
        &self.overlay
    }

    /// Returns true while the overlay is displayed.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// The last stage rotation.
    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    /// Style attribute for `id`: the stage declarations for the root, the layer declarations
    /// for a lifted element, plus the current rotation on the root.
    pub fn style_attribute(&self, id: NodeId) -> Option<String> {
        match &self.stage {
            Some((root, stage)) if *root == id => Some(match self.rotation {
                Some(rotation) => format!("{stage} transform: {rotation};"),
                None => stage.to_string(),
            }),
            _ => self.layers.get(&id).map(ToString::to_string),
        }
    }

    /// Markup of the overlay container in its current visibility.
    pub fn overlay_html(&self) -> String {
        OverlayBox {
            faces: &self.overlay,
            visible: self.overlay_visible,
        }
        .to_string()
    }

    /// Unwrap the tree, dropping the presentation.
    pub fn into_tree(self) -> LayoutTree {
        self.tree
    }
}

impl LayoutSource for TreeHost {
    type Id = NodeId;

    fn is_element(&self, id: NodeId) -> bool {
        self.tree.is_element(id)
    }

    fn position(&self, id: NodeId) -> Point {
        self.tree.position(id)
    }

    fn size(&self, id: NodeId) -> Size {
        self.tree.size(id)
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children_of(id)
    }

    fn nearest_positioned_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.tree.offset_parent(id)
    }
}

impl PresentationHost for TreeHost {
    fn apply_stage(&mut self, root: NodeId, stage: &StageStyle) {
        self.stage = Some((root, *stage));
    }

    fn apply_layer(&mut self, node: NodeId, layer: &LayerStyle) {
        self.layers.insert(node, *layer);
    }

    fn attach_overlay(&mut self, _root: NodeId, faces: &[Face]) {
        self.overlay = faces.to_vec();
        self.overlay_visible = false;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn set_scene_rotation(&mut self, _root: NodeId, rotation: Rotation) {
        self.rotation = Some(rotation);
    }
}
