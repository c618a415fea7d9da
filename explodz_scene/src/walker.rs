// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-to-scene walk: depth assignment, offset accumulation, and face collection.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use log::{debug, trace};

use crate::config::ExplodeConfig;
use crate::face::{Face, synthesize_faces};
use crate::source::LayoutSource;

/// The depth placement computed for one element.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer<K> {
    /// The element.
    pub node: K,
    /// Nesting depth; direct children of the root are at depth 1.
    pub depth: usize,
    /// Depth-axis translation applied to the element relative to its parent:
    /// one step plus a per-sibling nudge.
    pub translate_z: f64,
    /// Sum of `translate_z` over the element and all its ancestors.
    pub cumulative_z: f64,
    /// Translation added to the element's local position to place it in root space.
    pub offset: Vec2,
    /// Top-left corner in root space.
    pub origin: Point,
    /// Border-box size.
    pub size: Size,
}

/// Everything produced by one walk over a layout.
///
/// Layers are listed in document order (pre-order). Faces come in groups of four per element,
/// emitted right after the element's subtree (post-order).
#[derive(Clone, Debug)]
pub struct Scene<K> {
    layers: Vec<Layer<K>>,
    faces: Vec<Face>,
    /// Elements in the order their faces were emitted.
    wall_order: Vec<K>,
}

impl<K> Default for Scene<K> {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            faces: Vec::new(),
            wall_order: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> Scene<K> {
    /// Per-element depth placements in document order.
    pub fn layers(&self) -> &[Layer<K>] {
        &self.layers
    }

    /// All wall faces.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The placement recorded for `node`, if it was visited.
    ///
    /// This is a linear scan over [`Scene::layers`]; index the layers yourself for bulk lookups.
    pub fn layer(&self, node: K) -> Option<&Layer<K>> {
        self.layers.iter().find(|layer| layer.node == node)
    }

    /// The four faces built for `node`, if it was visited.
    ///
    /// Like [`Scene::layer`], this scans every visited element.
    pub fn faces_of(&self, node: K) -> Option<&[Face]> {
        let ordinal = self.wall_order.iter().position(|&n| n == node)?;
        self.faces.get(ordinal * 4..ordinal * 4 + 4)
    }

    /// Deepest nesting level reached, or 0 when the root has no element children.
    pub fn max_depth(&self) -> usize {
        self.layers.iter().map(|l| l.depth).max().unwrap_or(0)
    }

    /// Split into layers and faces.
    pub fn into_parts(self) -> (Vec<Layer<K>>, Vec<Face>) {
        (self.layers, self.faces)
    }
}

enum Task<K> {
    /// Queue the element children of `node`.
    Children {
        node: K,
        depth: usize,
        offset: Vec2,
        cumulative_z: f64,
    },
    /// Place one child, then walk its subtree.
    Enter {
        node: K,
        parent: K,
        depth: usize,
        sibling_index: usize,
        inherited: Vec2,
        parent_z: f64,
    },
    /// Emit the walls of a child whose subtree is complete.
    Walls {
        node: K,
        depth: usize,
        origin: Point,
        size: Size,
    },
}

/// Walk the layout below `root` and build its exploded scene.
///
/// The root itself gets no layer and no faces; its element descendants each get one
/// [`Layer`] and four [`Face`]s. Non-element children are skipped along with their subtrees.
///
/// For a child at sibling position `i` (counting every child, elements or not) the depth-axis
/// translation is `step + (i + 1) * sibling_epsilon`, so later siblings always sit slightly
/// above earlier ones. Its walls sit on the structural plane `depth * step`.
///
/// Offsets accumulate top-down: a child starts from its parent's offset and adds the parent's
/// position only when the parent is the child's nearest positioned ancestor.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use explodz_layout::{LayoutBox, LayoutTree};
/// use explodz_scene::{ExplodeConfig, explode};
///
/// let mut tree = LayoutTree::new();
/// let body = tree.insert(None, LayoutBox::element(Point::ZERO, Size::new(800.0, 600.0)));
/// let a = tree.insert(
///     Some(body),
///     LayoutBox::element(Point::new(10.0, 20.0), Size::new(100.0, 50.0)).positioned(),
/// );
/// let b = tree.insert(Some(a), LayoutBox::element(Point::new(5.0, 5.0), Size::new(20.0, 10.0)));
///
/// let scene = explode(&tree, body, &ExplodeConfig::default());
/// assert_eq!(scene.faces().len(), 8);
/// assert_eq!(scene.layer(b).unwrap().origin, Point::new(15.0, 25.0));
/// assert_eq!(scene.faces_of(b).unwrap()[0].z, 50.0);
/// ```
pub fn explode<S: LayoutSource>(source: &S, root: S::Id, config: &ExplodeConfig) -> Scene<S::Id> {
    let mut scene = Scene::default();
    walk(source, root, config, &mut scene);
    debug!(
        "exploded {} layers into {} faces, max depth {}",
        scene.layers.len(),
        scene.faces.len(),
        scene.max_depth()
    );
    scene
}

/// Walk the layout below `root`, appending into a caller-owned scene.
///
/// Walking the same root twice appends a second, identical copy of its layers and faces.
pub fn walk<S: LayoutSource>(
    source: &S,
    root: S::Id,
    config: &ExplodeConfig,
    scene: &mut Scene<S::Id>,
) {
    let step = config.step();
    let mut stack = vec![Task::Children {
        node: root,
        depth: 0,
        offset: Vec2::ZERO,
        cumulative_z: 0.0,
    }];

    while let Some(task) = stack.pop() {
        match task {
            Task::Children {
                node,
                depth,
                offset,
                cumulative_z,
            } => {
                // Reversed so the first child in document order is popped first.
                for (sibling_index, &child) in source.children(node).iter().enumerate().rev() {
                    if !source.is_element(child) {
                        continue;
                    }
                    stack.push(Task::Enter {
                        node: child,
                        parent: node,
                        depth: depth + 1,
                        sibling_index,
                        inherited: offset,
                        parent_z: cumulative_z,
                    });
                }
            }
            Task::Enter {
                node,
                parent,
                depth,
                sibling_index,
                inherited,
                parent_z,
            } => {
                let offset = if source.nearest_positioned_ancestor(node) == Some(parent) {
                    inherited + source.position(parent).to_vec2()
                } else {
                    inherited
                };
                let translate_z = sibling_translate_z(config, sibling_index);
                let origin = source.position(node) + offset;
                let size = source.size(node);
                trace!("layer {node:?} depth {depth} at {origin:?} translateZ {translate_z}");

                scene.layers.push(Layer {
                    node,
                    depth,
                    translate_z,
                    cumulative_z: parent_z + translate_z,
                    offset,
                    origin,
                    size,
                });
                stack.push(Task::Walls {
                    node,
                    depth,
                    origin,
                    size,
                });
                stack.push(Task::Children {
                    node,
                    depth,
                    offset,
                    cumulative_z: parent_z + translate_z,
                });
            }
            Task::Walls {
                node,
                depth,
                origin,
                size,
            } => {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "Nesting depth stays far below 2^52."
                )]
                let z = depth as f64 * step;
                let color = config.palette().color_for_depth(depth);
                scene
                    .faces
                    .extend(synthesize_faces(origin, size, z, step, color));
                scene.wall_order.push(node);
            }
        }
    }
}

/// Depth-axis translation for the child at `sibling_index` among its parent's children.
///
/// The nudge grows with document order, so the last sibling sits highest. Exploded views that
/// count remaining siblings instead (`(len - i) * epsilon`) stack siblings the other way round;
/// outputs from the two differ only in that sub-visual ordering.
pub fn sibling_translate_z(config: &ExplodeConfig, sibling_index: usize) -> f64 {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Sibling counts stay far below 2^52."
    )]
    let nudge = (sibling_index + 1) as f64 * config.sibling_epsilon();
    config.step() + nudge
}

/// Recompute the offset of `target` from scratch, without the walk's incremental state.
///
/// Finds the element path from `root` to `target` and applies the accumulation rule to each
/// edge. Returns `None` if `target` is the root, is not reachable through element nodes, or is
/// not an element.
pub fn derive_offset<S: LayoutSource>(source: &S, root: S::Id, target: S::Id) -> Option<Vec2> {
    if target == root {
        return None;
    }
    let path = find_path(source, root, target)?;
    Some(
        path.windows(2)
            .filter(|edge| source.nearest_positioned_ancestor(edge[1]) == Some(edge[0]))
            .map(|edge| source.position(edge[0]).to_vec2())
            .fold(Vec2::ZERO, |acc, v| acc + v),
    )
}

/// Recompute the root-space origin of `target` from scratch. See [`derive_offset`].
pub fn derive_origin<S: LayoutSource>(source: &S, root: S::Id, target: S::Id) -> Option<Point> {
    Some(source.position(target) + derive_offset(source, root, target)?)
}

/// Element path from `from` to `target`, both inclusive, root first.
fn find_path<S: LayoutSource>(source: &S, from: S::Id, target: S::Id) -> Option<Vec<S::Id>> {
    // Each visited node with the index of its parent's entry.
    let mut visited: Vec<(S::Id, Option<usize>)> = vec![(from, None)];
    let mut stack = vec![0_usize];

    while let Some(entry) = stack.pop() {
        let (node, _) = visited[entry];
        if node == target {
            let mut path = Vec::new();
            let mut cursor = Some(entry);
            while let Some(i) = cursor {
                path.push(visited[i].0);
                cursor = visited[i].1;
            }
            path.reverse();
            return Some(path);
        }
        for &child in source.children(node).iter().rev() {
            if source.is_element(child) {
                visited.push((child, Some(entry)));
                stack.push(visited.len() - 1);
            }
        }
    }
    None
}
