// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying a scene to a live host and driving its interactive state.

use kurbo::{Point, Size};
use log::{debug, trace};

use crate::config::ExplodeConfig;
use crate::host::{LayerStyle, PresentationHost, Rotation, StageStyle};
use crate::walker::{Scene, explode};

/// Visibility of the face overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayMode {
    /// Only the lifted layers are drawn.
    #[default]
    Hidden,
    /// Walls are drawn between layers.
    Shown,
}

impl OverlayMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// Returns true when walls are drawn.
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

/// Owns an exploded host and the state of its interaction.
///
/// Built once with [`SceneAssembler::assemble`]; afterwards the host's layout is never walked
/// again. Pointer handlers are expected to be called one at a time from the host's event loop.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use explodz_layout::{LayoutBox, LayoutTree};
/// use explodz_scene::{ExplodeConfig, OverlayMode, SceneAssembler, TreeHost};
///
/// let mut tree = LayoutTree::new();
/// let body = tree.insert(None, LayoutBox::element(Point::ZERO, Size::new(800.0, 600.0)));
/// tree.insert(Some(body), LayoutBox::element(Point::new(10.0, 20.0), Size::new(100.0, 50.0)));
///
/// let viewport = Size::new(800.0, 600.0);
/// let mut view = SceneAssembler::assemble(
///     TreeHost::new(tree),
///     body,
///     &ExplodeConfig::default(),
///     viewport,
/// );
/// assert!(!view.host().overlay_visible());
///
/// assert_eq!(view.pointer_released(), OverlayMode::Shown);
/// assert!(view.host().overlay_visible());
///
/// view.pointer_moved(Point::new(400.0, 300.0), viewport);
/// assert_eq!(view.host().rotation().map(|r| r.x_deg), Some(0.0));
/// ```
#[derive(Debug)]
pub struct SceneAssembler<H: PresentationHost> {
    host: H,
    root: H::Id,
    scene: Scene<H::Id>,
    mode: OverlayMode,
    interaction_disabled: bool,
}

impl<H: PresentationHost> SceneAssembler<H> {
    /// Explode `host` below `root` and apply the result in place.
    ///
    /// The root becomes a perspective stage centered on `viewport`, every element below it is
    /// lifted by its layer translation, and all faces are attached as one hidden overlay.
    pub fn assemble(mut host: H, root: H::Id, config: &ExplodeConfig, viewport: Size) -> Self {
        host.apply_stage(root, &StageStyle::new(config.perspective(), viewport));
        let scene = explode(&host, root, config);
        for layer in scene.layers() {
            host.apply_layer(
                layer.node,
                &LayerStyle {
                    translate_z: layer.translate_z,
                },
            );
        }
        host.attach_overlay(root, scene.faces());
        host.set_overlay_visible(false);
        debug!(
            "assembled scene under {root:?}: {} layers, {} faces",
            scene.layers().len(),
            scene.faces().len()
        );
        Self {
            host,
            root,
            scene,
            mode: OverlayMode::Hidden,
            interaction_disabled: false,
        }
    }

    /// Flip the overlay between hidden and shown and return the new mode.
    pub fn toggle_overlay(&mut self) -> OverlayMode {
        self.mode = self.mode.toggled();
        self.host.set_overlay_visible(self.mode.is_shown());
        debug!("overlay {:?}", self.mode);
        self.mode
    }

    /// Pointer release handler: toggles the overlay.
    pub fn pointer_released(&mut self) -> OverlayMode {
        self.toggle_overlay()
    }

    /// Pointer move handler: rotates the stage to follow the pointer on `screen`.
    ///
    /// Ignored while interaction is disabled or when `screen` is degenerate.
    pub fn pointer_moved(&mut self, pointer: Point, screen: Size) -> Option<Rotation> {
        if self.interaction_disabled {
            return None;
        }
        let rotation = Rotation::from_pointer(pointer, screen)?;
        trace!("rotate stage to {rotation:?}");
        self.host.set_scene_rotation(self.root, rotation);
        Some(rotation)
    }

    /// Stop or resume following the pointer.
    pub fn set_interaction_disabled(&mut self, disabled: bool) {
        self.interaction_disabled = disabled;
    }

    /// Returns true while pointer movement is ignored.
    pub fn is_interaction_disabled(&self) -> bool {
        self.interaction_disabled
    }

    /// Current overlay mode.
    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    /// The stage root.
    pub fn root(&self) -> H::Id {
        self.root
    }

    /// The scene built at assembly.
    pub fn scene(&self) -> &Scene<H::Id> {
        &self.scene
    }

    /// The exploded host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Give the host back, leaving its presentation as it is.
    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Face;
    use crate::source::LayoutSource;
    use crate::walker::sibling_translate_z;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Records every host call.
    #[derive(Debug, Default)]
    struct Recorder {
        children: Vec<Vec<usize>>,
        calls: Vec<Call>,
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Stage(usize),
        Layer(usize, f64),
        Overlay(usize, usize),
        Visible(bool),
        Rotate(Rotation),
    }

    impl LayoutSource for Recorder {
        type Id = usize;

        fn is_element(&self, _: usize) -> bool {
            true
        }

        fn position(&self, _: usize) -> Point {
            Point::ZERO
        }

        fn size(&self, _: usize) -> Size {
            Size::new(1.0, 1.0)
        }

        fn children(&self, id: usize) -> &[usize] {
            &self.children[id]
        }

        fn nearest_positioned_ancestor(&self, _: usize) -> Option<usize> {
            Some(0)
        }
    }

    impl PresentationHost for Recorder {
        fn apply_stage(&mut self, root: usize, _: &StageStyle) {
            self.calls.push(Call::Stage(root));
        }

        fn apply_layer(&mut self, node: usize, layer: &LayerStyle) {
            self.calls.push(Call::Layer(node, layer.translate_z));
        }

        fn attach_overlay(&mut self, root: usize, faces: &[Face]) {
            self.calls.push(Call::Overlay(root, faces.len()));
        }

        fn set_overlay_visible(&mut self, visible: bool) {
            self.calls.push(Call::Visible(visible));
        }

        fn set_scene_rotation(&mut self, _: usize, rotation: Rotation) {
            self.calls.push(Call::Rotate(rotation));
        }
    }

    fn assembled() -> SceneAssembler<Recorder> {
        // 0 -> [1 -> [3], 2]
        let host = Recorder {
            children: vec![vec![1, 2], vec![3], vec![], vec![]],
            calls: Vec::new(),
        };
        SceneAssembler::assemble(
            host,
            0,
            &ExplodeConfig::default(),
            Size::new(100.0, 100.0),
        )
    }

    #[test]
    fn assembly_drives_host_in_order() {
        let view = assembled();
        let lift = |i| sibling_translate_z(&ExplodeConfig::default(), i);
        assert_eq!(
            view.host().calls,
            vec![
                Call::Stage(0),
                Call::Layer(1, lift(0)),
                Call::Layer(3, lift(0)),
                Call::Layer(2, lift(1)),
                Call::Overlay(0, 12),
                Call::Visible(false),
            ]
        );
        assert_eq!(view.mode(), OverlayMode::Hidden);
        assert_eq!(view.scene().faces().len(), 12);
    }

    #[test]
    fn toggle_is_a_two_cycle() {
        let mut view = assembled();
        assert_eq!(view.toggle_overlay(), OverlayMode::Shown);
        assert_eq!(view.host().calls.last(), Some(&Call::Visible(true)));
        assert_eq!(view.pointer_released(), OverlayMode::Hidden);
        assert_eq!(view.host().calls.last(), Some(&Call::Visible(false)));
        assert_eq!(OverlayMode::Hidden.toggled().toggled(), OverlayMode::Hidden);
    }

    #[test]
    fn disabled_interaction_ignores_pointer() {
        let mut view = assembled();
        view.set_interaction_disabled(true);
        assert!(view.is_interaction_disabled());
        let calls = view.host().calls.len();
        assert_eq!(
            view.pointer_moved(Point::new(10.0, 10.0), Size::new(100.0, 100.0)),
            None
        );
        assert_eq!(view.host().calls.len(), calls, "no host call while disabled");

        view.set_interaction_disabled(false);
        let rotation = view
            .pointer_moved(Point::new(50.0, 50.0), Size::new(100.0, 100.0))
            .unwrap();
        assert_eq!(rotation, Rotation::default());
        assert_eq!(view.host().calls.last(), Some(&Call::Rotate(rotation)));
    }

    #[test]
    fn toggling_still_works_while_disabled() {
        let mut view = assembled();
        view.set_interaction_disabled(true);
        assert_eq!(view.pointer_released(), OverlayMode::Shown);
        assert_eq!(view.into_host().calls.last(), Some(&Call::Visible(true)));
    }
}
