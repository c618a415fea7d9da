// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable presentation surface a scene is applied to.

use kurbo::{Point, Size};

use crate::face::Face;
use crate::source::LayoutSource;

/// Presentation applied to the root so its descendants render in 3D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StageStyle {
    /// Camera distance.
    pub perspective: f64,
    /// Perspective and rotation origin, the center of the viewport.
    pub origin: Point,
}

impl StageStyle {
    /// A stage viewed from `perspective` with its origin at the center of `viewport`.
    pub fn new(perspective: f64, viewport: Size) -> Self {
        Self {
            perspective,
            origin: Point::new(viewport.width / 2.0, viewport.height / 2.0),
        }
    }
}

/// Presentation applied to one element.
///
/// Every styled element keeps its own 3D context (`preserve-3d`) and never clips its
/// descendants, so the only varying part is the lift along the depth axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerStyle {
    /// Translation along the depth axis relative to the parent.
    pub translate_z: f64,
}

/// Rotation of the whole stage, in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Rotation about the horizontal axis.
    pub x_deg: f64,
    /// Rotation about the vertical axis.
    pub y_deg: f64,
}

impl Rotation {
    /// Map a pointer position on `screen` to a stage rotation.
    ///
    /// Each axis is normalized to `0..=1` and mapped to `-180..=180` degrees. The vertical axis
    /// is flipped so moving the pointer up tilts the stage's top away. A pointer at the exact
    /// center yields no rotation. Returns `None` when `screen` has no usable extent.
    ///
    /// ```rust
    /// use kurbo::{Point, Size};
    /// use explodz_scene::Rotation;
    ///
    /// let screen = Size::new(1920.0, 1080.0);
    /// let centered = Rotation::from_pointer(Point::new(960.0, 540.0), screen).unwrap();
    /// assert_eq!(centered, Rotation { x_deg: 0.0, y_deg: 0.0 });
    ///
    /// let top_left = Rotation::from_pointer(Point::ZERO, screen).unwrap();
    /// assert_eq!(top_left, Rotation { x_deg: 180.0, y_deg: -180.0 });
    /// ```
    pub fn from_pointer(pointer: Point, screen: Size) -> Option<Self> {
        let usable = |extent: f64| extent.is_finite() && extent > 0.0;
        if !usable(screen.width) || !usable(screen.height) {
            return None;
        }
        let to_deg = |rel: f64| rel * 360.0 - 180.0;
        Some(Self {
            x_deg: to_deg(1.0 - pointer.y / screen.height),
            y_deg: to_deg(pointer.x / screen.width),
        })
    }
}

/// A live tree whose presentation can be changed in place.
///
/// The assembler drives a host in a fixed order: [`apply_stage`](Self::apply_stage) on the
/// root, [`apply_layer`](Self::apply_layer) once per element in document order,
/// [`attach_overlay`](Self::attach_overlay) once, then any number of
/// [`set_overlay_visible`](Self::set_overlay_visible) and
/// [`set_scene_rotation`](Self::set_scene_rotation) calls.
pub trait PresentationHost: LayoutSource {
    /// Make `root` the 3D stage.
    fn apply_stage(&mut self, root: Self::Id, stage: &StageStyle);

    /// Lift `node` along the depth axis.
    fn apply_layer(&mut self, node: Self::Id, layer: &LayerStyle);

    /// Append an inert container holding `faces` to `root`. The container starts hidden.
    fn attach_overlay(&mut self, root: Self::Id, faces: &[Face]);

    /// Show or hide the overlay container.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Rotate the whole stage.
    fn set_scene_rotation(&mut self, root: Self::Id, rotation: Rotation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_no_rotation() {
        for screen in [Size::new(800.0, 600.0), Size::new(3.0, 7.0)] {
            let center = Point::new(screen.width / 2.0, screen.height / 2.0);
            assert_eq!(
                Rotation::from_pointer(center, screen),
                Some(Rotation::default()),
                "{screen:?}"
            );
        }
    }

    #[test]
    fn corners_reach_half_turns() {
        let screen = Size::new(200.0, 100.0);
        assert_eq!(
            Rotation::from_pointer(Point::new(200.0, 100.0), screen),
            Some(Rotation {
                x_deg: -180.0,
                y_deg: 180.0
            })
        );
        assert_eq!(
            Rotation::from_pointer(Point::new(50.0, 75.0), screen),
            Some(Rotation {
                x_deg: -90.0,
                y_deg: -90.0
            })
        );
    }

    #[test]
    fn degenerate_screens_give_nothing() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(Rotation::from_pointer(p, Size::ZERO), None);
        assert_eq!(Rotation::from_pointer(p, Size::new(10.0, 0.0)), None);
        assert_eq!(Rotation::from_pointer(p, Size::new(f64::NAN, 10.0)), None);
    }

    #[test]
    fn stage_origin_is_viewport_center() {
        let stage = StageStyle::new(5000.0, Size::new(1024.0, 767.0));
        assert_eq!(stage.origin, Point::new(512.0, 383.5));
        assert_eq!(stage.perspective, 5000.0);
    }
}
