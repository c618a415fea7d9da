// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall faces joining a layer to the layer beneath it.

use kurbo::{Point, Size};

use crate::color::Color;

/// Rotation about the X axis shared by every face, standing it up from its layer plane.
pub const FACE_TILT_DEG: f64 = 270.0;

/// Extra rotation about the Y axis for faces that run along a box's vertical edges.
pub const SIDE_TURN_DEG: f64 = 270.0;

/// Which edge of a box a face was built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceSide {
    /// Upper edge.
    Top,
    /// Right edge.
    Right,
    /// Lower edge.
    Bottom,
    /// Left edge. See [`synthesize_faces`] for its geometry.
    Left,
}

impl FaceSide {
    /// All sides in emission order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A colored rectangle placed in 3D space.
///
/// `origin` and `z` give the translation of the face's top-left corner; `size` is its extent
/// before rotation. Every face is tilted by [`FACE_TILT_DEG`] about X and then turned by
/// `rotate_y_deg` about Y.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// Edge this face was built from.
    pub side: FaceSide,
    /// Position in the root's coordinate space.
    pub origin: Point,
    /// Position along the depth axis.
    pub z: f64,
    /// Width runs along the box edge; height is the layer step.
    pub size: Size,
    /// Rotation about Y, in degrees.
    pub rotate_y_deg: f64,
    /// Fill color.
    pub color: Color,
}

/// Build the four walls for a box whose top-left corner sits at `origin` in root space.
///
/// Faces are returned as top, right, bottom, left. Each is `step` tall and shares `z` and
/// `color`:
///
/// | side   | origin                 | size             | Y turn |
/// |--------|------------------------|------------------|--------|
/// | top    | `(x, y)`               | `(width, step)`  | 0°     |
/// | right  | `(x + width, y)`       | `(height, step)` | 270°   |
/// | bottom | `(x, y + height)`      | `(width, step)`  | 0°     |
/// | left   | `(x, y)`               | `(height, step)` | 270°   |
///
/// The left wall is anchored at the top-left corner with the same turn as the right wall,
/// so it lies along the box's left edge starting from the top corner. Renderers that match
/// existing exploded views rely on this exact placement.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use explodz_scene::{Color, FaceSide, synthesize_faces};
///
/// let red = Color::from_rgb8(0xcc, 0x33, 0x33);
/// let faces = synthesize_faces(Point::new(10.0, 20.0), Size::new(100.0, 50.0), 25.0, 25.0, red);
/// assert_eq!(faces[0].side, FaceSide::Top);
/// assert_eq!(faces[1].origin, Point::new(110.0, 20.0));
/// assert_eq!(faces[2].origin, Point::new(10.0, 70.0));
/// assert_eq!(faces[3].size, Size::new(50.0, 25.0));
/// ```
pub fn synthesize_faces(origin: Point, size: Size, z: f64, step: f64, color: Color) -> [Face; 4] {
    let face = |side, origin, length, rotate_y_deg| Face {
        side,
        origin,
        z,
        size: Size::new(length, step),
        rotate_y_deg,
        color,
    };
    [
        face(FaceSide::Top, origin, size.width, 0.0),
        face(
            FaceSide::Right,
            Point::new(origin.x + size.width, origin.y),
            size.height,
            SIDE_TURN_DEG,
        ),
        face(
            FaceSide::Bottom,
            Point::new(origin.x, origin.y + size.height),
            size.width,
            0.0,
        ),
        face(FaceSide::Left, origin, size.height, SIDE_TURN_DEG),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = Color::from_rgb8(1, 2, 3);

    #[test]
    fn faces_come_out_in_edge_order() {
        let faces = synthesize_faces(Point::ZERO, Size::new(4.0, 2.0), 10.0, 5.0, INK);
        let sides: [FaceSide; 4] = core::array::from_fn(|i| faces[i].side);
        assert_eq!(sides, FaceSide::ALL);
    }

    #[test]
    fn faces_share_depth_and_color() {
        let faces = synthesize_faces(Point::new(3.0, 4.0), Size::new(8.0, 6.0), 75.0, 25.0, INK);
        for face in &faces {
            assert_eq!(face.z, 75.0, "{:?}", face.side);
            assert_eq!(face.color, INK, "{:?}", face.side);
            assert_eq!(face.size.height, 25.0, "{:?}", face.side);
        }
    }

    #[test]
    fn geometry_follows_box_edges() {
        let faces = synthesize_faces(Point::new(3.0, 4.0), Size::new(8.0, 6.0), 0.0, 2.0, INK);
        let [top, right, bottom, left] = faces;

        assert_eq!(top.origin, Point::new(3.0, 4.0));
        assert_eq!(top.size, Size::new(8.0, 2.0));
        assert_eq!(top.rotate_y_deg, 0.0);

        assert_eq!(right.origin, Point::new(11.0, 4.0));
        assert_eq!(right.size, Size::new(6.0, 2.0));
        assert_eq!(right.rotate_y_deg, 270.0);

        assert_eq!(bottom.origin, Point::new(3.0, 10.0));
        assert_eq!(bottom.size, Size::new(8.0, 2.0));
        assert_eq!(bottom.rotate_y_deg, 0.0);

        assert_eq!(left.origin, top.origin, "left wall shares the top wall's anchor");
        assert_eq!(left.size, Size::new(6.0, 2.0));
        assert_eq!(left.rotate_y_deg, 270.0);
    }

    #[test]
    fn empty_box_still_yields_four_faces() {
        let faces = synthesize_faces(Point::new(1.0, 1.0), Size::ZERO, 25.0, 25.0, INK);
        assert!(faces.iter().all(|f| f.origin == Point::new(1.0, 1.0)));
        assert!(faces.iter().all(|f| f.size.width == 0.0));
    }
}
