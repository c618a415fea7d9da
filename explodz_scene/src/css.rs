// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS and markup rendering for hosts backed by a styled document.
//!
//! Every type here implements [`Display`](core::fmt::Display), so it can be written straight
//! into a style attribute or collected with `to_string()`.

use core::fmt;

use crate::face::{FACE_TILT_DEG, Face};
use crate::host::{LayerStyle, Rotation, StageStyle};

/// Declarations shared by the stage and every layer.
const PRESERVE_3D: &str = "overflow: visible; transform-style: preserve-3d;";

impl fmt::Display for StageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = (self.origin.x, self.origin.y);
        write!(
            f,
            "{PRESERVE_3D} perspective: {}px; perspective-origin: {x:.2}px {y:.2}px; \
             transform-origin: {x:.2}px {y:.2}px;",
            self.perspective
        )
    }
}

impl fmt::Display for LayerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PRESERVE_3D} transform: translateZ({:.3}px);",
            self.translate_z
        )
    }
}

impl fmt::Display for Rotation {
    /// The stage's `transform` value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotateX({:.2}deg) rotateY({:.2}deg)", self.x_deg, self.y_deg)
    }
}

/// A face rendered as an absolutely positioned box.
#[derive(Clone, Copy, Debug)]
pub struct FaceBox<'a>(pub &'a Face);

impl fmt::Display for FaceBox<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = self.0;
        write!(
            f,
            "<div style='position: absolute; transform-origin: left top; background: {}; \
             width: {}px; height: {}px; \
             transform: translate3d({}px, {}px, {}px) rotateX({}deg) rotateY({}deg);'></div>",
            face.color,
            face.size.width,
            face.size.height,
            face.origin.x,
            face.origin.y,
            face.z,
            FACE_TILT_DEG,
            face.rotate_y_deg,
        )
    }
}

/// The overlay container holding every face.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use explodz_scene::css::OverlayBox;
/// use explodz_scene::{Color, synthesize_faces};
///
/// let faces = synthesize_faces(Point::ZERO, Size::new(4.0, 2.0), 25.0, 25.0, Color::from_rgb8(0, 0, 0));
/// let html = OverlayBox { faces: &faces, visible: false }.to_string();
/// assert!(html.starts_with("<div style='display: none; position: absolute; top: 0;'>"));
/// assert_eq!(html.matches("<div").count(), 5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OverlayBox<'a> {
    /// Faces in emission order.
    pub faces: &'a [Face],
    /// Whether the container is displayed.
    pub visible: bool,
}

impl fmt::Display for OverlayBox<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = if self.visible { "" } else { "display: none; " };
        write!(f, "<div style='{display}position: absolute; top: 0;'>")?;
        for face in self.faces {
            write!(f, "{}", FaceBox(face))?;
        }
        f.write_str("</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::face::synthesize_faces;
    use alloc::string::ToString;
    use kurbo::{Point, Size};

    #[test]
    fn layer_prints_three_decimals() {
        let css = LayerStyle {
            translate_z: 25.0 + 3.0 * 0.001,
        }
        .to_string();
        assert_eq!(
            css,
            "overflow: visible; transform-style: preserve-3d; transform: translateZ(25.003px);"
        );
    }

    #[test]
    fn stage_centers_perspective_and_transform_origin() {
        let css = StageStyle::new(5000.0, Size::new(1001.0, 600.0)).to_string();
        assert_eq!(
            css,
            "overflow: visible; transform-style: preserve-3d; perspective: 5000px; \
             perspective-origin: 500.50px 300.00px; transform-origin: 500.50px 300.00px;"
        );
    }

    #[test]
    fn rotation_prints_two_decimals() {
        let rotation = Rotation {
            x_deg: 12.345_6,
            y_deg: -180.0,
        };
        assert_eq!(rotation.to_string(), "rotateX(12.35deg) rotateY(-180.00deg)");
    }

    #[test]
    fn face_box_markup() {
        let faces = synthesize_faces(
            Point::new(10.0, 20.0),
            Size::new(100.0, 50.0),
            25.0,
            25.0,
            Color::from_rgb8(0xcc, 0x33, 0x33),
        );
        assert_eq!(
            FaceBox(&faces[1]).to_string(),
            "<div style='position: absolute; transform-origin: left top; background: #cc3333; \
             width: 50px; height: 25px; \
             transform: translate3d(110px, 20px, 25px) rotateX(270deg) rotateY(270deg);'></div>"
        );
    }

    #[test]
    fn visible_overlay_has_no_display_rule() {
        let html = OverlayBox {
            faces: &[],
            visible: true,
        }
        .to_string();
        assert_eq!(html, "<div style='position: absolute; top: 0;'></div>");
    }
}
