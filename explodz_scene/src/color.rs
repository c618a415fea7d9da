// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Face colors and the depth-indexed palette.

use core::fmt;

use smallvec::SmallVec;

use crate::config::ConfigError;

/// An opaque sRGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    /// Formats as a CSS hex color, e.g. `#cc3333`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The built-in wall colors, shallowest first.
pub const DEFAULT_COLORS: [Color; 8] = [
    Color::from_rgb8(0xcc, 0x33, 0x33),
    Color::from_rgb8(0xea, 0x4c, 0x88),
    Color::from_rgb8(0x66, 0x33, 0x99),
    Color::from_rgb8(0x00, 0x66, 0xcc),
    Color::from_rgb8(0x66, 0x99, 0x00),
    Color::from_rgb8(0xff, 0xcc, 0x33),
    Color::from_rgb8(0xff, 0x99, 0x00),
    Color::from_rgb8(0x99, 0x66, 0x33),
];

/// A table of colors indexed by nesting depth.
///
/// Depth `d` maps to `colors[d % (len - 1)]`, so the final entry is never chosen by
/// [`Palette::color_for_depth`]. Palettes therefore need at least two entries.
///
/// ```rust
/// use explodz_scene::{DEFAULT_COLORS, Palette};
///
/// let palette = Palette::default();
/// assert_eq!(palette.color_for_depth(1), DEFAULT_COLORS[1]);
/// // The cycle length is one less than the table length.
/// assert_eq!(palette.color_for_depth(7), DEFAULT_COLORS[0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: SmallVec<[Color; 8]>,
}

impl Palette {
    /// Build a palette from a color table.
    ///
    /// Returns [`ConfigError::PaletteTooSmall`] for fewer than two colors.
    pub fn new(colors: &[Color]) -> Result<Self, ConfigError> {
        if colors.len() < 2 {
            return Err(ConfigError::PaletteTooSmall(colors.len()));
        }
        Ok(Self {
            colors: SmallVec::from_slice(colors),
        })
    }

    /// The full color table, including the unreachable final entry.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of distinct colors [`Palette::color_for_depth`] cycles through.
    pub fn cycle_len(&self) -> usize {
        self.colors.len() - 1
    }

    /// Wall color for nodes at `depth`.
    pub fn color_for_depth(&self, depth: usize) -> Color {
        self.colors[depth % self.cycle_len()]
    }

    /// The final table entry, which depth indexing never selects.
    pub fn unreachable_color(&self) -> Color {
        self.colors[self.colors.len() - 1]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: SmallVec::from_slice(&DEFAULT_COLORS),
        }
    }
}
