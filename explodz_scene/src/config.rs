// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup configuration for an exploded scene.

use crate::color::Palette;

/// Distance between depth layers used by [`ExplodeConfig::default`].
pub const DEFAULT_STEP: f64 = 25.0;
/// Camera distance used by [`ExplodeConfig::default`].
pub const DEFAULT_PERSPECTIVE: f64 = 5000.0;
/// Per-sibling depth nudge used by [`ExplodeConfig::default`].
pub const DEFAULT_SIBLING_EPSILON: f64 = 0.001;

/// Largest allowed ratio of `sibling_epsilon` to `step`.
pub const MAX_EPSILON_RATIO: f64 = 1.0 / 1000.0;

/// Errors from building an [`ExplodeConfig`] or a [`Palette`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The layer step was zero, negative, or not finite.
    #[error("layer step must be finite and positive, got {0}")]
    InvalidStep(f64),
    /// The perspective distance was zero, negative, or not finite.
    #[error("perspective must be finite and positive, got {0}")]
    InvalidPerspective(f64),
    /// The sibling epsilon was not positive, not finite, or large enough to blur depth levels.
    #[error("sibling epsilon {epsilon} must be above 0 and at most {max} for step {step}")]
    InvalidEpsilon {
        /// Requested epsilon.
        epsilon: f64,
        /// Layer step it was checked against.
        step: f64,
        /// Largest accepted epsilon for that step.
        max: f64,
    },
    /// A palette needs at least two colors because depth indexing skips the last one.
    #[error("palette needs at least 2 colors, got {0}")]
    PaletteTooSmall(usize),
}

/// Parameters fixed when a scene is assembled.
///
/// ```rust
/// use explodz_scene::{ConfigError, ExplodeConfig};
///
/// let config = ExplodeConfig::new(40.0, 2000.0)?;
/// assert_eq!(config.step(), 40.0);
///
/// assert!(matches!(
///     ExplodeConfig::new(0.0, 2000.0),
///     Err(ConfigError::InvalidStep(_))
/// ));
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ExplodeConfig {
    step: f64,
    perspective: f64,
    sibling_epsilon: f64,
    palette: Palette,
}

impl ExplodeConfig {
    /// Validate `step` and `perspective` and use the default epsilon and palette.
    ///
    /// The default epsilon is scaled down if it would exceed [`MAX_EPSILON_RATIO`] of `step`.
    pub fn new(step: f64, perspective: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        if !perspective.is_finite() || perspective <= 0.0 {
            return Err(ConfigError::InvalidPerspective(perspective));
        }
        Ok(Self {
            step,
            perspective,
            sibling_epsilon: DEFAULT_SIBLING_EPSILON.min(step * MAX_EPSILON_RATIO),
            palette: Palette::default(),
        })
    }

    /// Replace the per-sibling depth nudge.
    ///
    /// The nudge must be positive so siblings never share a depth value, and at most
    /// [`MAX_EPSILON_RATIO`] of the step.
    pub fn with_sibling_epsilon(mut self, epsilon: f64) -> Result<Self, ConfigError> {
        let max = self.step * MAX_EPSILON_RATIO;
        if !epsilon.is_finite() || epsilon <= 0.0 || epsilon > max {
            return Err(ConfigError::InvalidEpsilon {
                epsilon,
                step: self.step,
                max,
            });
        }
        self.sibling_epsilon = epsilon;
        Ok(self)
    }

    /// Replace the wall palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Distance between adjacent depth layers.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Camera distance applied to the stage.
    pub fn perspective(&self) -> f64 {
        self.perspective
    }

    /// Depth nudge added per sibling position.
    pub fn sibling_epsilon(&self) -> f64 {
        self.sibling_epsilon
    }

    /// Wall colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for ExplodeConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            perspective: DEFAULT_PERSPECTIVE,
            sibling_epsilon: DEFAULT_SIBLING_EPSILON,
            palette: Palette::default(),
        }
    }
}
