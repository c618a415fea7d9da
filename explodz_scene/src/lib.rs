// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explodz Scene: explode a resolved layout into depth-separated 3D layers.
//!
//! Given a tree of positioned rectangles (typically a rendered document), this crate lifts every
//! nesting level onto its own plane along a depth axis and builds colored walls joining each
//! element's footprint to the plane below it. The result makes a document's hierarchy visible
//! when the stage is rotated.
//!
//! ## Pieces
//!
//! - [`LayoutSource`]: read-only view of the layout (position, size, children, nearest
//!   positioned ancestor, element or not). Anything implementing it can be exploded.
//! - [`explode`] / [`walk`]: the walk. Assigns each element a [`Layer`] (depth, depth-axis lift,
//!   root-space origin) and four [`Face`]s, collected into a [`Scene`].
//! - [`synthesize_faces`]: the four walls of one box.
//! - [`PresentationHost`] and [`SceneAssembler`]: apply a scene to a live tree in place, hold
//!   the overlay visibility ([`OverlayMode`]), and follow the pointer with a [`Rotation`].
//! - [`ExplodeConfig`] and [`Palette`]: layer step, camera distance, sibling nudge, and wall
//!   colors, fixed at assembly.
//!
//! ## Depth model
//!
//! Children of the root sit at depth 1. Each element's walls lie on the plane
//! `depth * step` and are colored by depth. The live lift applied to an element is one step
//! relative to its parent plus a tiny per-sibling nudge, so siblings never share a depth value.
//!
//! ## Coordinates
//!
//! Positions are local to each element's nearest positioned ancestor. While walking, a child
//! adds its parent's position to the inherited offset only when that parent is its positioned
//! ancestor. [`derive_offset`] recomputes the same value from scratch.
//!
//! ## Not a 3D engine
//!
//! There is no projection, lighting, or occlusion here. Hosts render faces and lifts with
//! whatever 3D-capable styling they have; [`css`] renders them as CSS declarations and markup.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `layout_tree_adapter` (default): implements the traits for `explodz_layout::LayoutTree`
//!   and provides [`TreeHost`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod assembler;
mod color;
mod config;
pub mod css;
mod face;
mod host;
mod source;
mod walker;

#[cfg(feature = "layout_tree_adapter")]
pub use adapters::layout_tree::TreeHost;
pub use assembler::{OverlayMode, SceneAssembler};
pub use color::{Color, DEFAULT_COLORS, Palette};
pub use config::{
    ConfigError, DEFAULT_PERSPECTIVE, DEFAULT_SIBLING_EPSILON, DEFAULT_STEP, ExplodeConfig,
    MAX_EPSILON_RATIO,
};
pub use face::{FACE_TILT_DEG, Face, FaceSide, SIDE_TURN_DEG, synthesize_faces};
pub use host::{LayerStyle, PresentationHost, Rotation, StageStyle};
pub use source::LayoutSource;
pub use walker::{
    Layer, Scene, derive_offset, derive_origin, explode, sibling_translate_z, walk,
};
