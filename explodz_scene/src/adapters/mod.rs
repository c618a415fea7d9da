// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters from concrete layout trees to the scene traits.

#[cfg(feature = "layout_tree_adapter")]
pub mod layout_tree;
