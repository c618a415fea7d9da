// Copyright 2025 the Explodz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explode a small synthetic page and print the styled result.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p explodz_demos --example explode_document`

use explodz_layout::{LayoutBox, LayoutTree, NodeId};
use explodz_scene::{ExplodeConfig, SceneAssembler, TreeHost};
use kurbo::{Point, Size};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn el(x: f64, y: f64, w: f64, h: f64) -> LayoutBox {
    LayoutBox::element(Point::new(x, y), Size::new(w, h))
}

/// A header, a positioned card grid, and a footer.
fn build_page() -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let body = tree.insert(None, el(0.0, 0.0, VIEWPORT.width, VIEWPORT.height));

    let header = tree.insert(Some(body), el(0.0, 0.0, 1280.0, 80.0));
    tree.insert(Some(header), el(24.0, 20.0, 160.0, 40.0));
    tree.insert(Some(header), LayoutBox::text());

    let grid = tree.insert(Some(body), el(40.0, 120.0, 1200.0, 560.0).positioned());
    for row in 0..2_u8 {
        for col in 0..3_u8 {
            let card = tree.insert(
                Some(grid),
                el(
                    f64::from(col) * 400.0,
                    f64::from(row) * 280.0,
                    380.0,
                    260.0,
                )
                .positioned(),
            );
            tree.insert(Some(card), el(16.0, 16.0, 348.0, 160.0));
            let caption = tree.insert(Some(card), el(16.0, 192.0, 348.0, 52.0));
            tree.insert(Some(caption), LayoutBox::text());
        }
    }

    tree.insert(Some(body), el(0.0, 720.0, 1280.0, 80.0));
    (tree, body)
}

fn main() {
    env_logger::init();

    let (tree, body) = build_page();
    let config = ExplodeConfig::default();
    let mut view = SceneAssembler::assemble(TreeHost::new(tree), body, &config, VIEWPORT);

    // Simulate a release (show walls) and a drag toward the top-right corner.
    view.pointer_released();
    if let Some(rotation) = view.pointer_moved(Point::new(960.0, 200.0), VIEWPORT) {
        log::info!("stage rotation {rotation}");
    }

    let host = view.host();
    let mut next = Some(body);
    while let Some(id) = next {
        if let Some(style) = host.style_attribute(id) {
            println!("{id:?}: {style}");
        }
        next = host.tree().next_depth_first(id);
    }
    println!();
    println!("{}", host.overlay_html());
    println!(
        "{} layers, {} faces, deepest level {}",
        view.scene().layers().len(),
        view.scene().faces().len(),
        view.scene().max_depth()
    );
}
