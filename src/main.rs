//! # Quire CLI
//!
//! Lays out the built-in demo scene — a masonry wall of fifty randomly
//! sized blocks — and emits the per-page draw traces as JSON.
//!
//! Usage:
//!   quire > trace.json
//!   quire -o trace.json
//!   quire --pages 4 -o trace.json

use std::env;
use std::fs;

use quire::element::Element;
use quire::flow::Flow;
use quire::geometry::Size;

fn main() {
    let args: Vec<String> = env::args().collect();

    let max_pages: usize = args
        .windows(2)
        .find(|w| w[0] == "--pages")
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(16);

    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone());

    let mut root = demo_scene();

    match quire::layout(&mut root, Size::new(800.0, 650.0), max_pages) {
        Ok(pages) => {
            let json = serde_json::to_string_pretty(&pages).expect("trace serializes");
            match output_path {
                Some(path) => {
                    fs::write(&path, &json).expect("Failed to write trace");
                    eprintln!("✓ Laid out {} page(s) to {}", pages.len(), path);
                }
                None => println!("{json}"),
            }
        }
        Err(e) => {
            eprintln!("✗ Layout failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// A wall of blocks sized in 25pt steps, spaced 25pt apart, space-around
/// aligned with middle baselines. Spills over several 800×650 pages.
fn demo_scene() -> Element {
    let mut wall = Flow::new();
    wall.spacing(25.0).align_space_around().baseline_middle();

    // Fixed-seed generator so every run traces identically.
    let mut state: u64 = 123;
    let mut next_span = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % 5 + 2) as f64 * 25.0
    };

    for _ in 0..50 {
        let width = next_span();
        let height = next_span();
        *wall.item() = Element::block(width, height);
    }

    Element::flow(wall)
}
