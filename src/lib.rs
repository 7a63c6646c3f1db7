//! # Quire
//!
//! A pagination-aware layout core.
//!
//! Most layout engines compute geometry against an infinite canvas and
//! slice the result into pages afterwards. The slice lands mid-row, the
//! mid-row element gets cut in half, and every fix is a special case bolted
//! on downstream.
//!
//! Quire inverts that: **fitting is asked before anything is drawn.** Every
//! element answers the same question — given this much space, do you fit
//! entirely, partially, or not at all? — and only then is it drawn into
//! exactly the space it claimed. A container that fits partially remembers
//! where it stopped, so the next page continues with the first child the
//! previous page could not hold. Nothing is ever sliced; content flows
//! *into* pages.
//!
//! ## Architecture
//!
//! ```text
//! Element tree (API)
//!       ↓
//!   [element]  — Uniform measure/draw protocol over the node kinds
//!       ↓
//!   [flow]     — Masonry packer: wrapped lines, alignment, resumable cursor
//!       ↓
//!   [driver]   — Page loop: measure, draw, next page, until full render
//!       ↓
//!   [canvas]   — Drawing surface trait; [trace] records instead of painting
//! ```

pub mod canvas;
pub mod driver;
pub mod element;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod plan;
pub mod trace;

use element::Element;
use error::LayoutError;
use geometry::{LayoutContext, Size};
use trace::TraceCanvas;

/// Lay a tree out across pages and record what each page draws.
///
/// This is the primary entry point for callers that want page traces
/// rather than a custom surface: one [`TraceCanvas`] per page, in order.
pub fn layout(
    root: &mut Element,
    page_size: Size,
    max_pages: usize,
) -> Result<Vec<TraceCanvas>, LayoutError> {
    let ctx = LayoutContext::default();
    driver::paginate(root, page_size, &ctx, max_pages, |_| TraceCanvas::new())
}
