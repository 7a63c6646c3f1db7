//! # Drawing Surface
//!
//! The layout core never paints pixels. It speaks to an abstract [`Canvas`]
//! through exactly two operations: shift the origin, and paint one primitive
//! at the current origin. What "paint" means — a PDF content stream, a
//! framebuffer blit, a recorded trace — is the implementor's business.
//!
//! Translations are cumulative, so drawing code follows a strict push/undo
//! discipline: every translate is matched by the reverse translate before
//! control returns upward, and siblings never observe a residual offset.

use crate::geometry::{Position, Size};

/// A drawing surface consumed during the draw phase.
pub trait Canvas {
    /// Shift the drawing origin by `offset`. Cumulative until reversed.
    fn translate(&mut self, offset: Position);

    /// Paint one primitive of the given size at the current origin. Opaque
    /// to the layout core.
    fn paint(&mut self, size: Size);
}

/// A canvas that ignores everything. Useful for probe passes that need the
/// side effects of a draw (cursor advance) without any output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl NullCanvas {
    pub fn new() -> Self {
        Self
    }
}

impl Canvas for NullCanvas {
    fn translate(&mut self, _offset: Position) {}

    fn paint(&mut self, _size: Size) {}
}
