//! # The Measurement Protocol
//!
//! Every layout decision starts with the same question: "does this fit?"
//! [`SpacePlan`] is the three-way answer. `Wrap` means nothing can be placed
//! in the offered space — the caller must offer more, usually by opening a
//! new page. `PartialRender` means some content fits and the rest is waiting.
//! `FullRender` means everything fits.
//!
//! Assembled across successive pages these answers are exactly the pagination
//! protocol: a driver keeps offering fresh pages until it finally hears
//! `FullRender`.

use crate::geometry::Size;

/// The outcome of asking an element whether it fits in some available space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpacePlan {
    /// Nothing was placed. Retry with more space or a new page.
    Wrap,
    /// Some content was placed and occupies the carried size; more remains
    /// for a later surface.
    PartialRender(Size),
    /// All content was placed and occupies the carried size.
    FullRender(Size),
}

impl SpacePlan {
    pub fn is_wrap(&self) -> bool {
        matches!(self, SpacePlan::Wrap)
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, SpacePlan::PartialRender(_))
    }

    pub fn is_full(&self) -> bool {
        matches!(self, SpacePlan::FullRender(_))
    }

    /// The measured size, if anything was placed.
    pub fn size(&self) -> Option<Size> {
        match self {
            SpacePlan::Wrap => None,
            SpacePlan::PartialRender(size) | SpacePlan::FullRender(size) => Some(*size),
        }
    }
}
