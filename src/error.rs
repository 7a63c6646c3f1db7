//! Structured error types for the layout core.
//!
//! "Doesn't fit" is never an error here — that outcome is the first-class
//! [`SpacePlan::Wrap`](crate::plan::SpacePlan) state. Errors are reserved for
//! genuinely defective input (which would silently corrupt page accounting if
//! skipped) and for a pagination run that stops making progress.

use thiserror::Error;

/// The unified error type returned by all layout operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Defective configuration or a child reporting an impossible size:
    /// negative or non-finite spacing, invalid available space, or a measured
    /// size that is negative or non-finite.
    #[error("invalid layout input: {reason}")]
    InvalidInput { reason: String },

    /// The pagination driver stopped without reaching a full render: either
    /// content wrapped on a fresh, empty page (so no page will ever hold it)
    /// or the page budget ran out.
    #[error("layout did not converge after {pages} page(s)")]
    NotConverging { pages: usize },
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LayoutError::InvalidInput {
            reason: reason.into(),
        }
    }
}
