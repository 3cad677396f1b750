//! Error type for the phase-filters public API.

use std::fmt;

/// Errors raised at the edges of the filter API.
///
/// The filters themselves cannot fail once they have a valid image; only
/// selecting a phase from text and building a kernel can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Phase tag is not one of the known phases (exact, case-sensitive match)
    UnknownPhase(String),
    /// Gaussian kernel size must be odd and non-zero
    InvalidKernelSize(usize),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::UnknownPhase(tag) => {
                write!(f, "unknown phase '{}', expected 'arterial' or 'venous'", tag)
            }
            FilterError::InvalidKernelSize(size) => {
                write!(f, "kernel size must be odd and non-zero, got {}", size)
            }
        }
    }
}

impl std::error::Error for FilterError {}
