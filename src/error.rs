//! Visualization error types
//!
//! Every error here is local to one visualization. None of them is ever
//! shown to the user; the failure mode is a missing or stale chart panel.

use thiserror::Error;

/// Errors raised while managing visualization instances
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VizError {
    /// The mount point for a visualization is not in the render tree
    #[error("Render target missing: {id}")]
    RenderTargetMissing { id: String },

    /// The charting library failed while building an instance
    #[error("Charting library fault for {id}: {message}")]
    LibraryFault { id: String, message: String },

    /// An id that is not in any static table
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),
}

/// A fault reported by the charting backend itself
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct ChartFault(pub String);

impl ChartFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl VizError {
    /// Attach the visualization id to a backend fault
    pub fn library(id: &str, fault: ChartFault) -> Self {
        VizError::LibraryFault {
            id: id.to_string(),
            message: fault.0,
        }
    }
}

/// Result type alias for visualization operations
pub type VizResult<T> = Result<T, VizError>;
