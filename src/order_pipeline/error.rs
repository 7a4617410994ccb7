//! Error types for the order pipeline.

use thiserror::Error;

use crate::framework::{BackendError, Rejection};

/// Ways [`OrderPipeline::process`](super::OrderPipeline::process) can stop short.
///
/// Rejections and backend failures stay distinct: a rejection means nothing happened,
/// a backend failure may leave earlier effects in place.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    /// Validation declined the order. No computation, persistence or notification ran.
    #[error("Order rejected: {0}")]
    Rejected(Rejection),

    /// The order could not be saved. Nothing was persisted or sent.
    #[error("Order persistence failed: {0}")]
    Persistence(BackendError),

    /// The order was saved but the confirmation could not be delivered.
    /// The saved order is not rolled back.
    #[error("Order saved but confirmation failed: {0}")]
    Notification(BackendError),
}

impl From<Rejection> for PipelineError {
    fn from(rejection: Rejection) -> Self {
        PipelineError::Rejected(rejection)
    }
}

impl PipelineError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, PipelineError::Rejected(_))
    }

    /// Returns `true` when a durable effect (a saved order) happened before the failure.
    pub fn effects_committed(&self) -> bool {
        matches!(self, PipelineError::Notification(_))
    }
}
