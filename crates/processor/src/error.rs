//! Processor error types.

use thiserror::Error;

use crate::services::email::EmailError;
use crate::services::storage::StorageError;

/// Errors surfaced to callers of
/// [`OrderProcessor::process_order`](crate::OrderProcessor::process_order).
///
/// These are the fatal class: unlike save and notification failures,
/// which are absorbed into an `Ok(false)` outcome, these propagate and
/// the caller must handle them.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// No order was supplied. Programmer error, never converted to a
    /// business outcome.
    #[error("order argument is required")]
    MissingOrder,

    /// The storage backend failed while establishing connectivity.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Failure inside the persist-and-notify stage.
///
/// Produced by the single failure-absorbing region and reported
/// uniformly as an unprocessed order; callers cannot tell a save
/// failure from a notification failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Persisting the order failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Sending the confirmation failed.
    #[error("email error: {0}")]
    Email(#[from] EmailError),
}
