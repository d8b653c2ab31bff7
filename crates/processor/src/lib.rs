//! Order processing pipeline.
//!
//! This crate provides the order processor: a single orchestration that
//! validates an incoming order, persists it through a storage capability,
//! conditionally sends a confirmation through an email capability, and
//! marks the order processed on the fully successful path.
//!
//! Storage and notification backends are external collaborators reached
//! only through the [`OrderStore`] and [`EmailService`] traits; in-memory
//! implementations are provided for tests and stub deployments.

pub mod error;
pub mod processor;
pub mod services;

pub use error::{PipelineError, ProcessorError};
pub use processor::{CONFIRMATION_THRESHOLD, OrderProcessor};
pub use services::{
    EmailError, EmailService, InMemoryEmailService, InMemoryOrderStore, OrderStore, StorageError,
};
