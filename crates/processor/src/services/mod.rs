//! Capability traits and in-memory implementations for the pipeline's
//! external collaborators.

pub mod email;
pub mod storage;

pub use email::{EmailError, EmailService, InMemoryEmailService};
pub use storage::{InMemoryOrderStore, OrderStore, StorageError};
