//! Notification capability trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::OrderId;
use domain::EmailAddress;
use thiserror::Error;

/// Errors raised by the notification backend.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Delivering a confirmation failed.
    #[error("failed to send confirmation for order {order_id}: {reason}")]
    SendFailed { order_id: OrderId, reason: String },
}

/// Trait for the messaging boundary.
///
/// Message content and formatting are the backend's concern; the
/// processor only supplies the destination and the order identifier.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends an order confirmation to the given address.
    async fn send_order_confirmation(
        &self,
        recipient: &EmailAddress,
        order_id: OrderId,
    ) -> Result<(), EmailError>;
}

#[derive(Debug, Default)]
struct InMemoryEmailState {
    confirmations: Vec<(EmailAddress, OrderId)>,
    fail_on_send: bool,
}

/// In-memory email service for testing.
///
/// Records every confirmation it is asked to send.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmailService {
    state: Arc<RwLock<InMemoryEmailState>>,
}

impl InMemoryEmailService {
    /// Creates a new in-memory email service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on send calls.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state.write().unwrap().fail_on_send = fail;
    }

    /// Returns the number of confirmations sent.
    pub fn sent_count(&self) -> usize {
        self.state.read().unwrap().confirmations.len()
    }

    /// Returns all confirmations sent so far.
    pub fn confirmations(&self) -> Vec<(EmailAddress, OrderId)> {
        self.state.read().unwrap().confirmations.clone()
    }

    /// Returns the most recent confirmation, if any.
    pub fn last_confirmation(&self) -> Option<(EmailAddress, OrderId)> {
        self.state.read().unwrap().confirmations.last().cloned()
    }
}

#[async_trait]
impl EmailService for InMemoryEmailService {
    async fn send_order_confirmation(
        &self,
        recipient: &EmailAddress,
        order_id: OrderId,
    ) -> Result<(), EmailError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_send {
            return Err(EmailError::SendFailed {
                order_id,
                reason: "delivery rejected".to_string(),
            });
        }

        state.confirmations.push((recipient.clone(), order_id));
        Ok(())
    }
}
