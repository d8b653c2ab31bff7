//! The order entity.

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::value_objects::{EmailAddress, Money};

/// An order awaiting processing.
///
/// Orders are constructed upstream with the processed flag cleared. The
/// order processor is the only component that marks an order processed,
/// and it does so exactly once, at the end of a fully successful run;
/// no other field is ever mutated by the pipeline. The caller owns the
/// order for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_email: EmailAddress,
    total_amount: Money,
    processed: bool,
}

impl Order {
    /// Creates a new unprocessed order.
    pub fn new(id: OrderId, customer_email: impl Into<EmailAddress>, total_amount: Money) -> Self {
        Self {
            id,
            customer_email: customer_email.into(),
            total_amount,
            processed: false,
        }
    }

    /// Returns the caller-assigned order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the confirmation destination address.
    pub fn customer_email(&self) -> &EmailAddress {
        &self.customer_email
    }

    /// Returns the order total. May be zero or negative; the processor
    /// rejects such orders.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns true once the order has been through a fully successful
    /// processing run.
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Marks the order processed.
    ///
    /// Reserved for the order processor's successful path; set only when
    /// persistence and (when applicable) notification both succeeded.
    pub fn mark_processed(&mut self) {
        self.processed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_starts_unprocessed() {
        let order = Order::new(OrderId::new(1), "test@test.com", Money::from_dollars(50));
        assert!(!order.is_processed());
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.customer_email().as_str(), "test@test.com");
        assert_eq!(order.total_amount(), Money::from_dollars(50));
    }

    #[test]
    fn mark_processed_flips_flag() {
        let mut order = Order::new(OrderId::new(1), "test@test.com", Money::from_dollars(50));
        order.mark_processed();
        assert!(order.is_processed());
    }

    #[test]
    fn order_serialization_roundtrip() {
        let order = Order::new(OrderId::new(9), "a@b.c", Money::from_cents(999));
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
