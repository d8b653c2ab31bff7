use serde::{Deserialize, Serialize};

/// Unique identifier for an order.
///
/// Wraps the caller-assigned integer id to provide type safety and
/// prevent mixing up order ids with other numeric identifiers. The
/// pipeline never generates or interprets these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Creates an order ID from a caller-assigned integer.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
