//! Storage capability trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::OrderId;
use domain::Order;
use thiserror::Error;

/// Errors raised by the storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached or a connection could not be
    /// established.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// Persisting an order failed.
    #[error("failed to save order {order_id}: {reason}")]
    SaveFailed { order_id: OrderId, reason: String },

    /// No order exists with the given ID.
    #[error("order not found: {0}")]
    NotFound(OrderId),
}

/// Trait for the persistence boundary.
///
/// The processor treats the store as a single shared resource: it reads
/// the connectivity state, connects when needed, and saves orders. No
/// transaction or isolation guarantees are assumed beyond each call
/// succeeding or returning an error.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Reports whether the backend connection is established. No side
    /// effect.
    async fn is_connected(&self) -> bool;

    /// Establishes the backend connection.
    async fn connect(&self) -> Result<(), StorageError>;

    /// Persists an order.
    async fn save(&self, order: &Order) -> Result<(), StorageError>;

    /// Retrieves an order by ID.
    ///
    /// Not used by the processing path; part of the store's contract for
    /// other callers.
    async fn get_order(&self, id: OrderId) -> Result<Order, StorageError>;
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    orders: HashMap<OrderId, Order>,
    connected: bool,
    connect_calls: usize,
    save_calls: usize,
    fail_on_connect: bool,
    fail_on_save: bool,
}

/// In-memory order store for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

impl InMemoryOrderStore {
    /// Creates a new disconnected in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connectivity state directly.
    pub fn set_connected(&self, connected: bool) {
        self.state.write().unwrap().connected = connected;
    }

    /// Configures the store to fail on connect calls.
    pub fn set_fail_on_connect(&self, fail: bool) {
        self.state.write().unwrap().fail_on_connect = fail;
    }

    /// Configures the store to fail on save calls.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.state.write().unwrap().fail_on_save = fail;
    }

    /// Returns the number of connect calls received.
    pub fn connect_count(&self) -> usize {
        self.state.read().unwrap().connect_calls
    }

    /// Returns the number of save calls received.
    pub fn save_count(&self) -> usize {
        self.state.read().unwrap().save_calls
    }

    /// Returns the number of orders held.
    pub fn order_count(&self) -> usize {
        self.state.read().unwrap().orders.len()
    }

    /// Returns the stored copy of an order, if any.
    pub fn saved_order(&self, id: OrderId) -> Option<Order> {
        self.state.read().unwrap().orders.get(&id).cloned()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn is_connected(&self) -> bool {
        self.state.read().unwrap().connected
    }

    async fn connect(&self) -> Result<(), StorageError> {
        let mut state = self.state.write().unwrap();
        state.connect_calls += 1;

        if state.fail_on_connect {
            return Err(StorageError::Unavailable("connection refused".to_string()));
        }

        state.connected = true;
        Ok(())
    }

    async fn save(&self, order: &Order) -> Result<(), StorageError> {
        let mut state = self.state.write().unwrap();
        state.save_calls += 1;

        if state.fail_on_save {
            return Err(StorageError::SaveFailed {
                order_id: order.id(),
                reason: "storage write rejected".to_string(),
            });
        }

        state.orders.insert(order.id(), order.clone());
        Ok(())
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, StorageError> {
        self.state
            .read()
            .unwrap()
            .orders
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Money;

    fn sample_order(id: i64) -> Order {
        Order::new(OrderId::new(id), "test@test.com", Money::from_dollars(50))
    }

    #[tokio::test]
    async fn test_connect_establishes_connection() {
        let store = InMemoryOrderStore::new();
        assert!(!store.is_connected().await);

        store.connect().await.unwrap();
        assert!(store.is_connected().await);
        assert_eq!(store.connect_count(), 1);
    }

    #[tokio::test]
    async fn test_save_and_get_order() {
        let store = InMemoryOrderStore::new();
        let order = sample_order(1);

        store.save(&order).await.unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.order_count(), 1);

        let fetched = store.get_order(OrderId::new(1)).await.unwrap();
        assert_eq!(fetched, order);
    }

    #[tokio::test]
    async fn test_get_missing_order() {
        let store = InMemoryOrderStore::new();
        let result = store.get_order(OrderId::new(404)).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fail_on_connect() {
        let store = InMemoryOrderStore::new();
        store.set_fail_on_connect(true);

        let result = store.connect().await;
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert!(!store.is_connected().await);
    }

    #[tokio::test]
    async fn test_fail_on_save_keeps_store_empty() {
        let store = InMemoryOrderStore::new();
        store.set_fail_on_save(true);

        let result = store.save(&sample_order(1)).await;
        assert!(matches!(result, Err(StorageError::SaveFailed { .. })));
        assert_eq!(store.order_count(), 0);
    }
}
