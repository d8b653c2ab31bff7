//! Domain layer for the order-processing pipeline.
//!
//! This crate provides the core domain types:
//! - The `Order` entity carrying the processed flag
//! - Value objects: `Money` amounts and `EmailAddress` destinations

pub mod order;
pub mod value_objects;

pub use common::OrderId;
pub use order::Order;
pub use value_objects::{EmailAddress, Money};
