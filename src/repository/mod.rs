//! Data contracts to the external CRUD collaborators.
//!
//! The controller never talks to a wire protocol directly; it consumes
//! these traits and the embedding application supplies the transport.

use crate::domain::client::Client;
use crate::domain::order::Order;
use crate::domain::types::OrderId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Narrows an order fetch to a subset of the company's orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub executor_name: Option<String>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executor(mut self, name: impl Into<String>) -> Self {
        self.executor_name = Some(name.into());
        self
    }
}

pub trait OrderReader {
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
}

pub trait OrderWriter {
    fn confirm_order(&self, order_id: &OrderId) -> RepositoryResult<()>;
    fn complete_order(&self, order_id: &OrderId) -> RepositoryResult<()>;
    fn delete_order(&self, order_id: &OrderId) -> RepositoryResult<()>;
}

pub trait ClientReader {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}
