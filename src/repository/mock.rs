//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::domain::order::Order;
use crate::domain::types::OrderId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, OrderListQuery, OrderReader, OrderWriter};

mock! {
    pub Repository {}

    impl OrderReader for Repository {
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    }

    impl OrderWriter for Repository {
        fn confirm_order(&self, order_id: &OrderId) -> RepositoryResult<()>;
        fn complete_order(&self, order_id: &OrderId) -> RepositoryResult<()>;
        fn delete_order(&self, order_id: &OrderId) -> RepositoryResult<()>;
    }

    impl ClientReader for Repository {
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    }
}
