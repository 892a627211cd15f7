//! Shared fixtures for the integration tests.

use std::cell::{Cell, RefCell};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pushkind_booking::domain::client::Client;
use pushkind_booking::domain::order::{Order, OrderItem};
use pushkind_booking::domain::types::{ClientId, Money, OrderId};
use pushkind_booking::repository::errors::{RepositoryError, RepositoryResult};
use pushkind_booking::repository::{ClientReader, OrderListQuery, OrderReader, OrderWriter};

/// In-memory stand-in for the external order/client collaborators.
#[derive(Default)]
pub struct InMemoryRepository {
    orders: RefCell<Vec<Order>>,
    clients: RefCell<Vec<Client>>,
    fail_next: Cell<bool>,
}

impl InMemoryRepository {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RefCell::new(orders),
            ..Self::default()
        }
    }

    pub fn set_clients(&self, clients: Vec<Client>) {
        self.clients.replace(clients);
    }

    /// Makes the next repository call fail with a transport error.
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.borrow().clone()
    }

    fn check_failure(&self) -> RepositoryResult<()> {
        if self.fail_next.take() {
            return Err(RepositoryError::Transport("injected failure".to_string()));
        }
        Ok(())
    }

    fn with_order<F>(&self, order_id: &OrderId, patch: F) -> RepositoryResult<()>
    where
        F: FnOnce(&mut Order),
    {
        self.check_failure()?;
        let mut orders = self.orders.borrow_mut();
        let order = orders
            .iter_mut()
            .find(|order| &order.id == order_id)
            .ok_or(RepositoryError::NotFound)?;
        patch(order);
        Ok(())
    }
}

impl OrderReader for InMemoryRepository {
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>> {
        self.check_failure()?;
        let orders = self.orders.borrow();
        Ok(orders
            .iter()
            .filter(|order| {
                query.executor_name.as_deref().is_none_or(|name| {
                    order.items.iter().any(|item| item.executor_name == name)
                })
            })
            .cloned()
            .collect())
    }
}

impl OrderWriter for InMemoryRepository {
    fn confirm_order(&self, order_id: &OrderId) -> RepositoryResult<()> {
        self.with_order(order_id, |order| order.confirmed = true)
    }

    fn complete_order(&self, order_id: &OrderId) -> RepositoryResult<()> {
        self.with_order(order_id, |order| order.completed = true)
    }

    fn delete_order(&self, order_id: &OrderId) -> RepositoryResult<()> {
        self.check_failure()?;
        let mut orders = self.orders.borrow_mut();
        let before = orders.len();
        orders.retain(|order| &order.id != order_id);
        if orders.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl ClientReader for InMemoryRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        self.check_failure()?;
        Ok(self.clients.borrow().clone())
    }
}

pub fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new(id: &str, start: NaiveDateTime) -> Self {
        Self {
            order: Order {
                id: OrderId::new(id).expect("valid order id"),
                client_id: "client-1".to_string(),
                client_name: "Alice".to_string(),
                client_phone: "+70000000001".to_string(),
                client_address: None,
                start,
                end: start + Duration::hours(1),
                confirmed: false,
                completed: false,
                comment: None,
                items: Vec::new(),
            },
        }
    }

    pub fn client(mut self, id: &str, name: &str) -> Self {
        self.order.client_id = id.to_string();
        self.order.client_name = name.to_string();
        self
    }

    pub fn confirmed(mut self) -> Self {
        self.order.confirmed = true;
        self
    }

    pub fn completed(mut self) -> Self {
        self.order.confirmed = true;
        self.order.completed = true;
        self
    }

    pub fn item(mut self, service: &str, executor: &str, price_minor: i64) -> Self {
        let start = self.order.start;
        self.order.items.push(OrderItem {
            service_id: None,
            service_name: service.to_string(),
            executor_name: executor.to_string(),
            service_price: Money::from_minor(price_minor).expect("valid price"),
            start,
        });
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}

pub fn sample_client(id: &str, name: &str) -> Client {
    Client {
        id: ClientId::new(id).expect("valid client id"),
        name: name.to_string(),
        phone: None,
        addresses: Vec::new(),
    }
}
