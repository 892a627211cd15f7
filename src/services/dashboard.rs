//! Dashboard orchestration around the order collection.
//!
//! The controller exclusively owns the loaded order collection and the
//! current selection; filtering and aggregation receive read-only
//! snapshots. Collaborator handles are passed per call, never looked up
//! from ambient state.

use chrono::NaiveDateTime;

use crate::domain::order::Order;
use crate::domain::types::OrderId;
use crate::dto::statistics::{CompanyStatistics, ExecutorStatistics};
use crate::models::config::DashboardConfig;
use crate::repository::{OrderListQuery, OrderReader, OrderWriter};
use crate::services::filter::{OrderFilter, filter_orders};
use crate::services::statistics::{company_statistics, executor_statistics};
use crate::services::{ServiceError, ServiceResult};

/// Loading state of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Mutation currently in flight for the selected order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderAction {
    Confirm,
    Complete,
    Delete,
}

/// Handle for one in-flight fetch, used to drop stale responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct Dashboard {
    config: DashboardConfig,
    orders: Vec<Order>,
    selected: Option<OrderId>,
    state: DashboardState,
    action_in_flight: Option<OrderAction>,
    issued_seq: u64,
    applied_seq: u64,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    /// Mutation sub-state, exposed so the embedding view can disable the
    /// action controls while one is running.
    pub fn action_in_flight(&self) -> Option<OrderAction> {
        self.action_in_flight
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Currently selected order, if the selection is still present.
    pub fn selected_order(&self) -> Option<&Order> {
        let selected = self.selected.as_ref()?;
        self.orders.iter().find(|order| &order.id == selected)
    }

    /// Begins a fetch cycle and hands out a monotonic ticket.
    ///
    /// The ticket lets an embedding application run overlapping refreshes:
    /// [`Dashboard::finish_refresh`] drops any response that raced with and
    /// lost to a newer one instead of overwriting it.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        self.state = DashboardState::Loading;
        FetchTicket(self.issued_seq)
    }

    /// Applies the outcome of the fetch started with `ticket`.
    ///
    /// On failure the previously loaded orders are retained so the view
    /// degrades gracefully instead of going blank.
    pub fn finish_refresh(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Order>, ServiceError>,
    ) -> ServiceResult<()> {
        if ticket.0 <= self.applied_seq {
            log::debug!("Dropping stale fetch response (ticket {})", ticket.0);
            return Ok(());
        }

        match result {
            Ok(orders) => {
                self.orders = orders.into_iter().map(Order::normalized).collect();
                self.applied_seq = ticket.0;
                if ticket.0 == self.issued_seq {
                    self.state = DashboardState::Ready;
                }
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to fetch orders: {err}");
                if ticket.0 == self.issued_seq {
                    self.state = DashboardState::Ready;
                }
                Err(err)
            }
        }
    }

    /// Fetches the order collection through the read collaborator.
    pub fn refresh<R>(&mut self, repo: &R, query: OrderListQuery) -> ServiceResult<()>
    where
        R: OrderReader + ?Sized,
    {
        let ticket = self.begin_refresh();
        let result = repo.list_orders(query).map_err(ServiceError::from);
        self.finish_refresh(ticket, result)
    }

    /// Selects an order from the current collection, opening its detail view.
    pub fn select_order(&mut self, order_id: &OrderId) -> ServiceResult<()> {
        if !self.orders.iter().any(|order| &order.id == order_id) {
            return Err(ServiceError::InvalidState(format!(
                "order {order_id} is not in the loaded collection"
            )));
        }
        self.selected = Some(order_id.clone());
        Ok(())
    }

    /// Clears the selection, closing the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Confirms the selected order and patches it optimistically on success.
    pub fn confirm<R>(&mut self, repo: &R) -> ServiceResult<()>
    where
        R: OrderWriter + ?Sized,
    {
        self.run_action(OrderAction::Confirm, repo)
    }

    /// Marks the selected order completed and patches it optimistically.
    pub fn complete<R>(&mut self, repo: &R) -> ServiceResult<()>
    where
        R: OrderWriter + ?Sized,
    {
        self.run_action(OrderAction::Complete, repo)
    }

    /// Deletes the selected order, removing it locally and closing the
    /// detail view on success.
    pub fn delete_order<R>(&mut self, repo: &R) -> ServiceResult<()>
    where
        R: OrderWriter + ?Sized,
    {
        self.run_action(OrderAction::Delete, repo)
    }

    fn run_action<R>(&mut self, action: OrderAction, repo: &R) -> ServiceResult<()>
    where
        R: OrderWriter + ?Sized,
    {
        if self.state != DashboardState::Ready {
            return Err(ServiceError::InvalidState(
                "orders are not loaded".to_string(),
            ));
        }
        if self.action_in_flight.is_some() {
            return Err(ServiceError::InvalidState(
                "another action is in flight".to_string(),
            ));
        }
        let order_id = self
            .selected_order()
            .map(|order| order.id.clone())
            .ok_or(ServiceError::NoSelection)?;

        self.action_in_flight = Some(action);
        let outcome = match action {
            OrderAction::Confirm => repo.confirm_order(&order_id),
            OrderAction::Complete => repo.complete_order(&order_id),
            OrderAction::Delete => repo.delete_order(&order_id),
        };
        self.action_in_flight = None;

        match outcome {
            Ok(()) => {
                self.apply_patch(action, &order_id);
                Ok(())
            }
            Err(err) => {
                // No optimistic patch; selection is kept so the user can retry.
                log::error!("Order action failed for {order_id}: {err}");
                Err(err.into())
            }
        }
    }

    fn apply_patch(&mut self, action: OrderAction, order_id: &OrderId) {
        match action {
            OrderAction::Confirm => {
                if let Some(order) = self.orders.iter_mut().find(|o| &o.id == order_id) {
                    order.confirmed = true;
                }
            }
            OrderAction::Complete => {
                if let Some(order) = self.orders.iter_mut().find(|o| &o.id == order_id) {
                    order.completed = true;
                    // Keep the completed-implies-confirmed invariant locally.
                    order.confirmed = true;
                }
            }
            OrderAction::Delete => {
                self.orders.retain(|o| &o.id != order_id);
                self.selected = None;
            }
        }
    }

    /// Filtered, sorted view over a snapshot of the owned collection.
    pub fn filtered_orders(&self, filter: &OrderFilter, now: NaiveDateTime) -> Vec<Order> {
        filter_orders(&self.orders, filter, now)
    }

    /// Company-facing aggregate view of the owned collection.
    pub fn company_statistics(&self) -> CompanyStatistics {
        company_statistics(&self.orders, self.config.top_clients_limit)
    }

    /// Executor-facing aggregate view of the owned collection.
    pub fn executor_statistics(&self, now: NaiveDateTime) -> ExecutorStatistics {
        executor_statistics(&self.orders, now)
    }
}
