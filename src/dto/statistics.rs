//! Aggregate statistics value objects.
//!
//! Produced fresh on every aggregation call and discarded when the input
//! order set changes; nothing here has an independent lifecycle.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::order::Order;
use crate::domain::types::Money;

/// Per-service item count and revenue, first-seen order.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ServiceDistribution {
    pub name: String,
    pub value: usize,
    pub revenue: Money,
}

/// Orders and revenue booked on one calendar day.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub orders: usize,
    pub revenue: Money,
}

/// One entry of the top-client ranking.
///
/// `id` is the raw client snapshot key; an empty string marks orders whose
/// snapshot carried no client id.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TopClient {
    pub id: String,
    pub name: String,
    pub orders: usize,
    pub revenue: Money,
}

/// Company-facing aggregation over all orders of a company.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CompanyStatistics {
    pub service_distribution: Vec<ServiceDistribution>,
    pub orders_by_day: Vec<DayBucket>,
    pub top_clients: Vec<TopClient>,
    pub total_clients: usize,
    pub total_orders: usize,
    pub total_revenue: Money,
}

/// Per-service-type item count for the executor profile.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ServiceTypeCount {
    /// Grouping key: the stable service id when present, the name otherwise.
    pub key: String,
    pub name: String,
    pub count: usize,
}

/// Executor-facing aggregation over the orders assigned to one executor.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ExecutorStatistics {
    pub service_type_data: Vec<ServiceTypeCount>,
    pub todays_orders: Vec<Order>,
    pub this_weeks_orders: Vec<Order>,
    pub completed_orders: usize,
    pub upcoming_orders: usize,
    pub pending_orders: usize,
    pub total_revenue: Money,
    pub upcoming_revenue: Money,
    /// Share of completed orders, in percent; `0.0` for an empty input.
    pub completion_rate: f64,
}
