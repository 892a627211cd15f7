//! Order aggregation profiles.
//!
//! Both profiles are pure projections over a borrowed order snapshot:
//! they never fail, and an empty input yields a well-formed zero-valued
//! result. Missing grouping keys (empty snapshot strings) form a distinct
//! empty-string group rather than being dropped.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::order::Order;
use crate::domain::status::StatusKind;
use crate::domain::types::Money;
use crate::dto::statistics::{
    CompanyStatistics, DayBucket, ExecutorStatistics, ServiceDistribution, ServiceTypeCount,
    TopClient,
};
use crate::services::filter::{DateFilter, OrderFilter, filter_orders};

/// Groups items by service name, first-seen order.
fn service_distribution(orders: &[Order]) -> Vec<ServiceDistribution> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<ServiceDistribution> = Vec::new();

    for item in orders.iter().flat_map(|order| order.items.iter()) {
        let slot = *index
            .entry(item.service_name.clone())
            .or_insert_with(|| {
                result.push(ServiceDistribution {
                    name: item.service_name.clone(),
                    value: 0,
                    revenue: Money::ZERO,
                });
                result.len() - 1
            });
        result[slot].value += 1;
        result[slot].revenue += item.service_price;
    }

    result
}

/// Groups orders by start date, ascending by date.
fn orders_by_day(orders: &[Order]) -> Vec<DayBucket> {
    let mut buckets: HashMap<NaiveDate, (usize, Money)> = HashMap::new();

    for order in orders {
        let entry = buckets.entry(order.start.date()).or_insert((0, Money::ZERO));
        entry.0 += 1;
        entry.1 += order.total();
    }

    let mut result: Vec<DayBucket> = buckets
        .into_iter()
        .map(|(date, (orders, revenue))| DayBucket {
            date,
            orders,
            revenue,
        })
        .collect();
    result.sort_by_key(|bucket| bucket.date);

    result
}

/// Ranks clients by order count, first-seen tie order, capped at `limit`.
fn top_clients(orders: &[Order], limit: usize) -> Vec<TopClient> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<TopClient> = Vec::new();

    for order in orders {
        let slot = *index.entry(order.client_id.clone()).or_insert_with(|| {
            result.push(TopClient {
                id: order.client_id.clone(),
                name: order.client_name.clone(),
                orders: 0,
                revenue: Money::ZERO,
            });
            result.len() - 1
        });
        result[slot].orders += 1;
        result[slot].revenue += order.total();
    }

    // Stable sort keeps first-seen order among equal counts.
    result.sort_by(|a, b| b.orders.cmp(&a.orders));
    result.truncate(limit);

    result
}

/// Company-facing aggregation over all orders of a company.
pub fn company_statistics(orders: &[Order], top_clients_limit: usize) -> CompanyStatistics {
    let mut distinct_clients: Vec<&str> = orders.iter().map(|o| o.client_id.as_str()).collect();
    distinct_clients.sort_unstable();
    distinct_clients.dedup();

    CompanyStatistics {
        service_distribution: service_distribution(orders),
        orders_by_day: orders_by_day(orders),
        top_clients: top_clients(orders, top_clients_limit),
        total_clients: distinct_clients.len(),
        total_orders: orders.len(),
        total_revenue: orders.iter().map(Order::total).sum(),
    }
}

/// Groups items by the stable service id, falling back to the name when
/// the upstream supplies none.
fn service_type_data(orders: &[Order]) -> Vec<ServiceTypeCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<ServiceTypeCount> = Vec::new();

    for item in orders.iter().flat_map(|order| order.items.iter()) {
        let key = item
            .service_id
            .clone()
            .unwrap_or_else(|| item.service_name.clone());
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            result.push(ServiceTypeCount {
                key,
                name: item.service_name.clone(),
                count: 0,
            });
            result.len() - 1
        });
        result[slot].count += 1;
    }

    result
}

/// Executor-facing aggregation over the orders assigned to one executor.
pub fn executor_statistics(orders: &[Order], now: NaiveDateTime) -> ExecutorStatistics {
    let todays_orders = filter_orders(orders, &OrderFilter::new().date(DateFilter::Today), now);
    let this_weeks_orders =
        filter_orders(orders, &OrderFilter::new().date(DateFilter::ThisWeek), now);

    let completed_orders = orders
        .iter()
        .filter(|o| o.status().kind == StatusKind::Completed)
        .count();
    let pending_orders = orders
        .iter()
        .filter(|o| o.status().kind == StatusKind::Pending)
        .count();
    // Upcoming counts every order starting after the reference instant,
    // whatever its confirmation state.
    let upcoming_orders = orders.iter().filter(|o| o.start > now).count();

    let total_revenue: Money = orders.iter().map(Order::total).sum();
    let upcoming_revenue: Money = orders
        .iter()
        .filter(|o| o.start > now)
        .map(Order::total)
        .sum();

    let completion_rate = if orders.is_empty() {
        0.0
    } else {
        completed_orders as f64 / orders.len() as f64 * 100.0
    };

    ExecutorStatistics {
        service_type_data: service_type_data(orders),
        todays_orders,
        this_weeks_orders,
        completed_orders,
        upcoming_orders,
        pending_orders,
        total_revenue,
        upcoming_revenue,
        completion_rate,
    }
}
