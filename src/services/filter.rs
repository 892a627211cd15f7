//! Compound order filtering and ordering.
//!
//! All three predicates AND together and apply before the sort. The
//! reference instant is an explicit parameter so date windows stay
//! deterministic under test; callers convert to their reference timezone
//! before passing it in.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::domain::order::Order;

/// Status predicate over the derived order flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Completed,
}

/// Date window relative to the start of the reference instant's day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Upcoming,
    ThisWeek,
    Past,
}

impl From<&str> for StatusFilter {
    fn from(s: &str) -> Self {
        match s {
            "pending" => StatusFilter::Pending,
            "confirmed" => StatusFilter::Confirmed,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }
}

impl From<&str> for DateFilter {
    fn from(s: &str) -> Self {
        match s {
            "today" => DateFilter::Today,
            "upcoming" => DateFilter::Upcoming,
            "thisWeek" => DateFilter::ThisWeek,
            "past" => DateFilter::Past,
            _ => DateFilter::All,
        }
    }
}

/// Filter arguments combined by [`filter_orders`].
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub date: DateFilter,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = Some(term).filter(|s| !s.is_empty());
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }
}

/// Start of the calendar day containing `now`.
fn day_start(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

fn matches_search(order: &Order, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let contains = |hay: &str| hay.to_lowercase().contains(&needle);

    contains(&order.client_name)
        || contains(&order.client_phone)
        || order
            .items
            .iter()
            .any(|item| contains(&item.service_name) || contains(&item.executor_name))
}

fn matches_status(order: &Order, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Completed => order.completed,
        StatusFilter::Confirmed => order.confirmed && !order.completed,
        // Unconfirmed orders count as pending whatever `completed` says;
        // the ingest boundary normalizes that combination away.
        StatusFilter::Pending => !order.confirmed,
    }
}

fn matches_date(order: &Order, date: DateFilter, now: NaiveDateTime) -> bool {
    let today = day_start(now);
    let tomorrow = today + Duration::days(1);

    match date {
        DateFilter::All => true,
        DateFilter::Today => order.start >= today && order.start < tomorrow,
        DateFilter::Upcoming => order.start >= tomorrow,
        DateFilter::ThisWeek => order.start >= today && order.start < today + Duration::days(7),
        DateFilter::Past => order.start < today,
    }
}

/// Applies the compound filter and returns a new collection sorted
/// descending by start, stable for equal timestamps.
pub fn filter_orders(orders: &[Order], filter: &OrderFilter, now: NaiveDateTime) -> Vec<Order> {
    let mut result: Vec<Order> = orders
        .iter()
        .filter(|order| {
            filter
                .search
                .as_deref()
                .is_none_or(|needle| matches_search(order, needle))
                && matches_status(order, filter.status)
                && matches_date(order, filter.date, now)
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| b.start.cmp(&a.start));

    result
}
