//! Booking order aggregate.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::status::DerivedStatus;
use crate::domain::types::{Money, OrderId};

/// One service line within an order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Stable service identifier when the upstream supplies one; grouping
    /// falls back to `service_name` otherwise.
    pub service_id: Option<String>,
    pub service_name: String,
    pub executor_name: String,
    pub service_price: Money,
    pub start: NaiveDateTime,
}

/// One booking transaction.
///
/// Client fields are a denormalized snapshot taken at booking time, not
/// foreign keys; they may be empty strings for malformed upstream data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub client_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_address: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub confirmed: bool,
    pub completed: bool,
    pub comment: Option<String>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sums the item prices into the order total.
    ///
    /// An order without items totals zero; upstream is expected to always
    /// supply at least one item for anything shown to a user.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.service_price).sum()
    }

    /// Derives the display status from the order flags.
    pub fn status(&self) -> DerivedStatus {
        DerivedStatus::resolve(self.confirmed, self.completed)
    }

    /// Normalizes the `completed ⇒ confirmed` invariant.
    ///
    /// A completed order that was never confirmed is an illegal state from
    /// upstream; it is normalized at the ingest boundary rather than
    /// rejected, so the resolver and filters never see the combination.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.completed {
            self.confirmed = true;
        }
        self
    }
}
