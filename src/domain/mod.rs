//! Domain aggregates exposed by the booking service layer.

pub mod client;
pub mod order;
pub mod status;
pub mod types;
