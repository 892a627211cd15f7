//! Order lifecycle and analytics core of the booking service.
//!
//! Owns the derivation rules over booking orders: display status and
//! totals, compound filtering with relative date windows, statistical
//! aggregation for the company and executor dashboards, and the state
//! machine orchestrating refresh/selection/actions. Transport,
//! persistence, and rendering live in the embedding application and are
//! consumed only through the `repository` data contracts.

pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod services;
