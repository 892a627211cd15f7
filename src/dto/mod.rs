//! DTO modules that bridge services with presentation collaborators.

pub mod statistics;
