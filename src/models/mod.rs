//! Configuration models shared with embedding applications.

pub mod config;
