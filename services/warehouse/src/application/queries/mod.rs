//! Queries module

pub mod warehouse_queries;

pub use warehouse_queries::*;
