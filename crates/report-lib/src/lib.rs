//! Report library for Kubecost cost analysis
//!
//! This crate provides the core functionality for:
//! - Typed decoding of Kubecost allocation and asset responses
//! - Query parameter construction for the cost-reporting API
//! - Cost aggregation: per-dimension breakdowns, overall category
//!   totals, cumulative daily series, and the execution cost table

pub mod aggregate;
pub mod error;
pub mod models;
pub mod query;

pub use error::ReportError;
pub use models::*;
pub use query::{Aggregate, Dimension, QueryParams, Window};
