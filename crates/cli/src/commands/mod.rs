//! CLI command implementations

pub mod breakdown;
pub mod daily;
pub mod executions;
pub mod orgs;
pub mod overall;
