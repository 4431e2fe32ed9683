//! Task list management.
//!
//! A task list groups tasks by identity; tasks hold the reference. Progress
//! is computed from the tasks on demand.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
