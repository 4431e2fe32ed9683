//! Taskdeck: task and task list management core.
//!
//! This crate provides the domain model, repository contracts, storage
//! backends and services for managing tasks grouped into task lists. HTTP
//! routing and authentication live outside the crate and call into the
//! services.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, filtering and validation
//! - [`task_list`]: Task lists and their completion percentage
//! - [`config`]: Environment configuration
//! - [`logging`]: The injected logging collaborator
//! - [`fault`]: Conversion of caught panics into errors

pub mod config;
pub mod error;
pub mod fault;
pub mod identity;
pub mod logging;
pub mod postgres;
pub mod task;
pub mod task_list;

#[cfg(test)]
mod test_support;
