//! Tasks and task comments for the tracker.
//!
//! A task is a unit of work owned by exactly one project. Comments are
//! immutable annotations attached to a task. Creation enforces the owning
//! project's lifecycle gate and per-project title uniqueness. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
