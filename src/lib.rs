//! Project tracker: projects, their tasks, and task comments.
//!
//! This crate provides the validation and orchestration core for a small
//! project-planning system. Entities are self-validating and use-cases combine
//! repository lookups with business rules before anything is persisted.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//! - **Services**: One use-case per externally invocable operation
//!
//! # Modules
//!
//! - [`project`]: Project creation and lookup
//! - [`task`]: Task creation, comments, and task queries
//! - [`error`]: Failure classification shared by every use-case

pub mod error;
pub mod project;
pub mod task;
