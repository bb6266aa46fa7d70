//! Project planning units for the tracker.
//!
//! A project is the top-level planning unit. Its lifecycle status gates
//! whether new tasks may be attached to it. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
