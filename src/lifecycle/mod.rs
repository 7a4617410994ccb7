//! Composition root and runtime setup.
//!
//! This module is where concrete backends are chosen. Nothing else in the crate names a
//! concrete backend type when building an orchestrator.
//!
//! # Main Components
//!
//! - [`SystemConfig`] - Backend selection loaded from YAML
//! - [`ServiceSystem`] - Wires the selected backends into a `UserService` and an `OrderPipeline`
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod observability;
pub mod system;

pub use config::*;
pub use observability::*;
pub use system::*;
