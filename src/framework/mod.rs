//! Capability contracts shared by backends and orchestrators.
//!
//! This module provides the building blocks every pipeline is composed from:
//! the capability traits, the failure signals they return, and test doubles.
//!
//! # Main Components
//!
//! - [`UserRepository`], [`UserNotifier`], [`Logger`] - User service capabilities
//! - [`OrderValidator`], [`PriceCalculator`], [`OrderRepository`], [`OrderNotifier`] - Order pipeline capabilities
//! - [`BackendError`], [`Rejection`] - Failure signals
//!
//! # Testing
//!
//! See [`mock`] module for recording and scripted doubles of every capability.

pub mod core;
pub mod mock;

pub use core::*;
