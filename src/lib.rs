#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Capability Pipeline
//!
//! > **Orchestrators that depend on capabilities, not on backends.**
//!
//! This crate shows how a multi-step business operation (validate → compute → persist →
//! notify → log) is composed from narrow, interchangeable backends that are chosen once,
//! at construction time, by a composition root.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **Capabilities are traits**: each one exposes only what an orchestrator needs
//!   (a repository never leaks a connection handle).
//! - **Wiring is manual**: an orchestrator takes one boxed trait object per capability in its
//!   constructor. There is no container, no reflection, and no default backend.
//! - **Failure policy belongs to the orchestrator**: the user service is best-effort and reports
//!   through its logger; the order pipeline returns a typed [`PipelineError`](order_pipeline::PipelineError)
//!   that keeps rejections apart from backend failures.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Contracts ([`framework`])
//! - **Role**: Capability traits, failure signals, and test doubles.
//! - **Key items**: [`UserRepository`](framework::UserRepository), [`OrderValidator`](framework::OrderValidator),
//!   [`BackendError`](framework::BackendError), [`MockBackend`](framework::mock::MockBackend).
//!
//! ### 2. The Data ([`model`])
//! - **Role**: Plain entities with no behavior: [`User`](model::User), [`Order`](model::Order).
//!
//! ### 3. The Implementations ([`backends`])
//! - **Role**: At least two interchangeable backends per capability.
//!
//! ### 4. The Orchestrators ([`user_service`], [`order_pipeline`])
//! - **Role**: Sequence capability calls and decide what a failure means.
//!
//! ### 5. The Composition Root ([`lifecycle`])
//! - **Role**: Reads a [`SystemConfig`](lifecycle::SystemConfig), picks backends, builds a
//!   [`ServiceSystem`](lifecycle::ServiceSystem).
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use capability_pipeline::backends::{DiscountCalculator, EmailNotifier, MySqlOrderRepository, RuleValidator};
//! use capability_pipeline::model::Order;
//! use capability_pipeline::order_pipeline::OrderPipeline;
//!
//! let pipeline = OrderPipeline::new(
//!     RuleValidator,
//!     DiscountCalculator::default(),
//!     MySqlOrderRepository,
//!     EmailNotifier,
//! );
//!
//! let order = Order::new(1, "Maria Santos", "Mouse", 3, 150.00);
//! let total = pipeline.process(&order).unwrap();
//! assert!((total - 405.0).abs() < 1e-9);
//!
//! let rejected = pipeline.process(&Order::new(2, "Maria Santos", "Mouse", 0, 150.00));
//! assert!(rejected.unwrap_err().is_rejection());
//! ```
//!
//! ## Concurrency Model
//!
//! Every operation is synchronous and runs its steps strictly in order. Orchestrators share
//! no state, so separate instances can be used from separate threads freely; a single
//! instance is meant to run one operation at a time.
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod backends;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_pipeline;
pub mod user_service;
