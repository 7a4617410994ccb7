//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`). Levels come from `RUST_LOG`, defaulting to `info`.
//!
//! ## What Gets Traced
//!
//! - **Orchestrator spans**: `create_user`, `find_user`, `process`, `quote`, `cancel`, `find_order`,
//!   each carrying the entity id as a field
//! - **Backend effects**: every simulated save or delivery, tagged with `backend` or `channel`
//! - **Business log**: lines sent to the [`TracingLogger`](crate::backends::TracingLogger), tagged `sink="tracing"`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo test -- --nocapture
//!
//! # Filter to one module
//! RUST_LOG=capability_pipeline::order_pipeline=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug`, the pipeline logs the full order **once** at the start:
//!
//! ```text
//! DEBUG process: process called order=Order { id: 1, customer: "Maria Santos", product: "Mouse", quantity: 3, unit_price: 150.0 } order_id=1
//! DEBUG process: Total computed total=405.0 order_id=1
//! INFO process: Saving order backend="mysql" order_id=1 customer=Maria Santos product=Mouse total=405.00 order_id=1
//! INFO process: Sending confirmation channel="email" customer=Maria Santos subject=Order #1 confirmed total=405.00 order_id=1
//! INFO process: Order processed total=405.0 order_id=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls are no-ops.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - backends tag themselves instead
        .compact()
        .try_init();
}
