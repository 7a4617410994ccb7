//! # Core Capability Contracts
//!
//! This module defines the narrow contracts that every backend satisfies and that the
//! orchestrators consume.
//!
//! ## Key Types
//!
//! - [`UserRepository`], [`UserNotifier`], [`Logger`]: Capabilities used by the user service.
//! - [`OrderValidator`], [`PriceCalculator`], [`OrderRepository`], [`OrderNotifier`]: Capabilities
//!   used by the order pipeline.
//! - [`BackendError`], [`Rejection`]: The two failure signals a capability can return.

use thiserror::Error;

use crate::model::{Order, User};

// =============================================================================
// 1. THE FAILURE SIGNALS
// =============================================================================

/// Errors a persistence or notification backend can report.
///
/// No backend-specific detail (connection handles, driver codes) crosses this boundary;
/// the variants only tell the orchestrator which kind of external effect did not happen.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    /// The storage engine refused or could not complete a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A message could not be delivered to its recipient.
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// The backend could not be reached at all.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// A validator's refusal of a candidate entity.
///
/// Always carries at least one human-readable reason.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Rejected: {}", reasons.join("; "))]
pub struct Rejection {
    reasons: Vec<String>,
}

impl Rejection {
    /// Creates a rejection from a list of reasons.
    ///
    /// Blank reasons are dropped. If none remain, a generic reason takes their place.
    pub fn new<I, S>(reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reasons: Vec<String> = reasons
            .into_iter()
            .map(Into::into)
            .filter(|reason| !reason.trim().is_empty())
            .collect();
        if reasons.is_empty() {
            reasons.push("candidate rejected".to_string());
        }
        Self { reasons }
    }

    /// Rejection with a single reason.
    pub fn because(reason: impl Into<String>) -> Self {
        Self::new([reason.into()])
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Returns `true` if any reason mentions `needle` (case-insensitive).
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.reasons
            .iter()
            .any(|reason| reason.to_lowercase().contains(&needle))
    }
}

// =============================================================================
// 2. THE USER CAPABILITIES
// =============================================================================

/// Persistence capability for users.
///
/// A `save` is atomic from the caller's point of view: it succeeds or fails as a whole.
pub trait UserRepository: Send + Sync {
    /// Looks a user up by its identifier. `Ok(None)` means absent.
    fn find_by_id(&self, id: u64) -> Result<Option<User>, BackendError>;

    /// Stores the user.
    fn save(&self, user: &User) -> Result<(), BackendError>;
}

/// Message delivery capability for users.
pub trait UserNotifier: Send + Sync {
    /// Sends `message` to `user`.
    fn send(&self, user: &User, message: &str) -> Result<(), BackendError>;
}

/// Business-level log sink.
///
/// Logging never fails observably. A backend that cannot record a line drops it.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

// =============================================================================
// 3. THE ORDER CAPABILITIES
// =============================================================================

/// Acceptance check for candidate orders.
pub trait OrderValidator: Send + Sync {
    /// Accepts the order (`Ok(())`) or rejects it with reasons.
    fn validate(&self, order: &Order) -> Result<(), Rejection>;
}

/// Pure price derivation.
///
/// Implementations must be deterministic and side-effect free.
pub trait PriceCalculator: Send + Sync {
    /// The undiscounted amount: `quantity × unit_price`.
    ///
    /// Backends should not override this; [`compute_total`](Self::compute_total)
    /// builds on it so both operations agree on the undiscounted term.
    fn compute_subtotal(&self, order: &Order) -> f64 {
        f64::from(order.quantity) * order.unit_price
    }

    /// The amount actually charged.
    fn compute_total(&self, order: &Order) -> f64;
}

/// Persistence capability for orders.
pub trait OrderRepository: Send + Sync {
    /// Records the order together with its already-computed total.
    fn save(&self, order: &Order, total: f64) -> Result<(), BackendError>;

    /// Looks an order up by its identifier. `Ok(None)` means absent.
    fn find_by_id(&self, id: u64) -> Result<Option<Order>, BackendError>;
}

/// Message delivery capability for orders.
pub trait OrderNotifier: Send + Sync {
    /// Confirms the order to its customer, quoting `total`.
    fn send_confirmation(&self, order: &Order, total: f64) -> Result<(), BackendError>;

    /// Tells the customer the order was cancelled.
    fn send_cancellation(&self, order: &Order) -> Result<(), BackendError>;
}
