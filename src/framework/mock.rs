//! # Mock Framework
//!
//! Utilities for testing orchestrators in isolation.
//!
//! - [`CallLog`] records every capability call, in order, across all doubles sharing it.
//! - [`Recorded`] wraps any real backend and records the calls it receives.
//! - [`MockBackend`] implements every capability with scripted responses.
//! - [`FailingBackend`] fails every fallible call.
//!
//! # Example
//! ```
//! use capability_pipeline::framework::mock::{Call, CallLog, MockBackend};
//! use capability_pipeline::framework::BackendError;
//! use capability_pipeline::user_service::UserService;
//!
//! let log = CallLog::new();
//! let mock = MockBackend::with_log(log.clone());
//! mock.expect_save_user()
//!     .return_err(BackendError::Storage("disk full".into()));
//!
//! let service = UserService::new(mock.clone(), mock.clone(), mock.clone());
//! service.create_user(1, "Ana", "ana@example.com");
//!
//! assert_eq!(log.count(|call| matches!(call, Call::NotifyUser { .. })), 0);
//! mock.verify();
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backends::DiscountCalculator;
use crate::framework::{
    BackendError, Logger, OrderNotifier, OrderRepository, OrderValidator, PriceCalculator,
    Rejection, UserNotifier, UserRepository,
};
use crate::model::{Order, User};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// CALL RECORDING
// =============================================================================

/// One capability invocation as seen from the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindUser(u64),
    SaveUser(u64),
    NotifyUser { user_id: u64, message: String },
    Info(String),
    Error(String),
    Validate(u64),
    Subtotal(u64),
    Total(u64),
    SaveOrder { order_id: u64, total: f64 },
    FindOrder(u64),
    Confirm { order_id: u64, total: f64 },
    Cancel(u64),
}

impl Call {
    /// Short name of the capability operation, without arguments.
    pub fn kind(&self) -> &'static str {
        match self {
            Call::FindUser(_) => "find_user",
            Call::SaveUser(_) => "save_user",
            Call::NotifyUser { .. } => "notify_user",
            Call::Info(_) => "info",
            Call::Error(_) => "error",
            Call::Validate(_) => "validate",
            Call::Subtotal(_) => "subtotal",
            Call::Total(_) => "total",
            Call::SaveOrder { .. } => "save_order",
            Call::FindOrder(_) => "find_order",
            Call::Confirm { .. } => "confirm",
            Call::Cancel(_) => "cancel",
        }
    }
}

/// Shared, ordered record of capability calls.
///
/// Cloning a `CallLog` yields a handle to the same record, so several doubles
/// can write into one sequence.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        lock(&self.calls).push(call);
    }

    /// Snapshot of every call recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    /// Operation names in call order.
    pub fn kinds(&self) -> Vec<&'static str> {
        lock(&self.calls).iter().map(Call::kind).collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        lock(&self.calls).iter().filter(|call| predicate(call)).count()
    }

    pub fn len(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.calls).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

/// Decorator that records every call before delegating to the wrapped backend.
///
/// Used to compare the call sequences two interchangeable backends receive.
pub struct Recorded<B> {
    inner: B,
    log: CallLog,
}

impl<B> Recorded<B> {
    pub fn new(inner: B, log: CallLog) -> Self {
        Self { inner, log }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: UserRepository> UserRepository for Recorded<B> {
    fn find_by_id(&self, id: u64) -> Result<Option<User>, BackendError> {
        self.log.record(Call::FindUser(id));
        self.inner.find_by_id(id)
    }

    fn save(&self, user: &User) -> Result<(), BackendError> {
        self.log.record(Call::SaveUser(user.id));
        self.inner.save(user)
    }
}

impl<B: UserNotifier> UserNotifier for Recorded<B> {
    fn send(&self, user: &User, message: &str) -> Result<(), BackendError> {
        self.log.record(Call::NotifyUser {
            user_id: user.id,
            message: message.to_string(),
        });
        self.inner.send(user, message)
    }
}

impl<B: Logger> Logger for Recorded<B> {
    fn info(&self, message: &str) {
        self.log.record(Call::Info(message.to_string()));
        self.inner.info(message);
    }

    fn error(&self, message: &str) {
        self.log.record(Call::Error(message.to_string()));
        self.inner.error(message);
    }
}

impl<B: OrderValidator> OrderValidator for Recorded<B> {
    fn validate(&self, order: &Order) -> Result<(), Rejection> {
        self.log.record(Call::Validate(order.id));
        self.inner.validate(order)
    }
}

impl<B: PriceCalculator> PriceCalculator for Recorded<B> {
    fn compute_subtotal(&self, order: &Order) -> f64 {
        self.log.record(Call::Subtotal(order.id));
        self.inner.compute_subtotal(order)
    }

    fn compute_total(&self, order: &Order) -> f64 {
        self.log.record(Call::Total(order.id));
        self.inner.compute_total(order)
    }
}

impl<B: OrderRepository> OrderRepository for Recorded<B> {
    fn save(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        self.log.record(Call::SaveOrder {
            order_id: order.id,
            total,
        });
        self.inner.save(order, total)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Order>, BackendError> {
        self.log.record(Call::FindOrder(id));
        self.inner.find_by_id(id)
    }
}

impl<B: OrderNotifier> OrderNotifier for Recorded<B> {
    fn send_confirmation(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        self.log.record(Call::Confirm {
            order_id: order.id,
            total,
        });
        self.inner.send_confirmation(order, total)
    }

    fn send_cancellation(&self, order: &Order) -> Result<(), BackendError> {
        self.log.record(Call::Cancel(order.id));
        self.inner.send_cancellation(order)
    }
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// FIFO of scripted responses for one operation.
struct Script<R> {
    queue: Arc<Mutex<VecDeque<R>>>,
}

impl<R> Script<R> {
    fn push(&self, response: R) {
        lock(&self.queue).push_back(response);
    }

    fn pop(&self) -> Option<R> {
        lock(&self.queue).pop_front()
    }

    fn remaining(&self) -> usize {
        lock(&self.queue).len()
    }
}

impl<R> Clone for Script<R> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
        }
    }
}

impl<R> Default for Script<R> {
    fn default() -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
        }
    }
}

/// Builder returned by the `expect_*` methods of [`MockBackend`].
///
/// Each call to a terminal method queues one response; calls are answered in order.
pub struct Expectation<R> {
    script: Script<R>,
}

impl<R> Expectation<R> {
    /// Queues an arbitrary response.
    pub fn returns(self, response: R) {
        self.script.push(response);
    }
}

impl<T> Expectation<Result<T, BackendError>> {
    /// Queues a successful result.
    pub fn return_ok(self, value: T) {
        self.script.push(Ok(value));
    }

    /// Queues a failure.
    pub fn return_err(self, error: BackendError) {
        self.script.push(Err(error));
    }
}

impl Expectation<Result<(), Rejection>> {
    /// Queues an acceptance.
    pub fn accept(self) {
        self.script.push(Ok(()));
    }

    /// Queues a rejection with the given reasons.
    pub fn reject<I, S>(self, reasons: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script.push(Err(Rejection::new(reasons)));
    }
}

/// A scripted double implementing every capability.
///
/// Clones share both the call log and the scripts, so one mock can be handed to an
/// orchestrator in several capability slots and still be inspected afterwards.
/// Calls with no queued response succeed: lookups return `Ok(None)`, validation accepts,
/// and totals use the default [`DiscountCalculator`].
///
/// # Example
/// ```ignore
/// let mock = MockBackend::new();
/// mock.expect_validate().reject(["quantity must be greater than zero"]);
///
/// let pipeline = OrderPipeline::new(mock.clone(), mock.clone(), mock.clone(), mock.clone());
/// // Use pipeline in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockBackend {
    log: CallLog,
    find_user: Script<Result<Option<User>, BackendError>>,
    save_user: Script<Result<(), BackendError>>,
    send: Script<Result<(), BackendError>>,
    validate: Script<Result<(), Rejection>>,
    total: Script<f64>,
    save_order: Script<Result<(), BackendError>>,
    find_order: Script<Result<Option<Order>, BackendError>>,
    confirmation: Script<Result<(), BackendError>>,
    cancellation: Script<Result<(), BackendError>>,
}

impl MockBackend {
    /// Creates a new mock with its own call log and no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that records into an existing log.
    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn expect_find_user(&self) -> Expectation<Result<Option<User>, BackendError>> {
        Expectation {
            script: self.find_user.clone(),
        }
    }

    pub fn expect_save_user(&self) -> Expectation<Result<(), BackendError>> {
        Expectation {
            script: self.save_user.clone(),
        }
    }

    pub fn expect_send(&self) -> Expectation<Result<(), BackendError>> {
        Expectation {
            script: self.send.clone(),
        }
    }

    pub fn expect_validate(&self) -> Expectation<Result<(), Rejection>> {
        Expectation {
            script: self.validate.clone(),
        }
    }

    pub fn expect_total(&self) -> Expectation<f64> {
        Expectation {
            script: self.total.clone(),
        }
    }

    pub fn expect_save_order(&self) -> Expectation<Result<(), BackendError>> {
        Expectation {
            script: self.save_order.clone(),
        }
    }

    pub fn expect_find_order(&self) -> Expectation<Result<Option<Order>, BackendError>> {
        Expectation {
            script: self.find_order.clone(),
        }
    }

    pub fn expect_confirmation(&self) -> Expectation<Result<(), BackendError>> {
        Expectation {
            script: self.confirmation.clone(),
        }
    }

    pub fn expect_cancellation(&self) -> Expectation<Result<(), BackendError>> {
        Expectation {
            script: self.cancellation.clone(),
        }
    }

    /// Verifies that every queued response was consumed.
    pub fn verify(&self) {
        let remaining = self.find_user.remaining()
            + self.save_user.remaining()
            + self.send.remaining()
            + self.validate.remaining()
            + self.total.remaining()
            + self.save_order.remaining()
            + self.find_order.remaining()
            + self.confirmation.remaining()
            + self.cancellation.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl UserRepository for MockBackend {
    fn find_by_id(&self, id: u64) -> Result<Option<User>, BackendError> {
        self.log.record(Call::FindUser(id));
        self.find_user.pop().unwrap_or(Ok(None))
    }

    fn save(&self, user: &User) -> Result<(), BackendError> {
        self.log.record(Call::SaveUser(user.id));
        self.save_user.pop().unwrap_or(Ok(()))
    }
}

impl UserNotifier for MockBackend {
    fn send(&self, user: &User, message: &str) -> Result<(), BackendError> {
        self.log.record(Call::NotifyUser {
            user_id: user.id,
            message: message.to_string(),
        });
        self.send.pop().unwrap_or(Ok(()))
    }
}

impl Logger for MockBackend {
    fn info(&self, message: &str) {
        self.log.record(Call::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.log.record(Call::Error(message.to_string()));
    }
}

impl OrderValidator for MockBackend {
    fn validate(&self, order: &Order) -> Result<(), Rejection> {
        self.log.record(Call::Validate(order.id));
        self.validate.pop().unwrap_or(Ok(()))
    }
}

impl PriceCalculator for MockBackend {
    fn compute_subtotal(&self, order: &Order) -> f64 {
        self.log.record(Call::Subtotal(order.id));
        DiscountCalculator::default().compute_subtotal(order)
    }

    fn compute_total(&self, order: &Order) -> f64 {
        self.log.record(Call::Total(order.id));
        self.total
            .pop()
            .unwrap_or_else(|| DiscountCalculator::default().compute_total(order))
    }
}

impl OrderRepository for MockBackend {
    fn save(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        self.log.record(Call::SaveOrder {
            order_id: order.id,
            total,
        });
        self.save_order.pop().unwrap_or(Ok(()))
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Order>, BackendError> {
        self.log.record(Call::FindOrder(id));
        self.find_order.pop().unwrap_or(Ok(None))
    }
}

impl OrderNotifier for MockBackend {
    fn send_confirmation(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        self.log.record(Call::Confirm {
            order_id: order.id,
            total,
        });
        self.confirmation.pop().unwrap_or(Ok(()))
    }

    fn send_cancellation(&self, order: &Order) -> Result<(), BackendError> {
        self.log.record(Call::Cancel(order.id));
        self.cancellation.pop().unwrap_or(Ok(()))
    }
}

// =============================================================================
// ALWAYS-FAILING BACKEND
// =============================================================================

/// A backend that fails every fallible call, for partial-failure tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingBackend;

impl FailingBackend {
    fn failure() -> BackendError {
        BackendError::Unavailable("simulated failure".to_string())
    }
}

impl UserRepository for FailingBackend {
    fn find_by_id(&self, _id: u64) -> Result<Option<User>, BackendError> {
        Err(Self::failure())
    }

    fn save(&self, _user: &User) -> Result<(), BackendError> {
        Err(Self::failure())
    }
}

impl UserNotifier for FailingBackend {
    fn send(&self, _user: &User, _message: &str) -> Result<(), BackendError> {
        Err(Self::failure())
    }
}

impl OrderValidator for FailingBackend {
    fn validate(&self, _order: &Order) -> Result<(), Rejection> {
        Err(Rejection::because("simulated rejection"))
    }
}

impl OrderRepository for FailingBackend {
    fn save(&self, _order: &Order, _total: f64) -> Result<(), BackendError> {
        Err(Self::failure())
    }

    fn find_by_id(&self, _id: u64) -> Result<Option<Order>, BackendError> {
        Err(Self::failure())
    }
}

impl OrderNotifier for FailingBackend {
    fn send_confirmation(&self, _order: &Order, _total: f64) -> Result<(), BackendError> {
        Err(Self::failure())
    }

    fn send_cancellation(&self, _order: &Order) -> Result<(), BackendError> {
        Err(Self::failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_responses_are_consumed_in_order() {
        let mock = MockBackend::new();
        mock.expect_save_user().return_err(BackendError::Storage("locked".into()));
        mock.expect_save_user().return_ok(());

        let user = User::new(7, "Test", "test@example.com");
        assert_eq!(
            UserRepository::save(&mock, &user),
            Err(BackendError::Storage("locked".into()))
        );
        assert_eq!(UserRepository::save(&mock, &user), Ok(()));
        // Unscripted calls succeed
        assert_eq!(UserRepository::save(&mock, &user), Ok(()));

        assert_eq!(mock.log().kinds(), vec!["save_user", "save_user", "save_user"]);
        mock.verify();
    }

    #[test]
    fn test_clones_share_log_and_scripts() {
        let mock = MockBackend::new();
        let handle = mock.clone();
        handle.expect_validate().reject(["customer name is required"]);

        let order = Order::new(1, "", "Mouse", 1, 10.0);
        let result = mock.validate(&order);
        assert!(result.unwrap_err().mentions("customer"));
        assert_eq!(handle.log().calls(), vec![Call::Validate(1)]);
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_unused_expectation() {
        let mock = MockBackend::new();
        mock.expect_confirmation().return_ok(());
        mock.verify();
    }

    #[test]
    fn test_recorded_delegates_to_inner() {
        let log = CallLog::new();
        let recorded = Recorded::new(FailingBackend, log.clone());
        let user = User::new(3, "Bob", "bob@example.com");

        assert!(UserRepository::save(&recorded, &user).is_err());
        assert!(UserNotifier::send(&recorded, &user, "hi").is_err());
        assert_eq!(
            log.calls(),
            vec![
                Call::SaveUser(3),
                Call::NotifyUser {
                    user_id: 3,
                    message: "hi".into()
                }
            ]
        );
    }

    #[test]
    fn test_unscripted_total_uses_default_discount() {
        let mock = MockBackend::new();
        let order = Order::new(1, "Maria Santos", "Mouse", 3, 150.0);
        assert!((mock.compute_total(&order) - 405.0).abs() < 1e-9);
        mock.expect_total().returns(1.0);
        assert_eq!(mock.compute_total(&order), 1.0);
    }
}
