//! Reference backends, at least two per capability.
//!
//! Every backend implements one capability (the notifiers implement both the user and
//! order flavours of notification), holds no shared state, and never calls another
//! backend or an orchestrator.
//!
//! | Capability | Backends |
//! |---|---|
//! | [`UserRepository`](crate::framework::UserRepository) | [`MySqlUserRepository`], [`PostgresUserRepository`] |
//! | [`OrderRepository`](crate::framework::OrderRepository) | [`MySqlOrderRepository`], [`PostgresOrderRepository`] |
//! | [`UserNotifier`](crate::framework::UserNotifier), [`OrderNotifier`](crate::framework::OrderNotifier) | [`EmailNotifier`], [`SmsNotifier`] |
//! | [`Logger`](crate::framework::Logger) | [`TracingLogger`], [`FileLogger`] |
//! | [`OrderValidator`](crate::framework::OrderValidator) | [`RuleValidator`], [`FailFastValidator`] |
//! | [`PriceCalculator`](crate::framework::PriceCalculator) | [`DiscountCalculator`], [`ListPriceCalculator`] |

pub mod computation;
pub mod logging;
pub mod notification;
pub mod persistence;
pub mod validation;

pub use computation::*;
pub use logging::*;
pub use notification::*;
pub use persistence::*;
pub use validation::*;
