//! Order processing: validate, price, persist, confirm.

pub mod error;

pub use error::*;

use tracing::{debug, info, instrument, warn};

use crate::framework::{
    BackendError, OrderNotifier, OrderRepository, OrderValidator, PriceCalculator, Rejection,
};
use crate::model::Order;

/// Prices of an accepted order, without any side effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub subtotal: f64,
    pub total: f64,
}

/// Runs the four-step order pipeline over injected capabilities.
///
/// # Sequence
/// 1. [`OrderValidator::validate`]: a rejection stops the pipeline before any effect.
/// 2. [`PriceCalculator::compute_total`]: pure.
/// 3. [`OrderRepository::save`] with the computed total.
/// 4. [`OrderNotifier::send_confirmation`] quoting the same total.
///
/// # No Compensation
/// A failure in step 4 leaves the order saved by step 3. There is no rollback; the
/// caller learns about it through [`PipelineError::Notification`]. Adding a compensating
/// write (a saga or a two-phase save) would change this contract.
pub struct OrderPipeline {
    validator: Box<dyn OrderValidator>,
    calculator: Box<dyn PriceCalculator>,
    repository: Box<dyn OrderRepository>,
    notifier: Box<dyn OrderNotifier>,
}

impl OrderPipeline {
    /// Builds a pipeline from one backend per capability. All four are required.
    pub fn new(
        validator: impl OrderValidator + 'static,
        calculator: impl PriceCalculator + 'static,
        repository: impl OrderRepository + 'static,
        notifier: impl OrderNotifier + 'static,
    ) -> Self {
        Self::from_boxed(
            Box::new(validator),
            Box::new(calculator),
            Box::new(repository),
            Box::new(notifier),
        )
    }

    pub fn from_boxed(
        validator: Box<dyn OrderValidator>,
        calculator: Box<dyn PriceCalculator>,
        repository: Box<dyn OrderRepository>,
        notifier: Box<dyn OrderNotifier>,
    ) -> Self {
        Self {
            validator,
            calculator,
            repository,
            notifier,
        }
    }

    /// Processes an order and returns the confirmed total.
    #[instrument(skip(self, order), fields(order_id = order.id))]
    pub fn process(&self, order: &Order) -> Result<f64, PipelineError> {
        debug!(?order, "process called");

        if let Err(rejection) = self.validator.validate(order) {
            warn!(%rejection, "Order rejected");
            return Err(rejection.into());
        }

        let total = self.calculator.compute_total(order);
        debug!(total, "Total computed");

        self.repository
            .save(order, total)
            .map_err(PipelineError::Persistence)?;

        if let Err(e) = self.notifier.send_confirmation(order, total) {
            warn!(error = %e, "Order saved without confirmation");
            return Err(PipelineError::Notification(e));
        }

        info!(total, "Order processed");
        Ok(total)
    }

    /// Validates and prices an order without saving or notifying.
    #[instrument(skip(self, order), fields(order_id = order.id))]
    pub fn quote(&self, order: &Order) -> Result<Quote, Rejection> {
        self.validator.validate(order)?;
        Ok(Quote {
            subtotal: self.calculator.compute_subtotal(order),
            total: self.calculator.compute_total(order),
        })
    }

    /// Sends the cancellation notice for an order.
    #[instrument(skip(self, order), fields(order_id = order.id))]
    pub fn cancel(&self, order: &Order) -> Result<(), BackendError> {
        self.notifier.send_cancellation(order)?;
        info!("Order cancelled");
        Ok(())
    }

    /// Looks an order up. The repository's answer is returned as is.
    #[instrument(skip(self))]
    pub fn find_order(&self, id: u64) -> Result<Option<Order>, BackendError> {
        self.repository.find_by_id(id)
    }
}
