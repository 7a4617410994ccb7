//! Simulated message delivery channels.

use tracing::info;

use crate::framework::{BackendError, OrderNotifier, UserNotifier};
use crate::model::{Order, User};

/// Delivers notifications by email.
///
/// Users without a usable address (no `@`) can not be reached and fail with
/// [`BackendError::Delivery`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl UserNotifier for EmailNotifier {
    fn send(&self, user: &User, message: &str) -> Result<(), BackendError> {
        if !user.email.contains('@') {
            return Err(BackendError::Delivery(format!(
                "user {} has no valid email address",
                user.id
            )));
        }
        info!(channel = "email", to = %user.email, subject = "Notification", %message, "Sending email");
        Ok(())
    }
}

impl OrderNotifier for EmailNotifier {
    fn send_confirmation(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        info!(
            channel = "email",
            customer = %order.customer,
            subject = format_args!("Order #{} confirmed", order.id),
            total = format_args!("{:.2}", total),
            "Sending confirmation"
        );
        Ok(())
    }

    fn send_cancellation(&self, order: &Order) -> Result<(), BackendError> {
        info!(
            channel = "email",
            customer = %order.customer,
            subject = format_args!("Order #{} cancelled", order.id),
            "Sending cancellation"
        );
        Ok(())
    }
}

/// Delivers notifications by text message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl UserNotifier for SmsNotifier {
    fn send(&self, user: &User, message: &str) -> Result<(), BackendError> {
        info!(channel = "sms", to = %user.name, %message, "Sending SMS");
        Ok(())
    }
}

impl OrderNotifier for SmsNotifier {
    fn send_confirmation(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        info!(
            channel = "sms",
            customer = %order.customer,
            order_id = order.id,
            total = format_args!("{:.2}", total),
            "Sending confirmation"
        );
        Ok(())
    }

    fn send_cancellation(&self, order: &Order) -> Result<(), BackendError> {
        info!(channel = "sms", customer = %order.customer, order_id = order.id, "Sending cancellation");
        Ok(())
    }
}
