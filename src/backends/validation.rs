//! Order acceptance rules.

use crate::framework::{OrderValidator, Rejection};
use crate::model::Order;

/// A predicate that must hold, and the reason reported when it does not.
type Rule = (fn(&Order) -> bool, &'static str);

fn has_customer(order: &Order) -> bool {
    !order.customer.trim().is_empty()
}

fn has_quantity(order: &Order) -> bool {
    order.quantity > 0
}

fn has_price(order: &Order) -> bool {
    order.unit_price.is_finite() && order.unit_price > 0.0
}

const RULES: &[Rule] = &[
    (has_customer, "customer name is required"),
    (has_quantity, "quantity must be greater than zero"),
    (has_price, "unit price must be greater than zero"),
];

fn violations(order: &Order) -> impl Iterator<Item = &'static str> + '_ {
    RULES
        .iter()
        .filter(move |(holds, _)| !holds(order))
        .map(|(_, reason)| *reason)
}

/// Checks every rule and reports all violations at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl OrderValidator for RuleValidator {
    fn validate(&self, order: &Order) -> Result<(), Rejection> {
        let reasons: Vec<&str> = violations(order).collect();
        if reasons.is_empty() {
            Ok(())
        } else {
            Err(Rejection::new(reasons))
        }
    }
}

/// Stops at the first violated rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFastValidator;

impl OrderValidator for FailFastValidator {
    fn validate(&self, order: &Order) -> Result<(), Rejection> {
        match violations(order).next() {
            Some(reason) => Err(Rejection::because(reason)),
            None => Ok(()),
        }
    }
}
