//! Price derivation policies.

use crate::framework::PriceCalculator;
use crate::lifecycle::ConfigError;
use crate::model::Order;

/// Discount applied by [`DiscountCalculator::default`].
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.10;

/// Charges the subtotal minus a fixed percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountCalculator {
    rate: f64,
}

impl DiscountCalculator {
    /// Creates a calculator with the given rate (`0.10` is 10%).
    ///
    /// Rates outside `[0, 1)`, NaN included, are refused so a total can never go negative.
    pub fn new(rate: f64) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&rate) {
            return Err(ConfigError::InvalidDiscountRate(rate));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for DiscountCalculator {
    fn default() -> Self {
        Self {
            rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl PriceCalculator for DiscountCalculator {
    fn compute_total(&self, order: &Order) -> f64 {
        let subtotal = self.compute_subtotal(order);
        subtotal - subtotal * self.rate
    }
}

/// Charges the undiscounted list price.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPriceCalculator;

impl PriceCalculator for ListPriceCalculator {
    fn compute_total(&self, order: &Order) -> f64 {
        self.compute_subtotal(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_reference_order() {
        let order = Order::new(1, "Maria Santos", "Mouse", 3, 150.00);
        let calculator = DiscountCalculator::default();
        assert_eq!(calculator.compute_subtotal(&order), 450.0);
        assert!(approx_eq(calculator.compute_total(&order), 405.0));
    }

    #[test]
    fn test_total_is_ninety_percent_of_subtotal() {
        let calculator = DiscountCalculator::default();
        for quantity in [1u32, 2, 7, 13, 100, 999] {
            for unit_price in [0.01, 0.5, 1.0, 19.99, 150.0, 12345.67] {
                let order = Order::new(1, "Ana", "Widget", quantity, unit_price);
                let subtotal = calculator.compute_subtotal(&order);
                assert_eq!(subtotal, f64::from(quantity) * unit_price);
                assert!(approx_eq(calculator.compute_total(&order), subtotal * 0.9));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let order = Order::new(1, "Ana", "Widget", 3, 33.33);
        let calculator = DiscountCalculator::new(0.25).unwrap();
        assert_eq!(calculator.compute_total(&order), calculator.compute_total(&order));
    }

    #[test]
    fn test_rate_out_of_range_is_refused() {
        assert!(matches!(
            DiscountCalculator::new(2.0),
            Err(ConfigError::InvalidDiscountRate(r)) if r == 2.0
        ));
        assert!(matches!(
            DiscountCalculator::new(-0.1),
            Err(ConfigError::InvalidDiscountRate(_))
        ));
        assert!(matches!(
            DiscountCalculator::new(f64::NAN),
            Err(ConfigError::InvalidDiscountRate(r)) if r.is_nan()
        ));
        assert_eq!(DiscountCalculator::new(0.0).unwrap().rate(), 0.0);
    }

    #[test]
    fn test_list_price_has_no_discount() {
        let order = Order::new(1, "Maria Santos", "Mouse", 3, 150.00);
        assert_eq!(ListPriceCalculator.compute_total(&order), 450.0);
        assert_eq!(
            ListPriceCalculator.compute_subtotal(&order),
            DiscountCalculator::default().compute_subtotal(&order)
        );
    }
}
