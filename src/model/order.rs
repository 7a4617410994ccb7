/// Represents a customer order awaiting processing.
///
/// The order carries no invariants of its own: a zero quantity or a negative price is
/// representable so that an [`OrderValidator`](crate::framework::OrderValidator) can reject it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Caller-supplied unique identifier
    /// * `customer` - Name of the ordering customer
    /// * `product` - Product being ordered
    /// * `quantity` - Number of units
    /// * `unit_price` - Price of a single unit
    pub fn new(
        id: u64,
        customer: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            id,
            customer: customer.into(),
            product: product.into(),
            quantity,
            unit_price,
        }
    }
}
