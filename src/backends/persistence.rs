//! Simulated storage engines.
//!
//! None of these keep state between calls: they model an external database and report
//! what they would have done through `tracing`.

use tracing::{debug, info};

use crate::framework::{BackendError, OrderRepository, UserRepository};
use crate::model::{Order, User};

/// User table in a MySQL database.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlUserRepository;

impl UserRepository for MySqlUserRepository {
    fn find_by_id(&self, id: u64) -> Result<Option<User>, BackendError> {
        debug!(backend = "mysql", user_id = id, "Looking up user");
        Ok(Some(User::new(id, "João Silva", "joao@example.com")))
    }

    fn save(&self, user: &User) -> Result<(), BackendError> {
        info!(backend = "mysql", user_id = user.id, name = %user.name, email = %user.email, "Saving user");
        Ok(())
    }
}

/// User table in a PostgreSQL database.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresUserRepository;

impl UserRepository for PostgresUserRepository {
    fn find_by_id(&self, id: u64) -> Result<Option<User>, BackendError> {
        debug!(backend = "postgres", user_id = id, "Looking up user");
        Ok(Some(User::new(id, "Maria Santos", "maria@example.com")))
    }

    fn save(&self, user: &User) -> Result<(), BackendError> {
        info!(backend = "postgres", user_id = user.id, name = %user.name, email = %user.email, "Saving user");
        Ok(())
    }
}

/// Order table in a MySQL database.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlOrderRepository;

impl OrderRepository for MySqlOrderRepository {
    fn save(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        info!(
            backend = "mysql",
            order_id = order.id,
            customer = %order.customer,
            product = %order.product,
            total = format_args!("{:.2}", total),
            "Saving order"
        );
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Order>, BackendError> {
        debug!(backend = "mysql", order_id = id, "Looking up order");
        Ok(None)
    }
}

/// Order table in a PostgreSQL database.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresOrderRepository;

impl OrderRepository for PostgresOrderRepository {
    fn save(&self, order: &Order, total: f64) -> Result<(), BackendError> {
        info!(
            backend = "postgres",
            order_id = order.id,
            customer = %order.customer,
            product = %order.product,
            total = format_args!("{:.2}", total),
            "Saving order"
        );
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Order>, BackendError> {
        debug!(backend = "postgres", order_id = id, "Looking up order");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_lookup_echoes_requested_id() {
        let mysql = MySqlUserRepository.find_by_id(42).unwrap().unwrap();
        let postgres = PostgresUserRepository.find_by_id(42).unwrap().unwrap();
        assert_eq!(mysql.id, 42);
        assert_eq!(postgres.id, 42);
        assert_ne!(mysql.name, postgres.name);
    }

    #[test]
    fn test_saves_succeed() {
        let user = User::new(1, "Alice", "alice@example.com");
        let order = Order::new(1, "Alice", "Mouse", 2, 10.0);
        assert!(UserRepository::save(&MySqlUserRepository, &user).is_ok());
        assert!(UserRepository::save(&PostgresUserRepository, &user).is_ok());
        assert!(OrderRepository::save(&MySqlOrderRepository, &order, 18.0).is_ok());
        assert!(OrderRepository::save(&PostgresOrderRepository, &order, 18.0).is_ok());
    }

    #[test]
    fn test_order_lookup_is_absent() {
        assert_eq!(MySqlOrderRepository.find_by_id(1), Ok(None));
        assert_eq!(PostgresOrderRepository.find_by_id(1), Ok(None));
    }
}
