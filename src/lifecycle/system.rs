use tracing::info;

use super::config::{
    CalculatorKind, ConfigError, LoggerKind, NotifierKind, OrderPipelineConfig, RepositoryKind,
    SystemConfig, UserServiceConfig, ValidatorKind,
};
use crate::backends::{
    DiscountCalculator, EmailNotifier, FailFastValidator, FileLogger, ListPriceCalculator,
    MySqlOrderRepository, MySqlUserRepository, PostgresOrderRepository, PostgresUserRepository,
    RuleValidator, SmsNotifier, TracingLogger,
};
use crate::framework::{
    Logger, OrderNotifier, OrderRepository, OrderValidator, PriceCalculator, UserNotifier,
    UserRepository,
};
use crate::order_pipeline::OrderPipeline;
use crate::user_service::UserService;

/// The composition root: picks concrete backends and hands them to the orchestrators.
///
/// `ServiceSystem` is the only place that knows which backend realizes which capability.
/// The orchestrators it builds see trait objects only.
///
/// # Example
///
/// ```
/// use capability_pipeline::lifecycle::{ServiceSystem, SystemConfig};
/// use capability_pipeline::model::Order;
///
/// let config = SystemConfig::from_yaml_str("orders:\n  repository: postgres\n")?;
/// let system = ServiceSystem::from_config(&config)?;
///
/// system.user_service.create_user(1, "João Silva", "joao@example.com");
/// let total = system.order_pipeline.process(&Order::new(1, "Maria Santos", "Mouse", 3, 150.0))?;
/// assert!((total - 405.0).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ServiceSystem {
    pub user_service: UserService,
    pub order_pipeline: OrderPipeline,
}

impl ServiceSystem {
    /// Validates the configuration and wires one backend per capability.
    pub fn from_config(config: &SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let system = Self {
            user_service: user_service(&config.users)?,
            order_pipeline: order_pipeline(&config.orders)?,
        };
        info!(?config, "Service system wired");
        Ok(system)
    }
}

impl Default for ServiceSystem {
    fn default() -> Self {
        Self {
            user_service: UserService::new(MySqlUserRepository, EmailNotifier, TracingLogger),
            order_pipeline: OrderPipeline::new(
                RuleValidator,
                DiscountCalculator::default(),
                MySqlOrderRepository,
                EmailNotifier,
            ),
        }
    }
}

/// Builds a [`UserService`] from its section of the configuration.
pub fn user_service(config: &UserServiceConfig) -> Result<UserService, ConfigError> {
    let repository: Box<dyn UserRepository> = match config.repository {
        RepositoryKind::Mysql => Box::new(MySqlUserRepository),
        RepositoryKind::Postgres => Box::new(PostgresUserRepository),
    };
    let notifier: Box<dyn UserNotifier> = match config.notifier {
        NotifierKind::Email => Box::new(EmailNotifier),
        NotifierKind::Sms => Box::new(SmsNotifier),
    };
    let logger: Box<dyn Logger> = match (config.logger, &config.log_file) {
        (LoggerKind::Tracing, _) => Box::new(TracingLogger),
        (LoggerKind::File, Some(path)) => Box::new(FileLogger::new(path)),
        (LoggerKind::File, None) => return Err(ConfigError::MissingLogFile),
    };
    Ok(UserService::from_boxed(repository, notifier, logger))
}

/// Builds an [`OrderPipeline`] from its section of the configuration.
pub fn order_pipeline(config: &OrderPipelineConfig) -> Result<OrderPipeline, ConfigError> {
    let validator: Box<dyn OrderValidator> = match config.validator {
        ValidatorKind::Rules => Box::new(RuleValidator),
        ValidatorKind::FailFast => Box::new(FailFastValidator),
    };
    let calculator: Box<dyn PriceCalculator> = match config.calculator {
        CalculatorKind::Discount => Box::new(DiscountCalculator::new(config.discount_rate)?),
        CalculatorKind::ListPrice => Box::new(ListPriceCalculator),
    };
    let repository: Box<dyn OrderRepository> = match config.repository {
        RepositoryKind::Mysql => Box::new(MySqlOrderRepository),
        RepositoryKind::Postgres => Box::new(PostgresOrderRepository),
    };
    let notifier: Box<dyn OrderNotifier> = match config.notifier {
        NotifierKind::Email => Box::new(EmailNotifier),
        NotifierKind::Sms => Box::new(SmsNotifier),
    };
    Ok(OrderPipeline::from_boxed(validator, calculator, repository, notifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;

    #[test]
    fn test_default_system_processes_reference_order() {
        let system = ServiceSystem::default();
        let order = Order::new(1, "Maria Santos", "Mouse", 3, 150.0);
        let total = system.order_pipeline.process(&order).unwrap();
        assert!((total - 405.0).abs() < 1e-9);
    }

    #[test]
    fn test_list_price_wiring() {
        let config = SystemConfig::from_yaml_str("orders:\n  calculator: list_price\n").unwrap();
        let system = ServiceSystem::from_config(&config).unwrap();
        let order = Order::new(1, "Maria Santos", "Mouse", 3, 150.0);
        assert_eq!(system.order_pipeline.process(&order).unwrap(), 450.0);
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let mut config = SystemConfig::default();
        config.orders.discount_rate = 2.0;
        assert!(matches!(
            ServiceSystem::from_config(&config),
            Err(ConfigError::InvalidDiscountRate(_))
        ));
    }

    #[test]
    fn test_order_pipeline_refuses_bad_rate() {
        for rate in [2.0, f64::NAN] {
            let config = OrderPipelineConfig {
                discount_rate: rate,
                ..OrderPipelineConfig::default()
            };
            assert!(matches!(
                order_pipeline(&config),
                Err(ConfigError::InvalidDiscountRate(_))
            ));
        }
    }

    #[test]
    fn test_list_price_ignores_rate() {
        let config = OrderPipelineConfig {
            calculator: CalculatorKind::ListPrice,
            discount_rate: 2.0,
            ..OrderPipelineConfig::default()
        };
        let pipeline = order_pipeline(&config).unwrap();
        let order = Order::new(1, "Maria Santos", "Mouse", 3, 150.0);
        assert_eq!(pipeline.process(&order).unwrap(), 450.0);
    }

    #[test]
    fn test_user_service_without_log_file() {
        let config = UserServiceConfig {
            logger: LoggerKind::File,
            ..UserServiceConfig::default()
        };
        assert!(matches!(user_service(&config), Err(ConfigError::MissingLogFile)));
    }
}
