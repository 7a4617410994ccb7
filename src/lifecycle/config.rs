//! Backend selection, loaded from YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::backends::{DiscountCalculator, DEFAULT_DISCOUNT_RATE};

/// Errors raised while loading or validating a [`SystemConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `logger: file` was selected without a `log_file`.
    #[error("users.logger is 'file' but users.log_file is not set")]
    MissingLogFile,

    #[error("Discount rate must be in [0, 1), got {0}")]
    InvalidDiscountRate(f64),
}

/// Which backend realizes each capability.
///
/// # Example
/// ```yaml
/// users:
///   repository: postgres
///   notifier: sms
///   logger: file
///   log_file: /var/log/users.log
/// orders:
///   validator: fail_fast
///   calculator: discount
///   discount_rate: 0.15
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    pub users: UserServiceConfig,
    pub orders: OrderPipelineConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UserServiceConfig {
    pub repository: RepositoryKind,
    pub notifier: NotifierKind,
    pub logger: LoggerKind,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OrderPipelineConfig {
    pub validator: ValidatorKind,
    pub calculator: CalculatorKind,
    pub discount_rate: f64,
    pub repository: RepositoryKind,
    pub notifier: NotifierKind,
}

impl Default for OrderPipelineConfig {
    fn default() -> Self {
        Self {
            validator: ValidatorKind::default(),
            calculator: CalculatorKind::default(),
            discount_rate: DEFAULT_DISCOUNT_RATE,
            repository: RepositoryKind::default(),
            notifier: NotifierKind::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryKind {
    #[default]
    Mysql,
    Postgres,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NotifierKind {
    #[default]
    Email,
    Sms,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LoggerKind {
    #[default]
    Tracing,
    File,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    #[default]
    Rules,
    FailFast,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    #[default]
    Discount,
    ListPrice,
}

impl SystemConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: SystemConfig = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads and validates a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Checks the cross-field constraints serde can not express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.users.logger == LoggerKind::File && self.users.log_file.is_none() {
            return Err(ConfigError::MissingLogFile);
        }
        DiscountCalculator::new(self.orders.discount_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg = SystemConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, SystemConfig::default());
        assert_eq!(cfg.orders.discount_rate, 0.10);
        assert_eq!(cfg.users.repository, RepositoryKind::Mysql);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
users:
  repository: postgres
  notifier: sms
  logger: file
  log_file: /tmp/users.log
orders:
  validator: fail_fast
  calculator: list_price
  discount_rate: 0.0
  repository: postgres
  notifier: sms
"#;
        let cfg = SystemConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.users.notifier, NotifierKind::Sms);
        assert_eq!(cfg.users.log_file, Some(PathBuf::from("/tmp/users.log")));
        assert_eq!(cfg.orders.validator, ValidatorKind::FailFast);
        assert_eq!(cfg.orders.calculator, CalculatorKind::ListPrice);
    }

    #[test]
    fn test_file_logger_requires_path() {
        let err = SystemConfig::from_yaml_str("users:\n  logger: file\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingLogFile));
    }

    #[test]
    fn test_discount_rate_range() {
        let err = SystemConfig::from_yaml_str("orders:\n  discount_rate: 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDiscountRate(r) if r == 1.0));
        let err = SystemConfig::from_yaml_str("orders:\n  discount_rate: -0.1\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDiscountRate(_)));
        let err = SystemConfig::from_yaml_str("orders:\n  discount_rate: .nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDiscountRate(r) if r.is_nan()));
    }

    #[test]
    fn test_unknown_backend_is_parse_error() {
        let err = SystemConfig::from_yaml_str("users:\n  repository: oracle\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "orders:\n  calculator: list_price").unwrap();
        let cfg = SystemConfig::load(file.path()).unwrap();
        assert_eq!(cfg.orders.calculator, CalculatorKind::ListPrice);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SystemConfig::load("/nonexistent/pipeline.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
