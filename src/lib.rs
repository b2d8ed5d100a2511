//! Environment-scoped lookups over Rails-style YAML configuration.
//!
//! ```
//! use railsyaml::ConfigResolver;
//!
//! let yaml = "
//! defaults: &defaults
//!   adapter: postgresql
//! development:
//!   <<: *defaults
//!   database: app_dev
//! test:
//!   <<: *defaults
//!   database: app_test
//! ";
//!
//! let mut config = ConfigResolver::new(yaml)?;
//! assert_eq!(config.get_string("database")?, "app_dev");
//! assert_eq!(config.get_string("adapter")?, "postgresql");
//!
//! config.set_environment("test");
//! assert_eq!(config.get_string("database")?, "app_test");
//! # Ok::<(), railsyaml::ConfigError>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;

pub use crate::adapters::parsers::yaml_parser::YamlParser;
pub use crate::core::errors::{ConfigError, Result};
pub use crate::core::models::document::{Block, Document};
pub use crate::core::models::environment::{
    DEFAULT_BLOCK, DEFAULT_ENVIRONMENT, DEVELOPMENT, PRODUCTION, STAGING, TEST,
};
pub use crate::core::models::value::{Value, ValueKind};
pub use crate::core::services::config_resolver::ConfigResolver;
pub use crate::core::traits::parser::DocumentParser;
