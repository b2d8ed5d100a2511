use std::path::Path;

use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::{ConfigError, Result};
use crate::core::services::config_resolver::ConfigResolver;

/// Build a resolver from the global CLI flags.
///
/// Reads the tool config, loads the YAML document it points at and
/// selects the environment. `--env` (or `RAILS_ENV`) beats the config's
/// `default_env`; with neither, the resolver's own default applies.
pub fn load_resolver(cli: &Cli) -> Result<ConfigResolver> {
    let config = AppConfig::load(cli.config.as_deref().map(Path::new))?;
    let path = config.document_path(cli.file.as_deref());

    if !path.exists() {
        return Err(ConfigError::FileNotFound { path });
    }

    let content = std::fs::read(&path)?;
    let mut resolver = ConfigResolver::new(content)?;

    if let Some(env) = config.environment(cli.env.as_deref()) {
        resolver.set_environment(env);
    }

    tracing::debug!(
        path = %path.display(),
        environment = resolver.current_environment(),
        "document loaded"
    );
    Ok(resolver)
}
