use crate::adapters::parsers::yaml_parser::YamlParser;
use crate::core::errors::{ConfigError, Result};
use crate::core::models::document::{Block, Document};
use crate::core::models::environment::{DEFAULT_BLOCK, DEFAULT_ENVIRONMENT};
use crate::core::models::value::{Value, ValueKind};
use crate::core::traits::parser::DocumentParser;

/// Resolves keys within the selected environment block, falling back
/// to the `defaults` block.
///
/// The document is fixed at construction. The environment is the only
/// mutable state and changes through `&mut self`, so a resolver shared
/// across threads must be wrapped in a lock by the caller.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    document: Document,
    environment: Option<String>,
}

impl ConfigResolver {
    /// Parse `content` as YAML and build a resolver over it.
    ///
    /// # Errors
    ///
    /// `Deserialization` if the content is not valid YAML or not a
    /// mapping of mappings.
    pub fn new(content: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_parser(content, &YamlParser)
    }

    /// Build a resolver using any [`DocumentParser`].
    pub fn with_parser(content: impl AsRef<[u8]>, parser: &dyn DocumentParser) -> Result<Self> {
        let document = parser.parse(content.as_ref())?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        tracing::debug!(blocks = document.len(), "config resolver ready");
        Self {
            document,
            environment: None,
        }
    }

    /// Select the environment used as the primary lookup tier.
    ///
    /// Any string is accepted, including names without a block.
    pub fn set_environment(&mut self, env: impl Into<String>) {
        self.environment = Some(env.into());
    }

    /// The selected environment, or `development` if none was set or the
    /// selection is empty.
    pub fn current_environment(&self) -> &str {
        self.environment
            .as_deref()
            .filter(|env| !env.is_empty())
            .unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// Look up `key` in the current environment, then in `defaults`.
    ///
    /// A missing environment block is not an error; only a key absent
    /// from both tiers is.
    pub fn get(&self, key: &str) -> Result<&Value> {
        let env = self.current_environment();

        if let Some(value) = self.document.lookup(env, key) {
            tracing::trace!(key, block = env, "resolved from environment");
            return Ok(value);
        }

        if let Some(value) = self.document.lookup(DEFAULT_BLOCK, key) {
            tracing::trace!(key, block = DEFAULT_BLOCK, "resolved from defaults");
            return Ok(value);
        }

        Err(ConfigError::KeyNotFound {
            key: key.to_string(),
            environment: env.to_string(),
        })
    }

    /// Like [`get`](Self::get), but the value must be a string.
    pub fn get_string(&self, key: &str) -> Result<&str> {
        self.get_typed(key, ValueKind::String, Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get_typed(key, ValueKind::Integer, Value::as_i64)
    }

    /// Floats, with integers widened.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.get_typed(key, ValueKind::Float, Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_typed(key, ValueKind::Bool, Value::as_bool)
    }

    /// Like [`get`](Self::get), for call sites where a missing key is a bug.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent from both tiers.
    #[track_caller]
    pub fn must_get(&self, key: &str) -> &Value {
        must(self.get(key))
    }

    /// # Panics
    ///
    /// Panics if the key is missing or its value is not a string.
    #[track_caller]
    pub fn must_get_string(&self, key: &str) -> &str {
        must(self.get_string(key))
    }

    /// # Panics
    ///
    /// Panics if the key is missing or its value is not an integer.
    #[track_caller]
    pub fn must_get_i64(&self, key: &str) -> i64 {
        must(self.get_i64(key))
    }

    /// # Panics
    ///
    /// Panics if the key is missing or its value is not a bool.
    #[track_caller]
    pub fn must_get_bool(&self, key: &str) -> bool {
        must(self.get_bool(key))
    }

    /// Environment block names, sorted, without the defaults block.
    pub fn environments(&self) -> Vec<&str> {
        self.document
            .block_names()
            .filter(|name| *name != DEFAULT_BLOCK)
            .collect()
    }

    pub fn has_environment(&self, name: &str) -> bool {
        self.document.block(name).is_some()
    }

    /// The effective settings for the current environment: defaults
    /// overlaid by the environment block.
    pub fn resolved(&self) -> Block {
        let mut merged = self
            .document
            .block(DEFAULT_BLOCK)
            .cloned()
            .unwrap_or_default();
        if let Some(env_block) = self.document.block(self.current_environment()) {
            for (key, value) in env_block {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn get_typed<'a, T>(
        &'a self,
        key: &str,
        expected: ValueKind,
        cast: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T> {
        let value = self.get(key)?;
        cast(value).ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            expected,
            actual: value.kind(),
        })
    }
}

/// Unwrap a lookup result, logging the error kind before aborting.
#[track_caller]
fn must<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(kind = e.kind(), "required configuration unavailable: {e}");
            panic!("{e}");
        }
    }
}
