use crate::core::errors::Result;
use crate::core::models::document::Document;

/// Port for turning raw bytes into a [`Document`].
///
/// Implementations live in `adapters::parsers` (e.g. `YamlParser`).
/// The resolver only depends on this trait, never on a concrete format.
pub trait DocumentParser: Send + Sync {
    /// Parse raw content into a fully-expanded document.
    ///
    /// Fails with `ConfigError::Deserialization` when the content is
    /// malformed or not a mapping of mappings.
    fn parse(&self, content: &[u8]) -> Result<Document>;

    /// File extensions this parser handles (e.g. `[".yml"]`).
    fn supported_extensions(&self) -> &[&str];
}
