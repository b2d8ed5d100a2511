use std::collections::BTreeMap;

use serde_yaml::Value as Yaml;

use crate::core::errors::{ConfigError, Result};
use crate::core::models::document::{Block, Document};
use crate::core::models::value::Value;
use crate::core::traits::parser::DocumentParser;

/// Parses Rails-style environment-scoped YAML (`database.yml` and friends).
///
/// Supports:
/// - Anchors and aliases (`&defaults` / `*defaults`)
/// - Merge keys (`<<: *defaults`), expanded before the document is built
/// - Empty blocks (`production:` with no body)
/// - Scalar mapping keys other than strings (`5432:` becomes `"5432"`)
pub struct YamlParser;

impl YamlParser {
    /// Convert one top-level entry into a named block.
    fn block_from_yaml(name: String, raw: Yaml) -> Result<(String, Block)> {
        match raw {
            Yaml::Null => Ok((name, Block::new())),
            Yaml::Mapping(mapping) => {
                let block = mapping_from_yaml(mapping)?;
                Ok((name, block))
            }
            Yaml::Tagged(tagged) => Self::block_from_yaml(name, tagged.value),
            other => Err(ConfigError::Deserialization {
                detail: format!("block '{name}' must be a mapping, found {}", describe(&other)),
            }),
        }
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &[u8]) -> Result<Document> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Document::default());
        }

        let mut root: Yaml =
            serde_yaml::from_slice(content).map_err(|e| ConfigError::Deserialization {
                detail: e.to_string(),
            })?;

        root.apply_merge().map_err(|e| ConfigError::Deserialization {
            detail: format!("failed to expand merge keys: {e}"),
        })?;

        let mapping = match root {
            Yaml::Null => return Ok(Document::default()),
            Yaml::Mapping(mapping) => mapping,
            other => {
                return Err(ConfigError::Deserialization {
                    detail: format!("top level must be a mapping, found {}", describe(&other)),
                });
            }
        };

        let mut blocks = BTreeMap::new();
        for (k, v) in mapping {
            let (name, block) = Self::block_from_yaml(mapping_key(k)?, v)?;
            insert_unique(&mut blocks, name, block)?;
        }
        let document = Document::new(blocks);

        tracing::debug!(blocks = document.len(), "parsed YAML document");
        Ok(document)
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".yml", ".yaml"]
    }
}

/// Convert a deserialized YAML node into a [`Value`].
fn value_from_yaml(raw: Yaml) -> Result<Value> {
    Ok(match raw {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            // u64 beyond i64::MAX and real floats
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Sequence(
            seq.into_iter()
                .map(value_from_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::Mapping(mapping) => Value::Mapping(mapping_from_yaml(mapping)?),
        Yaml::Tagged(tagged) => value_from_yaml(tagged.value)?,
    })
}

/// Convert a YAML mapping into string-keyed values.
fn mapping_from_yaml(mapping: serde_yaml::Mapping) -> Result<BTreeMap<String, Value>> {
    let mut map = BTreeMap::new();
    for (k, v) in mapping {
        insert_unique(&mut map, mapping_key(k)?, value_from_yaml(v)?)?;
    }
    Ok(map)
}

/// Distinct YAML keys can stringify to the same text (`5432` and `"5432"`).
fn insert_unique<V>(map: &mut BTreeMap<String, V>, key: String, value: V) -> Result<()> {
    if map.contains_key(&key) {
        return Err(ConfigError::Deserialization {
            detail: format!("duplicate key '{key}' after converting keys to strings"),
        });
    }
    map.insert(key, value);
    Ok(())
}

/// Stringify a scalar mapping key. Composite keys are rejected.
fn mapping_key(raw: Yaml) -> Result<String> {
    match raw {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => mapping_key(tagged.value),
        other => Err(ConfigError::Deserialization {
            detail: format!("mapping keys must be scalars, found {}", describe(&other)),
        }),
    }
}

fn describe(raw: &Yaml) -> &'static str {
    match raw {
        Yaml::Null => "null",
        Yaml::Bool(_) => "a bool",
        Yaml::Number(_) => "a number",
        Yaml::String(_) => "a string",
        Yaml::Sequence(_) => "a sequence",
        Yaml::Mapping(_) => "a mapping",
        Yaml::Tagged(_) => "a tagged value",
    }
}
