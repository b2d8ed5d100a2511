use std::collections::BTreeMap;

use super::value::Value;

/// A named group of keys: one environment or the defaults group.
pub type Block = BTreeMap<String, Value>;

/// A parsed configuration file: block name to block.
///
/// Anchors and merge keys are already expanded by the time a
/// `Document` exists; it never contains a `<<` key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: BTreeMap<String, Block>,
}

impl Document {
    pub fn new(blocks: BTreeMap<String, Block>) -> Self {
        Self { blocks }
    }

    /// Returns the block with the given name, if present.
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    /// Returns the value for `key` inside block `name`.
    ///
    /// A missing block and a missing key are both `None`.
    pub fn lookup(&self, name: &str, key: &str) -> Option<&Value> {
        self.block(name).and_then(|b| b.get(key))
    }

    /// Block names in sorted order.
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<(String, Block)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Block)>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
