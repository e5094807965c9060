//! Keyed maps - exact-match tables from token to entry
//!
//! [`KeyedMap`] is the shared storage behind the concrete tables. It is
//! composed into each table rather than exposed for direct insertion; only
//! the crate can call [`KeyedMap::add`].
//!
//! [`ParseTable`] is the construction contract every concrete table fulfils:
//! interpret one configuration value with `add_element`, and build a whole
//! table from a configuration block with `create`.

use super::config::{parse_json_block, parse_yaml_block, FromRaw, RawBlock};
use super::error::TableError;
use super::symbol_map::SymbolMap;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Exact-match table from token string to entry
#[derive(Debug, Clone)]
pub struct KeyedMap<T> {
    name: String,
    entries: HashMap<String, T>,
}

impl<T> KeyedMap<T> {
    pub fn new(name: impl Into<String>) -> Self {
        KeyedMap {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// The entry stored for `token`, or `None` when the token is unmapped
    pub fn lookup(&self, token: &str) -> Option<&T> {
        self.entries.get(token)
    }

    /// Insert or overwrite. A later entry for the same token replaces the
    /// earlier one without error.
    pub(crate) fn add(&mut self, token: impl Into<String>, entry: T) {
        let token = token.into();
        if self.entries.insert(token, entry).is_some() {
            trace!(map = %self.name, "overwrote existing entry");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored tokens, in no particular order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T> SymbolMap for KeyedMap<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }
}

/// A keyed map that knows how to build its entries from configuration data
pub trait ParseTable: SymbolMap + Sized {
    /// Entry payload stored per token
    type Entry;
    /// Block value, either shorthand or structured
    type Value: FromRaw;
    /// Structured form a block value expands to
    type Descriptor;

    /// An empty table
    fn with_name(name: impl Into<String>) -> Self;

    fn keyed(&self) -> &KeyedMap<Self::Entry>;

    /// Expand a block value into a descriptor
    fn expand(value: Self::Value) -> Self::Descriptor;

    /// Interpret one descriptor into an entry and store it under `token`
    fn add_element(&mut self, token: &str, descriptor: Self::Descriptor) -> Result<(), TableError>;

    fn lookup(&self, token: &str) -> Option<&Self::Entry> {
        self.keyed().lookup(token)
    }

    fn len(&self) -> usize {
        self.keyed().len()
    }

    fn is_empty(&self) -> bool {
        self.keyed().is_empty()
    }

    /// Build a table from a whole configuration block.
    ///
    /// Either every value is accepted and the table is returned, or the first
    /// failure is returned and the partial table is dropped.
    fn create<I, K>(name: impl Into<String>, block: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, Self::Value)>,
        K: AsRef<str>,
    {
        let mut table = Self::with_name(name);
        for (token, value) in block {
            table.add_element(token.as_ref(), Self::expand(value))?;
        }
        debug!(map = %table.name(), entries = table.len(), "built table");
        Ok(table)
    }

    /// Build a table from a loosely-typed block
    fn from_raw_block(name: impl Into<String>, block: &RawBlock) -> Result<Self, TableError> {
        let name = name.into();
        let values = block
            .iter()
            .map(|(key, raw)| {
                <Self::Value as FromRaw>::from_raw(&name, key, raw)
                    .map(|value| (key.as_str(), value))
            })
            .collect::<Result<Vec<_>, TableError>>()?;
        Self::create(name, values)
    }

    /// Build a table from a JSON object
    fn from_json_str(name: impl Into<String>, text: &str) -> Result<Self, TableError> {
        let name = name.into();
        let block = parse_json_block(&name, text)?;
        Self::from_raw_block(name, &block)
    }

    /// Build a table from a YAML mapping
    fn from_yaml_str(name: impl Into<String>, text: &str) -> Result<Self, TableError> {
        let name = name.into();
        let block = parse_yaml_block(&name, text)?;
        Self::from_raw_block(name, &block)
    }
}
