//! Character tables - keyed maps from token to [`Symbol`]

use super::config::CharacterValue;
use super::entries::{Attributes, Symbol};
use super::error::TableError;
use super::keyed_map::{KeyedMap, ParseTable};
use super::symbol_map::SymbolMap;

/// Table of character definitions
#[derive(Debug, Clone)]
pub struct CharacterTable {
    map: KeyedMap<Symbol>,
}

impl ParseTable for CharacterTable {
    type Entry = Symbol;
    type Value = CharacterValue;
    type Descriptor = (String, Option<Attributes>);

    fn with_name(name: impl Into<String>) -> Self {
        CharacterTable {
            map: KeyedMap::new(name),
        }
    }

    fn keyed(&self) -> &KeyedMap<Symbol> {
        &self.map
    }

    fn expand(value: CharacterValue) -> Self::Descriptor {
        value.into_descriptor()
    }

    fn add_element(
        &mut self,
        token: &str,
        (display, attributes): Self::Descriptor,
    ) -> Result<(), TableError> {
        self.map.add(token, Symbol::new(token, display, attributes));
        Ok(())
    }
}

impl SymbolMap for CharacterTable {
    fn name(&self) -> &str {
        self.map.name()
    }

    fn contains(&self, token: &str) -> bool {
        self.map.contains(token)
    }
}
