//! Macro tables - keyed maps from control sequence to [`Macro`]
//!
//! A descriptor is a sequence whose first element names the handler routine
//! and whose remaining elements are bound as the handler's arguments.

use super::config::MacroValue;
use super::entries::{Arg, Macro};
use super::error::TableError;
use super::keyed_map::{KeyedMap, ParseTable};
use super::symbol_map::SymbolMap;

/// Table of macro definitions
#[derive(Debug, Clone)]
pub struct MacroTable {
    map: KeyedMap<Macro>,
}

impl MacroTable {
    fn build_entry(&self, token: &str, descriptor: Vec<Arg>) -> Result<Macro, TableError> {
        let mut items = descriptor.into_iter();
        let handler = match items.next() {
            Some(Arg::Str(handler)) => handler,
            Some(other) => {
                return Err(TableError::HandlerNotString {
                    map: self.name().to_string(),
                    key: token.to_string(),
                    found: other.kind().to_string(),
                })
            }
            None => {
                return Err(TableError::EmptyMacro {
                    map: self.name().to_string(),
                    key: token.to_string(),
                })
            }
        };
        if handler.is_empty() {
            return Err(TableError::EmptyHandler {
                map: self.name().to_string(),
                key: token.to_string(),
            });
        }
        Ok(Macro::new(token, handler, items.collect()))
    }
}

impl ParseTable for MacroTable {
    type Entry = Macro;
    type Value = MacroValue;
    type Descriptor = Vec<Arg>;

    fn with_name(name: impl Into<String>) -> Self {
        MacroTable {
            map: KeyedMap::new(name),
        }
    }

    fn keyed(&self) -> &KeyedMap<Macro> {
        &self.map
    }

    fn expand(value: MacroValue) -> Vec<Arg> {
        value.into_descriptor()
    }

    fn add_element(&mut self, token: &str, descriptor: Vec<Arg>) -> Result<(), TableError> {
        let entry = self.build_entry(token, descriptor)?;
        self.map.add(token, entry);
        Ok(())
    }
}

impl SymbolMap for MacroTable {
    fn name(&self) -> &str {
        self.map.name()
    }

    fn contains(&self, token: &str) -> bool {
        self.map.contains(token)
    }
}
