//! Ordered collections of symbol maps
//!
//! A [`MapSet`] is what a parser consults at each token boundary: maps are
//! queried in insertion order and the first one recognizing the token wins.
//! Sets are built once and then only read; reloading configuration means
//! building a new set and swapping it in.

use super::error::TableError;
use super::symbol_map::{AnyMap, Lookup, SymbolMap};
use serde::Serialize;
use tracing::debug;

/// A token resolved against a [`MapSet`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolved<'a> {
    /// Name of the map that recognized the token
    pub map: &'a str,
    #[serde(flatten)]
    pub lookup: Lookup<'a>,
}

/// Ordered sequence of uniquely named maps
#[derive(Debug, Clone, Default)]
pub struct MapSet {
    maps: Vec<AnyMap>,
}

impl MapSet {
    pub fn new() -> Self {
        MapSet { maps: Vec::new() }
    }

    /// Append a map. Names must be unique within the set.
    pub fn push(&mut self, map: impl Into<AnyMap>) -> Result<(), TableError> {
        let map = map.into();
        if self.get(map.name()).is_some() {
            return Err(TableError::DuplicateMapName(map.name().to_string()));
        }
        debug!(map = %map.name(), kind = map.kind().as_str(), entries = map.len(), "registered map");
        self.maps.push(map);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AnyMap> {
        self.maps.iter().find(|map| map.name() == name)
    }

    /// Map names in query order
    pub fn names(&self) -> Vec<&str> {
        self.maps.iter().map(|map| map.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnyMap> {
        self.maps.iter()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Whether any map recognizes `token`
    pub fn contains(&self, token: &str) -> bool {
        self.maps.iter().any(|map| map.contains(token))
    }

    /// Resolve `token` against the first map that recognizes it
    pub fn lookup(&self, token: &str) -> Option<Resolved<'_>> {
        self.maps.iter().find_map(|map| {
            map.lookup(token).map(|lookup| Resolved {
                map: map.name(),
                lookup,
            })
        })
    }

    /// One line per map: name, kind, entry count and, for pattern maps, the pattern
    pub fn summary(&self) -> String {
        let width = self.iter().map(|m| m.name().len()).max().unwrap_or(0);
        self.iter()
            .map(|map| {
                let line = format!(
                    "{:width$}  {:9}  {}",
                    map.name(),
                    map.kind().as_str(),
                    map.len(),
                );
                match map {
                    AnyMap::Pattern(pattern) => format!("{line}  /{}/\n", pattern.pattern()),
                    _ => format!("{line}\n"),
                }
            })
            .collect()
    }
}
