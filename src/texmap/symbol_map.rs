//! Symbol map interface and the closed set of map kinds
//!
//! Every map answers two questions for the parser: what it is called and
//! whether it recognizes a token. [`AnyMap`] lets a parser keep maps of
//! different kinds in one ordered sequence and query them uniformly.

use super::character_table::CharacterTable;
use super::entries::{Macro, Symbol};
use super::keyed_map::ParseTable;
use super::macro_table::MacroTable;
use super::pattern_map::PatternMap;
use serde::Serialize;

/// Capability shared by all symbol maps
pub trait SymbolMap {
    /// Name of the map, fixed at construction
    fn name(&self) -> &str;

    /// Whether the map recognizes `token`. Never mutates the map.
    fn contains(&self, token: &str) -> bool;
}

/// Result of looking a token up in an [`AnyMap`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "entry", rename_all = "kebab-case")]
pub enum Lookup<'a> {
    /// A pattern map matched; there is no entry beyond the match itself
    Matched,
    Character(&'a Symbol),
    Macro(&'a Macro),
}

/// Kind tag of a map, as used in definition files and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    Pattern,
    Character,
    Macro,
}

impl MapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::Pattern => "pattern",
            MapKind::Character => "character",
            MapKind::Macro => "macro",
        }
    }
}

/// One of the supported symbol maps
#[derive(Debug, Clone)]
pub enum AnyMap {
    Pattern(PatternMap),
    Character(CharacterTable),
    Macro(MacroTable),
}

impl AnyMap {
    pub fn kind(&self) -> MapKind {
        match self {
            AnyMap::Pattern(_) => MapKind::Pattern,
            AnyMap::Character(_) => MapKind::Character,
            AnyMap::Macro(_) => MapKind::Macro,
        }
    }

    /// Look `token` up, returning `None` when the map does not recognize it
    pub fn lookup(&self, token: &str) -> Option<Lookup<'_>> {
        match self {
            AnyMap::Pattern(map) => map.lookup(token).then_some(Lookup::Matched),
            AnyMap::Character(table) => table.lookup(token).map(Lookup::Character),
            AnyMap::Macro(table) => table.lookup(token).map(Lookup::Macro),
        }
    }

    /// Number of stored entries; pattern maps have none
    pub fn len(&self) -> usize {
        match self {
            AnyMap::Pattern(_) => 0,
            AnyMap::Character(table) => table.len(),
            AnyMap::Macro(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SymbolMap for AnyMap {
    fn name(&self) -> &str {
        match self {
            AnyMap::Pattern(map) => map.name(),
            AnyMap::Character(table) => table.name(),
            AnyMap::Macro(table) => table.name(),
        }
    }

    fn contains(&self, token: &str) -> bool {
        match self {
            AnyMap::Pattern(map) => map.contains(token),
            AnyMap::Character(table) => table.contains(token),
            AnyMap::Macro(table) => table.contains(token),
        }
    }
}

impl From<PatternMap> for AnyMap {
    fn from(map: PatternMap) -> Self {
        AnyMap::Pattern(map)
    }
}

impl From<CharacterTable> for AnyMap {
    fn from(table: CharacterTable) -> Self {
        AnyMap::Character(table)
    }
}

impl From<MacroTable> for AnyMap {
    fn from(table: MacroTable) -> Self {
        AnyMap::Macro(table)
    }
}
