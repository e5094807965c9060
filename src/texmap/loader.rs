//! Map definition loading
//!
//! This module provides `MapLoader` - a utility for reading a definitions
//! document from a file or a string and building the [`MapSet`] it describes.
//!
//! # Example
//!
//! ```yaml
//! maps:
//!   - kind: macro
//!     name: macros
//!     entries:
//!       frac: Frac
//!       quad: [Spacer, 1em]
//!   - kind: character
//!     name: greek
//!     entries:
//!       alpha: "α"
//!       Gamma: ["Γ", {mathvariant: normal}]
//!   - kind: pattern
//!     name: letter
//!     pattern: "[a-zA-Z]"
//! ```

use super::character_table::CharacterTable;
use super::config::RawBlock;
use super::error::TableError;
use super::keyed_map::ParseTable;
use super::macro_table::MacroTable;
use super::map_set::MapSet;
use super::pattern_map::PatternMap;
use super::symbol_map::AnyMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Error that can occur when loading map definitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoaderError {
    /// IO error when reading the definitions file
    #[error("IO error: {0}")]
    Io(String),
    /// The document is not valid JSON/YAML or does not describe maps
    #[error("Parse error: {0}")]
    Parse(String),
    /// A map failed to build
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Syntax of a definitions document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.json` files are JSON, everything else is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Top-level definitions document
#[derive(Debug, Clone, Deserialize)]
pub struct MapDefinitions {
    pub maps: Vec<MapDefinition>,
}

/// Definition of one map
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MapDefinition {
    Pattern { name: String, pattern: String },
    Character { name: String, entries: RawBlock },
    Macro { name: String, entries: RawBlock },
}

impl MapDefinition {
    pub fn name(&self) -> &str {
        match self {
            MapDefinition::Pattern { name, .. }
            | MapDefinition::Character { name, .. }
            | MapDefinition::Macro { name, .. } => name,
        }
    }

    pub fn build(&self) -> Result<AnyMap, TableError> {
        Ok(match self {
            MapDefinition::Pattern { name, pattern } => {
                PatternMap::from_pattern(name.as_str(), pattern)?.into()
            }
            MapDefinition::Character { name, entries } => {
                CharacterTable::from_raw_block(name.as_str(), entries)?.into()
            }
            MapDefinition::Macro { name, entries } => {
                MacroTable::from_raw_block(name.as_str(), entries)?.into()
            }
        })
    }
}

/// Definitions loader
///
/// Holds the source text until [`MapLoader::load`] builds the maps.
#[derive(Debug, Clone)]
pub struct MapLoader {
    source: String,
    format: Format,
}

impl MapLoader {
    pub fn from_string(source: impl Into<String>, format: Format) -> Self {
        MapLoader {
            source: source.into(),
            format,
        }
    }

    /// Read a definitions file; the format follows the file extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Ok(MapLoader::from_string(source, Format::from_path(path)))
    }

    pub fn definitions(&self) -> Result<MapDefinitions, LoaderError> {
        match self.format {
            Format::Json => {
                serde_json::from_str(&self.source).map_err(|e| LoaderError::Parse(e.to_string()))
            }
            Format::Yaml => {
                serde_yaml::from_str(&self.source).map_err(|e| LoaderError::Parse(e.to_string()))
            }
        }
    }

    /// Build every defined map, in document order
    pub fn load(&self) -> Result<MapSet, LoaderError> {
        let definitions = self.definitions()?;
        let mut set = MapSet::new();
        for definition in &definitions.maps {
            debug!(map = definition.name(), "building map");
            set.push(definition.build()?)?;
        }
        debug!(maps = set.len(), "loaded map definitions");
        Ok(set)
    }
}
