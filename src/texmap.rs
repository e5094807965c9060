//! Symbol maps consulted by a tokenizing parser
//!
//! Given a raw token, a symbol map decides whether it recognizes it and, for
//! keyed maps, hands back the entry registered for it:
//!
//! - [`PatternMap`](pattern_map::PatternMap): a single regular expression, no stored entries
//! - [`CharacterTable`](character_table::CharacterTable): token to character definition
//! - [`MacroTable`](macro_table::MacroTable): token to macro handler and arguments
//!
//! Keyed tables are built once from a configuration block and only read
//! afterwards. [`MapSet`](map_set::MapSet) holds an ordered set of maps and
//! [`MapLoader`](loader::MapLoader) builds one from a definitions document.

pub mod character_table;
pub mod config;
pub mod entries;
pub mod error;
pub mod keyed_map;
pub mod loader;
pub mod macro_table;
pub mod map_set;
pub mod pattern_map;
pub mod symbol_map;

pub use character_table::CharacterTable;
pub use config::{CharacterValue, MacroValue, RawBlock};
pub use entries::{Arg, Attributes, Macro, Symbol};
pub use error::TableError;
pub use keyed_map::{KeyedMap, ParseTable};
pub use loader::{Format, LoaderError, MapLoader};
pub use macro_table::MacroTable;
pub use map_set::{MapSet, Resolved};
pub use pattern_map::PatternMap;
pub use symbol_map::{AnyMap, Lookup, MapKind, SymbolMap};
