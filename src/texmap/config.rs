//! Configuration values - the ingestion boundary of keyed maps
//!
//! Configuration blocks map tokens either to a bare string shorthand or to a
//! structured descriptor. The raw JSON/YAML shape is resolved here, once, into
//! [`CharacterValue`] or [`MacroValue`]; tables never inspect raw values.
//!
//! Accepted raw shapes:
//!
//! ```text
//! character:  "Alpha"  |  ["Alpha"]  |  ["Alpha", null]  |  ["Beta", {"variant": "bold"}]
//! macro:      "Frac"   |  ["Frac"]   |  ["Matrix", "{", "", "left left", null, ".1em", null, true]
//! ```
//!
//! Arguments and attribute values are scalars: strings, booleans, numbers
//! and `null`. Integers must fit in an `i64`.

use super::entries::{Arg, Attributes};
use super::error::TableError;
use serde_json::Value;
use std::collections::BTreeMap;

/// A configuration block as read from JSON or YAML
pub type RawBlock = BTreeMap<String, Value>;

/// Resolution of one raw configuration value into a typed one
pub trait FromRaw: Sized {
    fn from_raw(map: &str, key: &str, value: &Value) -> Result<Self, TableError>;
}

/// Parse JSON text into a [`RawBlock`]
pub fn parse_json_block(map: &str, text: &str) -> Result<RawBlock, TableError> {
    serde_json::from_str(text).map_err(|e| TableError::Parse {
        map: map.to_string(),
        message: e.to_string(),
    })
}

/// Parse YAML text into a [`RawBlock`]
pub fn parse_yaml_block(map: &str, text: &str) -> Result<RawBlock, TableError> {
    serde_yaml::from_str(text).map_err(|e| TableError::Parse {
        map: map.to_string(),
        message: e.to_string(),
    })
}

/// Configuration value of a character entry
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterValue {
    /// Display string only, no attributes
    Shorthand(String),
    /// Display string and an attribute slot that may be absent
    Structured(String, Option<Attributes>),
}

impl CharacterValue {
    /// Expand the shorthand into the structured form
    pub fn into_descriptor(self) -> (String, Option<Attributes>) {
        match self {
            CharacterValue::Shorthand(display) => (display, None),
            CharacterValue::Structured(display, attributes) => (display, attributes),
        }
    }
}

impl From<&str> for CharacterValue {
    fn from(display: &str) -> Self {
        CharacterValue::Shorthand(display.to_string())
    }
}

impl FromRaw for CharacterValue {
    fn from_raw(map: &str, key: &str, value: &Value) -> Result<Self, TableError> {
        let items = match value {
            Value::String(display) => return Ok(CharacterValue::Shorthand(display.clone())),
            Value::Array(items) => items,
            other => {
                return Err(TableError::malformed(
                    map,
                    key,
                    format!("expected a string or an array, found {}", value_kind(other)),
                ))
            }
        };

        let display = match items.first() {
            Some(Value::String(display)) => display.clone(),
            Some(other) => {
                return Err(TableError::malformed(
                    map,
                    key,
                    format!("display must be a string, found {}", value_kind(other)),
                ))
            }
            None => return Err(TableError::malformed(map, key, "missing display string")),
        };

        let attributes = match items.get(1) {
            None | Some(Value::Null) => None,
            Some(Value::Object(fields)) => {
                let mut attributes = Attributes::new();
                for (name, raw) in fields {
                    let arg = Arg::from_value(raw).map_err(|reason| {
                        TableError::malformed(map, key, format!("attribute '{name}': {reason}"))
                    })?;
                    attributes.insert(name.clone(), arg);
                }
                Some(attributes)
            }
            Some(other) => {
                return Err(TableError::malformed(
                    map,
                    key,
                    format!("attributes must be an object or null, found {}", value_kind(other)),
                ))
            }
        };

        if items.len() > 2 {
            return Err(TableError::malformed(
                map,
                key,
                format!("expected at most 2 elements, found {}", items.len()),
            ));
        }

        Ok(CharacterValue::Structured(display, attributes))
    }
}

/// Configuration value of a macro entry
#[derive(Debug, Clone, PartialEq)]
pub enum MacroValue {
    /// Handler name with no pre-bound arguments
    Shorthand(String),
    /// Handler name followed by its arguments
    Sequence(Vec<Arg>),
}

impl MacroValue {
    /// Expand the shorthand into the sequence form
    pub fn into_descriptor(self) -> Vec<Arg> {
        match self {
            MacroValue::Shorthand(handler) => vec![Arg::Str(handler)],
            MacroValue::Sequence(items) => items,
        }
    }
}

impl From<&str> for MacroValue {
    fn from(handler: &str) -> Self {
        MacroValue::Shorthand(handler.to_string())
    }
}

impl FromRaw for MacroValue {
    fn from_raw(map: &str, key: &str, value: &Value) -> Result<Self, TableError> {
        match value {
            Value::String(handler) => Ok(MacroValue::Shorthand(handler.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, raw)| {
                    Arg::from_value(raw).map_err(|reason| {
                        TableError::malformed(map, key, format!("element {i}: {reason}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(MacroValue::Sequence),
            other => Err(TableError::malformed(
                map,
                key,
                format!("expected a string or an array, found {}", value_kind(other)),
            )),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
