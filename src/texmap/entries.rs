//! Entry payloads handed back by keyed maps
//!
//! A [`Symbol`] describes how a single character token renders, a [`Macro`]
//! names the parse routine responsible for a control sequence together with
//! the arguments bound to it at configuration time.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Scalar argument value of the configuration format
///
/// `Null` is a placeholder argument; handlers treat it as "not given".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Arg {
    /// Convert a raw scalar, or explain why the value is not one.
    ///
    /// Arrays and objects are not arguments. Integers must fit in an `i64`;
    /// larger ones are rejected rather than rounded to a float.
    pub fn from_value(value: &Value) -> Result<Arg, String> {
        match value {
            Value::Null => Ok(Arg::Null),
            Value::Bool(b) => Ok(Arg::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Arg::Int(i))
                } else if n.is_f64() {
                    n.as_f64()
                        .map(Arg::Float)
                        .ok_or_else(|| format!("number {n} is not representable"))
                } else {
                    Err(format!("integer {n} does not fit in 64 bits"))
                }
            }
            Value::String(s) => Ok(Arg::Str(s.clone())),
            Value::Array(_) => Err("expected a scalar, found array".to_string()),
            Value::Object(_) => Err("expected a scalar, found object".to_string()),
        }
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Null => "null",
            Arg::Bool(_) => "boolean",
            Arg::Int(_) => "integer",
            Arg::Float(_) => "float",
            Arg::Str(_) => "string",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => write!(f, "null"),
            Arg::Bool(b) => write!(f, "{b}"),
            Arg::Int(i) => write!(f, "{i}"),
            Arg::Float(x) => write!(f, "{x}"),
            Arg::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Arg::Int(i)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

/// Attribute set of a character entry
pub type Attributes = BTreeMap<String, Arg>;

/// A character definition
///
/// `attributes` is `None` for a plain character, which is not the same as a
/// character with an explicitly empty attribute set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symbol {
    symbol: String,
    display: String,
    attributes: Option<Attributes>,
}

impl Symbol {
    pub fn new(
        symbol: impl Into<String>,
        display: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Self {
        Symbol {
            symbol: symbol.into(),
            display: display.into(),
            attributes,
        }
    }

    /// The token this entry was registered under
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The string the token renders as
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn attribute(&self, name: &str) -> Option<&Arg> {
        self.attributes.as_ref()?.get(name)
    }
}

/// A macro definition: the handler routine and its pre-bound arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Macro {
    symbol: String,
    handler: String,
    args: Vec<Arg>,
}

impl Macro {
    pub fn new(symbol: impl Into<String>, handler: impl Into<String>, args: Vec<Arg>) -> Self {
        Macro {
            symbol: symbol.into(),
            handler: handler.into(),
            args,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Name of the parse routine that handles this macro
    pub fn handler(&self) -> &str {
        &self.handler
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arg_from_scalars() {
        assert_eq!(Arg::from_value(&json!(null)), Ok(Arg::Null));
        assert_eq!(Arg::from_value(&json!(true)), Ok(Arg::Bool(true)));
        assert_eq!(Arg::from_value(&json!(3)), Ok(Arg::Int(3)));
        assert_eq!(Arg::from_value(&json!(-3)), Ok(Arg::Int(-3)));
        assert_eq!(Arg::from_value(&json!(0.5)), Ok(Arg::Float(0.5)));
        assert_eq!(Arg::from_value(&json!("x")), Ok(Arg::Str("x".into())));
    }

    #[test]
    fn test_arg_rejects_compound_values() {
        assert_eq!(
            Arg::from_value(&json!([1])),
            Err("expected a scalar, found array".to_string())
        );
        assert_eq!(
            Arg::from_value(&json!({"a": 1})),
            Err("expected a scalar, found object".to_string())
        );
    }

    #[test]
    fn test_arg_rejects_integers_beyond_i64() {
        let big = json!(u64::MAX);
        assert_eq!(
            Arg::from_value(&big),
            Err(format!("integer {} does not fit in 64 bits", u64::MAX))
        );
        assert_eq!(Arg::from_value(&json!(i64::MAX)), Ok(Arg::Int(i64::MAX)));
    }

    #[test]
    fn test_null_arg_serializes_as_null() {
        assert_eq!(serde_json::to_value(Arg::Null).unwrap(), json!(null));
        assert_eq!(Arg::Null.to_string(), "null");
        assert_eq!(Arg::Null.kind(), "null");
    }

    #[test]
    fn test_plain_symbol_differs_from_empty_attributes() {
        let plain = Symbol::new("a", "Alpha", None);
        let empty = Symbol::new("a", "Alpha", Some(Attributes::new()));
        assert_ne!(plain, empty);
        assert!(plain.attributes().is_none());
        assert_eq!(empty.attributes().map(|a| a.len()), Some(0));
    }

    #[test]
    fn test_symbol_attribute_access() {
        let mut attrs = Attributes::new();
        attrs.insert("variant".into(), "bold".into());
        let sym = Symbol::new("b", "Beta", Some(attrs));
        assert_eq!(sym.attribute("variant"), Some(&Arg::Str("bold".into())));
        assert_eq!(sym.attribute("stretchy"), None);
    }

    #[test]
    fn test_macro_serializes_untagged_args() {
        let mac = Macro::new("bar", "handleBar", vec![Arg::Int(1), "x".into()]);
        let json = serde_json::to_value(&mac).unwrap();
        assert_eq!(
            json,
            json!({"symbol": "bar", "handler": "handleBar", "args": [1, "x"]})
        );
    }
}
