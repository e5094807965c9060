//! Pattern maps - symbol maps backed by a single regular expression
//!
//! A pattern map stores no entries. Whether the pattern matches a token is
//! both the membership answer and the looked-up value.

use super::error::TableError;
use super::symbol_map::SymbolMap;
use once_cell::sync::Lazy;
use regex::Regex;

static LETTER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").unwrap());
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.,]").unwrap());
static COMMAND_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\").unwrap());

/// Symbol map that tests tokens against a fixed pattern
#[derive(Debug, Clone)]
pub struct PatternMap {
    name: String,
    pattern: Regex,
}

impl PatternMap {
    pub fn new(name: impl Into<String>, pattern: Regex) -> Self {
        PatternMap {
            name: name.into(),
            pattern,
        }
    }

    /// Compile `pattern` and build the map
    pub fn from_pattern(name: impl Into<String>, pattern: &str) -> Result<Self, TableError> {
        let name = name.into();
        match Regex::new(pattern) {
            Ok(regex) => Ok(PatternMap::new(name, regex)),
            Err(source) => Err(TableError::InvalidPattern { map: name, source }),
        }
    }

    /// Tokens containing an ASCII letter
    pub fn letter() -> Self {
        PatternMap::new("letter", LETTER_REGEX.clone())
    }

    /// Tokens containing a digit or a decimal separator
    pub fn digit() -> Self {
        PatternMap::new("digit", DIGIT_REGEX.clone())
    }

    /// Tokens starting with a backslash
    pub fn command() -> Self {
        PatternMap::new("command", COMMAND_REGEX.clone())
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Evaluate the pattern against `token` (unanchored search)
    pub fn lookup(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }
}

impl SymbolMap for PatternMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, token: &str) -> bool {
        self.lookup(token)
    }
}
