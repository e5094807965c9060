//! Bulk construction of character and macro tables
//!
//! Covers the shorthand and structured configuration forms, the failure
//! cases of malformed descriptors, and last-write-wins on duplicate tokens.

use rstest::rstest;
use serde_json::json;
use texmap::{
    Arg, Attributes, CharacterTable, CharacterValue, MacroTable, MacroValue, ParseTable,
    PatternMap, RawBlock, SymbolMap, TableError,
};

fn block(value: serde_json::Value) -> RawBlock {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_character_shorthand() {
    let table = CharacterTable::from_raw_block("chars", &block(json!({"a": "Alpha"}))).unwrap();
    assert!(table.contains("a"));
    let sym = table.lookup("a").unwrap();
    assert_eq!(sym.display(), "Alpha");
    assert!(sym.attributes().is_none());
}

#[test]
fn test_character_with_attributes() {
    let table = CharacterTable::from_raw_block(
        "chars",
        &block(json!({"b": ["Beta", {"variant": "bold"}]})),
    )
    .unwrap();
    let sym = table.lookup("b").unwrap();
    assert_eq!(sym.display(), "Beta");
    assert_eq!(sym.attribute("variant"), Some(&Arg::from("bold")));
}

#[test]
fn test_macro_shorthand() {
    let table = MacroTable::from_raw_block("macros", &block(json!({"foo": "handleFoo"}))).unwrap();
    let mac = table.lookup("foo").unwrap();
    assert_eq!(mac.handler(), "handleFoo");
    assert!(mac.args().is_empty());
}

#[test]
fn test_macro_with_arguments() {
    let table = MacroTable::from_raw_block(
        "macros",
        &block(json!({"bar": ["handleBar", 1, "x"]})),
    )
    .unwrap();
    let mac = table.lookup("bar").unwrap();
    assert_eq!(mac.handler(), "handleBar");
    assert_eq!(mac.args().to_vec(), vec![Arg::Int(1), Arg::from("x")]);
}

#[test]
fn test_macro_empty_sequence_fails() {
    let result = MacroTable::from_raw_block("macros", &block(json!({"bar": []})));
    assert_eq!(
        result.unwrap_err(),
        TableError::EmptyMacro {
            map: "macros".into(),
            key: "bar".into()
        }
    );
}

#[test]
fn test_macro_null_placeholder_arguments() {
    let table = MacroTable::from_raw_block(
        "environments",
        &block(json!({"cases": ["Matrix", "{", "", "left left", null, ".1em", null, true]})),
    )
    .unwrap();
    let mac = table.lookup("cases").unwrap();
    assert_eq!(mac.handler(), "Matrix");
    assert_eq!(
        mac.args().to_vec(),
        vec![
            Arg::from("{"),
            Arg::from(""),
            Arg::from("left left"),
            Arg::Null,
            Arg::from(".1em"),
            Arg::Null,
            Arg::Bool(true),
        ]
    );
}

#[test]
fn test_character_null_attribute_value() {
    let table =
        CharacterTable::from_raw_block("chars", &block(json!({"x": ["X", {"stretchy": null}]})))
            .unwrap();
    let sym = table.lookup("x").unwrap();
    assert_eq!(sym.attribute("stretchy"), Some(&Arg::Null));
    assert_eq!(sym.attribute("variant"), None);
}

#[test]
fn test_macro_oversized_integer_fails() {
    let err = MacroTable::from_raw_block(
        "macros",
        &block(json!({"big": ["Handler", 18446744073709551615u64]})),
    )
    .unwrap_err();
    assert_eq!(err.key(), Some("big"));
}

#[rstest]
#[case::empty_array(json!({"c": []}))]
#[case::number(json!({"c": 3}))]
#[case::display_not_string(json!({"c": [3]}))]
#[case::attributes_not_object(json!({"c": ["Gamma", ["bold"]]}))]
#[case::too_many_elements(json!({"c": ["Gamma", null, "extra"]}))]
fn test_malformed_character_names_key(#[case] raw: serde_json::Value) {
    let err = CharacterTable::from_raw_block("chars", &block(raw)).unwrap_err();
    assert!(matches!(err, TableError::MalformedEntry { .. }));
    assert_eq!(err.key(), Some("c"));
}

#[rstest]
#[case::object(json!({"m": {"handler": "H"}}), "m")]
#[case::nested(json!({"m": ["H", [1, 2]]}), "m")]
#[case::empty_handler(json!({"m": ""}), "m")]
#[case::numeric_handler(json!({"m": [7, "x"]}), "m")]
fn test_malformed_macro_names_key(#[case] raw: serde_json::Value, #[case] key: &str) {
    let err = MacroTable::from_raw_block("macros", &block(raw)).unwrap_err();
    assert_eq!(err.key(), Some(key));
}

#[test]
fn test_explicitly_empty_attributes_are_kept() {
    let table = CharacterTable::create(
        "chars",
        [("g", CharacterValue::Structured("Gamma".into(), Some(Attributes::new())))],
    )
    .unwrap();
    let sym = table.lookup("g").unwrap();
    assert_eq!(sym.attributes().map(|a| a.is_empty()), Some(true));
}

#[test]
fn test_duplicate_tokens_last_write_wins() {
    // Duplicate tokens in one block are accepted; the later value replaces the earlier.
    let table = MacroTable::create(
        "macros",
        [
            ("x", MacroValue::from("First")),
            ("x", MacroValue::Sequence(vec!["Second".into(), Arg::Bool(false)])),
        ],
    )
    .unwrap();
    assert_eq!(table.len(), 1);
    let mac = table.lookup("x").unwrap();
    assert_eq!(mac.handler(), "Second");
    assert_eq!(mac.args().to_vec(), vec![Arg::Bool(false)]);
}

#[test]
fn test_block_order_does_not_matter() {
    let forward = CharacterTable::create(
        "chars",
        [("a", CharacterValue::from("A")), ("b", CharacterValue::from("B"))],
    )
    .unwrap();
    let backward = CharacterTable::create(
        "chars",
        [("b", CharacterValue::from("B")), ("a", CharacterValue::from("A"))],
    )
    .unwrap();
    for token in ["a", "b", "c"] {
        assert_eq!(forward.lookup(token), backward.lookup(token));
    }
}

#[rstest]
#[case("")]
#[case("greek")]
#[case("Mathvariant Chars")]
#[case("\\ünïcødé")]
fn test_names_preserved_verbatim(#[case] name: &str) {
    assert_eq!(CharacterTable::with_name(name).name(), name);
    assert_eq!(MacroTable::with_name(name).name(), name);
    assert_eq!(PatternMap::from_pattern(name, "x").unwrap().name(), name);
}

#[test]
fn test_yaml_and_json_agree() {
    let from_json = CharacterTable::from_json_str(
        "chars",
        r#"{"alpha": "α", "Gamma": ["Γ", {"mathvariant": "normal"}]}"#,
    )
    .unwrap();
    let from_yaml =
        CharacterTable::from_yaml_str("chars", "alpha: α\nGamma: [Γ, {mathvariant: normal}]\n")
            .unwrap();
    for token in ["alpha", "Gamma", "beta"] {
        assert_eq!(from_json.lookup(token), from_yaml.lookup(token));
    }
}
