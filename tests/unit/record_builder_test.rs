//! Unit tests for building records from CSV documents

use assert_matches::assert_matches;
use csvconv::conversion::{csv_to_json, ConversionOptions};
use csvconv::error::{ConversionError, ConversionErrorKind};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn to_values(content: &str, options: &ConversionOptions) -> Vec<Value> {
    csv_to_json(content, options)
        .unwrap()
        .into_iter()
        .map(Value::Object)
        .collect()
}

#[test]
fn test_numeric_coercion_only_for_whole_numbers() {
    let records = to_values("a,b\n1,2\n3,x", &ConversionOptions::default());
    assert_eq!(records, vec![json!({"a": 1, "b": 2}), json!({"a": 3, "b": "x"})]);
}

#[test]
fn test_mixed_values() {
    let content = "id,price,label,code\n1, 2.50 ,3abc,\n2,-1e2,\"  42 \",0x10";
    let records = to_values(content, &ConversionOptions::default());
    assert_eq!(
        records,
        vec![
            json!({"id": 1, "price": 2.5, "label": "3abc", "code": ""}),
            json!({"id": 2, "price": -100, "label": 42, "code": "0x10"}),
        ]
    );
}

#[test]
fn test_positional_keys_without_header() {
    let options = ConversionOptions::default().with_header(false);
    let records = csv_to_json("x,y\nz,w", &options).unwrap();
    assert_eq!(records.len(), 2);
    for record in &records {
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["column_1", "column_2"]);
    }
}

#[test]
fn test_only_blank_lines_is_empty_document() {
    let result = csv_to_json("\n   \n\t\n", &ConversionOptions::default());
    assert_matches!(
        result,
        Err(ConversionError::Conversion {
            kind: ConversionErrorKind::EmptyDocument,
            ..
        })
    );
}

#[test]
fn test_short_row_pads_with_empty_strings() {
    let records = to_values("a,b,c\n1,2", &ConversionOptions::default());
    assert_eq!(records, vec![json!({"a": 1, "b": 2, "c": ""})]);
}

#[test]
fn test_long_row_drops_extra_fields() {
    let records = csv_to_json("a,b\n1,2,3,4", &ConversionOptions::default()).unwrap();
    assert_eq!(records[0].len(), 2);
    assert_eq!(Value::Object(records[0].clone()), json!({"a": 1, "b": 2}));
}

#[test]
fn test_semicolon_delimited_document() {
    let options = ConversionOptions::default().with_delimiter(';');
    let records = to_values("city;note\n\"Lisboa; PT\";\"say \"\"olá\"\"\"", &options);
    assert_eq!(
        records,
        vec![json!({"city": "Lisboa; PT", "note": "say \"olá\""})]
    );
}

#[test]
fn test_keep_empty_lines_treats_them_as_data() {
    let options = ConversionOptions::default().with_skip_empty_lines(false);
    let records = to_values("a\n\n1", &options);
    assert_eq!(records, vec![json!({"a": ""}), json!({"a": 1})]);
}

#[test]
fn test_conversion_is_idempotent() {
    let content = "name,score\nAna,10\n\nBo,\"7.5\"\nCy,n/a\n";
    let options = ConversionOptions::default();
    let first = csv_to_json(content, &options).unwrap();
    for _ in 0..3 {
        assert_eq!(csv_to_json(content, &options).unwrap(), first);
    }
}
