//! Placeholder scanning tests

use super::helpers::svg;
use super::*;

#[test]
fn test_scan_finds_fields_and_indices() {
    let text = svg("<text>PXTAG_NAME1</text><text>PXTAG_EMAIL12</text>");
    let found = scan(&text, DEFAULT_PREFIX, ScanScope::Document).unwrap();
    let pairs: Vec<(&str, usize)> = found.iter().map(|p| (p.field.as_str(), p.index)).collect();
    assert_eq!(pairs, vec![("NAME", 1), ("EMAIL", 12)]);
}

#[test]
fn test_scan_span_covers_token() {
    let text = "xx PXTAG_NAME1 yy";
    let found = scan(text, DEFAULT_PREFIX, ScanScope::Document).unwrap();
    assert_eq!(&text[found[0].span.clone()], "PXTAG_NAME1");
}

#[test]
fn test_scan_ignores_lowercase_fields() {
    let text = "PXTAG_name1 PXTAG_Name1";
    let found = scan(text, DEFAULT_PREFIX, ScanScope::Document).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_scan_requires_digits() {
    let found = scan("PXTAG_NAME", DEFAULT_PREFIX, ScanScope::Document).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_scan_custom_prefix_is_literal() {
    // '.' and '+' must not act as pattern operators
    let text = "A.+NAME1 AxxNAME2";
    let found = scan(text, "A.+", ScanScope::Document).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field, "NAME");
    assert_eq!(found[0].index, 1);
}

#[test]
fn test_scan_document_scope_includes_attributes() {
    let text = svg(r#"<text id="PXTAG_NAME3">PXTAG_NAME1</text>"#);
    let found = scan(&text, DEFAULT_PREFIX, ScanScope::Document).unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn test_scan_text_scope_skips_attributes() {
    let text = svg(r#"<text id="PXTAG_NAME3">PXTAG_NAME1</text>"#);
    let found = scan(&text, DEFAULT_PREFIX, ScanScope::Text).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].index, 1);
}

#[test]
fn test_scan_huge_index_is_error() {
    let text = "PXTAG_NAME99999999999999999999999999";
    let err = scan(text, DEFAULT_PREFIX, ScanScope::Document).unwrap_err();
    assert!(matches!(err, TemplateError::InvalidIndex { .. }));
}
