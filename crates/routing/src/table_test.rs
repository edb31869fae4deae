//! Tests for RuleTable
//!
//! Tests cover exact-match lookup, unknown routes, and builder validation.

use crate::{CodeKind, Route, RoutingError, RuleEntry, RuleTable, RuleTableBuilder};

const FRAUD: &str = "/bo-rpa/checking-account/debit/fraud";
const PAYGO: &str = "/bo-rpa/checking-account/debit/paygo";

fn fraud_rule() -> RuleEntry {
    RuleEntry::new(FRAUD, "fraud.historic.codes", "DEBIT_FRAUD_INVALID_HISTORIC")
}

fn paygo_rule() -> RuleEntry {
    RuleEntry::new(PAYGO, "paygo.debit.historic.codes", "DEBIT_PAYGO_INVALID_HISTORIC")
}

fn build(rules: Vec<RuleEntry>) -> RuleTable {
    let mut builder = RuleTableBuilder::new();
    builder.add_rules(rules).unwrap();
    builder.build()
}

// =============================================================================
// Lookup tests
// =============================================================================

#[test]
fn test_empty_table() {
    let table = RuleTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.lookup(FRAUD).is_none());
}

#[test]
fn test_lookup_by_str_and_route() {
    let table = build(vec![fraud_rule()]);

    let by_str = table.lookup(FRAUD).unwrap();
    let by_route = table.lookup(&Route::new(FRAUD)).unwrap();

    assert_eq!(by_str, by_route);
    assert_eq!(by_str.codes_key(), "fraud.historic.codes");
    assert_eq!(by_str.error_classification(), "DEBIT_FRAUD_INVALID_HISTORIC");
    assert_eq!(by_str.kind(), CodeKind::Integer);
}

#[test]
fn test_lookup_multiple_routes() {
    let table = build(vec![fraud_rule(), paygo_rule()]);

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.lookup(PAYGO).unwrap().error_classification(),
        "DEBIT_PAYGO_INVALID_HISTORIC"
    );
    assert_eq!(
        table.lookup(FRAUD).unwrap().error_classification(),
        "DEBIT_FRAUD_INVALID_HISTORIC"
    );
}

#[test]
fn test_unknown_route_is_none() {
    let table = build(vec![fraud_rule()]);
    assert!(table.lookup("/unknown/path").is_none());
    assert!(!table.contains("/unknown/path"));
}

#[test]
fn test_no_prefix_matching() {
    let table = build(vec![fraud_rule()]);

    assert!(table.lookup("/bo-rpa/checking-account/debit").is_none());
    assert!(table.lookup("/bo-rpa/checking-account/debit/fraud/").is_none());
    assert!(table.lookup("/bo-rpa/checking-account/debit/fraud/extra").is_none());
}

#[test]
fn test_lookup_is_case_sensitive() {
    let table = build(vec![fraud_rule()]);
    assert!(table.lookup("/BO-RPA/checking-account/debit/fraud").is_none());
}

#[test]
fn test_routes_sorted() {
    let table = build(vec![paygo_rule(), fraud_rule()]);
    let routes: Vec<&str> = table.routes().into_iter().map(Route::as_str).collect();
    assert_eq!(routes, vec![FRAUD, PAYGO]);
}

#[test]
fn test_text_kind_preserved() {
    let rule = RuleEntry::new("/cards/regenerate", "regenerate.reasons.values", "INVALID_REASON")
        .with_kind(CodeKind::Text);
    let table = build(vec![rule]);

    assert_eq!(table.lookup("/cards/regenerate").unwrap().kind(), CodeKind::Text);
}

#[test]
fn test_table_shared_across_threads() {
    let table = std::sync::Arc::new(build(vec![fraud_rule()]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || table.lookup(FRAUD).is_some())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

// =============================================================================
// Builder tests
// =============================================================================

#[test]
fn test_builder_empty() {
    let builder = RuleTableBuilder::with_capacity(4);
    assert!(builder.is_empty());
    assert!(builder.build().is_empty());
}

#[test]
fn test_builder_rejects_duplicate_route() {
    let mut builder = RuleTableBuilder::new();
    builder.add_rule(fraud_rule()).unwrap();

    let err = builder
        .add_rule(RuleEntry::new(FRAUD, "other.codes", "OTHER"))
        .unwrap_err();
    assert!(matches!(err, RoutingError::DuplicateRoute { ref route } if route == FRAUD));

    // First rule survives
    let table = builder.build();
    assert_eq!(table.lookup(FRAUD).unwrap().codes_key(), "fraud.historic.codes");
}

#[test]
fn test_builder_rejects_empty_route() {
    let mut builder = RuleTableBuilder::new();
    let err = builder.add_rule(RuleEntry::new("", "codes", "ERR")).unwrap_err();
    assert!(matches!(err, RoutingError::EmptyRoute));
}

#[test]
fn test_builder_rejects_empty_codes_key() {
    let mut builder = RuleTableBuilder::new();
    let err = builder.add_rule(RuleEntry::new(FRAUD, "", "ERR")).unwrap_err();
    assert!(matches!(err, RoutingError::EmptyField { field: "codes_key", .. }));
}

#[test]
fn test_builder_rejects_empty_classification() {
    let mut builder = RuleTableBuilder::new();
    let err = builder.add_rule(RuleEntry::new(FRAUD, "codes", "")).unwrap_err();
    assert!(matches!(
        err,
        RoutingError::EmptyField {
            field: "error_classification",
            ..
        }
    ));
}

#[test]
fn test_add_rules_stops_at_first_error() {
    let mut builder = RuleTableBuilder::new();
    let result = builder.add_rules(vec![fraud_rule(), fraud_rule(), paygo_rule()]);

    assert!(result.is_err());
    assert_eq!(builder.len(), 1);
}
