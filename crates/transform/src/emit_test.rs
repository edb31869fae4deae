//! Tests for outcome emission

use super::*;
use gatecheck_context::{ContextError, MemoryContext};

fn emit(emitter: &OutcomeEmitter, outcome: &ValidationOutcome) -> MemoryContext {
    let mut ctx = MemoryContext::new();
    emitter.emit(outcome, &mut ctx).unwrap();
    ctx
}

#[test]
fn test_default_keys() {
    let emitter = OutcomeEmitter::default();
    assert_eq!(emitter.valid_key(), "isValidCode");
    assert_eq!(emitter.error_key(), "errorType");
}

#[test]
fn test_emit_accepted_omits_classification() {
    let ctx = emit(&OutcomeEmitter::default(), &ValidationOutcome::accepted());

    assert_eq!(ctx.get("isValidCode").unwrap(), Some(Value::Bool(true)));
    assert!(!ctx.contains("errorType"));
    assert_eq!(ctx.len(), 1);
}

#[test]
fn test_emit_invalid_code_writes_classification() {
    let outcome = ValidationOutcome::invalid_code("DEBIT_FRAUD_INVALID_HISTORIC");
    let ctx = emit(&OutcomeEmitter::default(), &outcome);

    assert_eq!(ctx.get("isValidCode").unwrap(), Some(Value::Bool(false)));
    assert_eq!(
        ctx.get("errorType").unwrap(),
        Some(Value::from("DEBIT_FRAUD_INVALID_HISTORIC"))
    );
}

#[test]
fn test_emit_unknown_route_omits_classification() {
    let ctx = emit(&OutcomeEmitter::default(), &ValidationOutcome::unknown_route());

    assert_eq!(ctx.get("isValidCode").unwrap(), Some(Value::Bool(false)));
    assert!(!ctx.contains("errorType"));
}

#[test]
fn test_omit_leaves_existing_key_untouched() {
    let mut ctx = MemoryContext::new().with("errorType", "SET_BY_EARLIER_STEP");
    OutcomeEmitter::default()
        .emit(&ValidationOutcome::accepted(), &mut ctx)
        .unwrap();

    assert_eq!(
        ctx.get_text("errorType").unwrap().as_deref(),
        Some("SET_BY_EARLIER_STEP")
    );
}

#[test]
fn test_sentinel_policy() {
    let emitter = OutcomeEmitter::default()
        .with_missing(MissingClassification::Sentinel("NONE".to_string()));

    let ctx = emit(&emitter, &ValidationOutcome::unknown_route());
    assert_eq!(ctx.get_text("errorType").unwrap().as_deref(), Some("NONE"));

    let ctx = emit(&emitter, &ValidationOutcome::accepted());
    assert_eq!(ctx.get_text("errorType").unwrap().as_deref(), Some("NONE"));

    let ctx = emit(&emitter, &ValidationOutcome::invalid_code("E"));
    assert_eq!(ctx.get_text("errorType").unwrap().as_deref(), Some("E"));
}

#[test]
fn test_reason_key() {
    let emitter = OutcomeEmitter::default().with_reason_key("validationReason");

    for (outcome, reason) in [
        (ValidationOutcome::accepted(), "accepted"),
        (ValidationOutcome::invalid_code("E"), "invalid_code"),
        (ValidationOutcome::unknown_route(), "unknown_route"),
    ] {
        let ctx = emit(&emitter, &outcome);
        assert_eq!(
            ctx.get_text("validationReason").unwrap().as_deref(),
            Some(reason)
        );
    }
}

#[test]
fn test_custom_keys() {
    let emitter = OutcomeEmitter::new("isValidReason", "errorCode");
    let ctx = emit(&emitter, &ValidationOutcome::invalid_code("INVALID_REASON"));

    assert_eq!(ctx.get("isValidReason").unwrap(), Some(Value::Bool(false)));
    assert_eq!(
        ctx.get_text("errorCode").unwrap().as_deref(),
        Some("INVALID_REASON")
    );
}

#[test]
fn test_from_output_config() {
    let config = OutputConfig {
        valid_key: "ok".to_string(),
        error_key: "err".to_string(),
        reason_key: Some("why".to_string()),
        missing_classification: MissingClassification::Sentinel("-".to_string()),
    };
    let emitter = OutcomeEmitter::from(&config);

    let ctx = emit(&emitter, &ValidationOutcome::unknown_route());
    assert_eq!(ctx.get("ok").unwrap(), Some(Value::Bool(false)));
    assert_eq!(ctx.get_text("err").unwrap().as_deref(), Some("-"));
    assert_eq!(ctx.get_text("why").unwrap().as_deref(), Some("unknown_route"));
}

#[test]
fn test_emit_is_idempotent() {
    let emitters = [
        OutcomeEmitter::default(),
        OutcomeEmitter::default()
            .with_reason_key("why")
            .with_missing(MissingClassification::Sentinel("NONE".to_string())),
    ];
    let outcomes = [
        ValidationOutcome::accepted(),
        ValidationOutcome::invalid_code("E"),
        ValidationOutcome::unknown_route(),
    ];

    for emitter in &emitters {
        for outcome in &outcomes {
            let mut ctx = MemoryContext::new();
            emitter.emit(outcome, &mut ctx).unwrap();
            let once = ctx.clone();
            emitter.emit(outcome, &mut ctx).unwrap();
            assert_eq!(ctx, once);
        }
    }
}

#[test]
fn test_write_error_propagates() {
    struct ReadOnly;

    impl Context for ReadOnly {
        fn get(&self, _key: &str) -> ContextResult<Option<Value>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: Value) -> ContextResult<()> {
            Err(ContextError::read_only(key))
        }
    }

    let err = OutcomeEmitter::default()
        .emit(&ValidationOutcome::accepted(), &mut ReadOnly)
        .unwrap_err();
    assert!(matches!(err, ContextError::ReadOnly { ref key } if key == "isValidCode"));
}
