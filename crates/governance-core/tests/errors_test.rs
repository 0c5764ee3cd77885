use governance_core::errors::*;

#[test]
fn cycle_violation_names_both_endpoints() {
    let err = CausalError::CycleViolation {
        cause: "c".into(),
        effect: "a".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("c -> a"));
}

#[test]
fn duplicate_and_unknown_node_carry_name() {
    assert!(CausalError::DuplicateNode { name: "risk".into() }
        .to_string()
        .contains("risk"));
    assert!(CausalError::UnknownVariable { name: "ghost".into() }
        .to_string()
        .contains("ghost"));
}

#[test]
fn already_exists_carries_entity_id() {
    let err = StateError::AlreadyExists {
        entity_id: "decision-42".into(),
    };
    assert!(err.to_string().contains("decision-42"));
}

// --- From impls ---

#[test]
fn causal_error_converts_to_governance_error() {
    let err: GovernanceError = CausalError::UnknownNode { name: "x".into() }.into();
    assert!(matches!(err, GovernanceError::Causal(_)));
}

#[test]
fn state_error_converts_to_governance_error() {
    let err: GovernanceError = StateError::UnknownDimension { name: "mood".into() }.into();
    assert!(matches!(err, GovernanceError::State(_)));
}

#[test]
fn serde_error_converts_to_governance_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: GovernanceError = json_err.into();
    assert!(matches!(err, GovernanceError::Serialization(_)));
}

#[test]
fn governance_result_propagates_with_question_mark() {
    fn inner() -> GovernanceResult<()> {
        Err(ConfigError::ValidationFailed {
            field: "f".into(),
            message: "m".into(),
        })?;
        Ok(())
    }
    assert!(matches!(inner(), Err(GovernanceError::Config(_))));
}
