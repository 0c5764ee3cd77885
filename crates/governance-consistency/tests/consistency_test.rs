//! Integration tests for governance-consistency: the checker over whole
//! corpora, configuration, and report rendering.

use std::collections::BTreeMap;

use governance_consistency::{
    ConsistencyReport, GovernanceCorpus, Inconsistency, InconsistencyType,
    SelfConsistencyChecker, Severity,
};
use governance_core::config::ConsistencyConfig;
use governance_state::{ComplianceState, DecisionState, StateCoordinate, StateSpace};

fn cyclic_corpus() -> GovernanceCorpus {
    GovernanceCorpus {
        dependencies: BTreeMap::from([
            ("A".to_string(), vec!["B".to_string()]),
            ("B".to_string(), vec!["C".to_string()]),
            ("C".to_string(), vec!["A".to_string()]),
        ]),
        ..Default::default()
    }
}

fn finding(kind: InconsistencyType, severity: Severity, description: &str) -> Inconsistency {
    Inconsistency::new(kind, severity, vec!["x".to_string()], description).with_fix("fix it")
}

#[test]
fn empty_corpus_is_consistent() {
    let mut checker = SelfConsistencyChecker::default();
    let (consistent, findings) = checker.check_all(&GovernanceCorpus::default());
    assert!(consistent);
    assert!(findings.is_empty());
    assert!(checker.passes());
}

#[test]
fn three_node_dependency_cycle() {
    let mut checker = SelfConsistencyChecker::default();
    let (consistent, findings) = checker.check_all(&cyclic_corpus());

    assert!(!consistent);
    assert_eq!(findings.len(), 1);
    let cycle = &findings[0];
    assert_eq!(cycle.inconsistency_type, InconsistencyType::CircularDependency);
    assert_eq!(cycle.severity, Severity::Critical);
    assert_eq!(cycle.entities_involved, vec!["A", "B", "C"]);
    assert_eq!(cycle.description, "Circular dependency detected: A → B → C → A");
}

#[test]
fn long_dependency_chain_fits_a_small_stack() {
    let n = 10_000;
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || {
            let mut dependencies: BTreeMap<String, Vec<String>> = (0..n)
                .map(|i| (format!("e{i:05}"), vec![format!("e{:05}", i + 1)]))
                .collect();
            let mut checker = SelfConsistencyChecker::default();
            let acyclic = GovernanceCorpus {
                dependencies: dependencies.clone(),
                ..GovernanceCorpus::default()
            };
            let acyclic_consistent = checker.check_all(&acyclic).0;

            dependencies.insert(format!("e{n:05}"), vec!["e00000".to_string()]);
            let cyclic = GovernanceCorpus {
                dependencies,
                ..GovernanceCorpus::default()
            };
            let (_, findings) = checker.check_all(&cyclic);
            (acyclic_consistent, findings.to_vec())
        })
        .unwrap();

    let (acyclic_consistent, findings) = handle.join().unwrap();
    assert!(acyclic_consistent);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].inconsistency_type, InconsistencyType::CircularDependency);
    assert_eq!(findings[0].entities_involved.len(), n + 1);
}

#[test]
fn findings_are_replaced_between_runs() {
    let mut checker = SelfConsistencyChecker::default();
    checker.check_all(&cyclic_corpus());
    checker.check_all(&cyclic_corpus());
    assert_eq!(checker.inconsistencies().len(), 1);

    let (consistent, _) = checker.check_all(&GovernanceCorpus::default());
    assert!(consistent);
    assert!(checker.inconsistencies().is_empty());
}

#[test]
fn disabled_checks_do_not_run() {
    let config = ConsistencyConfig {
        enabled_checks: vec!["logic".to_string(), "rules".to_string()],
        ..Default::default()
    };
    let mut checker = SelfConsistencyChecker::new(config);
    let (consistent, _) = checker.check_all(&cyclic_corpus());
    assert!(consistent);
}

#[test]
fn fail_on_threshold_controls_pass() {
    let mut corpus = GovernanceCorpus::default();
    corpus.states.insert(
        "dec-1".to_string(),
        StateCoordinate::INITIAL
            .with(DecisionState::RolledBack)
            .with(ComplianceState::Exempted),
    );

    let mut strict = SelfConsistencyChecker::default();
    strict.check_all(&corpus);
    assert!(!strict.passes());

    let mut lenient = SelfConsistencyChecker::new(ConsistencyConfig {
        fail_on: "high".to_string(),
        ..Default::default()
    });
    lenient.check_all(&corpus);
    assert!(lenient.passes());
    assert_eq!(lenient.report().highest_severity(), Some(Severity::Medium));
}

#[test]
fn states_from_state_space_feed_the_checker() {
    let mut space = StateSpace::new();
    space.initialize_entity("dec-1", "decision").unwrap();
    let next = StateCoordinate::INITIAL
        .with(DecisionState::RolledBack)
        .with(ComplianceState::Exempted);
    assert!(space.transition("dec-1", next, None, BTreeMap::new()).is_applied());

    let corpus = GovernanceCorpus {
        states: space.current_states(),
        ..Default::default()
    };
    let mut checker = SelfConsistencyChecker::default();
    let (_, findings) = checker.check_all(&corpus);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].inconsistency_type, InconsistencyType::StateContradiction);
}

#[test]
fn corpus_deserializes_with_missing_sections() {
    let corpus: GovernanceCorpus = serde_json::from_str(
        r#"{"rules": {"r1": {"domain": "security", "condition": "breach", "action": "notify"}}}"#,
    )
    .unwrap();
    assert_eq!(corpus.rules.len(), 1);
    assert!(corpus.policies.is_empty());
}

// =============================================================================
// Report
// =============================================================================

#[test]
fn report_sorts_and_counts() {
    let report = ConsistencyReport::new(vec![
        finding(InconsistencyType::ProcessGap, Severity::Medium, "gap"),
        finding(InconsistencyType::CircularDependency, Severity::Critical, "cycle"),
        finding(InconsistencyType::ProcessOverlap, Severity::Medium, "overlap"),
    ]);
    let order: Vec<&str> = report.findings().iter().map(|f| f.description.as_str()).collect();
    assert_eq!(order, vec!["cycle", "gap", "overlap"]);

    let counts = report.count_by_severity();
    assert_eq!(counts[&Severity::Medium], 2);
    assert_eq!(counts[&Severity::Critical], 1);
    assert!(!counts.contains_key(&Severity::High));
    assert_eq!(report.highest_severity(), Some(Severity::Critical));
    assert!(!report.passes(Severity::Critical));
}

#[test]
fn report_renders_groups_most_severe_first() {
    let report = ConsistencyReport::new(vec![
        finding(InconsistencyType::StateContradiction, Severity::Low, "odd state"),
        finding(InconsistencyType::RuleConflict, Severity::High, "rules clash"),
    ]);
    let text = report.render();
    assert!(text.starts_with("CONSISTENCY CHECK REPORT"));
    assert!(text.contains("Found 2 inconsistencies:"));
    let high = text.find("HIGH (1):").unwrap();
    let low = text.find("LOW (1):").unwrap();
    assert!(high < low);
    assert!(text.contains("  • rules clash\n    → Fix: fix it"));
    assert_eq!(report.to_string(), text);
}

#[test]
fn empty_report_renders_success() {
    let report = ConsistencyReport::default();
    assert!(report.is_consistent());
    assert!(report.passes(Severity::Low));
    assert_eq!(
        report.render(),
        "System is fully consistent - no inconsistencies detected"
    );
}
