//! Logic contradiction: two policies where one strictly enforces a rule
//! that the other prohibits.

use crate::checks::pairs;
use crate::corpus::{GovernanceCorpus, Policy};
use crate::model::{Inconsistency, InconsistencyType, Severity};

pub const NAME: &str = "logic";

pub fn check(corpus: &GovernanceCorpus) -> Vec<Inconsistency> {
    pairs(&corpus.policies)
        .filter_map(|((a_id, a), (b_id, b))| {
            let rule = contradicting_rule(a, b)?;
            Some(
                Inconsistency::new(
                    InconsistencyType::LogicContradiction,
                    Severity::High,
                    vec![a_id.clone(), b_id.clone()],
                    format!(
                        "Policy '{a_id}' and '{b_id}' have contradictory requirements on '{rule}'"
                    ),
                )
                .with_fix("Review and reconcile conflicting requirements"),
            )
        })
        .collect()
}

/// First rule key that one policy enforces strictly and the other prohibits.
fn contradicting_rule<'a>(a: &'a Policy, b: &Policy) -> Option<&'a str> {
    a.rules.iter().find_map(|(key, left)| {
        let right = b.rules.get(key)?;
        let contradicts = (left.has_enforcement("strict") && right.has_enforcement("prohibited"))
            || (left.has_enforcement("prohibited") && right.has_enforcement("strict"));
        contradicts.then_some(key.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::RuleDirective;

    fn policy(rule: &str, enforcement: &str) -> Policy {
        Policy {
            domain: "data".into(),
            rules: [(
                rule.to_string(),
                RuleDirective {
                    enforcement: Some(enforcement.into()),
                    ..Default::default()
                },
            )]
            .into(),
        }
    }

    fn corpus(policies: Vec<(&str, Policy)>) -> GovernanceCorpus {
        GovernanceCorpus {
            policies: policies.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn strict_versus_prohibited_is_flagged_either_way() {
        for (first, second) in [("strict", "prohibited"), ("prohibited", "strict")] {
            let findings = check(&corpus(vec![
                ("p1", policy("retention", first)),
                ("p2", policy("retention", second)),
            ]));
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].entities_involved, vec!["p1", "p2"]);
            assert_eq!(findings[0].severity, Severity::High);
        }
    }

    #[test]
    fn different_rule_keys_do_not_contradict() {
        let findings = check(&corpus(vec![
            ("p1", policy("retention", "strict")),
            ("p2", policy("sharing", "prohibited")),
        ]));
        assert!(findings.is_empty());
    }

    #[test]
    fn matching_enforcement_is_fine() {
        let findings = check(&corpus(vec![
            ("p1", policy("retention", "strict")),
            ("p2", policy("retention", "strict")),
        ]));
        assert!(findings.is_empty());
    }
}
