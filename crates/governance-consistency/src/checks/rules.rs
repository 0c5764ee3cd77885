//! Rule conflict: same domain, same trigger condition, different action.

use crate::checks::pairs;
use crate::corpus::GovernanceCorpus;
use crate::model::{Inconsistency, InconsistencyType, Severity};

pub const NAME: &str = "rules";

pub fn check(corpus: &GovernanceCorpus) -> Vec<Inconsistency> {
    pairs(&corpus.rules)
        .filter(|((_, a), (_, b))| {
            a.domain == b.domain && a.condition == b.condition && a.action != b.action
        })
        .map(|((a_id, a), (b_id, b))| {
            Inconsistency::new(
                InconsistencyType::RuleConflict,
                Severity::High,
                vec![a_id.clone(), b_id.clone()],
                format!(
                    "Rule '{a_id}' and '{b_id}' produce conflicting outcomes for '{}' ('{}' vs '{}')",
                    a.condition, a.action, b.action
                ),
            )
            .with_fix("Clarify rule precedence or modify rule conditions")
        })
        .collect()
}
