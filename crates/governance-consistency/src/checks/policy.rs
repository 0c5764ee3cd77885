//! Cross-domain policy conflict: one domain requires encryption for a
//! resource that another domain allows to be cached unencrypted.

use std::collections::BTreeMap;

use crate::checks::pairs;
use crate::corpus::{GovernanceCorpus, Policy};
use crate::model::{Inconsistency, InconsistencyType, Severity};

pub const NAME: &str = "policy_conflicts";

const ENCRYPTION_RULE: &str = "encryption";
const CACHING_RULE: &str = "caching";

pub fn check(corpus: &GovernanceCorpus) -> Vec<Inconsistency> {
    let by_domain = group_by_domain(&corpus.policies);
    let mut findings = Vec::new();

    for ((domain_a, policies_a), (domain_b, policies_b)) in pairs(&by_domain) {
        for (a_id, a) in policies_a {
            for (b_id, b) in policies_b {
                if conflicts(a, b) || conflicts(b, a) {
                    findings.push(
                        Inconsistency::new(
                            InconsistencyType::PolicyConflict,
                            Severity::High,
                            vec![domain_a.clone(), domain_b.clone()],
                            format!(
                                "Policy conflict between '{domain_a}' and '{domain_b}': \
                                 '{a_id}' and '{b_id}' disagree on encrypting cached data"
                            ),
                        )
                        .with_fix("Reconcile cross-domain policy requirements"),
                    );
                }
            }
        }
    }
    findings
}

/// Policies grouped by domain; policies keep id order within a domain.
fn group_by_domain(policies: &BTreeMap<String, Policy>) -> BTreeMap<String, Vec<(&str, &Policy)>> {
    let mut by_domain: BTreeMap<String, Vec<(&str, &Policy)>> = BTreeMap::new();
    for (id, policy) in policies {
        by_domain
            .entry(policy.domain.clone())
            .or_default()
            .push((id.as_str(), policy));
    }
    by_domain
}

/// `encrypting` requires encryption where `caching` permits unencrypted
/// caching of the same resource.
fn conflicts(encrypting: &Policy, caching: &Policy) -> bool {
    match (
        encrypting.rules.get(ENCRYPTION_RULE),
        caching.rules.get(CACHING_RULE),
    ) {
        (Some(encryption), Some(cache)) => {
            encryption.required && cache.unencrypted && encryption.shares_resource(cache)
        }
        _ => false,
    }
}
