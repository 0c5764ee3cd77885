//! The six consistency checks. Each module exposes `NAME` and a `check`
//! function that inspects the corpus and returns its findings.

pub mod cycles;
pub mod logic;
pub mod policy;
pub mod process;
pub mod rules;
pub mod state;

use crate::corpus::GovernanceCorpus;
use crate::model::Inconsistency;

/// Signature shared by every check.
pub type CheckFn = fn(&GovernanceCorpus) -> Vec<Inconsistency>;

/// Every check in execution order.
pub const REGISTRY: [(&str, CheckFn); 6] = [
    (logic::NAME, logic::check),
    (rules::NAME, rules::check),
    (cycles::NAME, cycles::check),
    (process::NAME, process::check),
    (policy::NAME, policy::check),
    (state::NAME, state::check),
];

/// Every unordered pair of map entries, in key order.
pub(crate) fn pairs<'a, V>(
    entries: &'a std::collections::BTreeMap<String, V>,
) -> impl Iterator<Item = ((&'a String, &'a V), (&'a String, &'a V))> {
    entries.iter().enumerate().flat_map(move |(i, a)| {
        entries.iter().skip(i + 1).map(move |b| (a, b))
    })
}
