//! Text report over a set of findings, grouped by severity.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Inconsistency, Severity};

/// Findings ordered most severe first. Order within a severity is the order
/// the checks produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    findings: Vec<Inconsistency>,
}

impl ConsistencyReport {
    pub fn new(mut findings: Vec<Inconsistency>) -> Self {
        // Stable sort keeps check order within a severity.
        findings.sort_by(|a, b| b.severity.cmp(&a.severity));
        Self { findings }
    }

    pub fn findings(&self) -> &[Inconsistency] {
        &self.findings
    }

    pub fn is_consistent(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn count_by_severity(&self) -> BTreeMap<Severity, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.severity).or_insert(0) += 1;
        }
        counts
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// True when no finding is at or above `threshold`.
    pub fn passes(&self, threshold: Severity) -> bool {
        self.highest_severity().map_or(true, |s| s < threshold)
    }

    pub fn render(&self) -> String {
        if self.findings.is_empty() {
            return "System is fully consistent - no inconsistencies detected".to_string();
        }

        let mut lines = vec![
            "CONSISTENCY CHECK REPORT".to_string(),
            "=".repeat(80),
            format!("Found {} inconsistencies:", self.findings.len()),
        ];
        let counts = self.count_by_severity();
        for severity in Severity::ALL {
            let Some(count) = counts.get(&severity) else {
                continue;
            };
            lines.push(String::new());
            lines.push(format!("{} ({count}):", severity.as_str().to_uppercase()));
            for finding in self.findings.iter().filter(|f| f.severity == severity) {
                lines.push(format!("  • {}", finding.description));
                if let Some(fix) = &finding.suggested_fix {
                    lines.push(format!("    → Fix: {fix}"));
                }
            }
        }
        lines.join("\n")
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
