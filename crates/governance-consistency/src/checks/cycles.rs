//! Circular dependency: depth-first search over the entity dependency graph
//! with an on-stack membership test. The search keeps its own frame stack,
//! so chain length is bounded by memory rather than the thread stack.

use std::collections::{BTreeMap, HashSet};

use crate::corpus::GovernanceCorpus;
use crate::model::{Inconsistency, InconsistencyType, Severity};

pub const NAME: &str = "circular_dependencies";

pub fn check(corpus: &GovernanceCorpus) -> Vec<Inconsistency> {
    find_cycles(&corpus.dependencies)
        .into_iter()
        .map(|cycle| {
            let mut loop_names = cycle.clone();
            loop_names.push(cycle[0].clone());
            Inconsistency::new(
                InconsistencyType::CircularDependency,
                Severity::Critical,
                cycle,
                format!("Circular dependency detected: {}", loop_names.join(" → ")),
            )
            .with_fix("Break the cycle by removing or modifying one of the dependencies")
        })
        .collect()
}

/// Every back edge found by a DFS started from each unvisited entity in id
/// order. Each cycle lists its members once, starting at the node the back
/// edge points to.
pub fn find_cycles(dependencies: &BTreeMap<String, Vec<String>>) -> Vec<Vec<String>> {
    let mut search = CycleSearch {
        dependencies,
        visited: HashSet::new(),
        on_stack: HashSet::new(),
        path: Vec::new(),
        cycles: Vec::new(),
    };
    for node in dependencies.keys() {
        if !search.visited.contains(node.as_str()) {
            search.visit(node);
        }
    }
    search.cycles
}

struct CycleSearch<'a> {
    dependencies: &'a BTreeMap<String, Vec<String>>,
    visited: HashSet<&'a str>,
    on_stack: HashSet<&'a str>,
    path: Vec<&'a str>,
    cycles: Vec<Vec<String>>,
}

impl<'a> CycleSearch<'a> {
    fn visit(&mut self, root: &'a str) {
        let dependencies = self.dependencies;
        self.enter(root);
        // One frame per node on `path`: the node and its next neighbor index.
        let mut frames: Vec<(&'a str, usize)> = vec![(root, 0)];

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;
            let neighbors = dependencies.get(node).map(Vec::as_slice).unwrap_or(&[]);
            let Some(neighbor) = neighbors.get(frame.1) else {
                frames.pop();
                self.path.pop();
                self.on_stack.remove(node);
                continue;
            };
            frame.1 += 1;

            let neighbor = neighbor.as_str();
            if !self.visited.contains(neighbor) {
                self.enter(neighbor);
                frames.push((neighbor, 0));
            } else if self.on_stack.contains(neighbor) {
                if let Some(start) = self.path.iter().position(|n| *n == neighbor) {
                    self.cycles
                        .push(self.path[start..].iter().map(|n| n.to_string()).collect());
                }
            }
        }
    }

    fn enter(&mut self, node: &'a str) {
        self.visited.insert(node);
        self.on_stack.insert(node);
        self.path.push(node);
    }
}
