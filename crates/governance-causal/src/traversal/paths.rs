//! Path search along direct edges.

use std::collections::{HashSet, VecDeque};

use crate::graph::CausalGraph;

impl CausalGraph {
    /// Shortest causal path from `source` to `target`, found breadth-first.
    ///
    /// `find_path(a, a)` is `[a]`. Returns `None` when unreachable.
    pub fn find_path(&self, source: &str, target: &str) -> Option<Vec<String>> {
        if source == target {
            return Some(vec![source.to_string()]);
        }

        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<Vec<String>> = VecDeque::new();
        queue.push_back(vec![source.to_string()]);

        while let Some(path) = queue.pop_front() {
            let current = path[path.len() - 1].clone();
            if !visited.insert(current.clone()) {
                continue;
            }

            for child in self.get_children(&current) {
                if child == target {
                    let mut found = path.clone();
                    found.push(child);
                    return Some(found);
                }
                if !visited.contains(&child) {
                    let mut next = path.clone();
                    next.push(child);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Whether `target` is reachable from `source` (reflexive).
    pub fn can_reach(&self, source: &str, target: &str) -> bool {
        self.find_path(source, target).is_some()
    }

    /// Every simple causal path from `source` to `target`, depth-first.
    ///
    /// Exponential in the worst case; bounded in practice by the sparsity of
    /// a governance DAG. `find_all_paths(a, a)` is `[[a]]`.
    pub fn find_all_paths(&self, source: &str, target: &str) -> Vec<Vec<String>> {
        if source == target {
            return vec![vec![source.to_string()]];
        }

        let mut paths = Vec::new();
        let mut path = vec![source.to_string()];
        let mut on_path: HashSet<String> = HashSet::from([source.to_string()]);
        // One frame per node on `path`: its children and the next one to try.
        let mut frames: Vec<(Vec<String>, usize)> = vec![(self.get_children(source), 0)];

        while let Some((children, next)) = frames.last_mut() {
            let Some(child) = children.get(*next).cloned() else {
                frames.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(&done);
                }
                continue;
            };
            *next += 1;

            if child == target {
                let mut found = path.clone();
                found.push(child);
                paths.push(found);
            } else if on_path.insert(child.clone()) {
                frames.push((self.get_children(&child), 0));
                path.push(child);
            }
        }
        paths
    }
}
