//! Acyclicity guard for direct edges, plus an independent whole-graph
//! cycle scan using Tarjan's SCC.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use super::CausalGraph;

/// Check whether adding a direct edge `source → target` would create a cycle.
///
/// True when `source` is already among `target`'s direct-edge descendants,
/// or when the edge is a self-loop.
pub fn would_create_cycle(graph: &CausalGraph, source: &str, target: &str) -> bool {
    if source == target {
        return true;
    }
    graph.get_descendants(target).contains(source)
}

/// Find every cycle in the direct-edge subgraph.
///
/// Returns each strongly connected component with more than one node, and
/// each single node carrying a direct self-loop. Node names within a
/// component are sorted.
pub fn find_cycles(graph: &CausalGraph) -> Vec<Vec<String>> {
    let mut dag: DiGraphMap<&str, ()> = DiGraphMap::new();
    for name in graph.node_names() {
        dag.add_node(name);
    }
    for edge in graph.direct_edges() {
        dag.add_edge(edge.source.as_str(), edge.target.as_str(), ());
    }

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&dag)
        .into_iter()
        .filter(|scc| scc.len() > 1 || dag.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut names: Vec<String> = scc.into_iter().map(str::to_string).collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();
    cycles
}
