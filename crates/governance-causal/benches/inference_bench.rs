use criterion::{criterion_group, criterion_main, Criterion};

use governance_causal::graph::dag_enforcement;
use governance_causal::{CausalEdge, CausalGraph, CausalInferenceEngine, CausalNode, NodeType, RelationType};
use governance_core::config::InferenceConfig;

/// Build a DAG of 200 nodes with up to 5 forward edges per node.
fn build_1k_edge_dag() -> CausalGraph {
    let mut graph = CausalGraph::new("bench");
    let n = 200;
    for i in 0..n {
        graph
            .add_node(CausalNode::new(
                format!("n{i:03}"),
                NodeType::Risk,
                format!("Node {i}"),
                "bench",
                ["low", "medium", "high"],
            ))
            .unwrap();
    }
    let edges = (0..n).flat_map(|i| {
        (1..=5)
            .filter(move |j| i + j < n)
            .map(move |j| {
                CausalEdge::new(
                    format!("n{i:03}"),
                    format!("n{:03}", i + j),
                    RelationType::Direct,
                    0.7,
                    0.9,
                )
            })
    });
    // Forward-only edges cannot close a cycle.
    let count = graph.load_edges_unchecked(edges).unwrap();
    assert!(count >= 900, "Should have ~1K edges, got {count}");
    graph
}

fn bench_descendants(c: &mut Criterion) {
    let graph = build_1k_edge_dag();
    c.bench_function("descendants_1k_edges", |b| {
        b.iter(|| graph.get_descendants("n150"));
    });
}

fn bench_dag_enforcement(c: &mut Criterion) {
    let graph = build_1k_edge_dag();
    c.bench_function("dag_cycle_check_1k_edges", |b| {
        b.iter(|| dag_enforcement::would_create_cycle(&graph, "n199", "n150"));
    });
}

fn bench_forward_inference(c: &mut Criterion) {
    let uncached = CausalInferenceEngine::with_config(
        build_1k_edge_dag(),
        &InferenceConfig {
            belief_cache_capacity: 0,
        },
    );
    c.bench_function("forward_inference_uncached", |b| {
        b.iter(|| uncached.forward_inference("n180", "high").unwrap());
    });

    let cached = CausalInferenceEngine::new(build_1k_edge_dag());
    c.bench_function("forward_inference_cached", |b| {
        b.iter(|| cached.forward_inference("n180", "high").unwrap());
    });
}

criterion_group!(benches, bench_descendants, bench_dag_enforcement, bench_forward_inference);
criterion_main!(benches);
