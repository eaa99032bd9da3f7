use std::collections::HashSet;

use dskit::graph::Graph;

use crate::init_logger;

#[test]
fn ring_bfs_visits_everything_once() {
    init_logger();
    let mut graph = Graph::new();
    for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)] {
        graph.add_edge(u, v);
    }

    let order: Vec<_> = graph.bfs(&1).copied().collect();
    assert_eq!(order.first(), Some(&1));
    assert_eq!(order.len(), 5);
    assert_eq!(order.iter().collect::<HashSet<_>>().len(), 5);
}

#[test]
fn unknown_vertex_has_no_neighbors() {
    init_logger();
    let mut graph = Graph::new();
    graph.add_edge(1, 2);

    assert!(graph.neighbors(&99).is_empty());
    assert_eq!(graph.bfs(&99).collect::<Vec<_>>(), [&99]);
}

#[test]
fn string_labels() {
    init_logger();
    let mut graph: Graph<String> = Graph::new();
    graph.add_edge("A".into(), "B".into());
    graph.add_edge("A".into(), "C".into());
    graph.add_edge("B".into(), "D".into());

    let start = "A".to_string();
    let order: Vec<&str> = graph.bfs(&start).map(String::as_str).collect();
    assert_eq!(order, ["A", "B", "C", "D"]);
    assert_eq!(graph.to_string(), "A -> [B, C]\nB -> [A, D]\nC -> [A]\nD -> [B]\n");
}

quickcheck::quickcheck! {
    fn every_edge_is_seen_from_both_ends(edges: Vec<(u8, u8)>) -> bool {
        let mut graph = Graph::new();
        for (u, v) in &edges {
            graph.add_edge(*u, *v);
        }

        edges
            .iter()
            .all(|(u, v)| graph.neighbors(u).contains(v) && graph.neighbors(v).contains(u))
    }
}

quickcheck::quickcheck! {
    fn add_vertex_is_idempotent(edges: Vec<(u8, u8)>, v: u8, times: u8) -> bool {
        let mut graph = Graph::new();
        for (a, b) in &edges {
            graph.add_edge(*a, *b);
        }
        graph.add_vertex(v);
        let degree = graph.neighbors(&v).len();

        for _ in 0..times % 8 {
            graph.add_vertex(v);
        }
        graph.neighbors(&v).len() == degree
    }
}

quickcheck::quickcheck! {
    fn bfs_layers_never_shrink(edges: Vec<(u8, u8)>, start: u8) -> bool {
        let mut graph = Graph::new();
        for (u, v) in &edges {
            graph.add_edge(u % 16, v % 16);
        }
        let start = start % 16;

        // Recompute each vertex's distance as it is yielded: it must be one more than the
        // closest already-yielded neighbor, and distances must come out in order.
        let mut distance = std::collections::HashMap::new();
        let mut last = 0;
        for v in graph.bfs(&start) {
            let d = graph
                .neighbors(v)
                .iter()
                .filter_map(|n| distance.get(n))
                .min()
                .map_or(0, |d| d + 1);
            if d < last {
                return false;
            }
            last = d;
            distance.insert(*v, d);
        }

        distance.len() <= graph.vertex_count().max(1)
    }
}
