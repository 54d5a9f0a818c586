//! End-to-end tests for the global minimum cut engine

use ruvector_globalcut::{
    global_min_cut, min_cut_phase, parse_adjacency_list, Edge, Graph, MergeGroups,
    MinCutBuilder, MinCutEngine, MinCutError,
};

const SAMPLE: &str = "\
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr";

fn pair(a: &str, b: &str) -> (String, String, i64) {
    (a.to_string(), b.to_string(), 1)
}

#[test]
fn test_sample_component_split() {
    let named = parse_adjacency_list(SAMPLE).unwrap();
    assert_eq!(named.len(), 15);
    assert_eq!(named.graph().num_edges(), 33);

    let cut = named.solve(&MinCutEngine::default()).unwrap();

    assert_eq!(cut.value, 3);
    assert_eq!(cut.left, vec!["jqt", "rhn", "xhk", "hfx", "bvb", "ntq"]);
    assert_eq!(
        cut.right,
        vec!["nvd", "rsh", "frs", "pzl", "lsr", "cmg", "qnr", "lhk", "rzs"]
    );
    assert_eq!(
        cut.crossing_edges,
        vec![pair("jqt", "nvd"), pair("hfx", "pzl"), pair("bvb", "cmg")]
    );
    assert_eq!(cut.size_product(), 54);
    assert_eq!(cut.phases, 14);
}

#[test]
fn test_sample_with_cut_edges_removed_is_disconnected() {
    let named = parse_adjacency_list(SAMPLE).unwrap();
    let cut = named.solve(&MinCutEngine::default()).unwrap();

    let mut graph = named.graph().clone();
    for (a, b, _) in &cut.crossing_edges {
        let u = named.require_id(a).unwrap();
        let v = named.require_id(b).unwrap();
        graph.set_edge(u, v, 0).unwrap();
    }

    let components = graph.connected_components();
    assert_eq!(components.len(), 2);
    let mut sizes: Vec<_> = components.iter().map(Vec::len).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![6, 9]);
}

#[test]
fn test_start_vertex_does_not_change_value() {
    let named = parse_adjacency_list(SAMPLE).unwrap();
    for name in ["jqt", "hfx", "rzs", "frs"] {
        let engine = MinCutBuilder::new()
            .start_vertex(named.require_id(name).unwrap())
            .build();
        let cut = named.solve(&engine).unwrap();
        assert_eq!(cut.value, 3, "start vertex {name}");
        assert_eq!(cut.size_product(), 54, "start vertex {name}");
    }
}

#[test]
fn test_two_triangles_named() {
    let named = parse_adjacency_list("A: B C\nB: C\nC: D\nD: E F\nE: F").unwrap();
    let cut = named.solve(&MinCutEngine::default()).unwrap();

    assert_eq!(cut.value, 1);
    assert_eq!(cut.left, vec!["A", "B", "C"]);
    assert_eq!(cut.right, vec!["D", "E", "F"]);
    assert_eq!(cut.crossing_edges, vec![pair("C", "D")]);
}

#[test]
fn test_weighted_matrix_input() {
    // Stoer-Wagner example graph, vertex 0 of the paper dropped
    let rows = vec![
        vec![0, 2, 0, 0, 3, 0, 0, 0],
        vec![2, 0, 3, 0, 2, 2, 0, 0],
        vec![0, 3, 0, 4, 0, 0, 2, 0],
        vec![0, 0, 4, 0, 0, 0, 2, 2],
        vec![3, 2, 0, 0, 0, 3, 0, 0],
        vec![0, 2, 0, 0, 3, 0, 1, 0],
        vec![0, 0, 2, 2, 0, 1, 0, 3],
        vec![0, 0, 0, 2, 0, 0, 3, 0],
    ];
    let graph = Graph::from_matrix(&rows).unwrap();
    let result = global_min_cut(graph.clone()).unwrap();

    assert_eq!(result.value, 4);
    assert_eq!(result.partition, (vec![0, 1, 4, 5], vec![2, 3, 6, 7]));
    assert_eq!(
        result.cut_edges(&graph),
        vec![Edge::new(1, 2, 3), Edge::new(5, 6, 1)]
    );
}

#[test]
fn test_running_phases_by_hand_matches_engine() {
    let mut graph = Graph::new(6);
    for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)] {
        graph.add_edge(u, v, 1).unwrap();
    }
    let expected = global_min_cut(graph.clone()).unwrap();

    let mut groups = MergeGroups::singletons(6);
    let mut weights = Vec::new();
    while graph.num_vertices() > 1 {
        let before = graph.num_vertices();
        let phase = min_cut_phase(&mut graph, &mut groups).unwrap();
        assert_eq!(graph.num_vertices(), before - 1);
        assert_eq!(groups.total_members(), 6);
        weights.push(phase.weight);
    }

    assert_eq!(weights, vec![2, 2, 1, 2, 2]);
    assert_eq!(weights.iter().min().copied(), Some(expected.value));
    assert_eq!(groups.group(0).map(|g| g.len()), Some(6));
}

#[test]
fn test_errors_surface_to_caller() {
    assert!(matches!(
        parse_adjacency_list("a: b\na: c"),
        Err(MinCutError::DuplicateVertexName(name)) if name == "a"
    ));

    let err = global_min_cut(Graph::new(0)).unwrap_err();
    assert!(err.is_invalid_graph());
    assert_eq!(err, MinCutError::TooFewVertices(0));
}

#[test]
fn test_large_path_graph() {
    let n = 150;
    let mut graph = Graph::new(n);
    for i in 0..n - 1 {
        graph.add_edge(i, i + 1, 2).unwrap();
    }
    graph.add_edge(70, 71, 5).unwrap();

    let result = global_min_cut(graph).unwrap();
    assert_eq!(result.value, 2);
    assert_eq!(result.phases, n - 1);
    let (a, b) = result.side_sizes();
    assert_eq!(a + b, n);
}
