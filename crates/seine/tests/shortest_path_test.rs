use seine::{CostModel, EdgeAttrs, Error, Graph, dijkstra};

fn ring(n: usize) -> Graph {
    let mut g = Graph::with_vertices(n);
    for i in 0..n {
        g.add_edge(i, (i + 1) % n).unwrap();
    }
    g
}

fn weighted(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
    let mut g = Graph::with_vertices(n);
    for &(u, v, w) in edges {
        g.add_edge_with(
            u,
            v,
            EdgeAttrs {
                reliability: 1.0,
                weight: w,
            },
        )
        .unwrap();
    }
    g
}

#[test]
fn hop_distances_on_a_ring_take_the_shorter_arc() {
    let paths = dijkstra(&ring(4), 0, CostModel::Hops).unwrap();
    assert_eq!(paths.distances(), &[0.0, 1.0, 2.0, 1.0]);

    let paths = dijkstra(&ring(5), 0, CostModel::Hops).unwrap();
    assert_eq!(paths.distances(), &[0.0, 1.0, 2.0, 2.0, 1.0]);
}

#[test]
fn the_source_is_at_distance_zero_with_no_parent() {
    let paths = dijkstra(&ring(4), 2, CostModel::Hops).unwrap();
    assert_eq!(paths.source(), 2);
    assert_eq!(paths.distance_to(2), Some(0.0));
    assert_eq!(paths.parent_of(2), None);
    assert_eq!(paths.path_to(2), Some(vec![2]));
}

#[test]
fn weighted_distances_prefer_the_cheap_detour() {
    let g = weighted(
        4,
        &[(0, 1, 5.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0)],
    );
    let paths = dijkstra(&g, 0, CostModel::Weight).unwrap();
    assert_eq!(paths.distance_to(1), Some(2.0));
    assert_eq!(paths.distance_to(3), Some(3.0));
    assert_eq!(paths.path_to(3), Some(vec![0, 2, 1, 3]));
    assert_eq!(paths.parent_of(1), Some(2));
}

#[test]
fn zero_weight_edges_are_allowed() {
    let g = weighted(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
    let paths = dijkstra(&g, 0, CostModel::Weight).unwrap();
    assert_eq!(paths.distance_to(2), Some(0.0));
    assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
}

#[test]
fn unreachable_vertices_stay_at_infinity() {
    let g = weighted(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
    let paths = dijkstra(&g, 0, CostModel::Weight).unwrap();
    assert!(!paths.is_reachable(2));
    assert_eq!(paths.distance_to(2), None);
    assert_eq!(paths.path_to(2), None);
    assert!(paths.distances()[3].is_infinite());
}

#[test]
fn out_of_range_vertices_are_not_reachable() {
    let paths = dijkstra(&ring(3), 0, CostModel::Hops).unwrap();
    assert!(!paths.is_reachable(9));
    assert_eq!(paths.distance_to(9), None);
    assert_eq!(paths.path_to(9), None);
}

#[test]
fn rejects_bad_sources() {
    assert!(matches!(
        dijkstra(&ring(3), 3, CostModel::Hops),
        Err(Error::Precondition { .. })
    ));
    assert!(matches!(
        dijkstra(&Graph::with_vertices(0), 0, CostModel::Hops),
        Err(Error::Precondition { .. })
    ));
}

#[test]
fn hops_ignore_weights_entirely() {
    let g = weighted(3, &[(0, 1, 100.0), (0, 2, 0.1), (2, 1, 0.1)]);
    let paths = dijkstra(&g, 0, CostModel::Hops).unwrap();
    assert_eq!(paths.distance_to(1), Some(1.0));
    assert_eq!(paths.path_to(1), Some(vec![0, 1]));
}
