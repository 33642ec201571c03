use seine::csv::{parse_coordinates, parse_edge_list};
use seine::{EdgeColumns, Error};

#[test]
fn bare_rows_make_unit_edges() {
    let g = parse_edge_list("0, 1\n1, 2\n", EdgeColumns::Bare).unwrap();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edges()[0].weight(), 1.0);
    assert_eq!(g.edges()[0].reliability(), 1.0);
}

#[test]
fn the_vertex_count_is_one_past_the_largest_id() {
    let g = parse_edge_list("5, 2\n", EdgeColumns::Bare).unwrap();
    assert_eq!(g.vertex_count(), 6);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(2, 5));
}

#[test]
fn weight_rows_carry_the_third_column() {
    let g = parse_edge_list("0, 1, 2.5\n1, 2, 0.5\n", EdgeColumns::Weight).unwrap();
    assert_eq!(g.edges()[0].weight(), 2.5);
    assert_eq!(g.edges()[0].reliability(), 1.0);
    assert_eq!(g.edges()[1].weight(), 0.5);
}

#[test]
fn reliability_rows_carry_the_third_column() {
    let g = parse_edge_list("0, 1, 0.25\n", EdgeColumns::Reliability).unwrap();
    assert_eq!(g.edges()[0].reliability(), 0.25);
    assert_eq!(g.edges()[0].weight(), 1.0);
}

#[test]
fn four_column_rows_put_reliability_before_weight() {
    let g = parse_edge_list("0, 1, 0.25, 4.0\n", EdgeColumns::ReliabilityWeight).unwrap();
    assert_eq!(g.edges()[0].reliability(), 0.25);
    assert_eq!(g.edges()[0].weight(), 4.0);
}

#[test]
fn blank_lines_and_padding_are_tolerated() {
    let g = parse_edge_list("\n  0 ,1 \n\n\t\n 1,2\n\n", EdgeColumns::Bare).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(1, 2));
}

#[test]
fn empty_input_builds_an_empty_graph() {
    let g = parse_edge_list("", EdgeColumns::Bare).unwrap();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn the_row_number_counts_physical_lines() {
    let err = parse_edge_list("0, 1\n\n\nnope, 2\n", EdgeColumns::Bare).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { row: 4, .. }), "{err}");
}

#[test]
fn wrong_column_counts_are_malformed() {
    let err = parse_edge_list("0, 1, 0.5\n", EdgeColumns::Bare).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { row: 1, .. }), "{err}");

    let err = parse_edge_list("0, 1\n", EdgeColumns::ReliabilityWeight).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { row: 1, .. }), "{err}");
}

#[test]
fn negative_ids_are_malformed() {
    let err = parse_edge_list("-1, 2\n", EdgeColumns::Bare).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { row: 1, .. }), "{err}");
}

#[test]
fn non_numeric_attrs_are_malformed() {
    let err = parse_edge_list("0, 1, fast\n", EdgeColumns::Weight).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { row: 1, .. }), "{err}");
}

#[test]
fn construction_failures_name_the_offending_row() {
    let err = parse_edge_list("0, 1\n1, 0\n", EdgeColumns::Bare).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Row 2:"), "{message}");

    let err = parse_edge_list("0, 1, 1.5\n", EdgeColumns::Reliability).unwrap_err();
    assert!(err.to_string().starts_with("Row 1:"), "{}", err);
}

#[test]
fn no_partial_graph_escapes_a_bad_row() {
    // The first row alone would be fine; the second poisons the whole parse.
    let result = parse_edge_list("0, 1\n1, 1\n", EdgeColumns::Bare);
    assert!(result.is_err());
}

#[test]
fn coordinates_become_a_complete_mesh() {
    let g = parse_coordinates("0, 0\n3, 4\n0, 1\n").unwrap();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert!((g.edges()[0].weight() - 5.0).abs() < 1e-12);
}

#[test]
fn coordinate_rows_need_exactly_two_fields() {
    let err = parse_coordinates("0, 0\n1, 2, 3\n").unwrap_err();
    assert!(matches!(err, Error::MalformedInput { row: 2, .. }), "{err}");
}

#[test]
fn non_numeric_coordinates_are_malformed() {
    let err = parse_coordinates("0, east\n").unwrap_err();
    assert!(matches!(err, Error::MalformedInput { row: 1, .. }), "{err}");
}
