use route_matrix::algorithm::AllPairsAlgorithm;
use route_matrix::input::MatrixParser;
use route_matrix::render::{distance_table, format_path, successor_table};
use route_matrix::{Error, FloydWarshall, InvalidInput, NO_EDGE};

const FOUR_CITIES: &str = "\
# 9999 marks a missing road
0    3    9999 7
8    0    2    9999
5    9999 0    1
2    9999 9999 0
";

#[test]
fn test_parse_compute_render() {
    let weights = MatrixParser::new().parse_reader(FOUR_CITIES.as_bytes()).unwrap();
    assert_eq!(weights.size(), 4);
    assert_eq!(weights.get(0, 2), NO_EDGE);

    let result = FloydWarshall::new().compute(&weights).unwrap();
    assert_eq!(
        result.distances.to_rows(),
        vec![
            vec![0.0, 3.0, 5.0, 6.0],
            vec![5.0, 0.0, 2.0, 3.0],
            vec![3.0, 6.0, 0.0, 1.0],
            vec![2.0, 5.0, 7.0, 0.0],
        ]
    );

    let path = result.path(0, 3).unwrap();
    assert_eq!(path, vec![0, 1, 2, 3]);
    assert_eq!(format_path(&path), "1 → 2 → 3 → 4");

    let distances = distance_table(&result.distances).to_string();
    assert!(!distances.contains('∞'));
    let successors = successor_table(&result.successors).to_string();
    assert!(successors.lines().count() > 4);
}

#[test]
fn test_comma_separated_input() {
    let weights = MatrixParser::new()
        .parse_str("0, 2, inf\ninf, 0, 2\n2, inf, 0")
        .unwrap();
    let result = FloydWarshall::new().compute(&weights).unwrap();
    assert_eq!(result.distances.get(0, 2), 4.0);
    assert_eq!(result.successors.get(0, 2), 1);
}

#[test]
fn test_custom_marker() {
    let weights = MatrixParser::new()
        .with_no_edge_marker(Some(-1.0))
        .parse_str("0 -1\n4 0")
        .unwrap();
    assert_eq!(weights.get(0, 1), NO_EDGE);
    assert_eq!(weights.get(1, 0), 4.0);
}

#[test]
fn test_malformed_input_is_rejected_before_computation() {
    let err = MatrixParser::new().parse_str("0 1\n1 0 3").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InvalidInput::NotSquare { row: 1, len: 3, expected: 2 })
    ));

    let err = MatrixParser::new().parse_str("0 one\n1 0").unwrap_err();
    assert!(matches!(err, Error::Parse { row: 1, column: 2, .. }));
}
