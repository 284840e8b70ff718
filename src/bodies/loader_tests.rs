use std::io::Cursor;
use crate::bodies::{parse_bodies, parse_bodies_str, read_cluster, write_bodies, Cluster};
use crate::utils::{NBodyError, Vector3};

const TWO_BODIES: &str = "\
0 1.0 -0.5 0.0 0.0 0.0 -0.7071067811865476 0.0
1 1.0 0.5 0.0 0.0 0.0 0.7071067811865476 0.0
";

#[test]
fn test_parse_complete_records() {
    let bodies = parse_bodies_str(TWO_BODIES).expect("Failed to parse bodies");
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].mass, 1.0);
    assert_eq!(bodies[0].position, Vector3::new(-0.5, 0.0, 0.0));
    assert_eq!(bodies[1].velocity, Vector3::new(0.0, 0.7071067811865476, 0.0));
}

#[test]
fn test_line_breaks_are_not_significant() {
    let input = "7 3.0 1 2\n 3 4 5\t6";
    let bodies = parse_bodies_str(input).expect("Failed to parse bodies");
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].mass, 3.0);
    assert_eq!(bodies[0].position, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(bodies[0].velocity, Vector3::new(4.0, 5.0, 6.0));
}

#[test]
fn test_trailing_incomplete_record_is_discarded() {
    let input = format!("{}2 1.0 0.0", TWO_BODIES);
    let bodies = parse_bodies_str(&input).expect("Failed to parse bodies");
    // Exactly the one partial record is dropped.
    assert_eq!(bodies.len(), 2);
}

#[test]
fn test_malformed_token_is_rejected() {
    let input = "0 1.0 0.0 zero 0.0 0.0 0.0 0.0";
    match parse_bodies_str(input) {
        Err(NBodyError::Parse { record, field, .. }) => {
            assert_eq!(record, 0);
            assert_eq!(field, "y");
        }
        other => panic!("Expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_non_integer_tag_is_rejected() {
    let input = "a 1.0 0.0 0.0 0.0 0.0 0.0 0.0";
    match parse_bodies_str(input) {
        Err(NBodyError::Parse { field, .. }) => assert_eq!(field, "tag"),
        other => panic!("Expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_mass_is_rejected_with_record_index() {
    let input = format!("{}2 0.0 3.0 0.0 0.0 0.0 0.0 0.0", TWO_BODIES);
    assert_eq!(parse_bodies_str(&input), Err(NBodyError::InvalidMass { index: 2 }));
}

#[test]
fn test_empty_input_fails_at_load() {
    let bodies = parse_bodies_str("   \n").expect("Empty input should parse");
    assert!(bodies.is_empty());
    assert_eq!(read_cluster(Cursor::new("0 1.0 2.0")), Err(NBodyError::EmptyCluster));
}

#[test]
fn test_write_then_read_reproduces_state() {
    let cluster = Cluster::new(parse_bodies(Cursor::new(TWO_BODIES)).unwrap()).unwrap();

    let mut out = Vec::new();
    write_bodies(&mut out, &cluster).expect("Failed to write bodies");
    let text = String::from_utf8(out).expect("Output is not UTF-8");
    assert!(text.starts_with("0 1 -0.5 0 0 0 -0.7071067811865476 0\n"));

    let reread = read_cluster(Cursor::new(text)).expect("Failed to re-read bodies");
    assert_eq!(reread, cluster);
}
