use crate::bodies::{Body, Cluster};
use crate::utils::{NBodyError, Vector3};

fn sample_bodies() -> Vec<Body> {
    vec![
        Body { mass: 1.0, position: Vector3::new(0.0, 0.0, 0.0), velocity: Vector3::new(0.0, 0.1, 0.0) },
        Body { mass: 2.0, position: Vector3::new(1.0, 0.0, 0.0), velocity: Vector3::new(0.0, -0.05, 0.0) },
        Body { mass: 0.5, position: Vector3::new(0.0, 2.0, 0.0), velocity: Vector3::new(0.3, 0.0, 0.0) },
    ]
}

#[test]
fn test_new_cluster_layout() {
    let cluster = Cluster::new(sample_bodies()).expect("Failed to create cluster");

    assert_eq!(cluster.len(), 3);
    assert!(!cluster.is_empty());
    assert_eq!(cluster.masses(), &[1.0, 2.0, 0.5]);
    assert_eq!(cluster.positions()[1], Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(cluster.velocities()[2], Vector3::new(0.3, 0.0, 0.0));
    // Accelerations start zeroed until the first force evaluation.
    assert!(cluster.accelerations().iter().all(|a| *a == Vector3::ZERO));
    assert!(cluster.previous_accelerations().iter().all(|a| *a == Vector3::ZERO));
    assert_eq!(cluster.total_mass(), 3.5);
}

#[test]
fn test_empty_cluster_rejected() {
    assert_eq!(Cluster::new(Vec::new()), Err(NBodyError::EmptyCluster));
}

#[test]
fn test_invalid_mass_reports_index() {
    let mut bodies = sample_bodies();
    bodies[2].mass = -1.0;
    assert_eq!(Cluster::new(bodies), Err(NBodyError::InvalidMass { index: 2 }));
}

#[test]
fn test_body_access_preserves_order() {
    let bodies = sample_bodies();
    let cluster = Cluster::new(bodies.clone()).expect("Failed to create cluster");

    assert_eq!(cluster.body(1), Some(bodies[1]));
    assert_eq!(cluster.body(3), None);
    assert_eq!(cluster.bodies().collect::<Vec<_>>(), bodies);
    assert_eq!(cluster.into_bodies(), bodies);
}
