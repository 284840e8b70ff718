//! The body store of the integrator.
//!
//! A `Cluster` keeps every per-body quantity in its own contiguous array
//! (structure-of-arrays), so the pairwise loops walk positions and masses
//! without dragging velocities and accelerations through the cache.
//!
//! # Example
//!
//! ```
//! use rs_nbody::bodies::{Body, Cluster};
//! use rs_nbody::utils::Vector3;
//!
//! let bodies = vec![
//!     Body::new(1.0, Vector3::new(-0.5, 0.0, 0.0), Vector3::new(0.0, -0.5, 0.0)).unwrap(),
//!     Body::new(1.0, Vector3::new(0.5, 0.0, 0.0), Vector3::new(0.0, 0.5, 0.0)).unwrap(),
//! ];
//! let cluster = Cluster::new(bodies).expect("Failed to build cluster");
//!
//! assert_eq!(cluster.len(), 2);
//! assert_eq!(cluster.accelerations()[0], Vector3::ZERO);
//! ```
use log::debug;
use crate::bodies::Body;
use crate::utils::{NBodyError, Vector3};

/// An ordered, fixed-size collection of bodies in structure-of-arrays layout.
///
/// - `masses` are immutable once the cluster is built.
/// - `positions` and `velocities` are advanced by the leapfrog stepper.
/// - `accelerations` are overwritten by every force evaluation.
/// - `previous_accelerations` hold the accelerations that were valid before the last position advance.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub(crate) masses: Vec<f64>,
    pub(crate) positions: Vec<Vector3>,
    pub(crate) velocities: Vec<Vector3>,
    pub(crate) accelerations: Vec<Vector3>,
    pub(crate) previous_accelerations: Vec<Vector3>,
}

impl Cluster {
    /// Builds a cluster from `bodies`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `NBodyError::EmptyCluster` if `bodies` is empty and
    /// `NBodyError::InvalidMass` (carrying the offending index) if any mass is not strictly positive and finite.
    pub fn new(bodies: Vec<Body>) -> Result<Self, NBodyError> {
        if bodies.is_empty() {
            return Err(NBodyError::EmptyCluster);
        }
        let n = bodies.len();
        let mut masses = Vec::with_capacity(n);
        let mut positions = Vec::with_capacity(n);
        let mut velocities = Vec::with_capacity(n);
        for (index, body) in bodies.into_iter().enumerate() {
            if !Body::is_valid_mass(body.mass) {
                return Err(NBodyError::InvalidMass { index });
            }
            masses.push(body.mass);
            positions.push(body.position);
            velocities.push(body.velocity);
        }
        debug!("Built cluster with {} bodies", n);
        Ok(Cluster {
            masses,
            positions,
            velocities,
            accelerations: vec![Vector3::ZERO; n],
            previous_accelerations: vec![Vector3::ZERO; n],
        })
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Always false for a successfully built cluster.
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn positions(&self) -> &[Vector3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vector3] {
        &self.velocities
    }

    pub fn accelerations(&self) -> &[Vector3] {
        &self.accelerations
    }

    pub fn previous_accelerations(&self) -> &[Vector3] {
        &self.previous_accelerations
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Returns the body at `index`, or `None` when out of range.
    pub fn body(&self, index: usize) -> Option<Body> {
        if index >= self.len() {
            return None;
        }
        Some(Body {
            mass: self.masses[index],
            position: self.positions[index],
            velocity: self.velocities[index],
        })
    }

    /// Iterates over the bodies in storage order.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.masses
            .iter()
            .zip(self.positions.iter())
            .zip(self.velocities.iter())
            .map(|((&mass, &position), &velocity)| Body { mass, position, velocity })
    }

    /// Consumes the cluster and returns its bodies in storage order.
    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies().collect()
    }
}
