//! Kick-drift-kick leapfrog stepping.
//!
//! One step is, in this exact order:
//! 1. `advance_positions` with the accelerations of the current positions,
//! 2. a force evaluation at the new positions,
//! 3. `advance_velocities` with the average of the old and new accelerations.
use crate::bodies::Cluster;
use crate::integrator::ForceMode;

/// Snapshots the current accelerations and drifts every body:
/// `r += dt v + 0.5 dt^2 a_prev`.
///
/// Must run before the accelerations are recomputed for the new positions.
pub fn advance_positions(cluster: &mut Cluster, dt: f64) {
    let half_dt_sq = 0.5 * dt * dt;
    let bodies = cluster
        .positions
        .iter_mut()
        .zip(cluster.velocities.iter())
        .zip(cluster.accelerations.iter().zip(cluster.previous_accelerations.iter_mut()));
    for ((position, velocity), (acceleration, previous)) in bodies {
        *previous = *acceleration;
        *position += velocity.scale(dt) + previous.scale(half_dt_sq);
    }
}

/// Kicks every body with the mean of the previous and current accelerations,
/// `v += 0.5 dt (a_prev + a)`, then makes the current acceleration the new previous one.
pub fn advance_velocities(cluster: &mut Cluster, dt: f64) {
    let half_dt = 0.5 * dt;
    let bodies = cluster
        .velocities
        .iter_mut()
        .zip(cluster.accelerations.iter().zip(cluster.previous_accelerations.iter_mut()));
    for (velocity, (acceleration, previous)) in bodies {
        *velocity += (*previous + *acceleration).scale(half_dt);
        *previous = *acceleration;
    }
}

/// Performs one full leapfrog step. Accelerations must already match the current positions.
///
/// # Examples
///
/// ```
/// use rs_nbody::bodies::{Body, Cluster};
/// use rs_nbody::integrator::{compute_accelerations, leapfrog_step, ForceMode};
/// use rs_nbody::utils::Vector3;
///
/// let mut cluster = Cluster::new(vec![
///     Body::new(1.0, Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)).unwrap(),
/// ]).unwrap();
/// compute_accelerations(&mut cluster);
///
/// leapfrog_step(&mut cluster, 0.5, ForceMode::Serial);
///
/// // A lone body feels no force and drifts in a straight line.
/// assert_eq!(cluster.positions()[0], Vector3::new(0.5, 0.0, 0.0));
/// assert_eq!(cluster.velocities()[0], Vector3::new(1.0, 0.0, 0.0));
/// ```
pub fn leapfrog_step(cluster: &mut Cluster, dt: f64, force_mode: ForceMode) {
    advance_positions(cluster, dt);
    force_mode.evaluate(cluster);
    advance_velocities(cluster, dt);
}
