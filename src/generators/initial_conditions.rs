//! Seeded initial conditions in N-body units (G = 1).
//!
//! Every generator returns bodies in the centre-of-mass frame and is
//! deterministic for a given seed.
use std::f64::consts::{PI, SQRT_2};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::bodies::Body;
use crate::utils::{NBodyError, Vector3, GRAVITATIONAL_CONSTANT};

/// Plummer radii beyond this many scale lengths are resampled.
const PLUMMER_CUTOFF_RADIUS: f64 = 10.0;
/// Scale length of a Plummer sphere in standard units (virial radius 1, E = -1/4).
const PLUMMER_SCALE_LENGTH: f64 = 3.0 * PI / 16.0;

/// Two equal masses on a circular orbit about their common centre of mass, in the x-y plane.
///
/// # Errors
///
/// Returns `NBodyError::InvalidMass` for an unusable mass and
/// `NBodyError::InvalidParameter` if `separation` is not strictly positive and finite.
///
/// # Examples
///
/// ```
/// use rs_nbody::generators::two_body_circular;
///
/// let bodies = two_body_circular(1.0, 1.0).unwrap();
/// assert_eq!(bodies[0].position.x, -0.5);
/// assert_eq!(bodies[1].position.x, 0.5);
/// assert_eq!(bodies[0].velocity.y, -bodies[1].velocity.y);
/// ```
pub fn two_body_circular(mass: f64, separation: f64) -> Result<Vec<Body>, NBodyError> {
    if !separation.is_finite() || separation <= 0.0 {
        return Err(NBodyError::InvalidParameter { name: "separation" });
    }
    // Each body circles the barycentre at half the relative speed.
    let relative_speed = (GRAVITATIONAL_CONSTANT * 2.0 * mass / separation).sqrt();
    let speed = 0.5 * relative_speed;
    let half = 0.5 * separation;
    Ok(vec![
        Body::new(mass, Vector3::new(-half, 0.0, 0.0), Vector3::new(0.0, -speed, 0.0))?,
        Body::new(mass, Vector3::new(half, 0.0, 0.0), Vector3::new(0.0, speed, 0.0))?,
    ])
}

/// Kepler period `2 pi sqrt(a^3 / (G M))` of a bound pair with total mass `total_mass` and semi-major axis `separation`.
///
/// # Examples
///
/// ```
/// use rs_nbody::generators::orbital_period;
///
/// let period = orbital_period(2.0, 1.0);
/// assert!((period - 4.442882938158366).abs() < 1e-12);
/// ```
pub fn orbital_period(total_mass: f64, separation: f64) -> f64 {
    2.0 * PI * (separation.powi(3) / (GRAVITATIONAL_CONSTANT * total_mass)).sqrt()
}

/// Samples a Plummer sphere of `n` equal-mass bodies (total mass 1).
///
/// Positions and speeds follow Aarseth, Henon & Wielen (1974), then are rescaled to
/// standard N-body units so that the total energy is close to -1/4.
pub fn plummer_sphere(n: usize, seed: u64) -> Result<Vec<Body>, NBodyError> {
    if n == 0 {
        return Err(NBodyError::EmptyCluster);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mass = 1.0 / n as f64;
    let velocity_scale = 1.0 / PLUMMER_SCALE_LENGTH.sqrt();
    let mut bodies = Vec::with_capacity(n);

    while bodies.len() < n {
        let x: f64 = rng.random();
        let radius = 1.0 / (x.powf(-2.0 / 3.0) - 1.0).sqrt();
        if !radius.is_finite() || radius > PLUMMER_CUTOFF_RADIUS {
            continue;
        }
        let position = random_direction(&mut rng).scale(radius * PLUMMER_SCALE_LENGTH);

        let escape_speed = SQRT_2 * (1.0 + radius * radius).powf(-0.25);
        let fraction = loop {
            let q: f64 = rng.random();
            let y: f64 = rng.random();
            // g(q) = q^2 (1 - q^2)^(7/2) peaks just below 0.1.
            if 0.1 * y < q * q * (1.0 - q * q).powf(3.5) {
                break q;
            }
        };
        let velocity = random_direction(&mut rng).scale(fraction * escape_speed * velocity_scale);

        bodies.push(Body { mass, position, velocity });
    }

    to_center_of_mass_frame(&mut bodies);
    debug!("Sampled Plummer sphere with {} bodies (seed {})", n, seed);
    Ok(bodies)
}

/// `n` equal-mass bodies (total mass 1) at rest, uniformly distributed inside a sphere of `radius`.
pub fn uniform_sphere(n: usize, radius: f64, seed: u64) -> Result<Vec<Body>, NBodyError> {
    if n == 0 {
        return Err(NBodyError::EmptyCluster);
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(NBodyError::InvalidParameter { name: "radius" });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mass = 1.0 / n as f64;
    let mut bodies = Vec::with_capacity(n);

    while bodies.len() < n {
        let candidate = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if candidate.norm_squared() > 1.0 {
            continue;
        }
        bodies.push(Body { mass, position: candidate.scale(radius), velocity: Vector3::ZERO });
    }

    to_center_of_mass_frame(&mut bodies);
    Ok(bodies)
}

/// Shifts positions and velocities so the centre of mass sits at rest at the origin.
pub fn to_center_of_mass_frame(bodies: &mut [Body]) {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass <= 0.0 {
        return;
    }
    let (weighted_position, momentum) = bodies.iter().fold(
        (Vector3::ZERO, Vector3::ZERO),
        |(r, p), b| (r + b.position.scale(b.mass), p + b.velocity.scale(b.mass)),
    );
    let center = weighted_position.scale(1.0 / total_mass);
    let drift = momentum.scale(1.0 / total_mass);
    for body in bodies.iter_mut() {
        body.position -= center;
        body.velocity -= drift;
    }
}

fn random_direction<R: Rng>(rng: &mut R) -> Vector3 {
    let z: f64 = rng.random_range(-1.0..1.0);
    let phi: f64 = rng.random_range(0.0..2.0 * PI);
    let s = (1.0 - z * z).sqrt();
    Vector3::new(s * phi.cos(), s * phi.sin(), z)
}
