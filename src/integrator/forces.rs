//! Direct-summation gravitational accelerations (G = 1).
//!
//! Every unordered pair `(i, j)`, `i < j`, is visited exactly once and its
//! contribution applied with opposite signs to both bodies:
//!
//! ```text
//! rij = r_i - r_j
//! f   = (rij . rij)^(-3/2)
//! a_i -= m_j f rij
//! a_j += m_i f rij
//! ```
//!
//! Coincident bodies are not guarded against; they produce non-finite accelerations.
use std::ops::Range;
use log::trace;
use rayon::prelude::*;
use crate::bodies::Cluster;
use crate::utils::Vector3;

/// Selects how accelerations are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceMode {
    /// Single-threaded, fixed summation order. Bit-reproducible.
    #[default]
    Serial,
    /// Rows of the pair triangle split across rayon workers, partial sums reduced in shard order.
    /// `shards == 0` uses one shard per rayon worker thread.
    Sharded { shards: usize },
}

impl ForceMode {
    /// Recomputes every acceleration of `cluster` with the selected evaluator.
    pub fn evaluate(&self, cluster: &mut Cluster) {
        match *self {
            ForceMode::Serial => compute_accelerations(cluster),
            ForceMode::Sharded { shards } => compute_accelerations_sharded(cluster, shards),
        }
    }
}

/// Overwrites `cluster`'s accelerations with the net gravitational acceleration on each body.
///
/// Previous accelerations are left untouched.
///
/// # Examples
///
/// ```
/// use rs_nbody::bodies::{Body, Cluster};
/// use rs_nbody::integrator::compute_accelerations;
/// use rs_nbody::utils::Vector3;
///
/// let mut cluster = Cluster::new(vec![
///     Body::new(1.0, Vector3::new(0.0, 0.0, 0.0), Vector3::ZERO).unwrap(),
///     Body::new(1.0, Vector3::new(2.0, 0.0, 0.0), Vector3::ZERO).unwrap(),
/// ]).unwrap();
///
/// compute_accelerations(&mut cluster);
///
/// // Each body is pulled towards the other with magnitude m / d^2 = 0.25.
/// assert_eq!(cluster.accelerations()[0], Vector3::new(0.25, 0.0, 0.0));
/// assert_eq!(cluster.accelerations()[1], Vector3::new(-0.25, 0.0, 0.0));
/// ```
pub fn compute_accelerations(cluster: &mut Cluster) {
    let n = cluster.len();
    let accelerations = &mut cluster.accelerations;
    accelerations.fill(Vector3::ZERO);
    accumulate_rows(&cluster.masses, &cluster.positions, 0..n, accelerations);
}

/// Parallel variant of `compute_accelerations`.
///
/// The outer index range is split into `shards` row ranges holding roughly the same number of
/// pairs. Each shard accumulates into its own zeroed array and the partial arrays are added in
/// shard order, so the result is deterministic for a given shard count but does not reproduce
/// the rounding of the serial evaluator.
pub fn compute_accelerations_sharded(cluster: &mut Cluster, shards: usize) {
    let n = cluster.len();
    let shards = if shards == 0 { rayon::current_num_threads() } else { shards };
    let splits = balanced_row_splits(n, shards.clamp(1, n.max(1)));
    trace!("Evaluating {} bodies in {} shards", n, splits.len());

    let masses = &cluster.masses;
    let positions = &cluster.positions;
    let partials: Vec<Vec<Vector3>> = splits
        .par_iter()
        .map(|rows| {
            let mut partial = vec![Vector3::ZERO; n];
            accumulate_rows(masses, positions, rows.clone(), &mut partial);
            partial
        })
        .collect();

    let accelerations = &mut cluster.accelerations;
    accelerations.fill(Vector3::ZERO);
    for partial in &partials {
        for (a, p) in accelerations.iter_mut().zip(partial) {
            *a += *p;
        }
    }
}

/// Returns `sum_i m_i a_i`, which vanishes (up to rounding) right after a force evaluation.
pub fn total_mass_weighted_acceleration(cluster: &Cluster) -> Vector3 {
    cluster
        .masses
        .iter()
        .zip(cluster.accelerations.iter())
        .fold(Vector3::ZERO, |sum, (&m, &a)| sum + a.scale(m))
}

/// Adds the contributions of every pair `(i, j)` with `i` in `rows` and `j > i` to `accelerations`.
fn accumulate_rows(masses: &[f64], positions: &[Vector3], rows: Range<usize>, accelerations: &mut [Vector3]) {
    let n = masses.len();
    for i in rows {
        let r_i = positions[i];
        let m_i = masses[i];
        let mut a_i = accelerations[i];
        for j in (i + 1)..n {
            let rij = r_i - positions[j];
            let f = rij.norm_squared().powf(-1.5);
            a_i -= rij.scale(masses[j] * f);
            accelerations[j] += rij.scale(m_i * f);
        }
        accelerations[i] = a_i;
    }
}

/// Splits `0..n` into `shards` contiguous row ranges with about `n^2 / (2 shards)` pairs each.
///
/// Row `i` owns `n - 1 - i` pairs, so early ranges are narrower than late ones.
/// Some ranges may be empty when `n` is small.
pub(crate) fn balanced_row_splits(n: usize, shards: usize) -> Vec<Range<usize>> {
    let shards = shards.max(1);
    let mut bounds = Vec::with_capacity(shards + 1);
    bounds.push(0);
    for s in (1..shards).rev() {
        let fraction = (s as f64 / shards as f64).sqrt();
        let bound = (n as f64 * (1.0 - fraction)).ceil() as usize;
        bounds.push(bound.min(n));
    }
    bounds.push(n);
    bounds.windows(2).map(|w| w[0]..w[1].max(w[0])).collect()
}
