//! Energy and momentum bookkeeping used to validate the integration.
use crate::bodies::Cluster;
use crate::utils::Vector3;

/// Total, kinetic and potential energy of a cluster at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energies {
    pub total: f64,
    pub kinetic: f64,
    pub potential: f64,
}

impl Energies {
    pub fn new(kinetic: f64, potential: f64) -> Self {
        Energies { total: kinetic + potential, kinetic, potential }
    }

    /// Relative drift of the total energy, `(E - E0) / E0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::integrator::Energies;
    ///
    /// let baseline = Energies::new(0.25, -0.5);
    /// assert_eq!(Energies::new(0.5, -0.75).relative_drift(&baseline), 0.0);
    /// assert_eq!(Energies::new(0.0, -0.5).relative_drift(&baseline), 1.0);
    /// ```
    pub fn relative_drift(&self, baseline: &Energies) -> f64 {
        (self.total - baseline.total) / baseline.total
    }

    /// Virial ratio `-K / U`; 0.5 for a system in virial equilibrium.
    pub fn virial_ratio(&self) -> f64 {
        -self.kinetic / self.potential
    }

    pub fn is_finite(&self) -> bool {
        self.total.is_finite() && self.kinetic.is_finite() && self.potential.is_finite()
    }
}

/// `sum_i 0.5 m_i |v_i|^2`
pub fn kinetic_energy(cluster: &Cluster) -> f64 {
    cluster
        .masses
        .iter()
        .zip(cluster.velocities.iter())
        .map(|(&m, v)| 0.5 * m * v.norm_squared())
        .sum()
}

/// `sum_{i<j} -m_i m_j / |r_i - r_j|`, each unordered pair counted once.
pub fn potential_energy(cluster: &Cluster) -> f64 {
    let masses = &cluster.masses;
    let positions = &cluster.positions;
    let n = masses.len();
    let mut potential = 0.0;
    for i in 0..n {
        let r_i = positions[i];
        let m_i = masses[i];
        for j in (i + 1)..n {
            potential -= m_i * masses[j] / (r_i - positions[j]).norm();
        }
    }
    potential
}

/// Computes the three energies from positions, velocities and masses. Accelerations are ignored.
pub fn compute_energies(cluster: &Cluster) -> Energies {
    Energies::new(kinetic_energy(cluster), potential_energy(cluster))
}

/// `sum_i m_i v_i`
pub fn total_momentum(cluster: &Cluster) -> Vector3 {
    cluster
        .masses
        .iter()
        .zip(cluster.velocities.iter())
        .fold(Vector3::ZERO, |sum, (&m, &v)| sum + v.scale(m))
}

pub fn center_of_mass(cluster: &Cluster) -> Vector3 {
    let weighted = cluster
        .masses
        .iter()
        .zip(cluster.positions.iter())
        .fold(Vector3::ZERO, |sum, (&m, &r)| sum + r.scale(m));
    weighted.scale(1.0 / cluster.total_mass())
}
