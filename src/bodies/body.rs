use crate::utils::{NBodyError, Vector3};

/// A point mass as it enters or leaves the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Strictly positive, finite mass.
    pub mass: f64,
    pub position: Vector3,
    pub velocity: Vector3,
}

impl Body {
    /// Creates a new Body.
    ///
    /// # Errors
    ///
    /// Returns `NBodyError::InvalidMass` if `mass` is zero, negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::bodies::Body;
    /// use rs_nbody::utils::Vector3;
    ///
    /// let body = Body::new(1.0, Vector3::new(1.0, 0.0, 0.0), Vector3::ZERO)
    ///     .expect("Failed to create body");
    /// assert_eq!(body.mass, 1.0);
    ///
    /// assert!(Body::new(0.0, Vector3::ZERO, Vector3::ZERO).is_err());
    /// ```
    pub fn new(mass: f64, position: Vector3, velocity: Vector3) -> Result<Self, NBodyError> {
        if !Self::is_valid_mass(mass) {
            return Err(NBodyError::InvalidMass { index: 0 });
        }
        Ok(Body { mass, position, velocity })
    }

    pub(crate) fn is_valid_mass(mass: f64) -> bool {
        mass.is_finite() && mass > 0.0
    }

    pub fn momentum(&self) -> Vector3 {
        self.velocity.scale(self.mass)
    }
}
