//! Direct-summation gravitational N-body integration with a kick-drift-kick leapfrog
//! and total-energy drift diagnostics.
pub mod utils;
pub mod bodies;
pub mod integrator;
pub mod generators;
pub mod reporting;
