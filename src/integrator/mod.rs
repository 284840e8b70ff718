mod driver;
mod energy;
mod forces;
mod leapfrog;

pub use driver::*;
pub use energy::*;
pub use forces::*;
pub use leapfrog::*;

#[cfg(test)]
mod simulation_tests;
