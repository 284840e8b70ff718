mod body;
mod cluster;
mod loader;

pub use body::*;
pub use cluster::*;
pub use loader::*;

#[cfg(test)]
mod cluster_tests;
#[cfg(test)]
mod loader_tests;
