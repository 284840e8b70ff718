mod constants;
mod constants_config;
pub mod errors;
mod vector;

pub use constants::*;
pub use constants_config::*;
pub use errors::NBodyError;
pub use vector::*;
