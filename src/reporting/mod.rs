mod reporters;

pub use reporters::*;

#[cfg(test)]
mod reporters_tests;
