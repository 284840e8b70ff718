mod initial_conditions;

pub use initial_conditions::*;
