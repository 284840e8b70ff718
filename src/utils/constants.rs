use crate::integrator::ForceMode;
use crate::utils;

/// Newton's constant in N-body units. The force evaluator assumes this value.
pub const GRAVITATIONAL_CONSTANT: f64 = 1.0;
/// Fixed integration step, in N-body time units.
pub const DEFAULT_TIME_STEP: f64 = 1e-3;
/// Stop time used when none (or an unusable one) is given on the command line.
pub const DEFAULT_STOP_TIME: f64 = 10.0;
/// Number of steps between two energy reports.
pub const ENERGY_REPORT_PERIOD: u64 = 100;

pub const DEFAULT_SIMULATION_CONFIG: utils::SimulationConfig = utils::SimulationConfig {
    time_step: DEFAULT_TIME_STEP,
    stop_time: DEFAULT_STOP_TIME,
    report_period: ENERGY_REPORT_PERIOD,
    force_mode: ForceMode::Serial,
};
