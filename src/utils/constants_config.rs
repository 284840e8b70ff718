// src/utils/constants_config.rs
use log::warn;
use crate::integrator::ForceMode;
use crate::utils::{
    DEFAULT_SIMULATION_CONFIG,
    errors::NBodyError
};

/// Run parameters for the leapfrog driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub time_step: f64,
    pub stop_time: f64,
    pub report_period: u64,
    pub force_mode: ForceMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    /// Builds a configuration, taking every missing value from `DEFAULT_SIMULATION_CONFIG`.
    ///
    /// # Example
    /// ```
    /// use rs_nbody::utils::SimulationConfig;
    ///
    /// let config = SimulationConfig::new(None, Some(2.5), None, None);
    /// assert_eq!(config.time_step, 1e-3);
    /// assert_eq!(config.stop_time, 2.5);
    /// assert_eq!(config.report_period, 100);
    /// ```
    pub fn new(
        time_step: Option<f64>,
        stop_time: Option<f64>,
        report_period: Option<u64>,
        force_mode: Option<ForceMode>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONFIG;
        Self {
            time_step: time_step.unwrap_or(default.time_step),
            stop_time: stop_time.unwrap_or(default.stop_time),
            report_period: report_period.unwrap_or(default.report_period),
            force_mode: force_mode.unwrap_or(default.force_mode),
        }
    }

    /// Returns a copy of this configuration with a different stop time.
    pub fn with_stop_time(mut self, stop_time: f64) -> Self {
        self.stop_time = stop_time;
        self
    }

    /// Returns a copy of this configuration with a different force evaluator.
    pub fn with_force_mode(mut self, force_mode: ForceMode) -> Self {
        self.force_mode = force_mode;
        self
    }

    pub fn validate(&self) -> Result<(), NBodyError> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 { return Err(NBodyError::InvalidTimeStep); }
        if !self.stop_time.is_finite() { return Err(NBodyError::InvalidStopTime); }
        if self.report_period == 0 { return Err(NBodyError::InvalidReportPeriod); }
        Ok(())
    }

    /// Interprets the optional stop-time argument of the command line.
    ///
    /// Missing, unparsable and non-finite values all fall back to the default stop time.
    ///
    /// # Example
    /// ```
    /// use rs_nbody::utils::SimulationConfig;
    ///
    /// assert_eq!(SimulationConfig::parse_stop_time(Some("0.5")), 0.5);
    /// assert_eq!(SimulationConfig::parse_stop_time(Some("soon")), 10.0);
    /// assert_eq!(SimulationConfig::parse_stop_time(None), 10.0);
    /// ```
    pub fn parse_stop_time(arg: Option<&str>) -> f64 {
        let default = DEFAULT_SIMULATION_CONFIG.stop_time;
        match arg {
            None => default,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                Ok(value) => {
                    warn!("Stop time {} is not finite, using default {}", value, default);
                    default
                }
                Err(e) => {
                    warn!("Could not parse stop time {:?} ({}), using default {}", raw, e, default);
                    default
                }
            },
        }
    }
}
