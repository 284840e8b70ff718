//! Owns the cluster and the simulation clock, and sequences the leapfrog loop.
//!
//! Lifecycle: `Uninitialized -> Loaded -> Running -> Finished`.
//!
//! # Example
//!
//! ```
//! use rs_nbody::generators::two_body_circular;
//! use rs_nbody::integrator::Driver;
//! use rs_nbody::reporting::RecordingReporter;
//! use rs_nbody::utils::SimulationConfig;
//!
//! let config = SimulationConfig::default().with_stop_time(1.0);
//! let mut driver = Driver::new(config).expect("Invalid configuration");
//! driver.load(two_body_circular(1.0, 1.0).unwrap()).expect("Failed to load bodies");
//!
//! let mut reporter = RecordingReporter::default();
//! let summary = driver.run(&mut reporter).expect("Run failed");
//!
//! assert!(summary.steps >= 1000);
//! assert!(summary.relative_drift.abs() < 1e-5);
//! assert_eq!(reporter.reports.len() as u64, summary.steps / 100);
//! ```
use std::time::{Duration, Instant};
use log::{debug, info, warn};
use crate::bodies::{Body, Cluster};
use crate::integrator::{compute_energies, leapfrog_step, Energies};
use crate::utils::{NBodyError, SimulationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Loaded,
    Running,
    Finished,
}

impl DriverState {
    pub fn name(&self) -> &'static str {
        match self {
            DriverState::Uninitialized => "Uninitialized",
            DriverState::Loaded => "Loaded",
            DriverState::Running => "Running",
            DriverState::Finished => "Finished",
        }
    }
}

/// Periodic energy diagnostic emitted while running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub step: u64,
    pub time: f64,
    pub energies: Energies,
    /// `(E - E0) / E0` on the total energy.
    pub relative_drift: f64,
}

/// Final state of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub elapsed_time: f64,
    pub final_energies: Energies,
    pub relative_drift: f64,
    pub wall_time: Duration,
}

/// Receives the diagnostics produced by `Driver::run`.
pub trait Reporter {
    fn on_baseline(&mut self, baseline: &Energies) -> Result<(), NBodyError>;
    fn on_report(&mut self, report: &EnergyReport) -> Result<(), NBodyError>;
    fn on_finished(&mut self, summary: &RunSummary) -> Result<(), NBodyError>;
}

pub struct Driver {
    config: SimulationConfig,
    state: DriverState,
    cluster: Option<Cluster>,
    time: f64,
    steps: u64,
    baseline: Option<Energies>,
    started_at: Option<Instant>,
    warned_non_finite: bool,
}

impl Driver {
    /// Creates a driver in the `Uninitialized` state.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config` if it is unusable.
    pub fn new(config: SimulationConfig) -> Result<Self, NBodyError> {
        config.validate()?;
        Ok(Driver {
            config,
            state: DriverState::Uninitialized,
            cluster: None,
            time: 0.0,
            steps: 0,
            baseline: None,
            started_at: None,
            warned_non_finite: false,
        })
    }

    /// Builds the cluster from `bodies`. Fails with `EmptyCluster` on empty input.
    pub fn load(&mut self, bodies: Vec<Body>) -> Result<(), NBodyError> {
        self.expect_state(DriverState::Uninitialized)?;
        let cluster = Cluster::new(bodies)?;
        self.load_cluster(cluster)
    }

    pub fn load_cluster(&mut self, cluster: Cluster) -> Result<(), NBodyError> {
        self.expect_state(DriverState::Uninitialized)?;
        info!(
            "Loaded {} bodies (dt = {}, stop time = {}, forces = {:?})",
            cluster.len(),
            self.config.time_step,
            self.config.stop_time,
            self.config.force_mode
        );
        self.cluster = Some(cluster);
        self.state = DriverState::Loaded;
        Ok(())
    }

    /// Records the baseline energies and computes the initial accelerations.
    ///
    /// A run whose stop time is not positive finishes here without stepping.
    pub fn start(&mut self) -> Result<Energies, NBodyError> {
        self.expect_state(DriverState::Loaded)?;
        let force_mode = self.config.force_mode;
        let cluster = self.cluster_mut()?;
        let baseline = compute_energies(cluster);
        force_mode.evaluate(cluster);

        if baseline.total == 0.0 || !baseline.is_finite() {
            warn!("Baseline energy is {}; relative drift will not be meaningful", baseline.total);
        }
        info!(
            "Initial energies: total = {}, kinetic = {}, potential = {}",
            baseline.total, baseline.kinetic, baseline.potential
        );

        self.baseline = Some(baseline);
        self.time = 0.0;
        self.steps = 0;
        self.started_at = Some(Instant::now());
        self.state = DriverState::Running;
        self.finish_if_due();
        Ok(baseline)
    }

    /// Advances one leapfrog step. Returns a report every `report_period` steps.
    pub fn step(&mut self) -> Result<Option<EnergyReport>, NBodyError> {
        self.expect_state(DriverState::Running)?;
        let dt = self.config.time_step;
        let force_mode = self.config.force_mode;
        leapfrog_step(self.cluster_mut()?, dt, force_mode);
        self.time += dt;
        self.steps += 1;

        let report = if self.steps % self.config.report_period == 0 {
            Some(self.energy_report()?)
        } else {
            None
        };
        self.finish_if_due();
        Ok(report)
    }

    /// Runs from `Loaded` (or an already started driver) to `Finished`, forwarding every diagnostic to `reporter`.
    pub fn run<R: Reporter + ?Sized>(&mut self, reporter: &mut R) -> Result<RunSummary, NBodyError> {
        match self.state {
            DriverState::Loaded => {
                let baseline = self.start()?;
                reporter.on_baseline(&baseline)?;
            }
            DriverState::Running => {}
            other => {
                return Err(NBodyError::InvalidState { expected: "Loaded", found: other.name() });
            }
        }

        while self.state == DriverState::Running {
            if let Some(report) = self.step()? {
                reporter.on_report(&report)?;
            }
        }

        let summary = self.summary()?;
        reporter.on_finished(&summary)?;
        Ok(summary)
    }

    /// Summary of the run so far; available once the driver has started.
    pub fn summary(&self) -> Result<RunSummary, NBodyError> {
        let baseline = self.baseline.ok_or(NBodyError::InvalidState {
            expected: "Running",
            found: self.state.name(),
        })?;
        let final_energies = compute_energies(self.cluster_ref()?);
        Ok(RunSummary {
            steps: self.steps,
            elapsed_time: self.time,
            final_energies,
            relative_drift: final_energies.relative_drift(&baseline),
            wall_time: self.started_at.map(|t| t.elapsed()).unwrap_or_default(),
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn cluster(&self) -> Option<&Cluster> {
        self.cluster.as_ref()
    }

    pub fn into_cluster(self) -> Option<Cluster> {
        self.cluster
    }

    pub fn elapsed_time(&self) -> f64 {
        self.time
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn baseline(&self) -> Option<Energies> {
        self.baseline
    }

    fn energy_report(&mut self) -> Result<EnergyReport, NBodyError> {
        let baseline = self.baseline.ok_or(NBodyError::InvalidState {
            expected: "Running",
            found: self.state.name(),
        })?;
        let energies = compute_energies(self.cluster_ref()?);
        let report = EnergyReport {
            step: self.steps,
            time: self.time,
            energies,
            relative_drift: energies.relative_drift(&baseline),
        };

        if !energies.is_finite() && !self.warned_non_finite {
            warn!("Non-finite energy at step {} (t = {}); bodies may have collided", self.steps, self.time);
            self.warned_non_finite = true;
        }
        debug!("t = {:.3}, E = {}, dE/E = {:e}", report.time, energies.total, report.relative_drift);
        Ok(report)
    }

    fn finish_if_due(&mut self) {
        if self.time >= self.config.stop_time {
            self.state = DriverState::Finished;
            info!("Finished after {} steps at t = {}", self.steps, self.time);
        }
    }

    fn expect_state(&self, expected: DriverState) -> Result<(), NBodyError> {
        if self.state != expected {
            return Err(NBodyError::InvalidState { expected: expected.name(), found: self.state.name() });
        }
        Ok(())
    }

    fn cluster_ref(&self) -> Result<&Cluster, NBodyError> {
        self.cluster.as_ref().ok_or(NBodyError::InvalidState {
            expected: "Loaded",
            found: self.state.name(),
        })
    }

    fn cluster_mut(&mut self) -> Result<&mut Cluster, NBodyError> {
        let found = self.state.name();
        self.cluster.as_mut().ok_or(NBodyError::InvalidState { expected: "Loaded", found })
    }
}
