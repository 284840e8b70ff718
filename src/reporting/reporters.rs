//! `Reporter` implementations for the driver.
//!
//! # Example
//!
//! ```
//! use rs_nbody::integrator::{Energies, Reporter};
//! use rs_nbody::reporting::TextReporter;
//!
//! let mut reporter = TextReporter::new(Vec::new());
//! reporter.on_baseline(&Energies::new(0.25, -0.5)).unwrap();
//!
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert_eq!(text, "Energies: -0.25 0.25 -0.5\n");
//! ```
use std::io::Write;
use crate::integrator::{Energies, EnergyReport, Reporter, RunSummary};
use crate::utils::NBodyError;

/// Writes one line per diagnostic to `out`, flushing after each so progress is visible while running.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        TextReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn on_baseline(&mut self, baseline: &Energies) -> Result<(), NBodyError> {
        writeln!(self.out, "Energies: {} {} {}", baseline.total, baseline.kinetic, baseline.potential)?;
        self.out.flush()?;
        Ok(())
    }

    fn on_report(&mut self, report: &EnergyReport) -> Result<(), NBodyError> {
        let e = report.energies;
        writeln!(
            self.out,
            "t= {:.3} E= {} {} {} dE/E = {:+.6e}",
            report.time, e.total, e.kinetic, e.potential, report.relative_drift
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn on_finished(&mut self, summary: &RunSummary) -> Result<(), NBodyError> {
        writeln!(self.out, "number time steps: {}", summary.steps)?;
        writeln!(self.out, "Final dE/E = {:+.6e}", summary.relative_drift)?;
        writeln!(self.out, "{} time steps run in {:.3} s", summary.steps, summary.wall_time.as_secs_f64())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingReporter {
    pub baseline: Option<Energies>,
    pub reports: Vec<EnergyReport>,
    pub summary: Option<RunSummary>,
}

impl Reporter for RecordingReporter {
    fn on_baseline(&mut self, baseline: &Energies) -> Result<(), NBodyError> {
        self.baseline = Some(*baseline);
        Ok(())
    }

    fn on_report(&mut self, report: &EnergyReport) -> Result<(), NBodyError> {
        self.reports.push(*report);
        Ok(())
    }

    fn on_finished(&mut self, summary: &RunSummary) -> Result<(), NBodyError> {
        self.summary = Some(*summary);
        Ok(())
    }
}
