use std::time::Duration;
use crate::generators::two_body_circular;
use crate::integrator::{Driver, Energies, EnergyReport, Reporter, RunSummary};
use crate::reporting::{RecordingReporter, TextReporter};
use crate::utils::SimulationConfig;

fn sample_report() -> EnergyReport {
    EnergyReport {
        step: 100,
        time: 0.1,
        energies: Energies::new(0.25, -0.5),
        relative_drift: -0.125,
    }
}

#[test]
fn test_text_reporter_report_line() {
    let mut reporter = TextReporter::new(Vec::new());
    reporter.on_report(&sample_report()).unwrap();

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(text, "t= 0.100 E= -0.25 0.25 -0.5 dE/E = -1.250000e-1\n");
}

#[test]
fn test_text_reporter_summary_lines() {
    let summary = RunSummary {
        steps: 10000,
        elapsed_time: 10.0,
        final_energies: Energies::new(0.25, -0.5),
        relative_drift: 0.0,
        wall_time: Duration::from_millis(1500),
    };
    let mut reporter = TextReporter::new(Vec::new());
    reporter.on_finished(&summary).unwrap();

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![
        "number time steps: 10000",
        "Final dE/E = +0.000000e0",
        "10000 time steps run in 1.500 s",
    ]);
}

#[test]
fn test_text_reporter_full_run() {
    let config = SimulationConfig::default().with_stop_time(0.25);
    let mut driver = Driver::new(config).expect("Invalid configuration");
    driver.load(two_body_circular(1.0, 1.0).unwrap()).expect("Failed to load");

    let mut reporter = TextReporter::new(Vec::new());
    let summary = driver.run(&mut reporter).expect("Run failed");
    let text = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Baseline, two periodic reports, three summary lines.
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("Energies: "));
    assert!(lines[1].starts_with("t= 0.100 E= "));
    assert!(lines[2].starts_with("t= 0.200 E= "));
    assert_eq!(lines[3], format!("number time steps: {}", summary.steps));
    assert!(lines[4].starts_with("Final dE/E = "));
}

#[test]
fn test_recording_reporter_keeps_everything() {
    let config = SimulationConfig::default().with_stop_time(0.25);
    let mut driver = Driver::new(config).expect("Invalid configuration");
    driver.load(two_body_circular(1.0, 1.0).unwrap()).expect("Failed to load");

    let mut reporter = RecordingReporter::default();
    let summary = driver.run(&mut reporter).expect("Run failed");

    assert_eq!(reporter.baseline, driver.baseline());
    assert_eq!(reporter.reports.iter().map(|r| r.step).collect::<Vec<_>>(), vec![100, 200]);
    assert_eq!(reporter.summary, Some(summary));
}
