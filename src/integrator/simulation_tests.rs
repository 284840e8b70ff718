use std::fs::File;
use std::io::BufWriter;
use approx::assert_relative_eq;
use crate::bodies::{read_bodies_from_path, read_cluster, write_bodies, Body, Cluster};
use crate::generators::{orbital_period, plummer_sphere, two_body_circular};
use crate::integrator::{total_momentum, Driver, DriverState};
use crate::reporting::{RecordingReporter, TextReporter};
use crate::utils::{SimulationConfig, Vector3};

fn run_to(bodies: Vec<Body>, stop_time: f64) -> (Driver, RecordingReporter) {
    let config = SimulationConfig::default().with_stop_time(stop_time);
    let mut driver = Driver::new(config).expect("Invalid configuration");
    driver.load(bodies).expect("Failed to load");
    let mut reporter = RecordingReporter::default();
    driver.run(&mut reporter).expect("Run failed");
    (driver, reporter)
}

#[test]
fn test_circular_orbit_period() {
    let config = SimulationConfig::default().with_stop_time(5.0);
    let dt = config.time_step;
    let mut driver = Driver::new(config).expect("Invalid configuration");
    driver.load(two_body_circular(1.0, 1.0).unwrap()).expect("Failed to load");
    driver.start().expect("Failed to start");

    let separation_y = |driver: &Driver| {
        let positions = driver.cluster().unwrap().positions();
        positions[1].y - positions[0].y
    };

    // The separation starts on +x and turns towards +y; a full turn ends on the
    // first upward crossing of the x axis.
    let mut previous = separation_y(&driver);
    let mut period = None;
    while driver.state() == DriverState::Running {
        driver.step().expect("Step failed");
        let current = separation_y(&driver);
        if previous < 0.0 && current >= 0.0 {
            let fraction = -previous / (current - previous);
            period = Some(driver.elapsed_time() - dt + fraction * dt);
            break;
        }
        previous = current;
    }

    let period = period.expect("Orbit did not close");
    assert_relative_eq!(period, orbital_period(2.0, 1.0), max_relative = 1e-3);
    assert_relative_eq!(period, 4.442882938158366, max_relative = 1e-3);
}

#[test]
fn test_circular_orbit_conserves_energy() {
    let (driver, reporter) = run_to(two_body_circular(1.0, 1.0).unwrap(), 10.0);
    let summary = reporter.summary.unwrap();

    assert_eq!(driver.state(), DriverState::Finished);
    assert!(summary.elapsed_time >= 10.0);
    assert_eq!(reporter.reports.len() as u64, summary.steps / 100);
    for report in &reporter.reports {
        assert!(report.relative_drift.abs() < 1e-5, "drift {} at t = {}", report.relative_drift, report.time);
    }

    // The orbit stays circular.
    let positions = driver.cluster().unwrap().positions();
    assert_relative_eq!((positions[1] - positions[0]).norm(), 1.0, max_relative = 1e-4);
}

#[test]
fn test_eccentric_orbit_energy_stays_bounded() {
    let mut bodies = two_body_circular(1.0, 1.0).unwrap();
    for body in &mut bodies {
        body.velocity = 0.7 * body.velocity;
    }
    let (_, reporter) = run_to(bodies, 10.0);

    let worst = reporter.reports.iter().map(|r| r.relative_drift.abs()).fold(0.0, f64::max);
    assert!(worst < 1e-3, "worst drift {}", worst);
}

#[test]
fn test_cluster_momentum_is_conserved() {
    let bodies = plummer_sphere(32, 7).unwrap();
    let (driver, _) = run_to(bodies, 0.2);
    let momentum = total_momentum(driver.cluster().unwrap());
    assert!(momentum.norm() < 1e-9, "momentum drifted to {:?}", momentum);
}

#[test]
fn test_text_input_to_report_lines() {
    let input = "0 1 -0.5 0 0 0 -0.7071067811865476 0\n1 1 0.5 0 0 0 0.7071067811865476 0\n";
    let cluster = read_cluster(input.as_bytes()).expect("Failed to read cluster");
    assert_eq!(cluster.len(), 2);

    let config = SimulationConfig::default().with_stop_time(0.5);
    let mut driver = Driver::new(config).expect("Invalid configuration");
    driver.load_cluster(cluster).expect("Failed to load");
    let mut reporter = TextReporter::new(Vec::new());
    driver.run(&mut reporter).expect("Run failed");

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + 5 + 3);
    assert!(lines[0].starts_with("Energies: -0."));
    assert!(lines[5].starts_with("t= 0.500 "));
}

#[test]
fn test_final_state_dump_rereads_exactly() {
    let (driver, _) = run_to(plummer_sphere(16, 3).unwrap(), 0.05);
    let cluster = driver.cluster().unwrap();

    let path = std::env::temp_dir().join(format!("rs_nbody_dump_{}.txt", std::process::id()));
    {
        let mut out = BufWriter::new(File::create(&path).expect("Failed to create dump file"));
        write_bodies(&mut out, cluster).expect("Failed to write bodies");
    }
    let reread = read_bodies_from_path(&path).expect("Failed to read dump");
    std::fs::remove_file(&path).ok();

    let reloaded = Cluster::new(reread).unwrap();
    assert_eq!(reloaded.masses(), cluster.masses());
    assert_eq!(reloaded.positions(), cluster.positions());
    assert_eq!(reloaded.velocities(), cluster.velocities());
    assert_ne!(reloaded.velocities()[0], Vector3::ZERO);
}
