//! Reading and writing initial conditions.
//!
//! The input format is a stream of whitespace separated tokens grouped in records of eight:
//! an integer tag (ignored), the mass, three position components and three velocity components.
//! Line breaks carry no meaning.
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use log::{info, warn};
use crate::bodies::{Body, Cluster};
use crate::utils::{NBodyError, Vector3};

const RECORD_FIELDS: [&str; 8] = ["tag", "mass", "x", "y", "z", "vx", "vy", "vz"];

/// Parses every complete record of `input`.
///
/// A trailing incomplete record is dropped with a warning. An input without
/// any complete record yields an empty vector; rejecting it is left to `Cluster::new`.
///
/// # Examples
///
/// ```
/// use rs_nbody::bodies::parse_bodies_str;
///
/// let input = "0 1.0 0 0 0 0 0 0\n1 2.0 1 0 0 0 1 0\n";
/// let bodies = parse_bodies_str(input).expect("Failed to parse bodies");
/// assert_eq!(bodies.len(), 2);
/// assert_eq!(bodies[1].mass, 2.0);
/// assert_eq!(bodies[1].velocity.y, 1.0);
/// ```
pub fn parse_bodies_str(input: &str) -> Result<Vec<Body>, NBodyError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut records = tokens.chunks_exact(RECORD_FIELDS.len());
    let mut bodies = Vec::with_capacity(tokens.len() / RECORD_FIELDS.len());

    for (record, fields) in records.by_ref().enumerate() {
        bodies.push(parse_record(record, fields)?);
    }

    let remainder = records.remainder();
    if !remainder.is_empty() {
        warn!(
            "Discarding incomplete trailing record {} ({} of {} fields)",
            bodies.len(),
            remainder.len(),
            RECORD_FIELDS.len()
        );
    }

    info!("Loaded {} bodies", bodies.len());
    Ok(bodies)
}

/// Reads `reader` to the end and parses it with `parse_bodies_str`.
pub fn parse_bodies<R: Read>(mut reader: R) -> Result<Vec<Body>, NBodyError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_bodies_str(&input)
}

pub fn read_bodies_from_path(path: &Path) -> Result<Vec<Body>, NBodyError> {
    let file = File::open(path)
        .map_err(|e| NBodyError::Io(format!("{}: {}", path.display(), e)))?;
    parse_bodies(BufReader::new(file))
}

/// Reads bodies from `reader` and builds a cluster, rejecting empty input.
pub fn read_cluster<R: Read>(reader: R) -> Result<Cluster, NBodyError> {
    Cluster::new(parse_bodies(reader)?)
}

/// Writes the current state of `cluster` in the input record format, using the body index as tag.
///
/// Values are written with Rust's shortest round-trip formatting, so the output re-reads bit for bit.
pub fn write_bodies<W: Write>(out: &mut W, cluster: &Cluster) -> Result<(), NBodyError> {
    for (index, body) in cluster.bodies().enumerate() {
        let p = body.position;
        let v = body.velocity;
        writeln!(out, "{} {} {} {} {} {} {} {}", index, body.mass, p.x, p.y, p.z, v.x, v.y, v.z)?;
    }
    out.flush()?;
    Ok(())
}

fn parse_record(record: usize, fields: &[&str]) -> Result<Body, NBodyError> {
    fields[0].parse::<i64>().map_err(|e| NBodyError::Parse {
        record,
        field: RECORD_FIELDS[0],
        message: format!("{:?}: {}", fields[0], e),
    })?;

    let mut values = [0.0_f64; 7];
    for (slot, (token, name)) in values.iter_mut().zip(fields[1..].iter().zip(&RECORD_FIELDS[1..])) {
        *slot = token.parse::<f64>().map_err(|e| NBodyError::Parse {
            record,
            field: *name,
            message: format!("{:?}: {}", token, e),
        })?;
    }

    let position = Vector3::new(values[1], values[2], values[3]);
    let velocity = Vector3::new(values[4], values[5], values[6]);
    Body::new(values[0], position, velocity).map_err(|_| NBodyError::InvalidMass { index: record })
}
