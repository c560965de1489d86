//! Plain-text particle snapshot loading and exporting.
//!
//! The format is a description line, a particle count, then `2*DIM + 2`
//! comma/whitespace-separated numbers per particle: position, velocity,
//! mass, radius. Numbers may wrap across lines. Loaded particles start at
//! time 0 with a zero collision counter; the exporter writes the current
//! positions and velocities as such a snapshot.

use crate::core::particle::Particle;
use crate::core::physics::DIM;
use crate::error::{Error, Result};
use std::io::{BufRead, Write};

const FIELDS_PER_PARTICLE: usize = 2 * DIM + 2;

/// Read a particle snapshot from `reader`.
///
/// The first line is a free-form description and is ignored. Trailing data
/// beyond the declared count is ignored as well.
pub fn load_particles<R: BufRead>(reader: R) -> Result<Vec<Particle>> {
    let mut lines = reader.lines();
    lines
        .next()
        .ok_or_else(|| Error::Parse("missing description line".into()))??;

    let mut body = String::new();
    for line in lines {
        body.push_str(&line?);
        body.push(' ');
    }
    let mut tokens = body
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());

    let count: usize = tokens
        .next()
        .ok_or_else(|| Error::Parse("missing particle count".into()))?
        .parse()
        .map_err(|_| Error::Parse("particle count is not an integer".into()))?;

    let mut values = Vec::with_capacity(count * FIELDS_PER_PARTICLE);
    for token in tokens.by_ref().take(count * FIELDS_PER_PARTICLE) {
        let v: f64 = token
            .parse()
            .map_err(|_| Error::Parse(format!("invalid number {token:?}")))?;
        values.push(v);
    }
    if values.len() < count * FIELDS_PER_PARTICLE {
        return Err(Error::Parse(format!(
            "expected {count} particles ({} values), found only {}",
            count * FIELDS_PER_PARTICLE,
            values.len()
        )));
    }

    let mut particles = Vec::with_capacity(count);
    for chunk in values.chunks_exact(FIELDS_PER_PARTICLE) {
        let mut position = [0.0; DIM];
        let mut velocity = [0.0; DIM];
        position.copy_from_slice(&chunk[..DIM]);
        velocity.copy_from_slice(&chunk[DIM..2 * DIM]);
        particles.push(Particle::new(position, velocity, chunk[2 * DIM], chunk[2 * DIM + 1])?);
    }
    Ok(particles)
}

/// Write a particle snapshot to `writer`.
pub fn export_particles<W: Write>(
    particles: &[Particle],
    writer: &mut W,
    header: Option<&str>,
) -> Result<()> {
    writeln!(writer, "{}", header.unwrap_or("no description specified"))?;
    writeln!(writer, "{}", particles.len())?;
    for p in particles {
        let mut fields = Vec::with_capacity(FIELDS_PER_PARTICLE);
        fields.extend(p.position.iter().map(|v| format!("{v:.6}")));
        fields.extend(p.velocity.iter().map(|v| format!("{v:.6}")));
        fields.push(format!("{:.6}", p.mass));
        fields.push(format!("{:.6}", p.radius));
        writeln!(writer, "{}", fields.join(","))?;
    }
    Ok(())
}
