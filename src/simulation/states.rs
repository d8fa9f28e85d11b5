//! Core state types for the particle sandbox.
//!
//! Defines the 2D vector alias, the display color and the `Particle`
//! itself. A particle knows how to turn a force into a velocity change,
//! move itself, and react when it leaves the domain; everything that
//! involves more than one particle lives in `forces`.

use std::fmt;

use nalgebra::Vector2;

use crate::configuration::config::BoundaryPolicy;
use crate::error::{ensure_finite, ensure_trail_capacity, SimError};
use crate::simulation::color::hash_color;
use crate::simulation::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// 8-bit RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

/// Initial state for a new particle.
///
/// Defaults match a lone test particle: at (100, 0) moving with (100, 0),
/// unit mass, no charge, color derived from mass and charge.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub x: NVec2,
    pub v: NVec2,
    pub m: f64,
    pub q: f64,
    pub color: Option<Rgb>,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            x: NVec2::new(100.0, 0.0),
            v: NVec2::new(100.0, 0.0),
            m: 1.0,
            q: 0.0,
            color: None,
        }
    }
}

impl ParticleSpec {
    pub fn new(x: NVec2, v: NVec2, m: f64, q: f64) -> Self {
        Self { x, v, m, q, color: None }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position, world units, origin at domain center
    pub v: NVec2, // velocity
    m: f64, // mass, > 0
    q: f64, // charge
    color: Rgb, // fixed at creation
    trail: Trail, // past positions, oldest first
}

impl Particle {
    /// Build a particle from `spec`, rejecting non-positive mass and
    /// non-finite state. The trail starts out holding the initial position.
    pub fn new(spec: &ParticleSpec, trail_capacity: usize) -> Result<Self, SimError> {
        ensure_finite(spec.m, "mass")?;
        if spec.m <= 0.0 {
            return Err(SimError::NonPositiveMass(spec.m));
        }
        ensure_finite(spec.q, "charge")?;
        ensure_finite(spec.x.x, "position.x")?;
        ensure_finite(spec.x.y, "position.y")?;
        ensure_finite(spec.v.x, "velocity.x")?;
        ensure_finite(spec.v.y, "velocity.y")?;
        ensure_trail_capacity(trail_capacity)?;

        let color = spec.color.unwrap_or_else(|| hash_color(spec.m, spec.q));
        let mut trail = Trail::with_capacity(trail_capacity);
        trail.push(spec.x);

        Ok(Self {
            x: spec.x,
            v: spec.v,
            m: spec.m,
            q: spec.q,
            color,
            trail,
        })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn charge(&self) -> f64 {
        self.q
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// a = F / m, then v += a * dt
    pub fn apply_force(&mut self, force: NVec2, dt: f64) {
        let a = force / self.m;
        self.v += a * dt;
    }

    /// x += v * dt and record the new position in the trail
    pub fn integrate_motion(&mut self, dt: f64) {
        self.x += self.v * dt;
        self.trail.push(self.x);
    }

    /// Keep the particle inside a domain of size `extent` centered on the origin.
    ///
    /// Each axis is handled on its own: a coordinate outside `(-e/2, e/2]`
    /// is clamped into `[-e/2, e/2]` and then the policy is applied to that
    /// axis only. Leaving through a corner therefore triggers two
    /// independent 1D events in the same step.
    pub fn apply_boundary(&mut self, extent: &NVec2, policy: BoundaryPolicy) {
        for i in 0..2 {
            let half = extent[i] / 2.0;
            let inside = -half < self.x[i] && self.x[i] <= half;
            if inside {
                continue;
            }
            self.x[i] = self.x[i].clamp(-half, half);
            match policy {
                BoundaryPolicy::Clamp => self.v[i] = 0.0,
                // Sign flip of the clamped value, not a modulo wrap
                BoundaryPolicy::Torus => self.x[i] = -self.x[i],
                BoundaryPolicy::Bounce => self.v[i] = -self.v[i],
            }
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos[{:>7.1}|{:>7.1}] vel[{:>7.1}|{:>7.1}] mass[{:>6.1}] charge[{:>6.1}]",
            self.x.x, self.x.y, self.v.x, self.v.y, self.m, self.q
        )
    }
}
