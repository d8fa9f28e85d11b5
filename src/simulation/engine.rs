//! The simulation orchestrator
//!
//! `Simulation` owns the particles and the global constants. A call to
//! [`Simulation::step`] is one complete transition: all pairwise
//! interactions first, then per-particle friction, motion and boundary
//! handling. Nothing is added or removed while a step runs.

use bevy::log::{debug, warn};

use crate::error::SimError;
use crate::render::RenderSink;
use crate::simulation::forces::{pairwise_pass, PassReport};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::{validate_extent, Parameters};
use crate::simulation::states::{NVec2, Particle, ParticleSpec};

/// Summary of the most recent step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub pass: PassReport,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    params: Parameters,
    particles: Vec<Particle>, // insertion order = interaction and draw order
    t: f64, // simulated time
    steps: u64,
    last: StepReport,
}

impl Simulation {
    /// Create an empty simulation, rejecting invalid constants
    pub fn new(params: Parameters) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self {
            params,
            particles: Vec::new(),
            t: 0.0,
            steps: 0,
            last: StepReport::default(),
        })
    }

    /// Append a particle. Its color is derived from mass and charge when
    /// `spec.color` is `None`.
    pub fn add_particle(&mut self, spec: ParticleSpec) -> Result<(), SimError> {
        let particle = Particle::new(&spec, self.params.trail_capacity)?;
        self.particles.push(particle);
        Ok(())
    }

    /// Advance the whole system by `dt`.
    ///
    /// A negative or non-finite `dt` leaves the state untouched.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt < 0.0 {
            warn!("ignoring step with dt = {}", dt);
            return;
        }

        let pass = pairwise_pass(&mut self.particles, &self.params, dt);
        semi_implicit_euler(&mut self.particles, &self.params, dt);

        self.t += dt;
        self.steps += 1;
        self.last = StepReport { pass };

        debug!(
            "step {}: {} collisions, {} interactions",
            self.steps, pass.collisions, pass.interactions
        );
    }

    /// Read-only view of all particles in insertion order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Change the domain size; takes effect at the next boundary check
    pub fn resize_domain(&mut self, extent: NVec2) -> Result<(), SimError> {
        validate_extent(&extent)?;
        self.params.domain_extent = extent;
        Ok(())
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn last_step(&self) -> &StepReport {
        &self.last
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.particles.iter().map(Particle::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Draw the current state: trails first so disks sit on top
    pub fn render(&self, sink: &mut impl RenderSink, show_trails: bool) {
        if show_trails {
            let mut points = Vec::with_capacity(self.params.trail_capacity);
            for p in self.particles.iter().filter(|p| p.trail().len() > 1) {
                points.clear();
                points.extend(p.trail().iter().copied());
                sink.draw_trail(&points, p.color());
            }
        }
        for p in &self.particles {
            sink.draw_particle(p.x, p.color(), self.params.collision_radius);
        }
        sink.present();
    }
}
