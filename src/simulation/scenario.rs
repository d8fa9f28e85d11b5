//! Build fully-initialized sandbox scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - the `Simulation` with all particles added
//! - the run settings (`step`, trail display, seed)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! viewer systems, or driven directly by the headless loop

use bevy::log::info;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ParticleConfig, ScenarioConfig, SpeciesConfig};
use crate::error::{ensure_finite, SimError};
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, ParticleSpec, Rgb};

/// Bevy resource holding a ready-to-run simulation and its loop settings
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub simulation: Simulation,
    pub step: f64, // dt per frame, adjustable at runtime
    pub show_trail: bool,
    pub seed: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        let parameters = Parameters::from(&cfg.universe);
        let mut simulation = Simulation::new(parameters)?;

        if !cfg.run.step.is_finite() || cfg.run.step <= 0.0 {
            return Err(SimError::InvalidStep(cfg.run.step));
        }

        // Explicit particles first, in file order
        for pc in &cfg.particles {
            simulation.add_particle(particle_spec(pc))?;
        }

        // Species: scatter `count` copies using a seeded rng
        let mut rng = StdRng::seed_from_u64(cfg.run.seed);
        for sc in &cfg.species {
            for spec in species_specs(sc, &mut rng)? {
                simulation.add_particle(spec)?;
            }
        }

        info!(
            "scenario built: {} particles, edges = {}, extent = {} x {}",
            simulation.particles().len(),
            simulation.parameters().boundary,
            simulation.parameters().domain_extent.x,
            simulation.parameters().domain_extent.y
        );

        Ok(Self {
            simulation,
            step: cfg.run.step,
            show_trail: cfg.run.show_trail,
            seed: cfg.run.seed,
        })
    }

    /// Advance by the configured step
    pub fn tick(&mut self) {
        self.simulation.step(self.step);
    }
}

fn particle_spec(pc: &ParticleConfig) -> ParticleSpec {
    ParticleSpec {
        x: NVec2::new(pc.x[0], pc.x[1]),
        v: NVec2::new(pc.v[0], pc.v[1]),
        m: pc.m,
        q: pc.q,
        color: pc.color.map(Rgb::from),
    }
}

fn species_specs(sc: &SpeciesConfig, rng: &mut StdRng) -> Result<Vec<ParticleSpec>, SimError> {
    ensure_finite(sc.spread, "species.spread")?;
    let spread = sc.spread.abs();

    let random_vec = |rng: &mut StdRng| {
        if spread == 0.0 {
            NVec2::zeros()
        } else {
            NVec2::new(rng.gen_range(-spread..=spread), rng.gen_range(-spread..=spread))
        }
    };

    Ok((0..sc.count)
        .map(|_| {
            let x = random_vec(rng);
            let v = random_vec(rng);
            ParticleSpec {
                x,
                v,
                m: sc.m,
                q: sc.q,
                color: sc.color.map(Rgb::from),
            }
        })
        .collect())
}
