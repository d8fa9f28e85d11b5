use std::time::Instant;

use crate::configuration::config::BoundaryPolicy;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, ParticleSpec};

/// Time `Simulation::step` for growing particle counts.
/// The pairwise pass is O(N^2), so each doubling should cost ~4x.
pub fn bench_step() -> Result<(), crate::error::SimError> {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 20; // steps per size

    for n in ns {
        let mut sim = make_simulation(n)?;

        // Warm up
        sim.step(1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step(1.0 / 60.0);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;
        let report = sim.last_step().pass;

        println!(
            "N = {:5}, step = {:10.6} s, pairs = {:7}, collisions = {:5}",
            n,
            per_step,
            report.pairs(),
            report.collisions
        );
    }

    Ok(())
}

/// Helper to build a simulation of size `n` on a spiral, no rand needed
fn make_simulation(n: usize) -> Result<Simulation, crate::error::SimError> {
    let params = Parameters {
        domain_extent: NVec2::new(4000.0, 4000.0),
        boundary: BoundaryPolicy::Bounce,
        friction: 0.9,
        gravity: 80.0,
        electromagnetism: 1.0,
        collision_radius: 6.0,
        ..Default::default()
    };
    let mut sim = Simulation::new(params)?;

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin(), (i_f * 0.13).cos()) * (20.0 + i_f);
        let q = if i % 2 == 0 { 1.0 } else { -1.0 };
        sim.add_particle(ParticleSpec::new(x, NVec2::zeros(), 1.0, q))?;
    }

    Ok(sim)
}
