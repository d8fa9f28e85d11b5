//! Per-particle time integration
//!
//! Pass 2 of a step. Runs after all pairwise velocity changes are in,
//! so particles no longer depend on each other and the order is free.

use super::params::Parameters;
use super::states::Particle;

/// Damp, move and confine every particle.
///
/// Semi-implicit Euler: velocities were already updated in the pairwise
/// pass, positions advance with the new velocity.
pub fn semi_implicit_euler(particles: &mut [Particle], params: &Parameters, dt: f64) {
    // Exponential decay so the damping rate does not depend on the frame rate
    let decay = params.friction.powf(dt);

    for p in particles.iter_mut() {
        p.v *= decay;
        p.integrate_motion(dt);
        p.apply_boundary(&params.domain_extent, params.boundary);
    }
}
