//! Pairwise interactions between particles
//!
//! Every unordered pair is visited exactly once per step. A pair closer
//! than the collision distance exchanges momentum through an elastic
//! collision; any other pair feels one combined gravity/charge force.
//! The two branches are exclusive for a given pair in a given step.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};

/// Separation floor used in place of a zero distance
pub const MIN_DISTANCE: f64 = 1e-6;

/// What happened during one pairwise pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    pub collisions: usize, // pairs resolved as elastic collisions
    pub interactions: usize, // pairs that exchanged a force
    pub degenerate: usize, // overlapping pairs with no defined collision normal
}

impl PassReport {
    /// Total number of pairs visited
    pub fn pairs(&self) -> usize {
        self.collisions + self.interactions + self.degenerate
    }
}

/// Force on `p1` due to `p2`; `p2` feels the negation.
///
/// The gravity and charge terms are summed into one coefficient
///     F = (G m1 m2 - k q1 q2) / |r|^2
/// which is applied along the unnormalized separation `r = x2 - x1`.
/// Gravity always attracts; like charges repel.
pub fn pair_force(p1: &Particle, p2: &Particle, params: &Parameters) -> NVec2 {
    let r = p2.x - p1.x;
    let r2 = r.norm_squared().max(MIN_DISTANCE * MIN_DISTANCE);

    let coupling = params.gravity * p1.mass() * p2.mass()
        - params.electromagnetism * p1.charge() * p2.charge();

    r * (coupling / r2)
}

/// Elastic collision term `x` such that `v1 += m2 x` and `v2 -= m1 x`.
///
/// Returns `None` when the centers coincide, since there is no contact
/// normal to push along.
pub fn elastic_impulse(p1: &Particle, p2: &Particle) -> Option<NVec2> {
    let r = p2.x - p1.x;
    let r2 = r.norm_squared();
    if r2 < MIN_DISTANCE * MIN_DISTANCE {
        return None;
    }

    let dv = p2.v - p1.v;
    let total_mass = p1.mass() + p2.mass();

    Some(r * (2.0 / total_mass * dv.dot(&r) / r2))
}

/// Resolve one pair in place
fn interact(p1: &mut Particle, p2: &mut Particle, params: &Parameters, dt: f64, report: &mut PassReport) {
    let dist = (p2.x - p1.x).norm();

    if dist < params.collision_distance() {
        // Not gated on approach velocity: overlapping pairs are pushed every step
        match elastic_impulse(p1, p2) {
            Some(x) => {
                let (m1, m2) = (p1.mass(), p2.mass());
                p1.v += m2 * x;
                p2.v -= m1 * x;
                report.collisions += 1;
            }
            None => report.degenerate += 1,
        }
    } else {
        let f = pair_force(p1, p2, params);
        p1.apply_force(f, dt);
        p2.apply_force(-f, dt);
        report.interactions += 1;
    }
}

/// Pass 1 of a step: visit each unordered pair (i, j), i < j, in order
pub fn pairwise_pass(particles: &mut [Particle], params: &Parameters, dt: f64) -> PassReport {
    let mut report = PassReport::default();
    let n = particles.len();

    for i in 0..n {
        // head[i] is the left side of the pair, tail holds every j > i
        let (head, tail) = particles.split_at_mut(i + 1);
        let p1 = &mut head[i];
        for p2 in tail.iter_mut() {
            interact(p1, p2, params, dt, &mut report);
        }
    }

    report
}
