//! Global physical constants for the simulation
//!
//! `Parameters` holds everything that applies to all particles:
//! - domain extent and boundary policy,
//! - friction (decay base) and the gravity / charge couplings,
//! - collision radius and trail capacity

use crate::configuration::config::{BoundaryPolicy, UniverseConfig};
use crate::error::{ensure_finite, ensure_trail_capacity, SimError};
use crate::simulation::states::NVec2;
use crate::simulation::trail::TRAIL_CAPACITY;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub domain_extent: NVec2, // width, height, centered on the origin
    pub boundary: BoundaryPolicy, // fixed for the run
    pub friction: f64, // v *= friction^dt
    pub gravity: f64, // gravity coupling
    pub electromagnetism: f64, // charge coupling
    pub collision_radius: f64, // collide when distance < 2 * radius
    pub trail_capacity: usize, // points kept per particle
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            domain_extent: NVec2::new(500.0, 500.0),
            boundary: BoundaryPolicy::Bounce,
            friction: 0.0,
            gravity: 10.0,
            electromagnetism: 1.0,
            collision_radius: 6.0,
            trail_capacity: TRAIL_CAPACITY,
        }
    }
}

impl Parameters {
    /// Reject configurations that would divide by zero or blow up in `step`
    pub fn validate(&self) -> Result<(), SimError> {
        validate_extent(&self.domain_extent)?;
        ensure_finite(self.gravity, "gravity")?;
        ensure_finite(self.electromagnetism, "electromagnetism")?;
        if !self.friction.is_finite() || self.friction < 0.0 {
            return Err(SimError::InvalidFriction(self.friction));
        }
        ensure_finite(self.collision_radius, "collision_radius")?;
        if self.collision_radius <= 0.0 {
            return Err(SimError::NonPositiveCollisionRadius(self.collision_radius));
        }
        ensure_trail_capacity(self.trail_capacity)
    }

    /// Center-to-center distance below which two particles collide
    pub fn collision_distance(&self) -> f64 {
        2.0 * self.collision_radius
    }
}

impl From<&UniverseConfig> for Parameters {
    fn from(cfg: &UniverseConfig) -> Self {
        Self {
            domain_extent: NVec2::new(cfg.extent[0], cfg.extent[1]),
            boundary: cfg.edges,
            friction: cfg.friction,
            gravity: cfg.gravity,
            electromagnetism: cfg.electromagnetism,
            collision_radius: cfg.collision_radius,
            trail_capacity: cfg.trail_length,
        }
    }
}

pub(crate) fn validate_extent(extent: &NVec2) -> Result<(), SimError> {
    let ok = extent.iter().all(|e| e.is_finite() && *e > 0.0);
    if ok {
        Ok(())
    } else {
        Err(SimError::InvalidDomain {
            width: extent.x,
            height: extent.y,
        })
    }
}
