//! Error types for molsim.
//!
//! Every way a simulation can be misconfigured is rejected up front, when the
//! `Simulation` is built or a particle is added, so nothing degenerate reaches
//! the step function.

use std::fmt;

use crate::simulation::trail::MAX_TRAIL_CAPACITY;

/// Errors raised while configuring a simulation or adding particles.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Particle mass must be strictly positive (it is used as a divisor).
    NonPositiveMass(f64),
    /// Collision radius must be strictly positive.
    NonPositiveCollisionRadius(f64),
    /// Friction is a decay base and must be finite and `>= 0`.
    InvalidFriction(f64),
    /// Domain extent must be finite and positive on both axes.
    InvalidDomain { width: f64, height: f64 },
    /// A value that must be finite was NaN or infinite.
    NonFiniteValue { field: &'static str },
    /// Boundary policy name not recognized.
    UnknownBoundaryPolicy(String),
    /// Trail capacity must lie in `1..=MAX_TRAIL_CAPACITY`.
    InvalidTrailCapacity(usize),
    /// The per-frame step of a run must be finite and positive.
    InvalidStep(f64),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonPositiveMass(m) => write!(f, "particle mass must be > 0, got {}", m),
            SimError::NonPositiveCollisionRadius(r) => {
                write!(f, "collision radius must be > 0, got {}", r)
            }
            SimError::InvalidFriction(k) => {
                write!(f, "friction must be a finite value >= 0, got {}", k)
            }
            SimError::InvalidDomain { width, height } => write!(
                f,
                "domain extent must be finite and positive, got {} x {}",
                width, height
            ),
            SimError::NonFiniteValue { field } => write!(f, "`{}` must be finite", field),
            SimError::UnknownBoundaryPolicy(name) => write!(
                f,
                "unknown boundary policy `{}` (expected clamp, torus or bouncy)",
                name
            ),
            SimError::InvalidTrailCapacity(n) => write!(
                f,
                "trail capacity must be between 1 and {}, got {}",
                MAX_TRAIL_CAPACITY, n
            ),
            SimError::InvalidStep(dt) => write!(f, "run step must be finite and > 0, got {}", dt),
        }
    }
}

impl std::error::Error for SimError {}

/// Fail with [`SimError::InvalidTrailCapacity`] unless `1 <= n <= MAX_TRAIL_CAPACITY`.
pub(crate) fn ensure_trail_capacity(n: usize) -> Result<(), SimError> {
    if (1..=MAX_TRAIL_CAPACITY).contains(&n) {
        Ok(())
    } else {
        Err(SimError::InvalidTrailCapacity(n))
    }
}

/// Fail with [`SimError::NonFiniteValue`] unless `value` is finite.
pub(crate) fn ensure_finite(value: f64, field: &'static str) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFiniteValue { field })
    }
}
