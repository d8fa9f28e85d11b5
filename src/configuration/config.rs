//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`UniverseConfig`] – domain, boundary policy and physical constants
//! - [`RunConfig`]      – step size, trail display and random seed
//! - [`ParticleConfig`] – one explicitly placed particle
//! - [`SpeciesConfig`]  – a batch of identical particles at random positions
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every field has a default, so an empty document is a valid (empty)
//! scenario:
//!
//! ```yaml
//! universe:
//!   extent: [500.0, 500.0]   # width, height; origin at the center
//!   edges: "bouncy"          # "clamp", "torus" or "bouncy"
//!   friction: 0.9            # velocity *= friction^dt every step
//!   gravity: 80.0
//!   electromagnetism: 1.0
//!   collision_radius: 6.0
//!   trail_length: 200
//!
//! run:
//!   step: 0.0166667          # seconds of simulated time per frame
//!   show_trail: false
//!   seed: 42
//!
//! particles:
//!   - x: [ -50.0, 0.0 ]
//!     v: [ 0.0, 20.0 ]
//!     m: 10.0
//!     q: 1.0
//!     color: [ 255, 80, 80 ] # optional
//!
//! species:
//!   - count: 10
//!     spread: 100.0          # x, v drawn uniformly from [-spread, spread]
//!     m: 100.0
//!     q: 0.0
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SimError;

/// What happens to a particle that leaves the domain
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    #[serde(rename = "clamp")] // stick to the wall: the velocity component is zeroed
    Clamp,

    #[serde(rename = "torus")] // jump to the opposite edge (sign flip of the clamped coordinate)
    Torus,

    #[default]
    #[serde(rename = "bouncy", alias = "bounce")] // reflect: the velocity component is negated
    Bounce,
}

impl FromStr for BoundaryPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(BoundaryPolicy::Clamp),
            "torus" => Ok(BoundaryPolicy::Torus),
            "bouncy" | "bounce" => Ok(BoundaryPolicy::Bounce),
            _ => Err(SimError::UnknownBoundaryPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryPolicy::Clamp => "clamp",
            BoundaryPolicy::Torus => "torus",
            BoundaryPolicy::Bounce => "bouncy",
        };
        f.write_str(name)
    }
}

/// Domain and physical constants
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UniverseConfig {
    pub extent: [f64; 2], // width, height of the domain
    pub edges: BoundaryPolicy, // boundary policy
    pub friction: f64, // decay base, >= 0
    pub gravity: f64, // gravity coupling
    pub electromagnetism: f64, // charge coupling
    pub collision_radius: f64, // particles collide below twice this distance
    pub trail_length: usize, // trail capacity per particle
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            extent: [500.0, 500.0],
            edges: BoundaryPolicy::Bounce,
            friction: 0.0,
            gravity: 10.0,
            electromagnetism: 1.0,
            collision_radius: 6.0,
            trail_length: 200,
        }
    }
}

/// Settings for driving the simulation loop
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub step: f64, // dt handed to every step
    pub show_trail: bool, // draw trails from the start
    pub seed: u64, // seed for species placement
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step: 1.0 / 60.0,
            show_trail: false,
            seed: 42,
        }
    }
}

/// Initial state of a single particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: [f64; 2], // position
    #[serde(default)]
    pub v: [f64; 2], // velocity
    pub m: f64, // mass
    #[serde(default)]
    pub q: f64, // charge
    #[serde(default)]
    pub color: Option<[u8; 3]>, // derived from m and q when absent
}

/// A batch of `count` identical particles scattered at random
#[derive(Deserialize, Debug, Clone)]
pub struct SpeciesConfig {
    pub count: usize,
    #[serde(default = "default_spread")]
    pub spread: f64, // position and velocity components drawn from [-spread, spread]
    pub m: f64,
    #[serde(default)]
    pub q: f64,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

fn default_spread() -> f64 {
    100.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub universe: UniverseConfig, // domain and constants
    pub run: RunConfig, // loop settings
    pub particles: Vec<ParticleConfig>, // explicitly placed particles, added first
    pub species: Vec<SpeciesConfig>, // random batches, added after `particles`
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
