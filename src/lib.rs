pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod render;
pub mod error;

pub use simulation::states::{NVec2, Particle, ParticleSpec, Rgb};
pub use simulation::trail::{Trail, MAX_TRAIL_CAPACITY, TRAIL_CAPACITY};
pub use simulation::params::Parameters;
pub use simulation::engine::{Simulation, StepReport};
pub use simulation::forces::{pair_force, elastic_impulse, pairwise_pass, PassReport, MIN_DISTANCE};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::color::hash_color;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BoundaryPolicy, UniverseConfig, RunConfig, ParticleConfig, SpeciesConfig, ScenarioConfig};

pub use render::{RenderSink, ConsoleSink};
pub use error::SimError;

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
