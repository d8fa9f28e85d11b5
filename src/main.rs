use molsim::{bench_step, run_2d, BoundaryPolicy, ConsoleSink, Scenario, ScenarioConfig};

use bevy::log::tracing_subscriber;
use bevy::log::Level;
use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, relative to the `scenarios` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the scenario's boundary policy (clamp, torus, bouncy)
    #[arg(long)]
    edges: Option<BoundaryPolicy>,

    /// Run without a window and print snapshots to stdout
    #[arg(long)]
    headless: bool,

    /// Number of steps for a headless run
    #[arg(long, default_value_t = 600)]
    steps: u64,

    /// Print a snapshot every `every` steps in a headless run
    #[arg(long, default_value_t = 60)]
    every: u64,

    /// Time the step function for growing particle counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

// Outside the bevy App nothing installs a subscriber, so logs would be dropped
fn init_console_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();
}

fn run_headless(mut scenario: Scenario, steps: u64, every: u64) {
    let mut sink = ConsoleSink::new(std::io::stdout().lock());
    let every = every.max(1);

    sink.note(format_args!(
        "seed = {}  particles = {}  step = {}",
        scenario.seed,
        scenario.simulation.particles().len(),
        scenario.step
    ));

    for i in 1..=steps {
        scenario.tick();
        if i % every == 0 {
            let sim = &scenario.simulation;
            let momentum = sim.total_momentum();
            sink.note(format_args!(
                "t = {:8.3}  momentum = [{:>10.3}|{:>10.3}]  energy = {:12.3}",
                sim.time(),
                momentum.x,
                momentum.y,
                sim.kinetic_energy()
            ));
            sim.render(&mut sink, scenario.show_trail);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench || args.headless {
        init_console_logging();
    }

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(edges) = args.edges {
        scenario_cfg.universe.edges = edges;
    }

    let scenario = Scenario::build_scenario(&scenario_cfg)?;

    if args.headless {
        run_headless(scenario, args.steps, args.every);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
