use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use flight_calculator::config::{DistanceModel, ScenarioConfig, load_scenarios};
use flight_calculator::export::step::{self as report, Record};
use flight_calculator::kinematics::DistanceIntegration;
use flight_calculator::step::{StepOutcome, compute_all};
use tracing_subscriber::EnvFilter;

/// Compute velocity, distance and remaining fuel after one interval.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Velocity, distance and fuel after a constant-acceleration interval"
)]
struct Cli {
    /// Scenario file (TOML record or YAML list) or a directory of TOML files.
    /// Without it the built-in reference scenario is used.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Initial velocity (km/h)
    #[arg(long, allow_hyphen_values = true)]
    velocity: Option<f64>,

    /// Constant acceleration (m/s²)
    #[arg(long, allow_hyphen_values = true)]
    acceleration: Option<f64>,

    /// Elapsed time (s)
    #[arg(long, allow_hyphen_values = true)]
    time: Option<f64>,

    /// Initial distance (km)
    #[arg(long, allow_hyphen_values = true)]
    distance: Option<f64>,

    /// Initial fuel (kg)
    #[arg(long, allow_hyphen_values = true)]
    fuel: Option<f64>,

    /// Fuel burn rate (kg/s)
    #[arg(long, allow_hyphen_values = true)]
    burn_rate: Option<f64>,

    /// Integrate distance with the mean of initial and final velocity
    #[arg(long, default_value_t = false)]
    average_velocity: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut scenarios = match &cli.scenario {
        Some(path) => load_scenarios(path)
            .with_context(|| format!("failed to load scenarios from {}", path.display()))?,
        None => vec![ScenarioConfig::default()],
    };
    for scenario in &mut scenarios {
        apply_overrides(&cli, scenario);
    }

    let outcomes = compute_all(&scenarios)?;
    let records: Vec<Record<'_>> = outcomes.iter().map(record_for).collect();

    let mut writer = report::writer_for_path(&cli.output)
        .with_context(|| format!("failed to open {}", cli.output.display()))?;
    match cli.format {
        Format::Text => report::write_text(&mut *writer, &records)?,
        Format::Json => report::write_json(&mut *writer, &records)?,
        Format::Csv => report::write_csv(&mut *writer, &records)?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_overrides(cli: &Cli, scenario: &mut ScenarioConfig) {
    if let Some(v) = cli.velocity {
        scenario.initial_velocity_km_h = v;
    }
    if let Some(a) = cli.acceleration {
        scenario.acceleration_m_s2 = a;
    }
    if let Some(t) = cli.time {
        scenario.elapsed_s = t;
    }
    if let Some(d) = cli.distance {
        scenario.initial_distance_km = d;
    }
    if let Some(f) = cli.fuel {
        scenario.initial_fuel_kg = f;
    }
    if let Some(r) = cli.burn_rate {
        scenario.burn_rate_kg_s = r;
    }
    if cli.average_velocity {
        scenario.distance_integration = DistanceModel::AverageVelocity;
    }
}

fn record_for(outcome: &StepOutcome) -> Record<'_> {
    Record {
        scenario: &outcome.scenario,
        elapsed_s: outcome.elapsed_s,
        velocity_km_h: outcome.velocity_km_h,
        distance_km: outcome.distance_km,
        remaining_fuel_kg: outcome.remaining_fuel_kg,
        distance_integration: match outcome.distance_integration {
            DistanceIntegration::InitialVelocity => "initial-velocity",
            DistanceIntegration::AverageVelocity => "average-velocity",
        },
    }
}
