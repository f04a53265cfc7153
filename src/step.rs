//! Single-step orchestration: distance, fuel and velocity for one scenario.

use flight_config::{DistanceModel, ScenarioConfig};
use flight_core::ErrorKind;
use flight_fuel::{FuelError, remaining_fuel_kg};
use flight_kinematics::{DistanceIntegration, KinematicState, KinematicsError, advance};
use tracing::{debug, warn};

/// Everything a successful step produces.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub scenario: String,
    pub elapsed_s: f64,
    pub velocity_km_h: f64,
    pub distance_km: f64,
    pub remaining_fuel_kg: f64,
    pub distance_integration: DistanceIntegration,
}

/// Top-level step error. The first failing computation wins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Kinematics(#[from] KinematicsError),
    #[error(transparent)]
    Fuel(#[from] FuelError),
}

impl StepError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StepError::Kinematics(err) => err.kind(),
            StepError::Fuel(err) => err.kind(),
        }
    }
}

/// Map the integration named in a scenario file onto the kinematics engine's mode.
pub fn integration_for(model: DistanceModel) -> DistanceIntegration {
    match model {
        DistanceModel::InitialVelocity => DistanceIntegration::InitialVelocity,
        DistanceModel::AverageVelocity => DistanceIntegration::AverageVelocity,
    }
}

/// Run one scenario. Nothing is returned unless all three quantities are valid.
pub fn compute(config: &ScenarioConfig) -> Result<StepOutcome, StepError> {
    let integration = integration_for(config.distance_integration);
    let start = KinematicState {
        velocity_km_h: config.initial_velocity_km_h,
        distance_km: config.initial_distance_km,
    };

    let end = advance(start, config.acceleration_m_s2, config.elapsed_s, integration)?;
    debug!(
        scenario = %config.name,
        velocity_km_h = end.velocity_km_h,
        distance_km = end.distance_km,
        ?integration,
        "kinematic update"
    );

    let remaining = remaining_fuel_kg(
        config.initial_fuel_kg,
        config.burn_rate_kg_s,
        config.elapsed_s,
    )
    .inspect_err(|err| {
        if err.kind() == ErrorKind::FuelDepleted {
            warn!(scenario = %config.name, "{err}");
        }
    })?;
    debug!(scenario = %config.name, remaining_fuel_kg = remaining, "fuel update");

    Ok(StepOutcome {
        scenario: config.name.clone(),
        elapsed_s: config.elapsed_s,
        velocity_km_h: end.velocity_km_h,
        distance_km: end.distance_km,
        remaining_fuel_kg: remaining,
        distance_integration: integration,
    })
}

/// Run several independent scenarios, stopping at the first failure.
pub fn compute_all(configs: &[ScenarioConfig]) -> Result<Vec<StepOutcome>, StepError> {
    configs.iter().map(compute).collect()
}
