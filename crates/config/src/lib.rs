//! Scenario configuration models and loaders for the Flight Step Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use flight_core::validate::{Constraint, InvalidInput};
use serde::Deserialize;
use thiserror::Error;

/// One complete set of inputs for a single step computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    pub initial_velocity_km_h: f64,
    pub acceleration_m_s2: f64,
    pub elapsed_s: f64,
    pub initial_distance_km: f64,
    pub initial_fuel_kg: f64,
    pub burn_rate_kg_s: f64,
    pub distance_integration: DistanceModel,
}

impl Default for ScenarioConfig {
    /// The reference scenario: one hour at 3 m/s² from 10 000 km/h.
    fn default() -> Self {
        Self {
            name: default_name(),
            initial_velocity_km_h: 10_000.0,
            acceleration_m_s2: 3.0,
            elapsed_s: 3_600.0,
            initial_distance_km: 0.0,
            initial_fuel_kg: 5_000.0,
            burn_rate_kg_s: 0.5,
            distance_integration: DistanceModel::InitialVelocity,
        }
    }
}

/// Distance integration selected in a scenario file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceModel {
    #[default]
    InitialVelocity,
    AverageVelocity,
}

/// Errors that can occur while loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("no scenarios found in {0}")]
    Empty(PathBuf),
}

/// A numeric field as written in the file. Quoted numbers stay text and are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    fn number(self, field: &'static str) -> Result<f64, InvalidInput> {
        match self {
            Scalar::Number(value) => Ok(value),
            Scalar::Text(text) => Err(InvalidInput::new(
                field,
                Constraint::Numeric,
                format!("{text:?}"),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    #[serde(default = "default_name")]
    name: String,
    initial_velocity_km_h: Scalar,
    acceleration_m_s2: Scalar,
    elapsed_s: Scalar,
    initial_distance_km: Scalar,
    initial_fuel_kg: Scalar,
    burn_rate_kg_s: Scalar,
    #[serde(default)]
    distance_integration: DistanceModel,
}

impl TryFrom<ScenarioRecord> for ScenarioConfig {
    type Error = InvalidInput;

    fn try_from(record: ScenarioRecord) -> Result<Self, Self::Error> {
        Ok(ScenarioConfig {
            name: record.name,
            initial_velocity_km_h: record.initial_velocity_km_h.number("initial_velocity_km_h")?,
            acceleration_m_s2: record.acceleration_m_s2.number("acceleration_m_s2")?,
            elapsed_s: record.elapsed_s.number("elapsed_s")?,
            initial_distance_km: record.initial_distance_km.number("initial_distance_km")?,
            initial_fuel_kg: record.initial_fuel_kg.number("initial_fuel_kg")?,
            burn_rate_kg_s: record.burn_rate_kg_s.number("burn_rate_kg_s")?,
            distance_integration: record.distance_integration,
        })
    }
}

impl ScenarioConfig {
    /// Parse a single scenario from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let record: ScenarioRecord = toml::from_str(contents)?;
        Ok(ScenarioConfig::try_from(record)?)
    }

    /// Parse a list of scenarios from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Vec<Self>, ConfigError> {
        let records: Vec<ScenarioRecord> = serde_yaml::from_str(contents)?;
        convert(records)
    }
}

/// Load scenarios from a TOML file, a YAML list, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let path = path.as_ref();
    let records = load_records(path)?;
    if records.is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }
    convert(records)
}

fn convert(records: Vec<ScenarioRecord>) -> Result<Vec<ScenarioConfig>, ConfigError> {
    records
        .into_iter()
        .map(|record| ScenarioConfig::try_from(record).map_err(ConfigError::from))
        .collect()
}

fn load_records(path: &Path) -> Result<Vec<ScenarioRecord>, ConfigError> {
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: ScenarioRecord = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records(dir: &Path) -> Result<Vec<ScenarioRecord>, ConfigError> {
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: ScenarioRecord = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn default_name() -> String {
    "reference".to_string()
}
