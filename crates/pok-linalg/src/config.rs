use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Numerical settings for elimination.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Relative threshold under which a pivot counts as zero. It is scaled
    /// by the largest absolute entry of the system being reduced (or 1,
    /// whichever is larger).
    pub pivot_tolerance: f64,
}

impl SolverConfig {
    pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

    pub fn new(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: Self::DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

/// Supported interpolation strategies.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationKind {
    #[default]
    Lagrange,
    Linear,
}

impl FromStr for InterpolationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lagrange" => Ok(InterpolationKind::Lagrange),
            "linear" => Ok(InterpolationKind::Linear),
            _ => Err(format!(
                "Unknown interpolation kind: {}. Expected one of: lagrange, linear",
                s
            )),
        }
    }
}

/// Top-level configuration, usually read from a JSON file.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToolkitConfig {
    pub solver: SolverConfig,
    pub interpolation: InterpolationKind,
    /// Tolerance used when comparing computed matrices against references.
    pub similarity_tolerance: f64,
}

impl ToolkitConfig {
    pub fn new(
        solver: SolverConfig,
        interpolation: InterpolationKind,
        similarity_tolerance: f64,
    ) -> Self {
        Self {
            solver,
            interpolation,
            similarity_tolerance,
        }
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: ToolkitConfig =
            serde_json::from_str(json).context("Failed to parse toolkit configuration")?;
        if !(config.solver.pivot_tolerance >= 0.0) {
            anyhow::bail!(
                "pivot_tolerance must be non-negative, got {}",
                config.solver.pivot_tolerance
            );
        }
        if !(config.similarity_tolerance >= 0.0) {
            anyhow::bail!(
                "similarity_tolerance must be non-negative, got {}",
                config.similarity_tolerance
            );
        }
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded toolkit config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            interpolation: InterpolationKind::default(),
            similarity_tolerance: 1e-4,
        }
    }
}
