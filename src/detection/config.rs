//! Configuration for the detection engine.
//!
//! Provides the defaults applied to threshold-mode requests and the policy
//! for failing probes. Every section has sensible defaults, so a partial JSON
//! document only needs to name what it changes.

use crate::core::family::{Family, FamilySet};
use crate::error::{DetectionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Master configuration for the detection engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Defaults for threshold-mode requests.
    pub verdict: VerdictConfig,
    /// Probe evaluation behavior.
    pub probes: ProbeConfig,
}

/// Defaults substituted when a threshold-mode request omits an argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictConfig {
    /// Families evaluated when the caller names none (default: BINARIES, PACKAGES, PROPS).
    pub default_families: Vec<Family>,
    /// Minimum triggered families for a suspicious verdict (default: 2).
    pub default_min_families: u32,
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            default_families: FamilySet::DEFAULT_ENABLED.families().collect(),
            default_min_families: 2,
        }
    }
}

impl VerdictConfig {
    pub fn default_set(&self) -> FamilySet {
        self.default_families.iter().copied().collect()
    }
}

/// How a failing probe affects an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeFailurePolicy {
    /// Log the failure, count the probe as false and keep going.
    #[default]
    TreatAsClear,
    /// Abort the whole evaluation with the probe error.
    Propagate,
}

/// Probe evaluation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub failure_policy: ProbeFailurePolicy,
}

impl DetectionConfig {
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| DetectionError::Config(format!("invalid configuration: {}", e)))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DetectionError::Serialization(format!("JSON serialization error: {}", e)))
    }

    /// Same configuration with a different failure policy.
    pub fn with_failure_policy(mut self, policy: ProbeFailurePolicy) -> Self {
        self.probes.failure_policy = policy;
        self
    }
}
