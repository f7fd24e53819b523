//! Verdict types for threshold-mode evaluations.

use super::family::Family;
use super::probe::Probe;
use crate::error::DetectionError;
use serde::{Deserialize, Serialize};

/// Output schema version for stability tracking.
pub const ASSESSMENT_SCHEMA_VERSION: &str = "1.0";

/// A probe that failed during evaluation and was counted as not triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeFailure {
    pub family: Family,
    pub probe: Probe,
    pub message: String,
}

/// Breakdown of one threshold-mode evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub schema_version: String,
    /// Effective enabled families, after defaulting
    pub enabled: Vec<Family>,
    /// Enabled families whose OR evaluated true
    pub triggered: Vec<Family>,
    /// Effective threshold, after defaulting
    pub min_families: u32,
    pub suspicious: bool,
    /// Failures absorbed by the failure policy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub probe_failures: Vec<ProbeFailure>,
}

impl Assessment {
    /// Build an assessment; `suspicious` is derived from the counts.
    pub fn new(
        enabled: Vec<Family>,
        triggered: Vec<Family>,
        min_families: u32,
        probe_failures: Vec<ProbeFailure>,
    ) -> Self {
        let suspicious = triggered.len() as u64 >= u64::from(min_families);
        Self {
            schema_version: ASSESSMENT_SCHEMA_VERSION.to_string(),
            enabled,
            triggered,
            min_families,
            suspicious,
            probe_failures,
        }
    }

    pub fn triggered_count(&self) -> usize {
        self.triggered.len()
    }

    pub fn to_json_string(&self) -> Result<String, DetectionError> {
        serde_json::to_string(self)
            .map_err(|e| DetectionError::Serialization(format!("JSON serialization error: {}", e)))
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, DetectionError> {
        serde_json::from_str(json_str).map_err(|e| {
            DetectionError::Serialization(format!("JSON deserialization error: {}", e))
        })
    }
}
