//! The detector capability consumed by the engine.
//!
//! The engine never inspects the device itself. Whatever runs the OS probes
//! implements [`Detector`]; hosts that collect readings elsewhere can ship them
//! as a [`ProbeReadings`] snapshot instead.

use crate::core::probe::Probe;
use crate::error::{DetectionError, ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Source of raw probe results.
///
/// Probes must be read-only and independent of each other; the engine may
/// skip probes once a family has triggered and may call them from several
/// threads at once.
pub trait Detector: Send + Sync {
    fn probe(&self, probe: Probe) -> std::result::Result<bool, ProbeError>;
}

impl<D: Detector + ?Sized> Detector for &D {
    fn probe(&self, probe: Probe) -> std::result::Result<bool, ProbeError> {
        (**self).probe(probe)
    }
}

impl<D: Detector + ?Sized> Detector for Arc<D> {
    fn probe(&self, probe: Probe) -> std::result::Result<bool, ProbeError> {
        (**self).probe(probe)
    }
}

/// Detector backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnDetector<F>(F);

impl<F> Detector for FnDetector<F>
where
    F: Fn(Probe) -> std::result::Result<bool, ProbeError> + Send + Sync,
{
    fn probe(&self, probe: Probe) -> std::result::Result<bool, ProbeError> {
        (self.0)(probe)
    }
}

/// Wrap a closure as a detector.
pub fn from_fn<F>(f: F) -> FnDetector<F>
where
    F: Fn(Probe) -> std::result::Result<bool, ProbeError> + Send + Sync,
{
    FnDetector(f)
}

/// Snapshot of probe results, keyed by probe.
///
/// Probes missing from the snapshot fail with [`ProbeError::Unavailable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbeReadings {
    readings: BTreeMap<Probe, bool>,
}

impl ProbeReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every probe set to `value`.
    pub fn all(value: bool) -> Self {
        Probe::ALL.into_iter().map(|p| (p, value)).collect()
    }

    /// Every probe false except the listed ones.
    pub fn only(positive: &[Probe]) -> Self {
        let mut readings = Self::all(false);
        for probe in positive {
            readings.set(*probe, true);
        }
        readings
    }

    pub fn with(mut self, probe: Probe, value: bool) -> Self {
        self.set(probe, value);
        self
    }

    pub fn set(&mut self, probe: Probe, value: bool) {
        self.readings.insert(probe, value);
    }

    pub fn get(&self, probe: Probe) -> Option<bool> {
        self.readings.get(&probe).copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| {
            DetectionError::Serialization(format!("JSON deserialization error: {}", e))
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| DetectionError::Serialization(format!("JSON serialization error: {}", e)))
    }
}

impl FromIterator<(Probe, bool)> for ProbeReadings {
    fn from_iter<I: IntoIterator<Item = (Probe, bool)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

impl Detector for ProbeReadings {
    fn probe(&self, probe: Probe) -> std::result::Result<bool, ProbeError> {
        self.get(probe).ok_or(ProbeError::Unavailable { probe })
    }
}
