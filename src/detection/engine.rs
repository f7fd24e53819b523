//! Family aggregation and verdicts.
//!
//! The engine evaluates each family as the OR of its member probes, counts
//! the families that triggered and compares the count against a threshold.
//! Report mode skips the threshold and returns the triggered families.

use super::config::{DetectionConfig, ProbeFailurePolicy};
use super::detector::Detector;
use crate::core::family::{Family, FamilySet};
use crate::core::verdict::{Assessment, ProbeFailure};
use crate::error::Result;
use tracing::{debug, debug_span, warn};

/// Aggregation engine over an injected detector.
#[derive(Debug, Clone, Default)]
pub struct DetectionEngine {
    config: DetectionConfig,
}

impl DetectionEngine {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Threshold verdict over the enabled families.
    ///
    /// `None` for `enabled` substitutes the configured default set; an empty
    /// set is honored and triggers nothing. `None` for `min_families`
    /// substitutes the configured default threshold.
    pub fn is_suspicious<D: Detector + ?Sized>(
        &self,
        detector: &D,
        enabled: Option<FamilySet>,
        min_families: Option<u32>,
    ) -> Result<bool> {
        Ok(self.assess(detector, enabled, min_families)?.suspicious)
    }

    /// Threshold-mode evaluation with a per-family breakdown.
    pub fn assess<D: Detector + ?Sized>(
        &self,
        detector: &D,
        enabled: Option<FamilySet>,
        min_families: Option<u32>,
    ) -> Result<Assessment> {
        let enabled = enabled.unwrap_or_else(|| self.config.verdict.default_set());
        let min_families = min_families.unwrap_or(self.config.verdict.default_min_families);

        let span = debug_span!(
            "assess",
            enabled = ?enabled.keys(),
            min_families
        );
        let _guard = span.enter();

        let mut failures = Vec::new();
        let mut triggered = Vec::new();
        for family in enabled.families() {
            if self.family_triggered(detector, family, &mut failures)? {
                triggered.push(family);
            }
        }

        let assessment = Assessment::new(
            enabled.families().collect(),
            triggered,
            min_families,
            failures,
        );
        debug!(
            triggered = assessment.triggered_count(),
            suspicious = assessment.suspicious,
            "threshold verdict"
        );
        Ok(assessment)
    }

    /// Report mode: every family evaluated, triggered ones returned in
    /// `Family::ALL` order.
    pub fn triggered_families<D: Detector + ?Sized>(&self, detector: &D) -> Result<Vec<Family>> {
        let span = debug_span!("triggered_families");
        let _guard = span.enter();

        let mut failures = Vec::new();
        let mut triggered = Vec::new();
        for family in Family::ALL {
            if self.family_triggered(detector, family, &mut failures)? {
                triggered.push(family);
            }
        }
        debug!(
            triggered = ?triggered,
            failures = failures.len(),
            "family report"
        );
        Ok(triggered)
    }

    /// OR of the family's member probes, stopping at the first true probe.
    fn family_triggered<D: Detector + ?Sized>(
        &self,
        detector: &D,
        family: Family,
        failures: &mut Vec<ProbeFailure>,
    ) -> Result<bool> {
        for &probe in family.probes() {
            match detector.probe(probe) {
                Ok(true) => {
                    debug!(family = %family, probe = %probe, "family triggered");
                    return Ok(true);
                }
                Ok(false) => {}
                Err(e) => match self.config.probes.failure_policy {
                    ProbeFailurePolicy::Propagate => return Err(e.into()),
                    ProbeFailurePolicy::TreatAsClear => {
                        warn!(family = %family, probe = %probe, error = %e, "probe failed, treating as clear");
                        failures.push(ProbeFailure {
                            family,
                            probe,
                            message: e.to_string(),
                        });
                    }
                },
            }
        }
        debug!(family = %family, "family clear");
        Ok(false)
    }
}

/// Public API: threshold verdict with the default configuration.
pub fn is_suspicious<D: Detector + ?Sized>(
    detector: &D,
    enabled: Option<FamilySet>,
    min_families: Option<u32>,
) -> Result<bool> {
    DetectionEngine::default().is_suspicious(detector, enabled, min_families)
}

/// Public API: triggered families with the default configuration.
pub fn list_triggered_families<D: Detector + ?Sized>(detector: &D) -> Result<Vec<Family>> {
    DetectionEngine::default().triggered_families(detector)
}
