//! Core data types for jailbreak detection.
//!
//! This module contains the closed family model, the probe identifiers a
//! detector answers for, and the verdict types produced by an evaluation.

pub mod family;
pub mod probe;
pub mod verdict;

pub use family::{probes_of, resolve, Family, FamilySet};
pub use probe::Probe;
pub use verdict::{Assessment, ProbeFailure, ASSESSMENT_SCHEMA_VERSION};
