//! Root/jailbreak signal aggregation.
//!
//! Raw compromise indicators ("probes") come from an injected [`Detector`].
//! They are grouped into five families, each family triggering when any of
//! its probes does. The engine then either compares the number of triggered
//! families against a threshold or reports which families triggered.
//!
//! ```
//! use jailbreak_detection::{is_suspicious, Probe, ProbeReadings};
//!
//! let readings = ProbeReadings::only(&[Probe::SuBinaryPresent, Probe::DangerousSystemPropertySet]);
//! assert!(is_suspicious(&readings, None, None).unwrap());
//! ```

/// Core data types module
pub mod core;
pub mod detection;
pub mod error;
pub mod logging;

pub use crate::core::{Assessment, Family, FamilySet, Probe, ProbeFailure};
pub use crate::detection::{
    developer_mode_enabled, is_suspicious, list_triggered_families, DetectionConfig,
    DetectionEngine, Detector, JailbreakChannel, MethodCall, MethodResult, PlatformSettings,
    ProbeFailurePolicy, ProbeReadings,
};
pub use crate::error::{DetectionError, ProbeError, Result};
