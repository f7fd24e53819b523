//! Detection runtime.
//!
//! Evaluates the family model against an injected detector and exposes the
//! result through a method-channel style call surface.

pub mod channel;
pub mod config;
pub mod detector;
pub mod engine;
pub mod settings;

pub use channel::{JailbreakArgs, JailbreakChannel, MethodCall, MethodResult, CHANNEL_NAME};
pub use config::{DetectionConfig, ProbeConfig, ProbeFailurePolicy, VerdictConfig};
pub use detector::{from_fn, Detector, FnDetector, ProbeReadings};
pub use engine::{is_suspicious, list_triggered_families, DetectionEngine};
pub use settings::{developer_mode_enabled, PlatformSettings, StaticSettings};

// Re-export key types from core for convenience
pub use crate::core::{Assessment, Family, FamilySet, Probe, ProbeFailure};
