//! Method-channel call surface.
//!
//! Host applications talk to the engine through named method calls carrying a
//! JSON argument map, the same shape a mobile plugin channel delivers. Each
//! call resolves to exactly one [`MethodResult`]; unknown methods answer
//! `NotImplemented` instead of failing.
//!
//! `jailbroken` is committed to the boolean threshold verdict. The
//! triggered-family report is served under its own method name so the two
//! result shapes never share one.

use super::detector::Detector;
use super::engine::DetectionEngine;
use super::settings::{developer_mode_enabled, PlatformSettings};
use crate::core::family::{Family, FamilySet};
use crate::error::{DetectionError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info_span};

/// Channel name the host binds to.
pub const CHANNEL_NAME: &str = "flutter_jailbreak_detection";

/// Method names understood by [`JailbreakChannel`].
pub mod methods {
    /// Threshold verdict; returns a boolean.
    pub const JAILBROKEN: &str = "jailbroken";
    /// Report mode; returns the list of triggered family keys.
    pub const TRIGGERED_FAMILIES: &str = "triggeredFamilies";
    /// Developer options toggle; returns a boolean.
    pub const DEVELOPER_MODE: &str = "developerMode";
}

/// Error codes carried by [`MethodResult::Error`].
pub mod error_codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const PROBE_FAILED: &str = "PROBE_FAILED";
    pub const DECODE_FAILED: &str = "DECODE_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
}

const ARG_ENABLED_FAMILIES: &str = "enabledFamilies";
const ARG_MIN_FAMILIES: &str = "minFamilies";

/// An incoming call: method name plus its argument map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Call without arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            DetectionError::Serialization(format!("JSON deserialization error: {}", e))
        })
    }
}

/// Outcome of a call, mirroring the success / error / not-implemented
/// replies of a platform channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    Success {
        value: Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResult::Success {
            value: value.into(),
        }
    }

    pub fn error(code: &str, message: impl Into<String>, details: Option<Value>) -> Self {
        MethodResult::Error {
            code: code.to_string(),
            message: message.into(),
            details,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }

    /// Successful payload, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            MethodResult::Success { value } => Some(value),
            _ => None,
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| DetectionError::Serialization(format!("JSON serialization error: {}", e)))
    }
}

impl From<DetectionError> for MethodResult {
    fn from(err: DetectionError) -> Self {
        let err = crate::log_error!(err, "method call failed");
        match &err {
            DetectionError::InvalidArgument(msg) => {
                MethodResult::error(error_codes::INVALID_ARGUMENT, msg.clone(), None)
            }
            DetectionError::Probe(e) => MethodResult::error(
                error_codes::PROBE_FAILED,
                e.to_string(),
                Some(json!({ "probe": e.probe().key() })),
            ),
            DetectionError::Serialization(msg) => {
                MethodResult::error(error_codes::DECODE_FAILED, msg.clone(), None)
            }
            DetectionError::Config(_) | DetectionError::Io(_) => {
                MethodResult::error(error_codes::INTERNAL, err.to_string(), None)
            }
        }
    }
}

/// Parsed arguments of a `jailbroken` call. `None` means the caller left the
/// argument out and the engine default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JailbreakArgs {
    pub enabled_families: Option<FamilySet>,
    pub min_families: Option<u32>,
}

impl JailbreakArgs {
    /// Parse an argument map. `null` arguments count as absent; unknown or
    /// non-string family entries are dropped.
    pub fn from_arguments(arguments: &Value) -> Result<Self> {
        let map = match arguments {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(DetectionError::InvalidArgument(format!(
                    "expected an argument map, got {}",
                    json_kind(other)
                )))
            }
        };
        Ok(Self {
            enabled_families: parse_enabled_families(map)?,
            min_families: parse_min_families(map)?,
        })
    }
}

fn parse_enabled_families(map: &Map<String, Value>) -> Result<Option<FamilySet>> {
    let items = match map.get(ARG_ENABLED_FAMILIES) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DetectionError::InvalidArgument(format!(
                "{} must be a list of strings, got {}",
                ARG_ENABLED_FAMILIES,
                json_kind(other)
            )))
        }
    };
    let mut set = FamilySet::empty();
    for item in items {
        match item.as_str().and_then(Family::resolve) {
            Some(family) => set = set.with_family(family),
            None => debug!(entry = %item, "dropping unknown family"),
        }
    }
    Ok(Some(set))
}

fn parse_min_families(map: &Map<String, Value>) -> Result<Option<u32>> {
    let value = match map.get(ARG_MIN_FAMILIES) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };
    if let Some(n) = value.as_u64() {
        // Thresholds above the family count are legal and simply unreachable.
        return Ok(Some(u32::try_from(n).unwrap_or(u32::MAX)));
    }
    let message = match value.as_i64() {
        Some(n) => format!("{} must be non-negative, got {}", ARG_MIN_FAMILIES, n),
        None => format!(
            "{} must be an integer, got {}",
            ARG_MIN_FAMILIES,
            json_kind(value)
        ),
    };
    Err(DetectionError::InvalidArgument(message))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Dispatches method calls to the engine, a detector and platform settings.
#[derive(Debug, Clone)]
pub struct JailbreakChannel<D, S> {
    engine: DetectionEngine,
    detector: D,
    settings: S,
}

impl<D: Detector, S: PlatformSettings> JailbreakChannel<D, S> {
    /// Channel over the default engine configuration.
    pub fn new(detector: D, settings: S) -> Self {
        Self::with_engine(DetectionEngine::default(), detector, settings)
    }

    pub fn with_engine(engine: DetectionEngine, detector: D, settings: S) -> Self {
        Self {
            engine,
            detector,
            settings,
        }
    }

    pub fn engine(&self) -> &DetectionEngine {
        &self.engine
    }

    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        let span = info_span!("method_call", channel = CHANNEL_NAME, method = %call.method);
        let _guard = span.enter();

        match call.method.as_str() {
            methods::JAILBROKEN => self.jailbroken(&call.arguments),
            methods::TRIGGERED_FAMILIES => self.triggered_families(),
            methods::DEVELOPER_MODE => {
                MethodResult::success(developer_mode_enabled(&self.settings))
            }
            other => {
                debug!(method = other, "method not implemented");
                MethodResult::NotImplemented
            }
        }
    }

    /// Decode a JSON envelope and dispatch it.
    pub fn handle_json(&self, bytes: &[u8]) -> MethodResult {
        match MethodCall::from_json_slice(bytes) {
            Ok(call) => self.handle(&call),
            Err(e) => e.into(),
        }
    }

    fn jailbroken(&self, arguments: &Value) -> MethodResult {
        let verdict = JailbreakArgs::from_arguments(arguments).and_then(|args| {
            self.engine
                .is_suspicious(&self.detector, args.enabled_families, args.min_families)
        });
        match verdict {
            Ok(suspicious) => MethodResult::success(suspicious),
            Err(e) => e.into(),
        }
    }

    fn triggered_families(&self) -> MethodResult {
        match self.engine.triggered_families(&self.detector) {
            Ok(families) => {
                MethodResult::success(families.into_iter().map(Family::key).collect::<Vec<_>>())
            }
            Err(e) => e.into(),
        }
    }
}
