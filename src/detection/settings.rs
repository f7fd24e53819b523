//! Developer-mode lookup.
//!
//! This is a pass-through to a platform setting and has nothing to do with
//! the family model; it lives here because the channel exposes it next to
//! the verdict methods.

use std::collections::HashMap;

/// Global settings key holding the developer options toggle.
pub const DEVELOPMENT_SETTINGS_ENABLED: &str = "development_settings_enabled";

/// Read access to integer platform settings.
pub trait PlatformSettings: Send + Sync {
    /// `None` when the setting is not defined.
    fn global_int(&self, name: &str) -> Option<i64>;
}

/// Developer options are on when the setting is defined and non-zero.
pub fn developer_mode_enabled<S: PlatformSettings + ?Sized>(settings: &S) -> bool {
    settings.global_int(DEVELOPMENT_SETTINGS_ENABLED).unwrap_or(0) != 0
}

/// Map-backed settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSettings {
    values: HashMap<String, i64>,
}

impl StaticSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Settings with only the developer options toggle defined.
    pub fn developer_mode(enabled: bool) -> Self {
        Self::new().with(DEVELOPMENT_SETTINGS_ENABLED, i64::from(enabled))
    }
}

impl PlatformSettings for StaticSettings {
    fn global_int(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }
}
