//! Probe identifiers understood by a detector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single low-level compromise indicator a detector can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Probe {
    /// su binary found in one of the well-known locations
    SuBinaryPresent,
    /// `which su` style existence check
    SuBinaryExists,
    /// /system is mounted read-write
    SystemPartitionWritable,
    /// su found by the native (C) scanner
    NativeSuDetected,
    RootManagementAppInstalled,
    DangerousAppInstalled,
    RootCloakingAppInstalled,
    /// build signed with test-keys
    TestKeysSignedFirmware,
    /// ro.debuggable / ro.secure and friends
    DangerousSystemPropertySet,
    DangerousPathPresent,
    WrongPathPermissions,
    BusyboxPresent,
}

impl Probe {
    /// Every probe, in a stable order.
    pub const ALL: [Probe; 12] = [
        Probe::SuBinaryPresent,
        Probe::SuBinaryExists,
        Probe::SystemPartitionWritable,
        Probe::NativeSuDetected,
        Probe::RootManagementAppInstalled,
        Probe::DangerousAppInstalled,
        Probe::RootCloakingAppInstalled,
        Probe::TestKeysSignedFirmware,
        Probe::DangerousSystemPropertySet,
        Probe::DangerousPathPresent,
        Probe::WrongPathPermissions,
        Probe::BusyboxPresent,
    ];

    /// Stable wire key, matching the serde representation.
    pub const fn key(self) -> &'static str {
        match self {
            Probe::SuBinaryPresent => "su-binary-present",
            Probe::SuBinaryExists => "su-binary-exists",
            Probe::SystemPartitionWritable => "system-partition-writable",
            Probe::NativeSuDetected => "native-su-detected",
            Probe::RootManagementAppInstalled => "root-management-app-installed",
            Probe::DangerousAppInstalled => "dangerous-app-installed",
            Probe::RootCloakingAppInstalled => "root-cloaking-app-installed",
            Probe::TestKeysSignedFirmware => "test-keys-signed-firmware",
            Probe::DangerousSystemPropertySet => "dangerous-system-property-set",
            Probe::DangerousPathPresent => "dangerous-path-present",
            Probe::WrongPathPermissions => "wrong-path-permissions",
            Probe::BusyboxPresent => "busybox-present",
        }
    }

    /// Case-insensitive lookup by wire key.
    pub fn resolve(key: &str) -> Option<Probe> {
        Probe::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
