//! Signal families and their probe membership.
//!
//! A family is a named group of probes combined with OR. The set of families
//! is closed: string keys only appear at the boundary, and anything that does
//! not resolve to one of the five keys is not a family.

use super::probe::Probe;
use bitflags::bitflags;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five signal families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// su binaries/traces and system partition write access
    Binaries,
    /// root managers, dangerous and cloaking packages
    Packages,
    /// dangerous system properties and test-keys builds
    Props,
    /// dangerous paths and unusual permissions on system paths
    Paths,
    /// busybox presence; ships stock on some devices, so noisy on its own
    Busybox,
}

static FAMILY_KEYS: &[&str] = &["BINARIES", "PACKAGES", "PROPS", "PATHS", "BUSYBOX"];

/// Probe membership per family, indexed in `Family::ALL` order.
const FAMILY_PROBES: [(Family, &[Probe]); 5] = [
    (
        Family::Binaries,
        &[
            Probe::SuBinaryPresent,
            Probe::SuBinaryExists,
            Probe::SystemPartitionWritable,
            Probe::NativeSuDetected,
        ],
    ),
    (
        Family::Packages,
        &[
            Probe::RootManagementAppInstalled,
            Probe::DangerousAppInstalled,
            Probe::RootCloakingAppInstalled,
        ],
    ),
    (
        Family::Props,
        &[
            Probe::TestKeysSignedFirmware,
            Probe::DangerousSystemPropertySet,
        ],
    ),
    (
        Family::Paths,
        &[Probe::DangerousPathPresent, Probe::WrongPathPermissions],
    ),
    (Family::Busybox, &[Probe::BusyboxPresent]),
];

impl Family {
    /// All families in evaluation order.
    pub const ALL: [Family; 5] = [
        Family::Binaries,
        Family::Packages,
        Family::Props,
        Family::Paths,
        Family::Busybox,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Stable external key, e.g. `"BINARIES"`.
    pub fn key(self) -> &'static str {
        FAMILY_KEYS[self.index()]
    }

    /// Case-insensitive exact match against the five keys.
    pub fn resolve(key: &str) -> Option<Family> {
        Family::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }

    /// Member probes, never empty.
    pub fn probes(self) -> &'static [Probe] {
        FAMILY_PROBES[self.index()].1
    }

    /// Single-member set for this family.
    pub const fn flag(self) -> FamilySet {
        match self {
            Family::Binaries => FamilySet::BINARIES,
            Family::Packages => FamilySet::PACKAGES,
            Family::Props => FamilySet::PROPS,
            Family::Paths => FamilySet::PATHS,
            Family::Busybox => FamilySet::BUSYBOX,
        }
    }
}

/// Resolve a caller-supplied family key; unknown keys yield `None`.
pub fn resolve(key: &str) -> Option<Family> {
    Family::resolve(key)
}

/// Ordered member probes of `family`.
pub fn probes_of(family: Family) -> &'static [Probe] {
    family.probes()
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Family {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Family {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Family::resolve(&key).ok_or_else(|| de::Error::unknown_variant(&key, FAMILY_KEYS))
    }
}

bitflags! {
    /// A set of families.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FamilySet: u8 {
        const BINARIES = 1 << 0;
        const PACKAGES = 1 << 1;
        const PROPS = 1 << 2;
        const PATHS = 1 << 3;
        const BUSYBOX = 1 << 4;
    }
}

impl FamilySet {
    /// Families evaluated when a request does not name any.
    pub const DEFAULT_ENABLED: FamilySet = FamilySet::BINARIES
        .union(FamilySet::PACKAGES)
        .union(FamilySet::PROPS);

    /// Build a set from caller-supplied keys, silently dropping unknown ones.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .filter_map(|k| Family::resolve(k.as_ref()))
            .collect()
    }

    pub fn contains_family(self, family: Family) -> bool {
        self.contains(family.flag())
    }

    pub fn with_family(self, family: Family) -> Self {
        self.union(family.flag())
    }

    /// Members in `Family::ALL` order.
    pub fn families(self) -> impl Iterator<Item = Family> {
        Family::ALL
            .into_iter()
            .filter(move |f| self.contains(f.flag()))
    }

    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    pub fn keys(self) -> Vec<&'static str> {
        self.families().map(Family::key).collect()
    }
}

impl From<Family> for FamilySet {
    fn from(family: Family) -> Self {
        family.flag()
    }
}

impl FromIterator<Family> for FamilySet {
    fn from_iter<I: IntoIterator<Item = Family>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FamilySet::empty(), |set, f| set.with_family(f))
    }
}

impl Serialize for FamilySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.families())
    }
}

impl<'de> Deserialize<'de> for FamilySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let families = Vec::<Family>::deserialize(deserializer)?;
        Ok(families.into_iter().collect())
    }
}
