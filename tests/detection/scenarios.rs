//! Reference scenarios for the threshold verdict and the family report.

use crate::common::readings_with;
use jailbreak_detection::{is_suspicious, list_triggered_families, Family, FamilySet, Probe};

#[test]
fn single_su_binary_is_not_enough_by_default() {
    let detector = readings_with(&[Probe::SuBinaryPresent]);
    assert!(!is_suspicious(&detector, None, None).unwrap());
}

#[test]
fn su_binary_plus_dangerous_props_is_suspicious() {
    let detector = readings_with(&[Probe::SuBinaryPresent, Probe::DangerousSystemPropertySet]);
    assert!(is_suspicious(&detector, None, None).unwrap());
}

#[test]
fn duplicate_busybox_keys_collapse_to_one_family() {
    let enabled = FamilySet::from_keys(["BUSYBOX", "busybox"]);
    assert_eq!(enabled, FamilySet::BUSYBOX);
    let detector = readings_with(&[Probe::BusyboxPresent]);
    assert!(is_suspicious(&detector, Some(enabled), Some(1)).unwrap());
    assert!(!is_suspicious(&detector, Some(enabled), Some(2)).unwrap());
}

#[test]
fn busybox_only_report() {
    let detector = readings_with(&[Probe::BusyboxPresent]);
    assert_eq!(
        list_triggered_families(&detector).unwrap(),
        vec![Family::Busybox]
    );
}

#[test]
fn busybox_is_not_in_the_default_set() {
    // busybox ships on some stock devices; it only counts when enabled
    let detector = readings_with(&[Probe::BusyboxPresent, Probe::DangerousPathPresent]);
    assert!(!is_suspicious(&detector, None, Some(1)).unwrap());
    assert!(is_suspicious(&detector, Some(FamilySet::all()), Some(2)).unwrap());
}

#[test]
fn any_member_probe_triggers_its_family() {
    for family in Family::ALL {
        for &probe in family.probes() {
            let detector = readings_with(&[probe]);
            assert_eq!(
                list_triggered_families(&detector).unwrap(),
                vec![family],
                "{probe} should trigger {family}"
            );
        }
    }
}

#[test]
fn report_order_is_stable() {
    let detector = readings_with(&[
        Probe::BusyboxPresent,
        Probe::RootCloakingAppInstalled,
        Probe::NativeSuDetected,
    ]);
    let first = list_triggered_families(&detector).unwrap();
    assert_eq!(
        first,
        vec![Family::Binaries, Family::Packages, Family::Busybox]
    );
    for _ in 0..10 {
        assert_eq!(list_triggered_families(&detector).unwrap(), first);
    }
}
