//! Probe failure policies.

use crate::common::{failing_detector, readings_with};
use jailbreak_detection::{
    DetectionConfig, DetectionEngine, DetectionError, Family, FamilySet, Probe,
    ProbeFailurePolicy,
};

fn propagating() -> DetectionEngine {
    DetectionEngine::new(DetectionConfig::default().with_failure_policy(ProbeFailurePolicy::Propagate))
}

#[test]
fn failing_probe_does_not_mask_other_members() {
    let detector = failing_detector(
        readings_with(&[Probe::SystemPartitionWritable, Probe::TestKeysSignedFirmware]),
        &[Probe::SuBinaryPresent, Probe::SuBinaryExists],
    );
    let a = DetectionEngine::default()
        .assess(&detector, None, None)
        .unwrap();
    assert_eq!(a.triggered, vec![Family::Binaries, Family::Props]);
    assert!(a.suspicious);
    assert_eq!(a.probe_failures.len(), 2);
    assert!(a
        .probe_failures
        .iter()
        .all(|f| f.family == Family::Binaries && f.message.contains("simulated")));
}

#[test]
fn failing_probe_does_not_affect_unrelated_families() {
    let detector = failing_detector(
        readings_with(&[Probe::BusyboxPresent, Probe::WrongPathPermissions]),
        &[Probe::DangerousPathPresent],
    );
    let families = DetectionEngine::default()
        .triggered_families(&detector)
        .unwrap();
    assert_eq!(families, vec![Family::Paths, Family::Busybox]);
}

#[test]
fn entirely_failing_family_counts_as_clear() {
    let detector = failing_detector(readings_with(&[]), &[Probe::BusyboxPresent]);
    let engine = DetectionEngine::default();
    assert!(!engine
        .is_suspicious(&detector, Some(FamilySet::BUSYBOX), Some(1))
        .unwrap());
    assert!(engine.triggered_families(&detector).unwrap().is_empty());
}

#[test]
fn propagate_aborts_the_evaluation() {
    let detector = failing_detector(
        readings_with(&[Probe::SuBinaryPresent]),
        &[Probe::DangerousSystemPropertySet],
    );
    match propagating().is_suspicious(&detector, None, None) {
        Err(DetectionError::Probe(e)) => {
            assert_eq!(e.probe(), Probe::DangerousSystemPropertySet)
        }
        other => panic!("expected probe error, got {other:?}"),
    }
    assert!(propagating().triggered_families(&detector).is_err());
}

#[test]
fn propagate_ignores_failures_in_disabled_families() {
    let detector = failing_detector(
        readings_with(&[Probe::SuBinaryPresent, Probe::DangerousAppInstalled]),
        &[Probe::BusyboxPresent],
    );
    assert!(propagating().is_suspicious(&detector, None, None).unwrap());
}

#[test]
fn propagate_skips_probes_after_a_trigger() {
    // the family already triggered, so the failing member is never asked
    let detector = failing_detector(
        readings_with(&[Probe::SuBinaryPresent, Probe::TestKeysSignedFirmware]),
        &[Probe::NativeSuDetected],
    );
    assert!(propagating()
        .is_suspicious(&detector, Some(FamilySet::BINARIES | FamilySet::PROPS), Some(2))
        .unwrap());
}
