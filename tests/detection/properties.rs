//! Exhaustive checks of the verdict properties over every family subset.

use crate::common::{all_family_subsets, readings_triggering, readings_with, CountingDetector};
use jailbreak_detection::{
    is_suspicious, list_triggered_families, DetectionEngine, Family, FamilySet, Probe,
    ProbeReadings,
};

#[test]
fn enabling_more_families_never_lowers_the_count() {
    let engine = DetectionEngine::default();
    for state in all_family_subsets() {
        let detector = readings_triggering(state);
        for small in all_family_subsets() {
            let count_small = engine
                .assess(&detector, Some(small), Some(0))
                .unwrap()
                .triggered_count();
            for large in all_family_subsets().into_iter().filter(|l| l.contains(small)) {
                let count_large = engine
                    .assess(&detector, Some(large), Some(0))
                    .unwrap()
                    .triggered_count();
                assert!(count_large >= count_small);
                for t in 0..=6 {
                    if engine.is_suspicious(&detector, Some(small), Some(t)).unwrap() {
                        assert!(engine.is_suspicious(&detector, Some(large), Some(t)).unwrap());
                    }
                }
            }
        }
    }
}

#[test]
fn triggered_count_matches_detector_state() {
    let engine = DetectionEngine::default();
    for state in all_family_subsets() {
        let detector = readings_triggering(state);
        for enabled in all_family_subsets() {
            let a = engine.assess(&detector, Some(enabled), None).unwrap();
            assert_eq!(a.triggered_count(), (state & enabled).len());
            assert_eq!(a.enabled, enabled.families().collect::<Vec<_>>());
        }
    }
}

#[test]
fn zero_threshold_is_always_suspicious() {
    for state in [ProbeReadings::all(false), ProbeReadings::all(true)] {
        for enabled in all_family_subsets() {
            assert!(is_suspicious(&state, Some(enabled), Some(0)).unwrap());
        }
        assert!(is_suspicious(&state, None, Some(0)).unwrap());
    }
}

#[test]
fn empty_set_with_threshold_one_is_never_suspicious() {
    let detector = CountingDetector::new(ProbeReadings::all(true));
    assert!(!is_suspicious(&detector, Some(FamilySet::empty()), Some(1)).unwrap());
    assert_eq!(detector.calls(), 0, "no family enabled, no probe evaluated");
}

#[test]
fn threshold_above_enabled_count_is_unreachable() {
    let detector = ProbeReadings::all(true);
    assert!(is_suspicious(&detector, Some(FamilySet::all()), Some(5)).unwrap());
    assert!(!is_suspicious(&detector, Some(FamilySet::all()), Some(6)).unwrap());
    assert!(!is_suspicious(&detector, None, Some(4)).unwrap());
    assert!(!is_suspicious(&detector, Some(FamilySet::PATHS), Some(u32::MAX)).unwrap());
}

#[test]
fn report_extremes() {
    assert!(list_triggered_families(&ProbeReadings::all(false))
        .unwrap()
        .is_empty());
    assert_eq!(
        list_triggered_families(&ProbeReadings::all(true)).unwrap(),
        Family::ALL.to_vec()
    );
}

#[test]
fn report_matches_family_or() {
    for state in all_family_subsets() {
        let detector = readings_triggering(state);
        assert_eq!(
            list_triggered_families(&detector).unwrap(),
            state.families().collect::<Vec<_>>()
        );
    }
}

#[test]
fn resolution_is_case_insensitive() {
    assert_eq!(Family::resolve("binaries"), Family::resolve("BINARIES"));
    assert_eq!(Family::resolve("Binaries"), Some(Family::Binaries));
}

#[test]
fn unknown_keys_do_not_abort_resolution() {
    let set = FamilySet::from_keys(["PROPS", "kernel", "", "Packages"]);
    assert_eq!(set, FamilySet::PROPS | FamilySet::PACKAGES);

    let detector = readings_with(&[Probe::TestKeysSignedFirmware, Probe::DangerousAppInstalled]);
    assert!(is_suspicious(&detector, Some(set), Some(2)).unwrap());
}
