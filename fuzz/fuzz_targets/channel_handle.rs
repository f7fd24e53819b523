#![no_main]
use jailbreak_detection::detection::StaticSettings;
use jailbreak_detection::{JailbreakChannel, Probe, ProbeReadings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let channel = JailbreakChannel::new(
        ProbeReadings::only(&[Probe::SuBinaryPresent, Probe::BusyboxPresent]),
        StaticSettings::developer_mode(true),
    );
    let _ = channel.handle_json(data);
});
