#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Remote parsing must never panic, and a parsed remote keeps its text
        if let Ok(remote) = ghpages::RemoteUrl::parse(raw) {
            assert_eq!(remote.as_str(), raw.trim());
        }
    }
});
