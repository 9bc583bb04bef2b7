#![no_main]
#![forbid(unsafe_code)]
use libfuzzer_sys::fuzz_target;
use msgtracker::{Message, MessageTracker};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz message deserialization and admission
        if let Ok(message) = serde_json::from_str::<Option<Message>>(s) {
            if let Ok(tracker) = MessageTracker::with_capacity(4) {
                let _ = tracker.add_optional(message);
                assert!(tracker.len() <= 1);
            }
        }
    }
});
