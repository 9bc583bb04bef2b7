#![no_main]
#![forbid(unsafe_code)]
use libfuzzer_sys::fuzz_target;
use msgtracker::{Message, MessageTracker};
use std::collections::HashSet;

// Each byte is one operation: high bit picks add/delete, low bits pick the id.
fuzz_target!(|data: &[u8]| {
    let Some((&capacity, ops)) = data.split_first() else {
        return;
    };
    let Ok(tracker) = MessageTracker::with_capacity(usize::from(capacity % 16) + 1) else {
        return;
    };

    for &op in ops {
        let id = format!("id{}", op & 0x1f);
        if op & 0x80 == 0 {
            let _ = tracker.add(Message::new(id, "peer", vec![op]));
        } else {
            let _ = tracker.delete(&id);
        }

        let listed = tracker.messages();
        assert!(listed.len() <= tracker.capacity());
        let unique: HashSet<&str> = listed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(unique.len(), listed.len());
        for msg in &listed {
            assert!(tracker.message(&msg.id).is_ok());
        }
    }
});
