//! Performance benchmarks for message tracker hot paths.
//!
//! Benchmarks cover:
//!   - Add into a tracker at capacity (every add evicts)
//!   - Delete of every tracked message in random order
//!   - Lookup by id
//!   - Full snapshot listing
//!
//! Run: `cargo bench`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use msgtracker::{Message, MessageTracker};

const CAPACITY: usize = 10_000;

fn generate_message(n: usize) -> Message {
    Message::new(
        format!("someID{n}"),
        format!("somePeerID{n}"),
        vec![0u8, 1, 1],
    )
}

fn filled_tracker() -> MessageTracker {
    let tracker = MessageTracker::with_capacity(CAPACITY).unwrap();
    for i in 0..CAPACITY {
        tracker.add(generate_message(i)).unwrap();
    }
    tracker
}

fn shuffled_ids() -> Vec<String> {
    let mut keyed: Vec<(u64, String)> = (0..CAPACITY)
        .map(|i| (rand::random::<u64>(), generate_message(i).id))
        .collect();
    keyed.sort_unstable();
    keyed.into_iter().map(|(_, id)| id).collect()
}

fn bench_add(c: &mut Criterion) {
    let tracker = filled_tracker();
    let mut next = CAPACITY;

    c.bench_function("tracker_add_with_eviction", |b| {
        b.iter_batched(
            || {
                next += 1;
                generate_message(next)
            },
            |msg| tracker.add(black_box(msg)).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("tracker_delete_all_random_order", |b| {
        b.iter_batched(
            || (filled_tracker(), shuffled_ids()),
            |(tracker, ids)| {
                for id in &ids {
                    tracker.delete(black_box(id)).unwrap();
                }
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_lookup(c: &mut Criterion) {
    let tracker = filled_tracker();
    let ids = shuffled_ids();
    let mut cursor = 0;

    c.bench_function("tracker_message_lookup", |b| {
        b.iter(|| {
            cursor = (cursor + 1) % ids.len();
            black_box(tracker.message(&ids[cursor]).unwrap())
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let tracker = filled_tracker();

    c.bench_function("tracker_messages_snapshot", |b| {
        b.iter(|| black_box(tracker.messages()));
    });
}

criterion_group!(benches, bench_add, bench_delete, bench_lookup, bench_snapshot);
criterion_main!(benches);
