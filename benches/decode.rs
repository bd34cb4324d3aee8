use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dialog::input::decode;
use tui_dialog::types::RawEvent;

fn bench_decode(c: &mut Criterion) {
    let events = [
        RawEvent::from_bytes(b"a"),
        RawEvent::from_bytes(&[0x1b, 0x4f, 0x41]),
        RawEvent::from_bytes(&[0x1b, 0x5b, 0x5a]),
        RawEvent::from_bytes(&[0x1b, 0x5b, 0x33, 0x7e]),
        RawEvent::from_bytes(&[0x1b, 0x5b, 0x31, 0x3b, 0x35]),
    ];

    c.bench_function("decode_mixed_events", |b| {
        b.iter(|| {
            for raw in &events {
                black_box(decode(black_box(raw)));
            }
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
