use clavier::{key_offset, key_width_ratio, white_key_fraction, LayoutConfig, NoteRange};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark a full-keyboard geometry pass (what a renderer does per frame)
fn bench_full_keyboard_layout(c: &mut Criterion) {
    let range = NoteRange::new(21, 108).unwrap();
    let layout = LayoutConfig::default();

    c.bench_function("layout_88_keys", |b| {
        b.iter(|| {
            let fraction = white_key_fraction(&range);
            for note in range.notes() {
                let offset = key_offset(note, &range, &layout).unwrap();
                let width = key_width_ratio(note, &layout).unwrap();
                black_box((offset * fraction, width * fraction));
            }
        });
    });
}

criterion_group!(benches, bench_full_keyboard_layout);
criterion_main!(benches);
