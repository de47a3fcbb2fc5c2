use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use reflow_engine::process;

fn bench_process(c: &mut Criterion) {
    let paragraph = "It has been 1010 (bin) long years , and 1E (hex) more await . \
                     We should stay calm (up, 2) about it: a honest reading of \
                     ' the record ' shows nothing ... surprising ? ! \
                     Still, go (up) (cap) carefully."
        .repeat(64);

    c.bench_function("process/paragraph", |b| {
        b.iter(|| process(black_box(&paragraph)));
    });

    c.bench_function("process/plain", |b| {
        let plain = "no directives here, just ordinary prose flowing along".repeat(64);
        b.iter(|| process(black_box(&plain)));
    });
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
