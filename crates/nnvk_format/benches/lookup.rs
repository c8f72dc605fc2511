use criterion::{criterion_main, criterion_group, Criterion, black_box};

use nnvk_format::{Format, get_format_info, try_get_format_info};

fn lookup_benchmark(c: &mut Criterion) {
    c.bench_function("get_format_info: RGBA8", |b| b.iter(|| {
        get_format_info(black_box(Format::RGBA8))
    }));

    c.bench_function("try_get_format_info: RGBA8", |b| b.iter(|| {
        try_get_format_info(black_box(Format::RGBA8.raw()))
    }));

    c.bench_function("get_format_info: all formats", |b| b.iter(|| {
        let mut compressed = 0;
        Format::for_each(|format| if get_format_info(black_box(format)).is_compressed() {
            compressed += 1;
        });
        compressed
    }));
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
