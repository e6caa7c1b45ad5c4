#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use utf8cursor::{ScalarValue, find_code_point, find_code_point_by_decode};

/// Deterministically build a haystack of at least `target_len` bytes from
/// whole copies of `filler`, optionally ending in the needle.
fn make_haystack(filler: &[u8], target_len: usize, needle: Option<char>) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(target_len + filler.len() + 4);
    while bytes.len() < target_len {
        bytes.extend_from_slice(filler);
    }
    if let Some(c) = needle {
        let mut buf = [0u8; 4];
        bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
    bytes
}

const TEXTURES: &[(&str, &[u8])] = &[
    ("ascii", b"the quick brown fox jumps over the lazy dog "),
    ("multibyte", "αβγδε κόσμε 😀 ".as_bytes()),
    // Sequences cut short in the filler keep the decoding scan on its
    // fault path.
    ("damaged", b"ok \xE2\x82 bad \xF0\x9F\x92 cut "),
];

fn bench_needle_at_end(c: &mut Criterion) {
    let needle = ScalarValue::from_char('\u{1D11E}');

    let mut group = c.benchmark_group("find_needle_at_end");
    group.measurement_time(Duration::from_secs(10));
    group.warm_up_time(Duration::from_secs(5));

    for &len in &[1_000usize, 100_000] {
        for &(texture, filler) in TEXTURES {
            let haystack = make_haystack(filler, len, Some('\u{1D11E}'));

            group.bench_with_input(
                BenchmarkId::new(format!("bytes_{texture}"), len),
                &len,
                |b, &_l| {
                    b.iter(|| {
                        let at = find_code_point(black_box(&haystack), needle);
                        black_box(at);
                    });
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("decode_{texture}"), len),
                &len,
                |b, &_l| {
                    b.iter(|| {
                        let at = find_code_point_by_decode(black_box(&haystack), needle);
                        black_box(at);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_needle_absent(c: &mut Criterion) {
    let needle = ScalarValue::from_char('\u{1D11E}');

    let mut group = c.benchmark_group("find_needle_absent");
    group.measurement_time(Duration::from_secs(10));
    group.warm_up_time(Duration::from_secs(5));

    for &len in &[1_000usize, 100_000] {
        for &(texture, filler) in TEXTURES {
            let haystack = make_haystack(filler, len, None);

            group.bench_with_input(
                BenchmarkId::new(format!("bytes_{texture}"), len),
                &len,
                |b, &_l| {
                    b.iter(|| {
                        let at = find_code_point(black_box(&haystack), needle);
                        black_box(at);
                    });
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("decode_{texture}"), len),
                &len,
                |b, &_l| {
                    b.iter(|| {
                        let at = find_code_point_by_decode(black_box(&haystack), needle);
                        black_box(at);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_needle_at_end, bench_needle_absent);

criterion_main!(benches);
