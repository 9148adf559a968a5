use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shardkey::{bit_reverse, Key32Encoder, Key64Encoder, KeyEncoder, Uuid, UuidEncoder};

fn bit_reverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit-reverse");

    let full_seed: u64 = 0x123456789ABCDEF;

    for bits in [8, 13, 16, 24, 32, 64] {
        let input = full_seed & (u64::MAX >> (64 - bits));

        group.bench_with_input(
            BenchmarkId::new(format!("benchmark {bits}-bits bit-reverse"), bits),
            &input,
            |b, i| b.iter(|| bit_reverse(*i, bits)),
        );
    }
}

fn encoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode-decode");

    for (offset, size) in [(8, 8), (11, 13), (0, 32)] {
        let enc32 = Key32Encoder::new(offset, size).unwrap();
        let enc64 = Key64Encoder::new(offset, size).unwrap();

        group.bench_with_input(
            BenchmarkId::new("u32 round-trip", format!("{offset}/{size}")),
            &0x1234_5678u32,
            |b, v| b.iter(|| enc32.decode(enc32.encode(black_box(*v)))),
        );
        group.bench_with_input(
            BenchmarkId::new("u64 round-trip", format!("{offset}/{size}")),
            &0x0123_4567_89AB_CDEFu64,
            |b, v| b.iter(|| enc64.decode(enc64.encode(black_box(*v)))),
        );
    }

    let u7 = Uuid::from_u128(0x018f_14e0_8f0a_7def_91b4_f0ec_b69f_5f01);
    for (name, enc) in [("uuid-v7", UuidEncoder::uuid_v7()), ("ulid", UuidEncoder::ulid())] {
        group.bench_with_input(BenchmarkId::new("uuid round-trip", name), &u7, |b, u| {
            b.iter(|| enc.decode(enc.encode(black_box(*u))))
        });
    }
}

criterion_group!(benches, bit_reverse_benchmark, encoder_benchmark);
criterion_main!(benches);
