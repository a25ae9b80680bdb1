use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use text_scan::{NumberParser, NumericKind, Radix};

/// Benchmark integer scanning across widths and radixes
fn bench_integer_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_scanning");

    let inputs = vec![
        ("dec_i32_short", "42", NumericKind::Int32, Radix::Decimal),
        ("dec_i32_max", "2147483647", NumericKind::Int32, Radix::Decimal),
        ("dec_i64_min", "-9223372036854775808", NumericKind::Int64, Radix::Decimal),
        ("dec_u64_padded", "   18446744073709551615   ", NumericKind::UInt64, Radix::Decimal),
        ("hex_u32_prefixed", "0xDEADBEEF", NumericKind::UInt32, Radix::Hex),
        ("hex_u64_bare", "ffffffffffffffff", NumericKind::UInt64, Radix::Hex),
        ("oct_u32", "37777777777", NumericKind::UInt32, Radix::Octal),
    ];

    for (name, input, kind, radix) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("scan_value", name), &input, |b, input| {
            b.iter(|| NumberParser::scan_value(black_box(input), kind, radix));
        });
    }

    group.finish();
}

/// Benchmark the failure paths, which must be as cheap as success
fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejections");

    let inputs = vec![
        ("blank", "        "),
        ("overflow", "99999999999999999999999"),
        ("trailing", "12345abc"),
        ("no_digits", "-"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("try_parse64", name), &input, |b, input| {
            b.iter(|| NumberParser::try_parse64(black_box(input)));
        });
    }

    group.finish();
}

/// Benchmark float and bool literals
fn bench_float_and_bool(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_and_bool");

    for input in ["1.5", "-2.2250738585072014e-308", "6.02214076e23"] {
        group.bench_with_input(BenchmarkId::new("scan_float", input), &input, |b, input| {
            b.iter(|| NumberParser::scan_float(black_box(input)));
        });
    }

    for input in ["true", "OFF", "  yes  ", "maybe"] {
        group.bench_with_input(BenchmarkId::new("scan_bool", input), &input, |b, input| {
            b.iter(|| NumberParser::scan_bool(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_integer_scanning,
    bench_rejections,
    bench_float_and_bool
);
criterion_main!(benches);
