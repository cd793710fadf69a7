use criterion::*;
use curv_rs::{records::Record, symbols::Symbol, value::Value};

fn wide_record(n: i32) -> Record {
    (0..n)
        .map(|i| (Symbol::intern(&format!("f{i}")), Value::from(i)))
        .collect()
}

fn print_benchmark(c: &mut Criterion) {
    let rec = wide_record(1000);
    c.bench_function("print 1000 fields", |b| b.iter(|| black_box(&rec).to_string()));
}

fn equals_benchmark(c: &mut Criterion) {
    let lhs = wide_record(1000);
    let rhs = lhs.clone();
    c.bench_function("equals 1000 fields", |b| {
        b.iter(|| black_box(&lhs).equals(black_box(&rhs)))
    });
}

criterion_group!(benches, print_benchmark, equals_benchmark);
criterion_main!(benches);
