use argflags::Parser;
use criterion::{criterion_group, criterion_main, Criterion};

pub fn build_empty(c: &mut Criterion) {
    c.bench_function("build_empty", |b| b.iter(Parser::new));
}

pub fn parse_empty(c: &mut Criterion) {
    c.bench_function("parse_empty", |b| {
        b.iter(|| Parser::new().parse(Vec::<String>::with_capacity(0)))
    });
}

criterion_group!(benches, build_empty, parse_empty);
criterion_main!(benches);
