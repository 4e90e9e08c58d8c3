use argflags::{Arity, Parser};
use criterion::{criterion_group, criterion_main, Criterion};

macro_rules! create_parser {
    () => {{
        let mut parser = Parser::new();
        parser
            .set_program_name("argflags tests")
            .add_flag("-o", "--option", Arity::UpTo(1), "tests options")
            .add_flag("-f", "--flag", Arity::None, "tests flags")
            .add_flag("-F", "", Arity::None, "tests flags without alias")
            .add_flag("-O", "--long-option-2", Arity::UpTo(1), "tests long options")
            .add_flag("-m", "--multvals", Arity::UpTo(2), "tests multiple values")
            .add_flag("-M", "--multvalsmo", Arity::UpTo(2), "tests multiple values, multiple occurrences")
            .add_flag("-u", "--unbounded", Arity::Unbounded, "tests unbounded values")
            .add_flag("-x", "--minvals2", Arity::UpTo(3), "tests 3 max values");
        parser
    }};
}

pub fn build_complex(c: &mut Criterion) {
    c.bench_function("build_complex", |b| b.iter(|| create_parser!()));
}

pub fn parse_complex(c: &mut Criterion) {
    c.bench_function("parse_complex", |b| b.iter(|| create_parser!().parse(vec![""])));
}

pub fn parse_complex_with_flag(c: &mut Criterion) {
    c.bench_function("parse_complex_with_flag", |b| b.iter(|| create_parser!().parse(vec!["myprog", "-f"])));
}

pub fn parse_complex_with_opt(c: &mut Criterion) {
    c.bench_function("parse_complex_with_opt", |b| {
        b.iter(|| create_parser!().parse(vec!["myprog", "-o", "option1"]))
    });
}

pub fn parse_complex_with_pos(c: &mut Criterion) {
    c.bench_function("parse_complex_with_pos", |b| b.iter(|| create_parser!().parse(vec!["myprog", "arg1"])));
}

pub fn parse_complex1(c: &mut Criterion) {
    c.bench_function("parse_complex1", |b| {
        b.iter(|| {
            create_parser!().parse(vec![
                "myprog",
                "-o",
                "option1",
                "-f",
                "-m",
                "val1",
                "val2",
                "-M",
                "val3",
                "--multvalsmo",
                "val4",
                "-x",
                "1",
                "2",
                "3",
                "pos1",
            ])
        })
    });
}

pub fn parse_complex2(c: &mut Criterion) {
    c.bench_function("parse_complex2", |b| {
        b.iter(|| {
            create_parser!().parse(vec![
                "myprog",
                "arg1",
                "-F",
                "arg2",
                "--long-option-2",
                "some",
                "-u",
                "a",
                "b",
                "c",
                "d",
                "e",
                "f",
                "g",
                "-M",
                "val1",
                "val2",
            ])
        })
    });
}

pub fn parse_complex_owned(c: &mut Criterion) {
    let args: Vec<String> = (0..64).map(|i| if i % 8 == 0 { "-u".to_string() } else { i.to_string() }).collect();
    c.bench_function("parse_complex_owned", |b| b.iter(|| create_parser!().parse(args.iter())));
}

criterion_group!(
    benches,
    build_complex,
    parse_complex,
    parse_complex_with_flag,
    parse_complex_with_opt,
    parse_complex_with_pos,
    parse_complex1,
    parse_complex2,
    parse_complex_owned
);

criterion_main!(benches);
