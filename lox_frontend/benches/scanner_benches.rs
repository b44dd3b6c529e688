use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lox_frontend::{diagnostics::ErrorLog, scanner::Scanner};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

fn fixture_path<P: AsRef<Path>>(bench_path: P) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("fixture")
    .join(bench_path)
}

fn load_source<P: AsRef<Path>>(path: P) -> String {
  read_to_string(fixture_path(path)).expect("Unable to read fixture")
}

fn scan_source(source: &str) -> usize {
  let mut log = ErrorLog::default();
  let (tokens, _) = Scanner::new(source, &mut log).scan_tokens();
  tokens.len()
}

fn criterion_benchmark(c: &mut Criterion) {
  let binary_trees = load_source(PathBuf::from("criterion").join("binary_trees.lox"));
  let fib = load_source(PathBuf::from("criterion").join("fib.lox"));
  let zoo = load_source(PathBuf::from("criterion").join("zoo.lox"));
  let unicode = load_source(PathBuf::from("scan").join("unicode.lox")).repeat(64);

  c.bench_with_input(
    BenchmarkId::new("scan", "binary trees"),
    &binary_trees,
    |b, s| {
      b.iter(|| scan_source(s));
    },
  );
  c.bench_with_input(BenchmarkId::new("scan", "fib"), &fib, |b, s| {
    b.iter(|| scan_source(s));
  });
  c.bench_with_input(BenchmarkId::new("scan", "zoo"), &zoo, |b, s| {
    b.iter(|| scan_source(s));
  });
  c.bench_with_input(BenchmarkId::new("scan", "unicode"), &unicode, |b, s| {
    b.iter(|| scan_source(s));
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
