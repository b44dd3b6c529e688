use lox_frontend::diagnostics::ErrorLog;
use lox_frontend::scanner::Scanner;
use lox_frontend::MAX_SOURCE_LEN;
use std::env;
use std::fs::read_to_string;
use std::process;
use std::time::Instant;

const DEFAULT_ITERATIONS: usize = 100000;

fn scanner_bench(src: &str, iterations: usize) -> usize {
  let mut count = 0;

  for _ in 0..iterations {
    let mut log = ErrorLog::default();
    let (tokens, _) = Scanner::new(src, &mut log).scan_tokens();
    count += tokens.len();
  }

  count
}

fn main() {
  let args: Vec<String> = env::args().collect();
  let (file_path, iterations) = match args.as_slice() {
    [_, file_path] => (file_path, DEFAULT_ITERATIONS),
    [_, iterations, file_path] => match iterations.parse() {
      Ok(iterations) => (file_path, iterations),
      Err(_) => {
        eprintln!("Invalid iteration count {}", iterations);
        process::exit(1);
      },
    },
    _ => {
      println!("Usage: lox_frontend_bench [iterations] [path]");
      process::exit(1);
    },
  };

  let src = match read_to_string(file_path) {
    Ok(src) => src,
    Err(e) => {
      eprintln!("{}", e);
      process::exit(1);
    },
  };

  if src.len() > MAX_SOURCE_LEN {
    eprintln!("{} exceeds the limit of {} bytes", file_path, MAX_SOURCE_LEN);
    process::exit(1);
  }

  let now = Instant::now();
  let tokens = scanner_bench(&src, iterations);

  println!("{}", ((now.elapsed().as_micros() as f64) / 1000000.0));
  println!("{} tokens", tokens);
}
