//! Generation-advance benchmark across grid sizes and pool widths

use std::time::Instant;
use life_engine::domain::{DoubleBuffer, StepScheduler};

fn benchmark_advance(scheduler: &StepScheduler, size: usize, iterations: u32) -> f64 {
    let mut buffer = DoubleBuffer::new(size);
    buffer.randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(err) = scheduler.advance_generation(&mut buffer) {
            eprintln!("advance failed at {size}x{size}: {err}");
            return f64::NAN;
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation Advance Benchmark ===\n");

    let sizes = [10, 100, 500, 1000, 2000];
    let widths = [1, 2, 4, 8];
    let iterations = 20;

    let schedulers: Vec<_> = widths
        .iter()
        .filter_map(|&threads| match StepScheduler::new(Some(threads)) {
            Ok(scheduler) => Some((threads, scheduler)),
            Err(err) => {
                eprintln!("skipping {threads} threads: {err}");
                None
            }
        })
        .collect();

    print!("{:>12}", "Size");
    for (threads, _) in &schedulers {
        print!(" {:>12}", format!("{threads} thr"));
    }
    println!();
    println!("{:-<70}", "");

    for size in sizes {
        print!("{:>12}", format!("{size}x{size}"));
        for (_, scheduler) in &schedulers {
            print!(" {:>9.3} ms", benchmark_advance(scheduler, size, iterations));
        }
        println!();
    }
}
