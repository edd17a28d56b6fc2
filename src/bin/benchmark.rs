//! Step throughput benchmark for the double-buffered engine

use std::time::Instant;

use rand::Rng;
use torus_life::GridEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build a running engine with roughly 30% of cells alive
fn random_engine(size: usize) -> Result<GridEngine, torus_life::GridError> {
    let mut rng = rand::rng();
    let mut engine = GridEngine::new(size, size)?;
    for y in 0..size {
        for x in 0..size {
            if rng.random_bool(0.3) {
                engine.set_cell(x, y)?;
            }
        }
    }
    engine.toggle_pause();
    Ok(engine)
}

fn benchmark_step(engine: &mut GridEngine, iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<(), torus_life::GridError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Toroidal Life Step Benchmark ===\n");
    println!("{:>12} {:>12} {:>16} {:>12}", "Size", "ms/gen", "Mcells/sec", "Population");
    println!("{:-<56}", "");

    let iterations = 20;

    for size in [64, 128, 256, 512, 1024, 2048] {
        let mut engine = random_engine(size)?;
        let ms = benchmark_step(&mut engine, iterations);
        let cells = (size * size) as f64;

        println!(
            "{:>12} {:>12.3} {:>16.1} {:>12}",
            format!("{size}x{size}"),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            engine.population(),
        );
        info!(size, generation = engine.generation(), "finished size");
    }

    Ok(())
}
