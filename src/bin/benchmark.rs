//! Performance benchmark comparing the serial and parallel passes

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use torus_life::{Algorithm, EngineError, LifeRule, SimulationState};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> Result<f64, EngineError> {
    let mut state = SimulationState::new(size, size, LifeRule::CONWAY)?.with_algorithm(algorithm);
    state.seed_random(0.3, &mut StdRng::seed_from_u64(1))?;

    let start = Instant::now();
    for _ in 0..iterations {
        state.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2048;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
    Ok(())
}
