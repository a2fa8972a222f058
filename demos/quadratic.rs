use annealing::{LogLevel, RandomNumberGenerator, Result, ScalarAnnealer};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let annealer = ScalarAnnealer::new(1000.0, 0.01, 10_000)?
        .with_log_level(LogLevel::Minimal);
    let mut rng = RandomNumberGenerator::new();

    let solution = annealer.solve(|x: &f64| x * x, 20.0, &mut rng)?;

    println!("Approximate solution: {}", solution);
    println!(
        "Objective function value at this solution: {}",
        solution * solution
    );
    Ok(())
}
