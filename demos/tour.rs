use annealing::{route_length, LogLevel, RandomNumberGenerator, Result, RouteAnnealer, Waypoint};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut cities = vec![
        Waypoint::new(1, 0.0, 0.0),
        Waypoint::new(2, 1.0, 4.0),
        Waypoint::new(3, 3.0, 4.0),
        Waypoint::new(4, 6.0, 1.0),
        Waypoint::new(5, 4.0, 2.0),
    ];

    let mut rng = RandomNumberGenerator::new();
    for i in (1..cities.len()).rev() {
        let j = rng.index(0, i + 1);
        cities.swap(i, j);
    }

    let annealer = RouteAnnealer::new(1.0, 0.001, 10_000)?
        .with_log_level(LogLevel::Minimal);
    let solution = annealer.solve(route_length, cities, &mut rng)?;

    println!("Optimized path:");
    for city in &solution {
        println!("City {} ({}, {})", city.id, city.x, city.y);
    }
    println!("Total Distance: {}", route_length(&solution));
    Ok(())
}
