use mazerun::{app::App, generators::Generator, solvers::AlgorithmKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = App {
        seed: Some(0),
        ..App::default()
    };

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let iterations = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);
    let algorithm = match args.next() {
        Some(key) => key.parse::<AlgorithmKind>()?,
        None => AlgorithmKind::AStarManhattan,
    };
    let total_ms = app.profile(255, 255, algorithm, Generator::Prim, iterations)?;
    println!("{}: {} runs, {:.3} ms solving", algorithm, iterations, total_ms);
    Ok(())
}
