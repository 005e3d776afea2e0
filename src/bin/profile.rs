use std::time::Instant;

use squaremaze::{
    config::Config,
    generators::{get_rng, make_maze},
    logging,
    solvers::solve_maze,
};

const SIZE: usize = u8::MAX as usize;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _guard = logging::init(&config)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    let mut rng = get_rng(config.seed);
    for i in 0..num_iters {
        let started = Instant::now();
        let maze = make_maze(SIZE, SIZE, &mut rng)?;
        let generated = started.elapsed();
        let solution = solve_maze(&maze, 0)?;
        tracing::info!(
            "[profile] iteration {}: generate {:?}, solve {:?}, {} steps",
            i,
            generated,
            started.elapsed() - generated,
            solution.len()
        );
    }
    Ok(())
}
