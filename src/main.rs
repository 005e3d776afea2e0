use std::io::Write;

use anyhow::{Context, bail};
use squaremaze::{
    config::Config,
    generators::{get_rng, make_maze},
    logging,
    render::Canvas,
    solvers::solve_maze,
};

/// Reads one line from stdin after printing `prompt`.
fn ask(prompt: &str, input: &mut String) -> anyhow::Result<()> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    input.clear();
    std::io::stdin()
        .read_line(input)
        .context("failed to read from stdin")?;
    Ok(())
}

/// Parses `width height`. Each dimension is read as a `u8`, capping mazes at 255x255.
fn parse_dimensions(input: &str) -> anyhow::Result<(usize, usize)> {
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u8>().ok())
        .collect::<Vec<_>>();
    let &[width, height] = dims.as_slice() else {
        bail!("please enter two numbers between 1 and 255 for width and height");
    };
    if width == 0 || height == 0 {
        bail!("width and height must be at least 1");
    }
    Ok((width as usize, height as usize))
}

/// Parses the entrance column, defaulting to 0 on an empty line.
fn parse_entrance(input: &str, width: usize) -> anyhow::Result<usize> {
    let entrance = match input.trim() {
        "" => 0,
        s => s
            .parse::<usize>()
            .with_context(|| format!("invalid entrance column {:?}", s))?,
    };
    if entrance >= width {
        bail!(
            "entrance column {} is outside a maze of width {}",
            entrance,
            width
        );
    }
    Ok(entrance)
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    let _guard = logging::init(&config)?;

    let mut input = String::new();
    ask("Enter maze dimensions (width height): ", &mut input)?;

    let (width, height) = parse_dimensions(&input)?;

    ask(
        &format!("Enter entrance column (0-{}) [0]: ", width - 1),
        &mut input,
    )?;
    let entrance = parse_entrance(&input, width)?;

    let mut rng = get_rng(config.seed);
    let maze = make_maze(width, height, &mut rng).context("failed to generate maze")?;
    tracing::info!(
        "[main] generated {}x{} maze (seed: {:?})",
        width,
        height,
        config.seed
    );

    let solution = solve_maze(&maze, entrance).context("failed to solve maze")?;
    let mut canvas = Canvas::draw(&maze, entrance)?;
    canvas.draw_solution(&solution);

    let mut stdout = std::io::stdout();
    canvas.print(&mut stdout, config.color)?;
    println!(
        "Solved: {} steps from column {} to exit column {}.",
        solution.len(),
        solution.start.0,
        solution.exit.0
    );
    tracing::info!("[main] solution has {} steps", solution.len());
    Ok(())
}
