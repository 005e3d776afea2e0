use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;

pub use kruskal::{Edge, candidate_edges, randomized_kruskal};

use crate::{error::Result, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Builds a new perfect maze of the given dimensions, drawing randomness from `rng`.
pub fn make_maze<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(width, height)?;
    randomized_kruskal(&mut maze, rng)?;
    Ok(maze)
}

/// Like [`make_maze`], with a seeded generator, or an OS-seeded one when `seed` is `None`.
pub fn make_maze_seeded(width: usize, height: usize, seed: Option<u64>) -> Result<Maze> {
    make_maze(width, height, &mut get_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn test_make_maze_rejects_degenerate_grid() {
        assert_eq!(
            make_maze_seeded(0, 4, Some(1)),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = make_maze_seeded(12, 9, Some(42)).unwrap();
        let b = make_maze_seeded(12, 9, Some(42)).unwrap();
        assert_eq!(a, b);
    }
}
