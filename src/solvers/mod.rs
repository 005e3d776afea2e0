mod bfs;

pub use bfs::BfsTree;

use crate::{
    error::{MazeError, Result},
    maze::{Direction, Maze},
};

/// The chosen way out of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Entrance cell, in the top row
    pub start: (usize, usize),
    /// Exit cell, in the bottom row
    pub exit: (usize, usize),
    /// Moves leading from `start` to `exit`
    pub directions: Vec<Direction>,
}

impl Solution {
    /// Number of steps, equal to the BFS distance of the exit.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Cells visited along the path, starting with `start` and ending with `exit`.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(self.len() + 1);
        let mut current = self.start;
        cells.push(current);
        for &direction in &self.directions {
            let (dx, dy) = direction.delta();
            current = (
                current.0.wrapping_add_signed(dx),
                current.1.wrapping_add_signed(dy),
            );
            cells.push(current);
        }
        cells
    }
}

/// Solves `maze` from the top-row cell in column `start_x`.
///
/// The exit is the bottom-row cell with the greatest BFS distance from the entrance, the
/// leftmost one on a tie. The maze must be connected, which every generated maze is.
pub fn solve_maze(maze: &Maze, start_x: usize) -> Result<Solution> {
    let Some(start) = maze.index_of(start_x, 0) else {
        return Err(MazeError::BrokenPrecondition(format!(
            "entrance column {} is outside a maze of width {}",
            start_x,
            maze.width()
        )));
    };

    let tree = BfsTree::search(maze, start)?;
    if !tree.is_spanning() {
        return Err(MazeError::BrokenPrecondition(format!(
            "only {} of {} cells are reachable from the entrance; was the maze generated?",
            tree.reached(),
            maze.cell_count()
        )));
    }

    let exit = tree.farthest_in_bottom_row().ok_or_else(|| {
        MazeError::BrokenPrecondition("no bottom-row cell is reachable".to_string())
    })?;
    let directions = tree.path_to(exit)?;
    tracing::debug!(
        "[bfs] entrance {} -> exit {} in {} steps",
        start,
        exit,
        directions.len()
    );

    Ok(Solution {
        start: (start_x, 0),
        exit: maze.coord_of(exit)?,
        directions,
    })
}

impl Maze {
    /// Directions from the entrance at column `start_x` of the top row to the farthest exit.
    pub fn solve(&self, start_x: usize) -> Result<Vec<Direction>> {
        solve_maze(self, start_x).map(|solution| solution.directions)
    }
}
