pub mod cell;
pub mod direction;
mod grid;

pub use cell::Walls;
pub use direction::Direction;
use grid::Grid;

use crate::error::{MazeError, Result};

/// A rectangular maze of `width x height` cells.
///
/// Only the right and down wall of every cell are stored; the left wall of `(x, y)` is the right
/// wall of `(x - 1, y)` and the up wall is the down wall of `(x, y - 1)`. The outer boundary is
/// never opened through [`Maze::can_travel`], whatever the stored bits on the last column or row
/// say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a maze with every wall present.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width, height, Walls::ALL),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Linear index `y * width + x` of a cell, or `None` if it is out of bounds.
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        self.is_in_bounds(x, y).then(|| self.grid.ravel_index(x, y))
    }

    pub fn coord_of(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.cell_count() {
            return Err(MazeError::OutOfRangeIndex {
                index,
                len: self.cell_count(),
            });
        }
        Ok(self.grid.unravel_index(index))
    }

    /// The cell one step from `(x, y)` in `direction`, if both are inside the maze.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        direction.step((x, y), self.width(), self.height())
    }

    /// Raw wall mask of the cell at `(x, y)`.
    pub fn walls(&self, x: usize, y: usize) -> Result<Walls> {
        match self.index_of(x, y) {
            Some(index) => self.walls_at(index),
            None => Err(MazeError::OutOfRangeIndex {
                index: y.saturating_mul(self.width()).saturating_add(x),
                len: self.cell_count(),
            }),
        }
    }

    /// Raw wall mask of the cell at linear `index`.
    pub fn walls_at(&self, index: usize) -> Result<Walls> {
        self.grid.get(index).ok_or(MazeError::OutOfRangeIndex {
            index,
            len: self.cell_count(),
        })
    }

    /// Sets or clears the wall on the `direction` side of `(x, y)`.
    ///
    /// Left and up walls are written to the neighbor's right and down walls. Coordinates outside
    /// the maze, or a left/up wall on the first column/row, are ignored.
    pub fn set_wall(&mut self, x: usize, y: usize, direction: Direction, present: bool) {
        let (owner, bit) = match direction {
            Direction::Right => (Some((x, y)), Walls::RIGHT),
            Direction::Down => (Some((x, y)), Walls::DOWN),
            Direction::Left => (x.checked_sub(1).map(|px| (px, y)), Walls::RIGHT),
            Direction::Up => (y.checked_sub(1).map(|py| (x, py)), Walls::DOWN),
        };
        let Some(index) = owner.and_then(|(ox, oy)| self.index_of(ox, oy)) else {
            tracing::trace!("[maze] ignoring set_wall({x}, {y}, {direction}) outside the maze");
            return;
        };
        if let Some(walls) = self.grid.get_mut(index) {
            walls.set(bit, present);
        }
    }

    /// Whether a move from `(x, y)` in `direction` is legal: the destination is inside the maze
    /// and the wall between the two cells is absent.
    pub fn can_travel(&self, x: usize, y: usize, direction: Direction) -> bool {
        let Some((nx, ny)) = self.neighbor(x, y, direction) else {
            return false;
        };
        match direction {
            Direction::Right => !self.grid[(x, y)].right(),
            Direction::Down => !self.grid[(x, y)].down(),
            Direction::Left => !self.grid[(nx, ny)].right(),
            Direction::Up => !self.grid[(nx, ny)].down(),
        }
    }

    /// Restores every wall, including the ones on the boundary.
    pub fn fill_walls(&mut self) {
        self.grid.fill(Walls::ALL);
    }

    /// Number of interior walls that have been removed.
    pub fn open_passages(&self) -> usize {
        (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| (x, y)))
            .map(|(x, y)| {
                usize::from(self.can_travel(x, y, Direction::Right))
                    + usize::from(self.can_travel(x, y, Direction::Down))
            })
            .sum()
    }

    /// Iterates over the raw wall masks in row-major order.
    pub fn masks(&self) -> impl Iterator<Item = Walls> + '_ {
        self.grid.iter()
    }
}
