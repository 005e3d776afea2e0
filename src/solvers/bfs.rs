use std::collections::VecDeque;

use crate::{
    error::{MazeError, Result},
    maze::{Direction, Maze},
};

/// Distances and predecessors from a breadth-first search over open walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    start: usize,
    width: usize,
    /// Minimum number of steps from the start, `None` if unreached
    distance: Vec<Option<usize>>,
    /// The cell from which each cell was first discovered
    predecessor: Vec<Option<usize>>,
}

impl BfsTree {
    /// Runs the search from linear cell `start`, visiting neighbors in [`Direction::ALL`] order.
    pub fn search(maze: &Maze, start: usize) -> Result<Self> {
        let (sx, sy) = maze.coord_of(start)?;
        let width = maze.width();
        let mut distance = vec![None; maze.cell_count()];
        let mut predecessor = vec![None; maze.cell_count()];
        let mut queue = VecDeque::from([(sx, sy)]);
        distance[start] = Some(0);

        while let Some((x, y)) = queue.pop_front() {
            let current = y * width + x;
            let next_distance = distance[current].map(|d| d + 1);
            for direction in Direction::ALL {
                if !maze.can_travel(x, y, direction) {
                    continue;
                }
                let Some((nx, ny)) = maze.neighbor(x, y, direction) else {
                    continue;
                };
                let neighbor = ny * width + nx;
                if distance[neighbor].is_none() {
                    distance[neighbor] = next_distance;
                    predecessor[neighbor] = Some(current);
                    queue.push_back((nx, ny));
                }
            }
        }

        Ok(BfsTree {
            start,
            width,
            distance,
            predecessor,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn distance(&self, cell: usize) -> Option<usize> {
        self.distance.get(cell).copied().flatten()
    }

    pub fn predecessor(&self, cell: usize) -> Option<usize> {
        self.predecessor.get(cell).copied().flatten()
    }

    pub fn reached(&self) -> usize {
        self.distance.iter().filter(|d| d.is_some()).count()
    }

    /// Whether every cell was reached from the start.
    pub fn is_spanning(&self) -> bool {
        self.reached() == self.distance.len()
    }

    /// The reached cell of the bottom row farthest from the start; the leftmost one on a tie.
    pub fn farthest_in_bottom_row(&self) -> Option<usize> {
        let height = self.distance.len() / self.width;
        let row_start = (height - 1) * self.width;
        let mut best: Option<(usize, usize)> = None;
        for cell in row_start..row_start + self.width {
            let Some(d) = self.distance(cell) else {
                continue;
            };
            // Strictly greater keeps the smallest x among equal distances
            if best.is_none_or(|(_, best_d)| d > best_d) {
                best = Some((cell, d));
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// Walks predecessors back from `end` to the start and returns the forward directions.
    pub fn path_to(&self, end: usize) -> Result<Vec<Direction>> {
        let mut path = Vec::with_capacity(self.distance(end).unwrap_or(0));
        let mut current = end;
        while current != self.start {
            let pred = self.predecessor(current).ok_or_else(|| {
                MazeError::BrokenPrecondition(format!(
                    "cell {} has no path back to start cell {}",
                    current, self.start
                ))
            })?;
            let dx = (current % self.width) as isize - (pred % self.width) as isize;
            let dy = (current / self.width) as isize - (pred / self.width) as isize;
            let direction = Direction::from_delta(dx, dy).ok_or_else(|| {
                MazeError::BrokenPrecondition(format!(
                    "cells {} and {} are not adjacent",
                    pred, current
                ))
            })?;
            path.push(direction);
            current = pred;
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x2 maze where both bottom corners are two steps from the top middle:
    ///
    /// ```text
    /// (0,0) - (1,0) - (2,0)
    ///   |       |       |
    /// (0,1)   (1,1)   (2,1)
    /// ```
    fn forked_maze() -> Maze {
        let mut maze = Maze::new(3, 2).unwrap();
        maze.set_wall(0, 0, Direction::Right, false);
        maze.set_wall(1, 0, Direction::Right, false);
        maze.set_wall(0, 0, Direction::Down, false);
        maze.set_wall(1, 0, Direction::Down, false);
        maze.set_wall(2, 0, Direction::Down, false);
        maze
    }

    #[test]
    fn test_distances() {
        let tree = BfsTree::search(&forked_maze(), 1).unwrap();
        assert!(tree.is_spanning());
        let distances = (0..6).map(|c| tree.distance(c)).collect::<Vec<_>>();
        assert_eq!(
            distances,
            vec![Some(1), Some(0), Some(1), Some(2), Some(1), Some(2)]
        );
        assert_eq!(tree.predecessor(3), Some(0));
        assert_eq!(tree.predecessor(1), None);
    }

    #[test]
    fn test_farthest_prefers_leftmost() {
        let tree = BfsTree::search(&forked_maze(), 1).unwrap();
        assert_eq!(tree.farthest_in_bottom_row(), Some(3));
        assert_eq!(
            tree.path_to(3).unwrap(),
            vec![Direction::Left, Direction::Down]
        );
        assert_eq!(
            tree.path_to(5).unwrap(),
            vec![Direction::Right, Direction::Down]
        );
    }

    #[test]
    fn test_unreached_cells() {
        let maze = Maze::new(2, 2).unwrap();
        let tree = BfsTree::search(&maze, 0).unwrap();
        assert_eq!(tree.reached(), 1);
        assert!(!tree.is_spanning());
        assert_eq!(tree.farthest_in_bottom_row(), None);
        assert!(matches!(
            tree.path_to(3),
            Err(MazeError::BrokenPrecondition(_))
        ));
    }

    #[test]
    fn test_start_out_of_range() {
        let maze = Maze::new(2, 2).unwrap();
        assert_eq!(
            BfsTree::search(&maze, 4),
            Err(MazeError::OutOfRangeIndex { index: 4, len: 4 })
        );
    }
}
