use crate::{
    dsets::DisjointSets,
    error::{MazeError, Result},
    maze::{Direction, Maze},
};
use rand::{Rng, seq::SliceRandom};

/// Wall edge between two adjacent cells, by linear index.
/// `cell2` is the neighbor of `cell1` in `direction`, which is always right or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub cell1: usize,
    pub cell2: usize,
    pub direction: Direction,
}

/// All interior walls of `maze`: the right and the down wall of every cell that has such a
/// neighbor. There are `2 * width * height - width - height` of them.
pub fn candidate_edges(maze: &Maze) -> Vec<Edge> {
    let width = maze.width();
    let height = maze.height();
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            let cell = y * width + x;
            [
                (x + 1 < width).then_some(Edge {
                    cell1: cell,
                    cell2: cell + 1,
                    direction: Direction::Right,
                }),
                (y + 1 < height).then_some(Edge {
                    cell1: cell,
                    cell2: cell + width,
                    direction: Direction::Down,
                }),
            ]
        })
        .flatten()
        .collect()
}

/// Carves a perfect maze with randomized Kruskal's algorithm.
///
/// All walls are restored first, then the candidate walls are shuffled with `rng` and each one is
/// removed only if the two cells it separates are not yet connected. Returns the number of
/// removed walls, which is always `width * height - 1`.
pub fn randomized_kruskal<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> Result<usize> {
    let width = maze.width();
    let height = maze.height();
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimension { width, height });
    }

    maze.fill_walls();

    // Initialize disjoint sets for all cells
    let mut dsets = DisjointSets::with_elements(maze.cell_count());

    // Collect all possible edges and shuffle them randomly
    let mut edges = candidate_edges(maze);
    edges.shuffle(rng);
    tracing::debug!(
        "[kruskal] carving {}x{} maze from {} candidate walls",
        width,
        height,
        edges.len()
    );

    let mut removed = 0;
    for Edge {
        cell1,
        cell2,
        direction,
    } in edges
    {
        // If cells are not yet connected, remove the wall between them
        if dsets.find(cell1)? == dsets.find(cell2)? {
            continue;
        }
        let (x, y) = maze.coord_of(cell1)?;
        maze.set_wall(x, y, direction, false);
        dsets.union(cell1, cell2)?;
        removed += 1;
        tracing::trace!("[kruskal] removed {} wall of ({}, {})", direction, x, y);
    }

    debug_assert_eq!(dsets.set_count(), 1);
    tracing::debug!("[kruskal] removed {} walls", removed);
    Ok(removed)
}
