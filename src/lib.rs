//! Perfect maze generation and solving.
//!
//! A maze is carved with randomized Kruskal's algorithm over [`dsets::DisjointSets`], which
//! leaves exactly one path between any two cells. It is then solved from an entrance in the top
//! row to the bottom-row cell that lies farthest away.
//!
//! ```
//! use squaremaze::{generators::make_maze_seeded, maze::Direction};
//!
//! let maze = make_maze_seeded(2, 1, Some(0)).unwrap();
//! assert_eq!(maze.solve(0).unwrap(), vec![Direction::Right]);
//! ```

pub mod config;
pub mod dsets;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::{MazeError, Result};
