mod tile;

use std::{fmt, io::Write};

use crossterm::{queue, style};

pub use tile::Tile;

use crate::{
    error::{MazeError, Result},
    maze::{Direction, Maze},
    solvers::{Solution, solve_maze},
};

/// A drawing of a maze on a `(2 * width + 1) x (2 * height + 1)` lattice.
///
/// Cell `(x, y)` sits at `(2x + 1, 2y + 1)`; the slots between cells hold their shared wall and
/// the even/even positions are always wall corners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    tiles: Box<[Tile]>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Draws the walls of `maze`, with a gap in the top border above column `entrance_x`.
    pub fn draw(maze: &Maze, entrance_x: usize) -> Result<Self> {
        if entrance_x >= maze.width() {
            return Err(MazeError::BrokenPrecondition(format!(
                "entrance column {} is outside a maze of width {}",
                entrance_x,
                maze.width()
            )));
        }

        let width = maze.width() * 2 + 1;
        let height = maze.height() * 2 + 1;
        let mut canvas = Canvas {
            tiles: vec![Tile::Wall; width * height].into_boxed_slice(),
            width,
            height,
        };

        for y in 0..maze.height() {
            for x in 0..maze.width() {
                canvas.set(Canvas::cell_coord((x, y)), Tile::Empty);
                if maze.can_travel(x, y, Direction::Right) {
                    canvas.set((2 * x + 2, 2 * y + 1), Tile::Empty);
                }
                if maze.can_travel(x, y, Direction::Down) {
                    canvas.set((2 * x + 1, 2 * y + 2), Tile::Empty);
                }
            }
        }
        canvas.set((2 * entrance_x + 1, 0), Tile::Empty);
        Ok(canvas)
    }

    /// Draws `maze` entered at `entrance_x` together with its solution and an opening below the
    /// exit cell. The maze itself is left untouched.
    pub fn draw_with_solution(maze: &Maze, entrance_x: usize) -> Result<Self> {
        let mut canvas = Canvas::draw(maze, entrance_x)?;
        let solution = solve_maze(maze, entrance_x)?;
        canvas.draw_solution(&solution);
        Ok(canvas)
    }

    /// Marks the route of `solution` and opens the bottom border below its exit.
    pub fn draw_solution(&mut self, solution: &Solution) {
        let cells = solution.cells();
        for pair in cells.windows(2) {
            let (a, b) = (Canvas::cell_coord(pair[0]), Canvas::cell_coord(pair[1]));
            self.set(((a.0 + b.0) / 2, (a.1 + b.1) / 2), Tile::Route);
            self.set(b, Tile::Route);
        }
        self.set(Canvas::cell_coord(solution.start), Tile::Start);
        self.set(Canvas::cell_coord(solution.exit), Tile::Goal);
        let (ex, _) = Canvas::cell_coord(solution.exit);
        self.set((ex, self.height - 1), Tile::Route);
    }

    fn cell_coord((x, y): (usize, usize)) -> (usize, usize) {
        (2 * x + 1, 2 * y + 1)
    }

    fn set(&mut self, (x, y): (usize, usize), tile: Tile) {
        if x < self.width && y < self.height {
            self.tiles[y * self.width + x] = tile;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        (x < self.width && y < self.height).then(|| self.tiles[y * self.width + x])
    }

    fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }

    /// ASCII rendering, one character per tile and a newline after every row.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|tile| tile.plain()));
            out.push('\n');
        }
        out
    }

    /// Writes the canvas to a terminal, styled or as plain ASCII.
    pub fn print<W: Write>(&self, out: &mut W, color: bool) -> std::io::Result<()> {
        if color {
            for row in self.rows() {
                for tile in row {
                    queue!(out, style::Print(tile))?;
                }
                queue!(out, style::Print("\n"))?;
            }
        } else {
            queue!(out, style::Print(self.to_plain_string()))?;
        }
        out.flush()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Maze {
        // (0,0) - (1,0)
        //           |
        // (0,1) - (1,1)
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set_wall(0, 0, Direction::Right, false);
        maze.set_wall(1, 0, Direction::Down, false);
        maze.set_wall(0, 1, Direction::Right, false);
        maze
    }

    #[test]
    fn test_draw() {
        let canvas = Canvas::draw(&two_by_two(), 0).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (5, 5));
        let expected = "\
# ###
#   #
### #
#   #
#####
";
        assert_eq!(canvas.to_plain_string(), expected);
    }

    #[test]
    fn test_draw_with_solution() {
        let maze = two_by_two();
        let canvas = Canvas::draw_with_solution(&maze, 0).unwrap();
        let expected = "\
# ###
#S**#
###*#
#E**#
#*###
";
        assert_eq!(canvas.to_plain_string(), expected);
        // The exit opening is only drawn, never carved into the maze
        assert_eq!(maze, two_by_two());
    }

    #[test]
    fn test_entrance_out_of_range() {
        let maze = two_by_two();
        assert!(Canvas::draw(&maze, 2).is_err());
        assert!(Canvas::draw_with_solution(&maze, 2).is_err());
    }

    #[test]
    fn test_print_plain() {
        let canvas = Canvas::draw(&two_by_two(), 1).unwrap();
        let mut out = Vec::new();
        canvas.print(&mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), canvas.to_plain_string());
        assert_eq!(canvas.get(3, 0), Some(Tile::Empty));
        assert_eq!(canvas.get(1, 0), Some(Tile::Wall));
        assert_eq!(canvas.get(5, 0), None);
    }

    #[test]
    fn test_display_rows() {
        let canvas = Canvas::draw(&Maze::new(1, 1).unwrap(), 0).unwrap();
        assert_eq!(canvas.to_string().lines().count(), 3);
    }
}
