use crossterm::style::{Color, Stylize};

use std::fmt;

/// One square of a rendered maze: a cell, a wall slot between cells, or a lattice corner.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Wall,
    Empty,
    /// Part of the solution route
    Route,
    /// The entrance cell
    Start,
    /// The exit cell
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: usize = 2;

    /// Single-character ASCII form, for logs and plain terminals.
    pub const fn plain(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Empty => ' ',
            Tile::Route => '*',
            Tile::Start => 'S',
            Tile::Goal => 'E',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Route => "🟨".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
