use std::fmt;

/// One of the four moves between adjacent cells.
///
/// The discriminants are part of the public encoding: RIGHT=0, DOWN=1, LEFT=2, UP=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    /// All directions in encoding order. The solver explores neighbors in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Unit step `(dx, dy)` of this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// The direction whose delta is `(dx, dy)`, if it is a unit step.
    pub const fn from_delta(dx: isize, dy: isize) -> Option<Direction> {
        match (dx, dy) {
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (0, -1) => Some(Direction::Up),
            _ => None,
        }
    }

    /// Applies this step to `(x, y)`, returning `None` when the result leaves a
    /// `width x height` grid.
    pub fn step(
        self,
        (x, y): (usize, usize),
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL.get(value as usize).copied().ok_or(value)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(dir as usize, i);
            assert_eq!(Direction::try_from(i as u8), Ok(dir));
        }
        assert_eq!(Direction::try_from(4), Err(4));
    }

    #[test]
    fn test_delta_roundtrip_and_opposite() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(dir));
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
        assert_eq!(Direction::from_delta(1, 1), None);
    }

    #[test]
    fn test_step_stays_in_bounds() {
        assert_eq!(Direction::Left.step((0, 0), 3, 3), None);
        assert_eq!(Direction::Up.step((2, 0), 3, 3), None);
        assert_eq!(Direction::Right.step((2, 1), 3, 3), None);
        assert_eq!(Direction::Down.step((1, 2), 3, 3), None);
        assert_eq!(Direction::Right.step((1, 1), 3, 3), Some((2, 1)));
        assert_eq!(Direction::Up.step((1, 1), 3, 3), Some((1, 0)));
    }
}
