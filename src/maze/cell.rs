/// The walls physically stored for one cell: its right wall and its down wall.
///
/// Packed into two bits, bit 0 for the right wall and bit 1 for the down wall. A set bit means
/// the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const RIGHT: u8 = 0x01;
    pub const DOWN: u8 = 0x02;

    pub const NONE: Walls = Walls(0);
    pub const ALL: Walls = Walls(Self::RIGHT | Self::DOWN);

    /// Builds a mask from raw bits; bits above the two wall bits are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Walls(bits & (Self::RIGHT | Self::DOWN))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn right(self) -> bool {
        self.0 & Self::RIGHT != 0
    }

    pub const fn down(self) -> bool {
        self.0 & Self::DOWN != 0
    }

    pub(crate) fn set(&mut self, bit: u8, present: bool) {
        if present {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        let mut walls = Walls::ALL;
        assert_eq!(walls.bits(), 0b11);
        walls.set(Walls::RIGHT, false);
        assert!(!walls.right());
        assert!(walls.down());
        assert_eq!(walls.bits(), Walls::DOWN);
        walls.set(Walls::DOWN, false);
        assert_eq!(walls, Walls::NONE);
        assert_eq!(Walls::from_bits(0xff), Walls::ALL);
    }
}
