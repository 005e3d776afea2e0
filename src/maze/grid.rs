use super::cell::Walls;

/// Flat row-major storage of one wall mask per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Walls]>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Allocates `width * height` masks. Callers check that the product does not overflow.
    pub fn new(width: usize, height: usize, walls: Walls) -> Self {
        let data = vec![walls; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn unravel_index(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    pub fn get(&self, index: usize) -> Option<Walls> {
        self.data.get(index).copied()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Walls> {
        self.data.get_mut(index)
    }

    pub fn fill(&mut self, walls: Walls) {
        self.data.fill(walls);
    }

    pub fn iter(&self) -> impl Iterator<Item = Walls> + '_ {
        self.data.iter().copied()
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = Walls;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
