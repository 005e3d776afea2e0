use crate::error::{MazeError, Result};

/// Up-tree disjoint sets over the elements `0..len()`.
///
/// Each slot stores either the parent index of a non-root element, or the negated size of the
/// tree when the element is a root. For example the slots
/// `[-1, -1, 4, 6, 7, -1, -2, -3]` describe the sets `{0}, {1}, {2, 4, 7}, {3, 6}, {5}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisjointSets {
    set: Vec<isize>,
}

impl DisjointSets {
    pub fn new() -> Self {
        DisjointSets { set: Vec::new() }
    }

    /// Creates `count` unconnected singleton sets.
    pub fn with_elements(count: usize) -> Self {
        let mut dsets = DisjointSets::new();
        dsets.add_elements(count);
        dsets
    }

    /// Appends `count` new singleton roots after the existing elements.
    pub fn add_elements(&mut self, count: usize) {
        self.set.extend(std::iter::repeat_n(-1, count));
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn check(&self, elem: usize) -> Result<()> {
        if elem < self.set.len() {
            Ok(())
        } else {
            Err(MazeError::OutOfRangeIndex {
                index: elem,
                len: self.set.len(),
            })
        }
    }

    /// Returns the root of the up-tree containing `elem`, compressing the path on the way.
    pub fn find(&mut self, elem: usize) -> Result<usize> {
        self.check(elem)?;

        let mut root = elem;
        while self.set[root] >= 0 {
            root = self.set[root] as usize;
        }

        // Second pass: point every node on the walked path straight at the root
        let mut current = elem;
        while current != root {
            let next = self.set[current] as usize;
            self.set[current] = root as isize;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `a` and `b` by size.
    ///
    /// The smaller tree is attached under the larger one. When both trees have the same size the
    /// tree containing `b` is attached under the tree containing `a`, so the root of `a` survives.
    ///
    /// Returns `false` if `a` and `b` were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;

        if root_a == root_b {
            return Ok(false);
        }

        // Sizes are stored negated, so the larger tree has the smaller value
        let merged = self.set[root_a] + self.set[root_b];
        if self.set[root_a] <= self.set[root_b] {
            self.set[root_a] = merged;
            self.set[root_b] = root_a as isize;
        } else {
            self.set[root_b] = merged;
            self.set[root_a] = root_b as isize;
        }
        Ok(true)
    }

    /// Number of elements in the set containing `elem`.
    pub fn size(&mut self, elem: usize) -> Result<usize> {
        let root = self.find(elem)?;
        Ok(self.set[root].unsigned_abs())
    }

    /// The raw slot for `elem`: its parent index, or the negated size if it is a root.
    ///
    /// No compression happens here, so `value(2)` in the example above is `4`, not `7`.
    pub fn value(&self, elem: usize) -> Result<isize> {
        self.check(elem)?;
        Ok(self.set[elem])
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.set.iter().filter(|&&v| v < 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_elements() {
        let mut dsets = DisjointSets::new();
        assert!(dsets.is_empty());
        dsets.add_elements(3);
        dsets.add_elements(0);
        dsets.add_elements(2);
        assert_eq!(dsets.len(), 5);
        assert_eq!(dsets.set_count(), 5);
        for i in 0..5 {
            assert_eq!(dsets.value(i), Ok(-1));
            assert_eq!(dsets.find(i), Ok(i));
            assert_eq!(dsets.size(i), Ok(1));
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut dsets = DisjointSets::with_elements(4);
        let err = MazeError::OutOfRangeIndex { index: 4, len: 4 };
        assert_eq!(dsets.find(4), Err(err.clone()));
        assert_eq!(dsets.union(0, 4), Err(err.clone()));
        assert_eq!(dsets.size(4), Err(err.clone()));
        assert_eq!(dsets.value(4), Err(err));
        // A failed union leaves the structure untouched
        assert_eq!(dsets.set_count(), 4);
    }

    #[test]
    fn test_equal_size_tie_keeps_first_root() {
        let mut dsets = DisjointSets::with_elements(4);
        assert_eq!(dsets.union(0, 1), Ok(true));
        assert_eq!(dsets.find(1), Ok(0));
        assert_eq!(dsets.union(3, 2), Ok(true));
        assert_eq!(dsets.find(2), Ok(3));
        // Two trees of size 2: the tree of the second argument goes under the first
        assert_eq!(dsets.union(2, 1), Ok(true));
        assert_eq!(dsets.find(0), Ok(3));
        assert_eq!(dsets.find(1), Ok(3));
        assert_eq!(dsets.value(3), Ok(-4));
    }

    #[test]
    fn test_smaller_goes_under_larger() {
        let mut dsets = DisjointSets::with_elements(5);
        dsets.union(1, 2).unwrap();
        dsets.union(1, 3).unwrap();
        // {0} is smaller than {1, 2, 3}, regardless of argument order
        dsets.union(0, 3).unwrap();
        assert_eq!(dsets.find(0), Ok(1));
        assert_eq!(dsets.size(0), Ok(4));
        assert_eq!(dsets.size(4), Ok(1));
        assert_eq!(dsets.set_count(), 2);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut dsets = DisjointSets::with_elements(3);
        assert_eq!(dsets.union(0, 1), Ok(true));
        let before = dsets.clone();
        assert_eq!(dsets.union(1, 0), Ok(false));
        assert_eq!(dsets, before);
        assert!(dsets.same_set(0, 1).unwrap());
        assert!(!dsets.same_set(0, 2).unwrap());
    }

    #[test]
    fn test_value_matches_layout() {
        // Build {0}, {1}, {2, 4, 7}, {3, 6}, {5}
        let mut dsets = DisjointSets::with_elements(8);
        dsets.union(7, 4).unwrap();
        dsets.union(6, 3).unwrap();
        dsets.union(7, 2).unwrap();
        assert_eq!(dsets.value(4), Ok(7));
        assert_eq!(dsets.value(2), Ok(7));
        assert_eq!(dsets.value(3), Ok(6));
        assert_eq!(dsets.value(6), Ok(-2));
        assert_eq!(dsets.value(7), Ok(-3));
        assert_eq!(dsets.value(0), Ok(-1));
    }

    #[test]
    fn test_find_compresses_path() {
        // Union by size never builds the chain 3 -> 2 -> 1 -> 0, so lay it out by hand
        let mut dsets = DisjointSets {
            set: vec![-4, 0, 1, 2],
        };
        assert_eq!(dsets.find(3), Ok(0));
        assert_eq!(dsets.value(3), Ok(0));
        assert_eq!(dsets.value(2), Ok(0));
        assert_eq!(dsets.value(1), Ok(0));
        assert_eq!(dsets.size(3), Ok(4));
    }
}
