//! The catalog of winning lines for one board size.

/// Zero-based board coordinate, `(row, col)`.
pub type Coord = (usize, usize);

/// One potential win condition: `n` coordinates forming a row, a column, or
/// a diagonal. Immutable once generated.
pub type Line = Vec<Coord>;

/// All winning lines for an n×n board: `n` rows, `n` columns, and the two
/// diagonals.
///
/// Built once per game and never mutated; win detection and the bot both
/// scan the catalog front to back and act on the first matching line, so the
/// generation order (rows, then columns, then main diagonal, then
/// anti-diagonal) is observable and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCatalog {
    size: usize,
    lines: Vec<Line>,
}

impl LineCatalog {
    /// Generates the `2n + 2` winning lines for side length `size`.
    pub fn generate(size: usize) -> Self {
        let mut lines: Vec<Line> = Vec::with_capacity(2 * size + 2);
        for i in 0..size {
            lines.push((0..size).map(|j| (i, j)).collect());
        }
        for i in 0..size {
            lines.push((0..size).map(|j| (j, i)).collect());
        }
        lines.push((0..size).map(|i| (i, i)).collect());
        lines.push((0..size).map(|i| (i, size - 1 - i)).collect());
        Self { size, lines }
    }

    /// Board side length this catalog was generated for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The lines in catalog order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape_for_every_size() {
        for size in 2..=9 {
            let catalog = LineCatalog::generate(size);
            assert_eq!(catalog.lines().len(), 2 * size + 2, "size {size}");
            for line in catalog.lines() {
                assert_eq!(line.len(), size, "size {size}");
                for &(row, col) in line {
                    assert!(row < size && col < size, "size {size}");
                }
            }
            let distinct: HashSet<&Line> = catalog.lines().iter().collect();
            assert_eq!(distinct.len(), catalog.lines().len(), "size {size}");
        }
    }

    #[test]
    fn test_catalog_order_rows_columns_diagonals() {
        let catalog = LineCatalog::generate(3);
        let lines = catalog.lines();
        assert_eq!(lines[0], vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(lines[2], vec![(2, 0), (2, 1), (2, 2)]);
        assert_eq!(lines[3], vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(lines[5], vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(lines[6], vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(lines[7], vec![(0, 2), (1, 1), (2, 0)]);
    }
}
