use serde::Serialize;

/// A cell of the bounded grid, in full-map coordinates (wall ring
/// included). `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Cell { x, y }
    }

    /// Manhattan distance to `other`: a lower bound on the moves needed to
    /// reach it when every move costs one step, which is what makes the
    /// best-first key admissible.
    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Vertex of the time-expanded graph: a position paired with the obstacle
/// phase. Two states are equal iff all three fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchState {
    pub x: usize,
    pub y: usize,
    /// `step % cycle_len` at the moment the cell is occupied
    pub phase: usize,
}

impl SearchState {
    pub fn new(cell: Cell, step: usize, cycle_len: usize) -> Self {
        SearchState {
            x: cell.x,
            y: cell.y,
            phase: step % cycle_len,
        }
    }

    pub fn cell(self) -> Cell {
        Cell::new(self.x, self.y)
    }
}

/// Period after which the obstacle configuration repeats exactly: two
/// independent axis-aligned wrap-around motions with periods equal to the
/// free dimensions recombine with the product period.
pub fn cycle_len(interior_width: usize, interior_height: usize) -> usize {
    interior_width * interior_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_is_symmetric() {
        let a = Cell::new(1, 0);
        let b = Cell::new(6, 5);
        assert_eq!(a.manhattan(b), 10);
        assert_eq!(b.manhattan(a), 10);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn test_state_equality_includes_phase() {
        let cycle = 24;
        let early = SearchState::new(Cell::new(3, 2), 5, cycle);
        let later = SearchState::new(Cell::new(3, 2), 5 + cycle, cycle);
        let other = SearchState::new(Cell::new(3, 2), 6, cycle);
        assert_eq!(early, later);
        assert_ne!(early, other);
    }

    #[test]
    fn test_cycle_len_is_interior_product() {
        assert_eq!(cycle_len(6, 4), 24);
        assert_eq!(cycle_len(1, 1), 1);
    }
}
