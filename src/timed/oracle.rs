//! Periodic obstacle lookup.
//!
//! The search consumes occupancy through the [`ObstacleOracle`] trait; the
//! default implementation is [`SnapshotTable`], an eager precomputation of
//! every round in one full cycle. For larger grids an implementer may
//! instead answer `is_open` from closed-form per-obstacle positions; both
//! satisfy the same contract.

use super::types::{cycle_len, Cell};

/// Time-varying obstacle lookup by step index.
///
/// Implementations must be pure, deterministic functions of
/// `step % cycle_len()`.
pub trait ObstacleOracle {
    /// Number of steps after which the obstacle configuration repeats
    fn cycle_len(&self) -> usize;

    /// Whether the traveller may occupy `cell` at `step`. Walls and
    /// out-of-bounds cells are never open.
    fn is_open(&self, cell: Cell, step: usize) -> bool;
}

/// Direction a moving obstacle travels, one cell per step. `Down` grows
/// `y` (screen direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

/// A moving obstacle. When it steps off the interior it wraps to the
/// opposite interior edge, so its motion has period equal to the interior
/// dimension along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub cell: Cell,
    pub heading: Heading,
}

impl Obstacle {
    pub const fn new(x: usize, y: usize, heading: Heading) -> Self {
        Obstacle {
            cell: Cell::new(x, y),
            heading,
        }
    }
}

/// Static geometry of the bounded grid: dimensions plus wall cells.
///
/// The wall ring may have gaps (the entry and exit cells sit in the top
/// and bottom wall rows). The interior is the `(width-2) x (height-2)`
/// region obstacles move in.
#[derive(Debug, Clone)]
pub struct GridTemplate {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl GridTemplate {
    /// An all-open template. `width` and `height` include the wall ring
    /// and must both be at least 3 so the interior is non-empty.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 3 && height >= 3,
            "grid template needs a non-empty interior: got {}x{}, minimum is 3x3",
            width,
            height
        );
        GridTemplate {
            width,
            height,
            walls: vec![false; width * height],
        }
    }

    /// A template with a closed wall ring except for the given gap cells
    pub fn bordered(width: usize, height: usize, gaps: &[Cell]) -> Self {
        let mut template = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                    template.walls[y * width + x] = true;
                }
            }
        }
        for gap in gaps {
            template.walls[gap.y * width + gap.x] = false;
        }
        template
    }

    pub fn set_wall(&mut self, cell: Cell) {
        self.walls[cell.y * self.width + cell.x] = true;
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        cell.x >= self.width || cell.y >= self.height || self.walls[cell.y * self.width + cell.x]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn interior_width(&self) -> usize {
        self.width - 2
    }

    pub fn interior_height(&self) -> usize {
        self.height - 2
    }

    pub fn cycle_len(&self) -> usize {
        cycle_len(self.interior_width(), self.interior_height())
    }
}

/// Advance an obstacle one step, wrapping within the interior bounds.
/// Wrap is by interior coordinates, not wall lookup, so gaps in the wall
/// ring never bend an obstacle's track.
fn step_obstacle(obstacle: Obstacle, template: &GridTemplate) -> Obstacle {
    let Cell { x, y } = obstacle.cell;
    let cell = match obstacle.heading {
        Heading::Right => {
            let nx = if x + 1 > template.width() - 2 { 1 } else { x + 1 };
            Cell::new(nx, y)
        }
        Heading::Left => {
            let nx = if x <= 1 { template.width() - 2 } else { x - 1 };
            Cell::new(nx, y)
        }
        Heading::Down => {
            let ny = if y + 1 > template.height() - 2 { 1 } else { y + 1 };
            Cell::new(x, ny)
        }
        Heading::Up => {
            let ny = if y <= 1 { template.height() - 2 } else { y - 1 };
            Cell::new(x, ny)
        }
    };
    Obstacle {
        cell,
        heading: obstacle.heading,
    }
}

/// Eagerly precomputed per-step occupancy for every step in
/// `[0, cycle_len)`. Round 0 is the initial obstacle configuration;
/// `round(t)` and `round(t + k * cycle_len)` are identical for all k.
#[derive(Debug, Clone)]
pub struct SnapshotTable {
    width: usize,
    height: usize,
    cycle: usize,
    walls: Vec<bool>,
    occupied: Vec<bool>,
}

impl SnapshotTable {
    /// Simulate every obstacle through one full cycle and record each
    /// round's occupancy. How many obstacles share a cell is irrelevant;
    /// the cell is simply closed.
    pub fn generate(template: &GridTemplate, obstacles: &[Obstacle]) -> Self {
        let width = template.width();
        let height = template.height();
        let cycle = template.cycle_len();
        let area = width * height;

        let mut walls = vec![false; area];
        for y in 0..height {
            for x in 0..width {
                walls[y * width + x] = template.is_wall(Cell::new(x, y));
            }
        }

        let mut occupied = vec![false; cycle * area];
        let mut current: Vec<Obstacle> = obstacles.to_vec();
        for round in 0..cycle {
            if round > 0 {
                for obstacle in &mut current {
                    *obstacle = step_obstacle(*obstacle, template);
                }
            }
            for obstacle in &current {
                occupied[round * area + obstacle.cell.y * width + obstacle.cell.x] = true;
            }
        }

        SnapshotTable {
            width,
            height,
            cycle,
            walls,
            occupied,
        }
    }

    /// Obstacle occupancy for one round, row-major `width * height`
    pub fn round(&self, step: usize) -> &[bool] {
        let area = self.width * self.height;
        let offset = (step % self.cycle) * area;
        &self.occupied[offset..offset + area]
    }
}

impl ObstacleOracle for SnapshotTable {
    fn cycle_len(&self) -> usize {
        self.cycle
    }

    fn is_open(&self, cell: Cell, step: usize) -> bool {
        if cell.x >= self.width || cell.y >= self.height {
            return false;
        }
        let index = cell.y * self.width + cell.x;
        !self.walls[index] && !self.round(step)[index]
    }
}
