//! Shared collaborators for integration tests.
//!
//! The core is parse-free by design: these helpers play the collaborator
//! role, turning textual puzzle input into an arena implementing
//! `Neighborhood` and into an obstacle table implementing
//! `ObstacleOracle`.

use wayfind::graph::{Neighborhood, NodeId};
use wayfind::timed::{Cell, GridTemplate, Heading, Obstacle, SnapshotTable};

/// Elevation grid with hill-climbing adjacency: a move may rise at most
/// one level. With `reversed` the constraint flips, for searching from
/// the summit back down.
pub struct HillGrid {
    width: usize,
    heights: Vec<u8>,
    pub start: NodeId,
    pub summit: NodeId,
}

pub struct ClimbContext {
    pub reversed: bool,
}

impl HillGrid {
    #[allow(dead_code)]
    pub fn parse(input: &str) -> Self {
        let mut heights = Vec::new();
        let mut width = 0;
        let mut start = NodeId(0);
        let mut summit = NodeId(0);
        for (y, line) in input.trim().lines().enumerate() {
            width = line.len();
            for (x, ch) in line.chars().enumerate() {
                let id = NodeId(y * width + x);
                let height = match ch {
                    'S' => {
                        start = id;
                        b'a'
                    }
                    'E' => {
                        summit = id;
                        b'z'
                    }
                    other => other as u8,
                };
                heights.push(height);
            }
        }
        HillGrid {
            width,
            heights,
            start,
            summit,
        }
    }

    #[allow(dead_code)]
    pub fn height_of(&self, id: NodeId) -> u8 {
        self.heights[id.index()]
    }

    fn axis_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let x = id.index() % self.width;
        let y = id.index() / self.width;
        let rows = self.heights.len() / self.width;
        let mut out = Vec::with_capacity(4);
        if x > 0 {
            out.push(NodeId(id.index() - 1));
        }
        if x + 1 < self.width {
            out.push(NodeId(id.index() + 1));
        }
        if y > 0 {
            out.push(NodeId(id.index() - self.width));
        }
        if y + 1 < rows {
            out.push(NodeId(id.index() + self.width));
        }
        out
    }
}

impl Neighborhood for HillGrid {
    type Context = ClimbContext;

    fn node_count(&self) -> usize {
        self.heights.len()
    }

    fn neighbors(&self, id: NodeId, ctx: &ClimbContext) -> Vec<NodeId> {
        let from = self.heights[id.index()];
        self.axis_neighbors(id)
            .into_iter()
            .filter(|neighbor| {
                let to = self.heights[neighbor.index()];
                if ctx.reversed {
                    from <= to + 1
                } else {
                    to <= from + 1
                }
            })
            .collect()
    }
}

/// Parse a storm basin map (`#` wall, `.` open, `<>^v` moving obstacle)
/// into a snapshot table plus the entry and exit cells in the wall rows.
#[allow(dead_code)]
pub fn parse_basin(input: &str) -> (SnapshotTable, Cell, Cell) {
    let rows: Vec<&str> = input.trim().lines().collect();
    let height = rows.len();
    let width = rows[0].len();
    let mut template = GridTemplate::new(width, height);
    let mut obstacles = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '#' => template.set_wall(Cell::new(x, y)),
                '.' => {}
                '>' => obstacles.push(Obstacle::new(x, y, Heading::Right)),
                '<' => obstacles.push(Obstacle::new(x, y, Heading::Left)),
                'v' => obstacles.push(Obstacle::new(x, y, Heading::Down)),
                '^' => obstacles.push(Obstacle::new(x, y, Heading::Up)),
                other => panic!("unexpected map character {:?}", other),
            }
        }
    }

    let gap = |row: &str, y: usize| {
        let x = row.find('.').expect("wall row has no gap");
        Cell::new(x, y)
    };
    let entry = gap(rows[0], 0);
    let exit = gap(rows[height - 1], height - 1);

    (SnapshotTable::generate(&template, &obstacles), entry, exit)
}
