pub mod oracle;
pub mod search;
pub mod types;

pub use oracle::{GridTemplate, Heading, Obstacle, ObstacleOracle, SnapshotTable};
pub use search::{plan_legs, shortest_path, CrossingOptions, LegReport};
pub use types::{cycle_len, Cell, SearchState};
