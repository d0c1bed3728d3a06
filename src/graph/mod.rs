pub mod bfs;
pub mod episode;
pub mod types;

pub use bfs::{find_all, find_first};
pub use episode::Episode;
pub use types::{BfsOptions, Neighborhood, NodeId, PathTrace};
