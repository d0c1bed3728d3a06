use serde::Serialize;

/// Index of a node in a collaborator-owned arena.
///
/// The collaborator (grid or graph) owns every node; searches hold only
/// these indices, and everything a search learns about a node lives in an
/// episode-scoped structure (see [`crate::graph::Episode`]), never in the
/// node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for providing graph adjacency
///
/// Implemented by the collaborator that owns the nodes. `Context` carries
/// caller-supplied search options that change adjacency semantics (e.g. a
/// reverse-climb-direction toggle in an elevation grid).
pub trait Neighborhood {
    type Context;

    /// Total number of nodes in the arena. Node ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Neighbors of `id` under `ctx`. Must be a pure function of the
    /// node's identity and the context; must not mutate global state.
    fn neighbors(&self, id: NodeId, ctx: &Self::Context) -> Vec<NodeId>;
}

/// Options for a BFS episode
#[derive(Debug, Clone, Default)]
pub struct BfsOptions {
    /// Ceiling on expanded nodes. Exceeding it fails the search with
    /// `Timeout`, distinct from exhausting the frontier.
    pub max_nodes: Option<usize>,
}

/// Serializable record of a reconstructed shortest path
#[derive(Debug, Clone, Serialize)]
pub struct PathTrace {
    pub target: NodeId,
    /// Hop count from the episode's start to `target`
    pub distance: usize,
    /// Nodes along the path, start first
    pub nodes: Vec<NodeId>,
}
