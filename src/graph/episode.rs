//! Per-episode traversal state.
//!
//! One `Episode` records everything a single search invocation discovers:
//! visited flags and predecessor back-links, indexed by `NodeId`. Keeping
//! this outside the nodes means the arena stays immutable during a search,
//! and concurrent episodes over the same arena just construct one
//! `Episode` each. Reusing an episode for a new search without calling
//! [`Episode::reset`] first is a usage error.

use super::types::{NodeId, PathTrace};

#[derive(Debug, Clone)]
pub struct Episode {
    visited: Vec<bool>,
    predecessor: Vec<Option<NodeId>>,
}

impl Episode {
    pub fn new(node_count: usize) -> Self {
        Episode {
            visited: vec![false; node_count],
            predecessor: vec![None; node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited[id.index()]
    }

    pub(crate) fn mark_visited(&mut self, id: NodeId) {
        self.visited[id.index()] = true;
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessor[id.index()]
    }

    /// Record the back-link for a freshly discovered node. First write
    /// wins: a back-link, once set, is never overwritten until `reset`.
    pub(crate) fn set_predecessor(&mut self, id: NodeId, pred: NodeId) {
        let slot = &mut self.predecessor[id.index()];
        if slot.is_none() {
            *slot = Some(pred);
        }
    }

    /// Hop count from `id` back to the episode's start (the first node in
    /// the chain with no predecessor). Iterative, so the walk is bounded
    /// by the graph diameter rather than the call stack.
    pub fn distance_to_start(&self, id: NodeId) -> usize {
        let mut hops = 0;
        let mut current = id;
        while let Some(pred) = self.predecessor[current.index()] {
            hops += 1;
            current = pred;
        }
        hops
    }

    /// Nodes along the back-link chain from the start to `id`, start first
    pub fn path_to_start(&self, id: NodeId) -> Vec<NodeId> {
        let mut nodes = vec![id];
        let mut current = id;
        while let Some(pred) = self.predecessor[current.index()] {
            nodes.push(pred);
            current = pred;
        }
        nodes.reverse();
        nodes
    }

    /// Serializable summary of the shortest path found to `target`
    pub fn trace(&self, target: NodeId) -> PathTrace {
        let nodes = self.path_to_start(target);
        PathTrace {
            target,
            distance: nodes.len() - 1,
            nodes,
        }
    }

    /// Clear all traversal state so the episode can be reused. Idempotent.
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.predecessor.fill(None);
    }
}
