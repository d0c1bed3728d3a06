//! Breadth-first search engine.
//!
//! The frontier is a FIFO of discovered nodes; because every edge costs one
//! hop, frontier order equals increasing distance from the start, so the
//! first predicate match is a closest match. Lazy deletion: a node may be
//! enqueued more than once before it is dequeued, and stale entries are
//! skipped via the episode's visited flag at dequeue time.
//!
//! The predicate is evaluated on each discovered neighbor, not on dequeued
//! nodes, so the start node is only a target if the caller checks it
//! explicitly before invoking the search.

use std::collections::VecDeque;

use crate::error::{Result, WayfindError};

use super::episode::Episode;
use super::types::{BfsOptions, Neighborhood, NodeId};

/// Find the closest node satisfying `predicate`, searching out from
/// `start` under the adjacency semantics selected by `ctx`.
///
/// `episode` must be freshly constructed or `reset`; it retains the
/// back-links needed for `distance_to_start` / `path_to_start` afterwards.
#[tracing::instrument(skip_all, fields(start = %start))]
pub fn find_first<G, P>(
    graph: &G,
    start: NodeId,
    predicate: P,
    ctx: &G::Context,
    episode: &mut Episode,
    opts: &BfsOptions,
) -> Result<NodeId>
where
    G: Neighborhood,
    P: Fn(NodeId) -> bool,
{
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    frontier.push_back(start);
    let mut expanded = 0usize;

    while let Some(current) = frontier.pop_front() {
        if episode.is_visited(current) {
            continue;
        }
        episode.mark_visited(current);
        expanded += 1;
        if let Some(max) = opts.max_nodes {
            if expanded > max {
                return Err(WayfindError::Timeout { limit: max });
            }
        }

        for neighbor in graph.neighbors(current, ctx) {
            if neighbor != start && episode.predecessor(neighbor).is_none() {
                episode.set_predecessor(neighbor, current);
                frontier.push_back(neighbor);
            }
            if predicate(neighbor) {
                tracing::debug!(target_node = %neighbor, expanded, "target discovered");
                return Ok(neighbor);
            }
        }
    }

    Err(WayfindError::TargetNotFound { expanded })
}

/// Find every node satisfying `predicate` reachable from `start`, running
/// the frontier to exhaustion. Each node is tested once, at discovery, so
/// the result holds no duplicates; it may be empty.
#[tracing::instrument(skip_all, fields(start = %start))]
pub fn find_all<G, P>(
    graph: &G,
    start: NodeId,
    predicate: P,
    ctx: &G::Context,
    episode: &mut Episode,
    opts: &BfsOptions,
) -> Result<Vec<NodeId>>
where
    G: Neighborhood,
    P: Fn(NodeId) -> bool,
{
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    frontier.push_back(start);
    let mut expanded = 0usize;
    let mut matches: Vec<NodeId> = Vec::new();

    while let Some(current) = frontier.pop_front() {
        if episode.is_visited(current) {
            continue;
        }
        episode.mark_visited(current);
        expanded += 1;
        if let Some(max) = opts.max_nodes {
            if expanded > max {
                return Err(WayfindError::Timeout { limit: max });
            }
        }

        for neighbor in graph.neighbors(current, ctx) {
            if neighbor != start && episode.predecessor(neighbor).is_none() {
                episode.set_predecessor(neighbor, current);
                frontier.push_back(neighbor);
                if predicate(neighbor) {
                    matches.push(neighbor);
                }
            }
        }
    }

    tracing::debug!(matched = matches.len(), expanded, "frontier exhausted");
    Ok(matches)
}
