//! Best-first search over the time-expanded state space.
//!
//! Priority key = steps so far + manhattan distance to the goal. The
//! heuristic never overestimates on a unit-cost grid and is consistent, so
//! the first time a state is popped its step count is minimal. The heap
//! carries no decrease-key: duplicate states with stale keys may coexist,
//! and correctness rests on the visited-state check at pop time, which
//! expands each distinct `(x, y, step % cycle_len)` state at most once.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use crate::error::{Result, WayfindError};
use crate::heap::MinHeap;
use crate::trace_time;

use super::oracle::ObstacleOracle;
use super::types::{Cell, SearchState};

/// Options for a time-expanded search
#[derive(Debug, Clone, Default)]
pub struct CrossingOptions {
    /// Ceiling on steps past the starting step. Exceeding it fails the
    /// search with `Timeout`, distinct from exhausting the state space.
    pub max_steps: Option<usize>,
}

/// One leg of a multi-leg itinerary
#[derive(Debug, Clone, Serialize)]
pub struct LegReport {
    pub start: Cell,
    pub goal: Cell,
    /// Step counter when the leg began
    pub departed: usize,
    /// Step counter on arrival; the next leg departs here so the obstacle
    /// phase carries over
    pub arrived: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    cell: Cell,
    step: usize,
}

/// Minimum step counter at which the traveller can stand on `goal`, having
/// left `start` at `start_step`. Legal moves each step: the four axis
/// neighbors or waiting in place, provided the destination is open at the
/// next step.
#[tracing::instrument(skip(oracle, opts), fields(%start, %goal, start_step, cycle = oracle.cycle_len()))]
pub fn shortest_path(
    oracle: &dyn ObstacleOracle,
    start: Cell,
    goal: Cell,
    start_step: usize,
    opts: &CrossingOptions,
) -> Result<usize> {
    let cycle = oracle.cycle_len();
    let mut heap: MinHeap<Candidate, usize> = MinHeap::new();
    let mut expanded: HashSet<SearchState> = HashSet::new();

    heap.push(
        Candidate {
            cell: start,
            step: start_step,
        },
        start_step + start.manhattan(goal),
    );

    while !heap.is_empty() {
        let current = heap.pop()?;
        if !expanded.insert(SearchState::new(current.cell, current.step, cycle)) {
            // Stale duplicate: this state already came off the heap with a
            // smaller-or-equal step count.
            continue;
        }
        if current.cell == goal {
            tracing::debug!(arrived = current.step, expanded = expanded.len(), "goal reached");
            return Ok(current.step);
        }
        if let Some(max) = opts.max_steps {
            if current.step - start_step > max {
                return Err(WayfindError::Timeout { limit: max });
            }
        }

        let next_step = current.step + 1;
        heap.extend(
            moves(current.cell)
                .into_iter()
                .filter(|cell| oracle.is_open(*cell, next_step))
                .filter(|cell| !expanded.contains(&SearchState::new(*cell, next_step, cycle)))
                .map(|cell| {
                    (
                        Candidate {
                            cell,
                            step: next_step,
                        },
                        next_step + cell.manhattan(goal),
                    )
                }),
        );
    }

    Err(WayfindError::PathNotFound {
        start: (start.x, start.y),
        goal: (goal.x, goal.y),
        start_step,
    })
}

/// Chain independent searches through `waypoints`, each leg starting its
/// step counter at the previous leg's arrival step.
#[tracing::instrument(skip(oracle, opts), fields(legs = waypoints.len().saturating_sub(1)))]
pub fn plan_legs(
    oracle: &dyn ObstacleOracle,
    waypoints: &[Cell],
    opts: &CrossingOptions,
) -> Result<Vec<LegReport>> {
    let started_at = Instant::now();
    let mut reports = Vec::with_capacity(waypoints.len().saturating_sub(1));
    let mut step = 0usize;

    for pair in waypoints.windows(2) {
        let (start, goal) = (pair[0], pair[1]);
        let arrived = shortest_path(oracle, start, goal, step, opts)?;
        reports.push(LegReport {
            start,
            goal,
            departed: step,
            arrived,
        });
        step = arrived;
    }

    trace_time!(started_at, "plan_legs", total_steps = step);
    Ok(reports)
}

/// The five candidate destinations from a cell: four axis moves plus
/// waiting in place. Underflowing edges are dropped; the oracle rejects
/// anything else off-grid.
fn moves(cell: Cell) -> Vec<Cell> {
    let mut out = Vec::with_capacity(5);
    out.push(Cell::new(cell.x + 1, cell.y));
    if cell.x > 0 {
        out.push(Cell::new(cell.x - 1, cell.y));
    }
    out.push(Cell::new(cell.x, cell.y + 1));
    if cell.y > 0 {
        out.push(Cell::new(cell.x, cell.y - 1));
    }
    out.push(cell);
    out
}
