//! Error types for wayfind
//!
//! All errors are propagated synchronously to the immediate caller; none
//! are retried internally, and there are no partial results. A search
//! either fully succeeds with a definite node/path/step-count or fails
//! outright.

use thiserror::Error;

/// Errors that can occur during wayfind searches
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WayfindError {
    /// BFS frontier exhausted without a predicate match. Recoverable:
    /// signals "no such node".
    #[error("target not found: frontier exhausted after expanding {expanded} nodes")]
    TargetNotFound { expanded: usize },

    /// Pop on an empty priority queue. Indicates a logic bug upstream.
    #[error("pop on empty priority queue")]
    EmptyQueue,

    /// Best-first search exhausted without reaching the goal cell. The
    /// grid is disconnected or the obstacle snapshots are wrong, so this
    /// is a configuration error, never retried.
    #[error("no path from {start:?} to {goal:?} starting at step {start_step}")]
    PathNotFound {
        start: (usize, usize),
        goal: (usize, usize),
        start_step: usize,
    },

    /// Caller-imposed search ceiling exceeded. Distinct from
    /// [`WayfindError::PathNotFound`]: the search was cut short, not
    /// exhausted.
    #[error("search exceeded caller-imposed ceiling of {limit}")]
    Timeout { limit: usize },
}

impl WayfindError {
    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfindError::TargetNotFound { .. } => "target_not_found",
            WayfindError::EmptyQueue => "empty_queue",
            WayfindError::PathNotFound { .. } => "path_not_found",
            WayfindError::Timeout { .. } => "timeout",
        }
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;
