//! Wayfind Core Library
//!
//! A small graph-traversal toolkit with two search modes: a generic
//! breadth-first search over an abstract adjacency interface, with path
//! reconstruction via back-links, and a best-first shortest-path search
//! over a time-expanded state space where the grid's obstacles move
//! deterministically and periodically.

pub mod error;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod timed;
