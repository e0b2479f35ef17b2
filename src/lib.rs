//! # N-Puzzle Solver Library
//!
//! This library provides the core search machinery for sliding-tile
//! puzzles: an immutable board engine, a family of frontier strategies and
//! pluggable evaluation functions, tied together by a single search loop.
//!
//! It is used by three binaries:
//! - `solve_puzzle`: loads a board from a file and solves it with a chosen
//!   strategy and evaluation function.
//! - `human_player`: allows interactive play via the command line.
//! - `strategy_benchmark`: compares the strategies across seeded scrambles.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), the move model (`Move`),
//!   the transition function, the canonical-goal solvability test and
//!   seeded scrambling.
//! - `frontier`: the exploration strategies (`Strategy`) and their
//!   admission policies.
//! - `solver`: the search loop (`solve`), shared search nodes and outcome
//!   reporting.
//! - `heuristics`: evaluation functions consumed by the cost-ordered
//!   strategy.
//! - `utils`: parsing and validating boards from text.

pub mod engine;
pub mod frontier;
pub mod heuristics;
pub mod solver;
pub mod utils;
