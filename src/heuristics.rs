//! Evaluation functions for the cost-ordered frontier.
//!
//! Each function matches [`crate::solver::EvalFn`]: it receives the
//! candidate board, the goal and the parent's accumulated path cost, and
//! returns the value the frontier orders by. Lower is better.
//!
//! `manhattan_distance` and `misplaced_tiles` never overestimate the true
//! remaining cost, so the cost-ordered strategy returns shortest paths
//! with them. `manhattan_with_inversions` carries no such guarantee and is
//! kept as a separately named experiment; `greedy_manhattan` drops the
//! path cost entirely and with it any optimality claim.
use crate::engine::{Board, BLANK};

/// Uniform step cost: one more than the path cost accumulated so far.
/// Orders the frontier by depth, ignoring the board entirely.
pub fn unit_cost(_state: &Board, _goal: &Board, cumulative: u32) -> u32 {
    cumulative + 1
}

/// Number of non-blank tiles away from their goal position, plus the
/// accumulated path cost.
pub fn misplaced_tiles(state: &Board, goal: &Board, cumulative: u32) -> u32 {
    let count = state
        .tiles()
        .filter(|&tile| tile != BLANK)
        .filter(|&tile| state.position_of(tile) != goal.position_of(tile))
        .count();
    cumulative + count as u32
}

/// Sum over non-blank tiles of the row and column offsets between their
/// current and goal positions, plus the accumulated path cost.
pub fn manhattan_distance(state: &Board, goal: &Board, cumulative: u32) -> u32 {
    cumulative + manhattan(state, goal)
}

/// Manhattan distance augmented with half the inversion count, plus the
/// accumulated path cost. An experiment without an admissibility proof;
/// not interchangeable with [`manhattan_distance`].
pub fn manhattan_with_inversions(state: &Board, goal: &Board, cumulative: u32) -> u32 {
    cumulative + manhattan(state, goal) + state.inversions() as u32 / 2
}

/// Manhattan distance alone: the accumulated path cost is ignored, so the
/// frontier chases the heuristically closest board regardless of how far
/// it already travelled.
pub fn greedy_manhattan(state: &Board, goal: &Board, _cumulative: u32) -> u32 {
    manhattan(state, goal)
}

fn manhattan(state: &Board, goal: &Board) -> u32 {
    let mut distance = 0u32;
    for tile in state.tiles().filter(|&tile| tile != BLANK) {
        if let (Some((r, c)), Some((gr, gc))) =
            (state.position_of(tile), goal.position_of(tile))
        {
            distance += (r.abs_diff(gr) + c.abs_diff(gc)) as u32;
        }
    }
    distance
}
