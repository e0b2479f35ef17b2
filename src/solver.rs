//! The search engine: ties a frontier strategy, an explored table and an
//! evaluation function into one algorithm over board transitions.
use rustc_hash::FxHashMap;
use std::rc::Rc;

use crate::engine::{Board, Move};
use crate::frontier::Strategy;

/// Evaluation function plugged into the engine.
///
/// Called as `(candidate state, goal, parent's accumulated path cost)` and
/// returns the ordering value stored on the candidate node. With unit step
/// costs the accumulated path cost is the parent's depth.
pub type EvalFn = fn(&Board, &Board, u32) -> u32;

/// A point in the search tree: a board plus how it was reached.
///
/// Nodes are shared: one node can simultaneously sit in the frontier, act
/// as the explored representative of its board and be the parent of
/// several children. Contents are therefore never mutated after
/// construction; `Rc` keeps every node alive exactly as long as something
/// still references it.
pub struct SearchNode {
    state: Board,
    parent: Option<Rc<SearchNode>>,
    action: Option<Move>,
    cost: u32,
    depth: u32,
}

impl SearchNode {
    pub(crate) fn root(state: Board) -> Self {
        SearchNode {
            state,
            parent: None,
            action: None,
            cost: 0,
            depth: 0,
        }
    }

    pub(crate) fn child(parent: &Rc<SearchNode>, action: Move, state: Board, cost: u32) -> Self {
        SearchNode {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            cost,
            depth: parent.depth + 1,
        }
    }

    pub fn state(&self) -> &Board {
        &self.state
    }

    /// Evaluation value assigned at creation; the ordering key for the
    /// cost-ordered frontier.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of moves from the root; 0 only for the root itself.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The move that produced this node; `None` only for the root.
    pub fn action(&self) -> Option<Move> {
        self.action
    }

    /// Reconstructs the move sequence from the root to this node by
    /// walking the parent chain.
    pub fn path(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut cursor = self;
        while let Some(parent) = cursor.parent.as_deref() {
            if let Some(action) = cursor.action {
                moves.push(action);
            }
            cursor = parent;
        }
        moves.reverse();
        moves
    }
}

impl Drop for SearchNode {
    // Parent chains can run tens of thousands of nodes deep under
    // depth-first exploration; the default recursive drop would overflow
    // the stack. Unwind the exclusively-owned prefix of the chain
    // iteratively instead.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => parent = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// What a finished search reports back.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub solved: bool,
    /// Moves from the initial board to the goal; empty on failure, and on
    /// the trivial success where the initial board already is the goal.
    pub path: Vec<Move>,
    pub nodes_expanded: usize,
    pub nodes_created: usize,
    /// Depth of the goal node on success; depth of the last node examined
    /// on failure.
    pub final_depth: u32,
}

/// Searches for a move sequence transforming `initial` into `goal`.
///
/// One round dequeues nodes until the goal surfaces or the frontier
/// drains. A drained frontier asks the strategy to widen its parameters
/// (`expand_search`); a widened strategy restarts the round from the root
/// with a fresh frontier and explored table, and the node counters keep
/// accumulating across rounds. A strategy that cannot widen makes the
/// failure final.
///
/// `initial` and `goal` are trusted to satisfy the board invariant; the
/// validating parsers in [`crate::utils`] are the place that enforces it.
pub fn solve(
    initial: &Board,
    goal: &Board,
    strategy: &mut Strategy,
    evaluate: EvalFn,
) -> SearchOutcome {
    let mut nodes_expanded = 0;
    let mut nodes_created = 0;

    loop {
        strategy.clear();
        let mut explored: FxHashMap<Board, Rc<SearchNode>> = FxHashMap::default();
        let mut last_depth = 0;

        let root = Rc::new(SearchNode::root(initial.clone()));
        explored.insert(initial.clone(), Rc::clone(&root));
        strategy.enqueue(root);
        nodes_created += 1;

        while let Some(current) = strategy.dequeue() {
            // A node replaced in the explored table after it was enqueued
            // no longer represents its board; skip the stale entry.
            let superseded = explored
                .get(current.state())
                .map_or(true, |kept| !Rc::ptr_eq(kept, &current));
            if superseded {
                continue;
            }

            if current.state() == goal {
                return SearchOutcome {
                    solved: true,
                    path: current.path(),
                    nodes_expanded,
                    nodes_created,
                    final_depth: current.depth(),
                };
            }

            nodes_expanded += 1;
            last_depth = current.depth();

            for direction in Move::EXPANSION_ORDER {
                let next_state = match current.state().apply_move(direction) {
                    Some(state) => state,
                    None => continue,
                };
                let cost = evaluate(&next_state, goal, current.depth());
                let candidate = SearchNode::child(&current, direction, next_state, cost);
                if strategy.admits(&candidate, explored.get(candidate.state())) {
                    let candidate = Rc::new(candidate);
                    explored.insert(candidate.state().clone(), Rc::clone(&candidate));
                    strategy.enqueue(candidate);
                    nodes_created += 1;
                }
            }
        }

        if !strategy.expand_search() {
            return SearchOutcome {
                solved: false,
                path: Vec::new(),
                nodes_expanded,
                nodes_created,
                final_depth: last_depth,
            };
        }
    }
}
