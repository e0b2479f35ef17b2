//! Frontier strategies: the exploration disciplines the search engine can
//! be parametrized with.
//!
//! Strategies form a closed set chosen at construction time. Each carries
//! its own container of shared search nodes (a queue, a stack or a heap)
//! and answers the engine's admission questions: whether a freshly
//! generated node may enter the frontier given the explored node that
//! currently holds an equal board.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

use crate::solver::SearchNode;

// `BinaryHeap` is a max-heap, so comparisons are inverted: the entry with
// the lowest evaluation value wins, and among equal values the earliest
// insertion wins. The FIFO tie-break selects which of several equally
// cheap paths is returned, never which cost is found.
struct Prioritized {
    node: Rc<SearchNode>,
    seq: u64,
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .cost()
            .cmp(&self.node.cost())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Prioritized {}

enum Repr {
    BreadthFirst {
        queue: VecDeque<Rc<SearchNode>>,
    },
    DepthFirst {
        stack: Vec<Rc<SearchNode>>,
    },
    DepthLimited {
        stack: Vec<Rc<SearchNode>>,
        bound: u32,
    },
    IterativeDeepening {
        stack: Vec<Rc<SearchNode>>,
        bound: u32,
        step: u32,
    },
    BestFirst {
        heap: BinaryHeap<Prioritized>,
        seq: u64,
    },
}

/// A pluggable exploration discipline.
///
/// The engine only talks to a strategy through this capability set:
/// enqueue/dequeue/peek, the admission test, the widening request after an
/// exhausted round and the completeness flag.
pub struct Strategy {
    repr: Repr,
}

impl Strategy {
    /// First-in-first-out exploration. Complete; returns a shortest path.
    pub fn breadth_first() -> Self {
        Strategy {
            repr: Repr::BreadthFirst {
                queue: VecDeque::new(),
            },
        }
    }

    /// Last-in-first-out exploration. Not complete: on an unbounded branch
    /// it may never return.
    pub fn depth_first() -> Self {
        Strategy {
            repr: Repr::DepthFirst { stack: Vec::new() },
        }
    }

    /// Last-in-first-out exploration that refuses candidates deeper than
    /// `bound`. Not complete: a goal below the bound is unreachable.
    pub fn depth_limited(bound: u32) -> Self {
        Strategy {
            repr: Repr::DepthLimited {
                stack: Vec::new(),
                bound,
            },
        }
    }

    /// Depth-limited exploration that, once a round exhausts, widens the
    /// bound by `step` and asks the engine to restart from the root.
    /// Complete given an eventually sufficient bound; with a `step` of 1
    /// the first successful bound is the optimal solution depth.
    pub fn iterative_deepening(initial_bound: u32, step: u32) -> Self {
        Strategy {
            repr: Repr::IterativeDeepening {
                stack: Vec::new(),
                bound: initial_bound,
                step,
            },
        }
    }

    /// Exploration ordered by ascending evaluation value. Complete, and
    /// optimal whenever the evaluation function is admissible and
    /// non-negative.
    pub fn best_first() -> Self {
        Strategy {
            repr: Repr::BestFirst {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    pub fn enqueue(&mut self, node: Rc<SearchNode>) {
        match &mut self.repr {
            Repr::BreadthFirst { queue } => queue.push_back(node),
            Repr::DepthFirst { stack }
            | Repr::DepthLimited { stack, .. }
            | Repr::IterativeDeepening { stack, .. } => stack.push(node),
            Repr::BestFirst { heap, seq } => {
                heap.push(Prioritized { node, seq: *seq });
                *seq += 1;
            }
        }
    }

    pub fn dequeue(&mut self) -> Option<Rc<SearchNode>> {
        match &mut self.repr {
            Repr::BreadthFirst { queue } => queue.pop_front(),
            Repr::DepthFirst { stack }
            | Repr::DepthLimited { stack, .. }
            | Repr::IterativeDeepening { stack, .. } => stack.pop(),
            Repr::BestFirst { heap, .. } => heap.pop().map(|entry| entry.node),
        }
    }

    /// The node the next `dequeue` would return.
    pub fn peek(&self) -> Option<&Rc<SearchNode>> {
        match &self.repr {
            Repr::BreadthFirst { queue } => queue.front(),
            Repr::DepthFirst { stack }
            | Repr::DepthLimited { stack, .. }
            | Repr::IterativeDeepening { stack, .. } => stack.last(),
            Repr::BestFirst { heap, .. } => heap.peek().map(|entry| &entry.node),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.repr {
            Repr::BreadthFirst { queue } => queue.is_empty(),
            Repr::DepthFirst { stack }
            | Repr::DepthLimited { stack, .. }
            | Repr::IterativeDeepening { stack, .. } => stack.is_empty(),
            Repr::BestFirst { heap, .. } => heap.is_empty(),
        }
    }

    /// Decides whether `candidate` may enter the frontier, given the
    /// explored node currently holding an equal board (if any).
    ///
    /// The plain orders admit a board only once. The bounded orders also
    /// re-admit a board reached on a strictly shallower path, so that a
    /// goal pruned behind a too-deep first visit stays reachable. The
    /// cost-ordered frontier re-admits on a strictly lower evaluation
    /// value; the engine then replaces the dominated explored entry.
    pub fn admits(&self, candidate: &SearchNode, existing: Option<&Rc<SearchNode>>) -> bool {
        match &self.repr {
            Repr::BreadthFirst { .. } | Repr::DepthFirst { .. } => existing.is_none(),
            Repr::DepthLimited { bound, .. } | Repr::IterativeDeepening { bound, .. } => {
                candidate.depth() <= *bound
                    && existing.map_or(true, |kept| kept.depth() > candidate.depth())
            }
            Repr::BestFirst { .. } => {
                existing.map_or(true, |kept| candidate.cost() < kept.cost())
            }
        }
    }

    /// Widens the search parameters after an exhausted round. Returns
    /// `true` when the engine should restart from the root with a fresh
    /// frontier and explored table.
    pub fn expand_search(&mut self) -> bool {
        match &mut self.repr {
            Repr::IterativeDeepening { bound, step, .. } => {
                *bound += *step;
                true
            }
            _ => false,
        }
    }

    /// Whether this strategy is guaranteed to find a solution when one
    /// exists. Callers must not read an incomplete strategy's failure as
    /// proof that no solution exists.
    pub fn is_complete(&self) -> bool {
        match &self.repr {
            Repr::BreadthFirst { .. }
            | Repr::IterativeDeepening { .. }
            | Repr::BestFirst { .. } => true,
            Repr::DepthFirst { .. } | Repr::DepthLimited { .. } => false,
        }
    }

    /// The current depth bound of the bounded strategies.
    pub fn depth_bound(&self) -> Option<u32> {
        match &self.repr {
            Repr::DepthLimited { bound, .. } | Repr::IterativeDeepening { bound, .. } => {
                Some(*bound)
            }
            _ => None,
        }
    }

    /// Empties the frontier ahead of a restarted round.
    pub fn clear(&mut self) {
        match &mut self.repr {
            Repr::BreadthFirst { queue } => queue.clear(),
            Repr::DepthFirst { stack }
            | Repr::DepthLimited { stack, .. }
            | Repr::IterativeDeepening { stack, .. } => stack.clear(),
            Repr::BestFirst { heap, .. } => heap.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Move};

    // Builds a chain of nodes root -> ... of the given costs, returning
    // them in order. States along the chain are distinct by construction.
    fn chain(costs: &[u32]) -> Vec<Rc<SearchNode>> {
        let mut board = Board::solved_goal();
        let mut nodes = vec![Rc::new(SearchNode::root(board.clone()))];
        let mut last_move = None;
        for &cost in costs {
            // Walk the blank around without immediately undoing the
            // previous move, so every state in the chain is fresh.
            let parent = Rc::clone(nodes.last().unwrap());
            let (direction, state) = Move::EXPANSION_ORDER
                .iter()
                .filter(|&&m| Some(m.opposite()) != last_move)
                .find_map(|&m| board.apply_move(m).map(|s| (m, s)))
                .unwrap();
            last_move = Some(direction);
            board = state.clone();
            nodes.push(Rc::new(SearchNode::child(&parent, direction, state, cost)));
        }
        nodes
    }

    #[test]
    fn test_breadth_first_is_fifo() {
        let nodes = chain(&[1, 1, 1]);
        let mut strategy = Strategy::breadth_first();
        for node in &nodes {
            strategy.enqueue(Rc::clone(node));
        }
        for node in &nodes {
            assert!(Rc::ptr_eq(&strategy.dequeue().unwrap(), node));
        }
        assert!(strategy.is_empty());
    }

    #[test]
    fn test_depth_first_is_lifo() {
        let nodes = chain(&[1, 1, 1]);
        let mut strategy = Strategy::depth_first();
        for node in &nodes {
            strategy.enqueue(Rc::clone(node));
        }
        for node in nodes.iter().rev() {
            assert!(Rc::ptr_eq(&strategy.dequeue().unwrap(), node));
        }
    }

    #[test]
    fn test_best_first_orders_by_cost_then_insertion() {
        let nodes = chain(&[5, 2, 5]);
        let mut strategy = Strategy::best_first();
        for node in &nodes[1..] {
            strategy.enqueue(Rc::clone(node));
        }
        // Lowest evaluation value first.
        assert!(Rc::ptr_eq(strategy.peek().unwrap(), &nodes[2]));
        assert!(Rc::ptr_eq(&strategy.dequeue().unwrap(), &nodes[2]));
        // Equal values resolve in insertion order.
        assert!(Rc::ptr_eq(&strategy.dequeue().unwrap(), &nodes[1]));
        assert!(Rc::ptr_eq(&strategy.dequeue().unwrap(), &nodes[3]));
        assert!(strategy.dequeue().is_none());
    }

    #[test]
    fn test_default_admission_blocks_duplicates() {
        let nodes = chain(&[1]);
        for strategy in [Strategy::breadth_first(), Strategy::depth_first()] {
            assert!(strategy.admits(&nodes[1], None));
            assert!(!strategy.admits(&nodes[1], Some(&nodes[0])));
        }
    }

    #[test]
    fn test_depth_limited_admission() {
        let nodes = chain(&[1, 1, 1]); // depths 0, 1, 2, 3
        let strategy = Strategy::depth_limited(2);

        // Within the bound, unseen boards are admitted.
        assert!(strategy.admits(&nodes[2], None));
        // Beyond the bound, nothing is.
        assert!(!strategy.admits(&nodes[3], None));
        // A strictly deeper explored twin is superseded...
        assert!(strategy.admits(&nodes[1], Some(&nodes[3])));
        // ...a shallower or equally deep one is not.
        assert!(!strategy.admits(&nodes[3], Some(&nodes[1])));
        assert!(!strategy.admits(&nodes[2], Some(&nodes[2])));
    }

    #[test]
    fn test_best_first_readmits_on_strictly_lower_cost() {
        let nodes = chain(&[7, 5]);
        let strategy = Strategy::best_first();
        assert!(strategy.admits(&nodes[2], Some(&nodes[1])));
        assert!(!strategy.admits(&nodes[1], Some(&nodes[2])));
        assert!(!strategy.admits(&nodes[1], Some(&nodes[1])));
    }

    #[test]
    fn test_expand_search_widens_only_iterative_deepening() {
        let mut deepening = Strategy::iterative_deepening(3, 2);
        let mut previous = deepening.depth_bound().unwrap();
        for _ in 0..5 {
            assert!(deepening.expand_search());
            let bound = deepening.depth_bound().unwrap();
            assert!(bound > previous);
            previous = bound;
        }

        for mut strategy in [
            Strategy::breadth_first(),
            Strategy::depth_first(),
            Strategy::depth_limited(9),
            Strategy::best_first(),
        ] {
            assert!(!strategy.expand_search());
        }
        // A fixed depth limit never moves.
        let mut limited = Strategy::depth_limited(9);
        limited.expand_search();
        assert_eq!(limited.depth_bound(), Some(9));
    }

    #[test]
    fn test_completeness_flags() {
        assert!(Strategy::breadth_first().is_complete());
        assert!(Strategy::iterative_deepening(1, 1).is_complete());
        assert!(Strategy::best_first().is_complete());
        assert!(!Strategy::depth_first().is_complete());
        assert!(!Strategy::depth_limited(31).is_complete());
    }

    #[test]
    fn test_clear_empties_every_container() {
        let nodes = chain(&[1, 1]);
        for mut strategy in [
            Strategy::breadth_first(),
            Strategy::depth_first(),
            Strategy::depth_limited(5),
            Strategy::iterative_deepening(5, 1),
            Strategy::best_first(),
        ] {
            for node in &nodes {
                strategy.enqueue(Rc::clone(node));
            }
            assert!(!strategy.is_empty());
            strategy.clear();
            assert!(strategy.is_empty());
            assert!(strategy.peek().is_none());
        }
    }
}
