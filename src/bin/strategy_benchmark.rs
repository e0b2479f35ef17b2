use npuzzle_solver::engine::Board;
use npuzzle_solver::frontier::Strategy;
use npuzzle_solver::heuristics;
use npuzzle_solver::solver::{solve, EvalFn};
use std::time::Instant;

const NUM_SCRAMBLES: usize = 10;
const SCRAMBLE_MOVES: usize = 14;
const START_SEED: u64 = 0;

fn main() {
    let lineup: [(&str, fn() -> Strategy, EvalFn); 7] = [
        ("breadth-first", || Strategy::breadth_first(), heuristics::unit_cost),
        ("depth-first", || Strategy::depth_first(), heuristics::unit_cost),
        ("depth-limited(31)", || Strategy::depth_limited(31), heuristics::unit_cost),
        ("iter-deepening", || Strategy::iterative_deepening(1, 1), heuristics::unit_cost),
        ("best-first/misplaced", || Strategy::best_first(), heuristics::misplaced_tiles),
        ("best-first/manhattan", || Strategy::best_first(), heuristics::manhattan_distance),
        ("greedy/manhattan", || Strategy::best_first(), heuristics::greedy_manhattan),
    ];

    let goal = Board::solved_goal();
    // Per-lineup running sums of (nodes expanded, path length, solved runs).
    let mut totals: Vec<(usize, usize, usize)> = vec![(0, 0, 0); lineup.len()];

    println!(
        "Benchmarking {} scrambles of {} moves each...",
        NUM_SCRAMBLES, SCRAMBLE_MOVES
    );

    for index in 0..NUM_SCRAMBLES {
        let seed = START_SEED + index as u64;
        let board = goal.scrambled(SCRAMBLE_MOVES, seed);
        println!("\nScramble {} (seed {}):", index, seed);

        for (slot, (name, make_strategy, evaluate)) in lineup.iter().enumerate() {
            let mut strategy = make_strategy();
            let start = Instant::now();
            let outcome = solve(&board, &goal, &mut strategy, *evaluate);
            let elapsed = start.elapsed();

            if !outcome.solved {
                println!("  {:<22} FAILED (incomplete strategy)", name);
                continue;
            }

            totals[slot].0 += outcome.nodes_expanded;
            totals[slot].1 += outcome.path.len();
            totals[slot].2 += 1;
            println!(
                "  {:<22} depth {:>4}, expanded {:>7}, created {:>7}, {:>5}ms",
                name,
                outcome.path.len(),
                outcome.nodes_expanded,
                outcome.nodes_created,
                elapsed.as_millis()
            );
        }
    }

    println!("\n--- Averages over {} scrambles ---", NUM_SCRAMBLES);
    for (slot, (name, _, _)) in lineup.iter().enumerate() {
        let (expanded, depth, solved) = totals[slot];
        if solved == 0 {
            println!("  {:<22} never solved", name);
            continue;
        }
        println!(
            "  {:<22} avg expanded {:>9.1}, avg depth {:>6.1} ({} solved)",
            name,
            expanded as f64 / solved as f64,
            depth as f64 / solved as f64,
            solved
        );
    }
}
