use clap::{Parser, ValueEnum};
use npuzzle_solver::engine::Board;
use npuzzle_solver::frontier::Strategy;
use npuzzle_solver::heuristics;
use npuzzle_solver::solver::{solve, EvalFn};
use npuzzle_solver::utils::board_from_tokens;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Bfs,
    Dfs,
    DepthLimited,
    IterativeDeepening,
    BestFirst,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HeuristicArg {
    UnitCost,
    MisplacedTiles,
    Manhattan,
    ManhattanInversions,
    GreedyManhattan,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Exploration strategy
    #[clap(short, long, value_enum, default_value_t = StrategyArg::Bfs)]
    strategy: StrategyArg,

    /// Evaluation function for the best-first strategy
    #[clap(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Depth bound for depth-limited search, and the starting bound for
    /// iterative deepening
    #[clap(long, default_value_t = 31)]
    bound: u32,

    /// Bound increment per iterative-deepening restart
    #[clap(long, default_value_t = 1)]
    step: u32,

    /// Path to the board file (9 whitespace-separated tokens, `_` for the blank)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_tokens(&content).map_err(|e| format!("Invalid board: {}", e))
}

fn build_strategy(args: &Args) -> Strategy {
    match args.strategy {
        StrategyArg::Bfs => Strategy::breadth_first(),
        StrategyArg::Dfs => Strategy::depth_first(),
        StrategyArg::DepthLimited => Strategy::depth_limited(args.bound),
        StrategyArg::IterativeDeepening => Strategy::iterative_deepening(args.bound, args.step),
        StrategyArg::BestFirst => Strategy::best_first(),
    }
}

fn evaluation_fn(heuristic: HeuristicArg) -> EvalFn {
    match heuristic {
        HeuristicArg::UnitCost => heuristics::unit_cost,
        HeuristicArg::MisplacedTiles => heuristics::misplaced_tiles,
        HeuristicArg::Manhattan => heuristics::manhattan_distance,
        HeuristicArg::ManhattanInversions => heuristics::manhattan_with_inversions,
        HeuristicArg::GreedyManhattan => heuristics::greedy_manhattan,
    }
}

fn main() {
    let args = Args::parse();

    let board = read_board_file(&args.board_file).expect(&format!(
        "Failed to load board from file: {}",
        args.board_file.display()
    ));
    let goal = Board::solved_goal();

    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}", board);
    println!("Solvable for the canonical goal: {}\n", board.is_solvable());

    let mut strategy = build_strategy(&args);
    let evaluate = evaluation_fn(args.heuristic);

    println!("Searching with {:?}...\n", args.strategy);
    let start = Instant::now();
    let outcome = solve(&board, &goal, &mut strategy, evaluate);
    let elapsed = start.elapsed();

    if outcome.solved {
        println!("Solution found:\n");
        println!("Moves ({}):", outcome.path.len());
        if outcome.path.is_empty() {
            println!("  Already at the goal.");
        } else {
            for (i, direction) in outcome.path.iter().enumerate() {
                println!("  Move {}: {}", i + 1, direction);
            }
        }
    } else {
        println!("No solution found.");
        if !strategy.is_complete() {
            println!(
                "The chosen strategy is incomplete; this failure does not prove the puzzle unsolvable."
            );
        }
    }

    println!();
    println!("Nodes expanded: {}", outcome.nodes_expanded);
    println!("Nodes created: {}", outcome.nodes_created);
    println!("Final depth: {}", outcome.final_depth);
    println!("Time taken: {}ms", elapsed.as_millis());
}
