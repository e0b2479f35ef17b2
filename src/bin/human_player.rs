use npuzzle_solver::engine::{Board, Move};
use std::io::{self, Write};

fn main() {
    let goal = Board::solved_goal();
    let mut scramble_seed = 514u64;
    let mut board = goal.scrambled(25, scramble_seed);
    let mut moves_taken = 0u32;
    println!("Welcome to the 8-puzzle!");

    loop {
        println!("---------------------");
        println!("Moves taken: {}", moves_taken);
        println!("{}", board);

        if board == goal {
            println!("---------------------");
            println!("Solved in {} moves!", moves_taken);
            break;
        }

        print!("Slide the blank (u/d/l/r), 'n' for a new scramble, 'q' to quit: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let direction = match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "n" => {
                scramble_seed += 1;
                board = goal.scrambled(25, scramble_seed);
                moves_taken = 0;
                println!("New scramble.");
                continue;
            }
            "u" => Move::Up,
            "d" => Move::Down,
            "l" => Move::Left,
            "r" => Move::Right,
            other => {
                println!(
                    "Unrecognized input '{}'. Use 'u', 'd', 'l', 'r', 'n' or 'q'.",
                    other
                );
                continue;
            }
        };

        match board.apply_move(direction) {
            Some(next) => {
                board = next;
                moves_taken += 1;
            }
            None => println!("The blank cannot move {} from here.", direction),
        }
    }
}
