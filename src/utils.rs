//! Parsing and validating boards from text.
//!
//! The search engine trusts every [`Board`] it receives to be a valid
//! permutation with a single blank; this module is where that trust is
//! earned. Both entry points reject duplicate tiles, out-of-range labels
//! and malformed tokens before a `Board` ever exists.
use thiserror::Error;

use crate::engine::{Board, BLANK, BOARD_SIZE, TILE_COUNT};

/// Why a board description was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected {expected} tokens, found {found}")]
    WrongTokenCount { expected: usize, found: usize },

    #[error("unrecognized token '{token}' at position {position}")]
    UnrecognizedToken { token: String, position: usize },

    #[error("tile {value} is outside the valid range 1..{limit}")]
    OutOfRange { value: usize, limit: usize },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },
}

/// Parses a board from a whitespace-separated token stream.
///
/// The stream must contain exactly `TILE_COUNT` tokens, filled row-major:
/// each is either a tile number in `1..TILE_COUNT` or `_` marking the
/// blank. A board with no blank necessarily repeats some tile, so it is
/// rejected by the duplicate check.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_tokens;
///
/// let board = board_from_tokens("_ 1 3 8 2 6 4 5 7").unwrap();
/// assert_eq!(board.blank_position(), (0, 0));
/// assert_eq!(board.tile_at(1, 0), 8);
///
/// assert!(board_from_tokens("1 2 3").is_err());
/// assert!(board_from_tokens("_ 1 3 8 2 6 4 5 x").is_err());
/// ```
pub fn board_from_tokens(input: &str) -> Result<Board, ParseBoardError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != TILE_COUNT {
        return Err(ParseBoardError::WrongTokenCount {
            expected: TILE_COUNT,
            found: tokens.len(),
        });
    }

    let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
    let mut seen = [false; TILE_COUNT];
    for (position, token) in tokens.iter().enumerate() {
        let value = if *token == "_" {
            BLANK
        } else {
            match token.parse::<usize>() {
                Ok(value) if (1..TILE_COUNT).contains(&value) => value as u8,
                Ok(value) => {
                    return Err(ParseBoardError::OutOfRange {
                        value,
                        limit: TILE_COUNT,
                    })
                }
                Err(_) => {
                    return Err(ParseBoardError::UnrecognizedToken {
                        token: (*token).to_string(),
                        position,
                    })
                }
            }
        };

        if seen[value as usize] {
            return Err(ParseBoardError::DuplicateTile { tile: value });
        }
        seen[value as usize] = true;
        grid[position / BOARD_SIZE][position % BOARD_SIZE] = value;
    }

    Ok(Board::from_validated_grid(grid))
}

/// Validates an in-memory grid and wraps it in a [`Board`].
///
/// Useful for test fixtures and benchmark setup. The same rules apply as
/// for [`board_from_tokens`]: every label must lie in `0..TILE_COUNT` and
/// appear exactly once, which also guarantees the single blank.
pub fn board_from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Board, ParseBoardError> {
    let mut seen = [false; TILE_COUNT];
    for &value in grid.iter().flat_map(|row| row.iter()) {
        if value as usize >= TILE_COUNT {
            return Err(ParseBoardError::OutOfRange {
                value: value as usize,
                limit: TILE_COUNT,
            });
        }
        if seen[value as usize] {
            return Err(ParseBoardError::DuplicateTile { tile: value });
        }
        seen[value as usize] = true;
    }
    Ok(Board::from_validated_grid(grid))
}
