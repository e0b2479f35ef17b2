//! Core board engine for the sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four directions the blank tile can travel.
//! - `Board`: an immutable square grid of distinct tiles with a single
//!   blank, plus the transition function, the canonical-goal solvability
//!   test and seeded scrambling.
//!
//! A `Board` is a value type: applying a move never mutates the receiver,
//! it produces a fresh board (or nothing, when the move would leave the
//! grid). The search code relies on that immutability to share boards
//! freely between nodes.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Width and height of the board. The board is always square; a
/// `BOARD_SIZE` of 3 is the classic 8-puzzle.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Label of the blank cell.
pub const BLANK: u8 = 0;

/// A direction the blank tile can travel.
///
/// Moves are named for the blank's motion: `Move::Up` slides the tile
/// above the blank down into the gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// The fixed order in which the search engine generates children.
    pub const EXPANSION_ORDER: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// The move that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::Move;
    /// assert_eq!(Move::Up.opposite(), Move::Down);
    /// assert_eq!(Move::Left.opposite(), Move::Right);
    /// ```
    pub fn opposite(&self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    fn offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        };
        write!(f, "{}", name)
    }
}

/// An immutable sliding-tile board.
///
/// Holds a `BOARD_SIZE` x `BOARD_SIZE` grid of distinct labels
/// `0..TILE_COUNT`, where `0` marks the blank. Boards only come from the
/// validating entry points ([`Board::solved_goal`], the parsers in
/// [`crate::utils`]) or from applying moves to an existing board, so
/// search code can assume the permutation invariant without re-checking
/// it. The blank's coordinates are cached alongside the grid.
#[derive(Clone, Debug)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
    blank: (usize, usize),
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // The cached blank coordinates are derived from the grid, so grid
        // equality is board equality.
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.packed());
    }
}

impl Board {
    /// The canonical goal layout: tiles `1..TILE_COUNT` row-major with the
    /// blank in the bottom-right corner.
    pub fn solved_goal() -> Self {
        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        let mut value = 1u8;
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if r == BOARD_SIZE - 1 && c == BOARD_SIZE - 1 {
                    *cell = BLANK;
                } else {
                    *cell = value;
                    value += 1;
                }
            }
        }
        Board {
            grid,
            blank: (BOARD_SIZE - 1, BOARD_SIZE - 1),
        }
    }

    /// Wraps a grid that has already passed validation in [`crate::utils`].
    pub(crate) fn from_validated_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut blank = (0, 0);
        for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == BLANK {
                    blank = (r, c);
                }
            }
        }
        Board { grid, blank }
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn tile_at(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// The blank's (row, column) coordinates.
    pub fn blank_position(&self) -> (usize, usize) {
        self.blank
    }

    /// Iterates over the cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.grid.iter().flat_map(|row| row.iter().copied())
    }

    /// The (row, column) coordinates of `tile`, or `None` if the label is
    /// not on the board.
    pub fn position_of(&self, tile: u8) -> Option<(usize, usize)> {
        self.tiles()
            .position(|value| value == tile)
            .map(|index| (index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Applies one move to the board, producing the successor state.
    ///
    /// Swaps the blank with its neighbour in the requested direction.
    /// Returns `None` when that neighbour would fall outside the grid; an
    /// impossible move is an expected local condition, not a fault.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::{Board, Move};
    /// let goal = Board::solved_goal();
    /// assert!(goal.apply_move(Move::Down).is_none());
    /// let next = goal.apply_move(Move::Up).unwrap();
    /// assert_eq!(next.blank_position(), (1, 2));
    /// ```
    pub fn apply_move(&self, direction: Move) -> Option<Board> {
        let (dr, dc) = direction.offset();
        let nr = self.blank.0 as isize + dr;
        let nc = self.blank.1 as isize + dc;
        if nr < 0 || nr >= BOARD_SIZE as isize || nc < 0 || nc >= BOARD_SIZE as isize {
            return None;
        }
        let (nr, nc) = (nr as usize, nc as usize);

        let mut grid = self.grid;
        grid[self.blank.0][self.blank.1] = grid[nr][nc];
        grid[nr][nc] = BLANK;
        Some(Board {
            grid,
            blank: (nr, nc),
        })
    }

    /// Permutation-inversion count over all tiles except the blank.
    ///
    /// The first cell contributes `value - 1` (clamped at zero; every
    /// smaller tile sits somewhere after it, so the shortcut equals the
    /// exact count); every later cell contributes the number of smaller
    /// non-blank tiles appearing after it in row-major order.
    pub fn inversions(&self) -> usize {
        let flat: Vec<u8> = self.tiles().collect();
        let mut inversions = flat[0].saturating_sub(1) as usize;
        for i in 1..TILE_COUNT - 1 {
            let value = flat[i];
            if value > 1 {
                inversions += flat[i + 1..]
                    .iter()
                    .filter(|&&later| later != BLANK && later < value)
                    .count();
            }
        }
        inversions
    }

    /// Whether this board can reach the canonical goal
    /// ([`Board::solved_goal`]): the inversion count must be even.
    ///
    /// The parity argument is tied to that one goal ordering and says
    /// nothing about reachability of other goals.
    // TODO: generalize the inversion count to index tiles by their
    // positions in an arbitrary goal before trusting this against
    // non-canonical goals.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// Scrambles the board with a seeded random walk of valid moves.
    ///
    /// Only moves that actually apply count towards `moves`, so the result
    /// is always reachable from `self` within `moves` steps. The same seed
    /// always produces the same board.
    pub fn scrambled(&self, moves: usize, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = self.clone();
        let mut applied = 0;
        while applied < moves {
            let direction = Move::EXPANSION_ORDER[rng.gen_range(0..4)];
            if let Some(next) = board.apply_move(direction) {
                board = next;
                applied += 1;
            }
        }
        board
    }

    // Position-weighted packing of the grid: each cell contributes its
    // value at a distinct base-TILE_COUNT digit. Collisions cannot be
    // ruled out for larger boards, so lookups must always re-check full
    // equality on a hash match.
    fn packed(&self) -> u64 {
        self.tiles().fold(0u64, |acc, value| {
            acc.wrapping_mul(TILE_COUNT as u64)
                .wrapping_add(value as u64)
        })
    }
}

impl fmt::Display for Board {
    /// Prints the grid row-major, one row per line, with `_` for the
    /// blank. The output parses back via
    /// [`crate::utils::board_from_tokens`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == BLANK {
                    write!(f, "_")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{board_from_grid, board_from_tokens};
    use std::collections::hash_map::DefaultHasher;

    fn fixture() -> Board {
        board_from_grid([[0, 1, 3], [8, 2, 6], [4, 5, 7]]).unwrap()
    }

    #[test]
    fn test_solved_goal_layout() {
        let goal = Board::solved_goal();
        assert_eq!(goal.tile_at(0, 0), 1);
        assert_eq!(goal.tile_at(1, 1), 5);
        assert_eq!(goal.tile_at(2, 2), BLANK);
        assert_eq!(goal.blank_position(), (2, 2));
    }

    #[test]
    fn test_apply_move_swaps_blank_with_neighbour() {
        let goal = Board::solved_goal();
        let next = goal.apply_move(Move::Up).unwrap();
        assert_eq!(next.blank_position(), (1, 2));
        assert_eq!(next.tile_at(2, 2), 6);
        // The receiver is untouched.
        assert_eq!(goal.blank_position(), (2, 2));
    }

    #[test]
    fn test_apply_move_rejects_moves_off_the_grid() {
        let goal = Board::solved_goal();
        assert!(goal.apply_move(Move::Down).is_none());
        assert!(goal.apply_move(Move::Right).is_none());

        let corner = fixture(); // blank at (0, 0)
        assert_eq!(corner.blank_position(), (0, 0));
        assert!(corner.apply_move(Move::Up).is_none());
        assert!(corner.apply_move(Move::Left).is_none());
    }

    #[test]
    fn test_move_then_opposite_restores_the_board() {
        let goal = Board::solved_goal();
        for seed in 0..10 {
            let board = goal.scrambled(15, seed);
            for direction in Move::EXPANSION_ORDER {
                if let Some(next) = board.apply_move(direction) {
                    assert_eq!(
                        next.apply_move(direction.opposite()).unwrap(),
                        board,
                        "seed {} direction {}",
                        seed,
                        direction
                    );
                }
            }
        }
    }

    #[test]
    fn test_inversions_of_known_boards() {
        assert_eq!(Board::solved_goal().inversions(), 0);
        assert_eq!(fixture().inversions(), 8);
    }

    #[test]
    fn test_solvability_parity() {
        assert!(Board::solved_goal().is_solvable());
        assert!(fixture().is_solvable());

        // Swapping two adjacent tiles flips the permutation parity.
        let swapped = board_from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        assert_eq!(swapped.inversions(), 1);
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_scramble_is_deterministic_per_seed() {
        let goal = Board::solved_goal();
        assert_eq!(goal.scrambled(30, 7), goal.scrambled(30, 7));
        assert_ne!(goal.scrambled(30, 7), goal.scrambled(30, 8));
        // A random walk of legal moves preserves solvability.
        assert!(goal.scrambled(30, 7).is_solvable());
    }

    #[test]
    fn test_position_of_finds_every_tile() {
        let board = fixture();
        assert_eq!(board.position_of(BLANK), Some((0, 0)));
        assert_eq!(board.position_of(8), Some((1, 0)));
        assert_eq!(board.position_of(7), Some((2, 2)));
        assert_eq!(board.position_of(9), None);
    }

    #[test]
    fn test_equal_boards_hash_alike() {
        let goal = Board::solved_goal();
        let round_trip = goal
            .apply_move(Move::Up)
            .unwrap()
            .apply_move(Move::Down)
            .unwrap();
        assert_eq!(round_trip, goal);

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        goal.hash(&mut h1);
        round_trip.hash(&mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn test_display_round_trips_through_the_parser() {
        let board = fixture();
        let rendered = board.to_string();
        assert!(rendered.contains('_'));
        assert_eq!(board_from_tokens(&rendered).unwrap(), board);
    }
}
