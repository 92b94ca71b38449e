mod action;
mod board;
mod error;
mod game;
mod game_result;
mod hex;
mod player;
mod pos;
mod symm;
mod wins;

pub use action::Action;
pub use board::Board;
pub use error::PlayError;
pub use game::Game;
pub use game_result::GameResult;
pub use hex::external_bit;
pub use player::Player;
pub use pos::Pos;
pub use symm::{symmetry_pairs, Symmetry};
pub use wins::{is_winning, NUM_PATTERNS, WINNING_PATTERNS};

/// Width of one horizontal layer of the cube.
pub const SIZE: usize = 4;
/// Number of drop columns, one per (row, column) pair.
pub const NUM_ACTIONS: usize = SIZE * SIZE;
/// Total number of cells.
pub const NUM_CELLS: usize = SIZE * SIZE * SIZE;
