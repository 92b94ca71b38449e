use std::fmt::{self, Display};

use arrayvec::ArrayVec;

use crate::{
    action::Action,
    board::Board,
    error::PlayError,
    game_result::GameResult,
    player::Player,
    pos::Pos,
    wins::is_winning,
    NUM_ACTIONS, SIZE,
};

/// A position in play. There is no stored side to move: it is derived from
/// the piece counts, so two games with the same pieces are the same
/// position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Game {
    pub board: Board,
}

impl Game {
    pub fn current_player(&self) -> Player {
        if self.board.count(Player::One) == self.board.count(Player::Two) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The player who made the previous move.
    pub fn last_player(&self) -> Player {
        self.current_player().next()
    }

    /// One entry per column, true iff the column's top cell is empty.
    pub fn valid_moves(&self) -> [bool; NUM_ACTIONS] {
        let mut valid = [false; NUM_ACTIONS];
        for action in Action::all() {
            let top = Pos {
                x: action.col(),
                y: action.row(),
                z: 0,
            };
            valid[action.index()] = self.board[top].is_none();
        }
        valid
    }

    /// The playable columns in ascending action order.
    pub fn possible_moves(&self) -> ArrayVec<Action, NUM_ACTIONS> {
        let valid = self.valid_moves();
        Action::all().filter(|a| valid[a.index()]).collect()
    }

    /// Destination of a hypothetical drop, or `None` when the column is
    /// full.
    pub fn landing_position(&self, action: Action) -> Option<Pos> {
        self.board.drop_depth(action).map(|z| Pos {
            x: action.col(),
            y: action.row(),
            z,
        })
    }

    /// Drops the current player's piece into the column, letting it fall to
    /// the lowest empty depth.
    pub fn play(&mut self, action: Action) -> Result<(), PlayError> {
        let pos = self
            .landing_position(action)
            .ok_or(PlayError::ColumnFull)?;
        self.board[pos] = Some(self.current_player());
        Ok(())
    }

    /// Whether the last mover completed a line of four.
    pub fn check_win(&self) -> bool {
        is_winning(self.board.bitboard(self.last_player()))
    }

    /// Whether the game has ended in a win or a full board. A line held by
    /// the current mover is unreachable under legal play sequencing, but the
    /// check is kept alongside the last mover's.
    pub fn check_game_over(&self) -> bool {
        is_winning(self.board.bitboard(self.last_player()))
            || is_winning(self.board.bitboard(self.current_player()))
            || self.board.full()
    }

    /// Outcome from the perspective of the side to move, and whether the
    /// game has ended. A completed line means the side to move has lost.
    pub fn value_and_terminated(&self) -> (f32, bool) {
        if self.check_win() {
            (-1.0, true)
        } else if self.board.full() {
            (0.0, true)
        } else {
            (0.0, false)
        }
    }

    pub fn result(&self) -> GameResult {
        if self.check_win() {
            GameResult::Winner(self.last_player())
        } else if self.board.full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Replays a move list from the empty board, stopping at the first
    /// action that is out of range, illegal, or follows the end of the game.
    /// The applied prefix is returned next to the resulting state; a caller
    /// detects truncation by comparing its length with the input's.
    pub fn from_moves(moves: &[usize]) -> (Game, Vec<Action>) {
        let mut game = Game::default();
        let mut applied = Vec::with_capacity(moves.len());
        for &index in moves {
            let action = match Action::new(index) {
                Ok(action) => action,
                Err(_) => break,
            };
            if game.play(action).is_err() {
                break;
            }
            applied.push(action);
            if game.check_game_over() {
                break;
            }
        }
        (game, applied)
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..SIZE {
            writeln!(f, "layer {z}:")?;
            for y in 0..SIZE {
                for x in 0..SIZE {
                    let symbol = match self.board[Pos { x, y, z }] {
                        Some(Player::One) => " X",
                        Some(Player::Two) => " O",
                        None => " .",
                    };
                    write!(f, "{symbol}")?;
                }
                writeln!(f)?;
            }
        }
        write!(f, "to move: {:?}", self.current_player())
    }
}
