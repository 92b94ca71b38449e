use arrayvec::ArrayVec;

use crate::{action::Action, board::Board, game::Game, pos::Pos, NUM_ACTIONS, SIZE};

/// The eight symmetries of the square acting on the row/column plane.
pub trait Symmetry: Sized {
    fn symmetries(self) -> [Self; 8];
}

impl Symmetry for Pos {
    fn symmetries(self) -> [Self; 8] {
        [
            self,
            self.rotate(),
            self.rotate().rotate(),
            self.rotate().rotate().rotate(),
            self.mirror(),
            self.mirror().rotate(),
            self.mirror().rotate().rotate(),
            self.mirror().rotate().rotate().rotate(),
        ]
    }
}

impl Symmetry for Action {
    fn symmetries(self) -> [Self; 8] {
        [
            self,
            self.rotate(),
            self.rotate().rotate(),
            self.rotate().rotate().rotate(),
            self.mirror(),
            self.mirror().rotate(),
            self.mirror().rotate().rotate(),
            self.mirror().rotate().rotate().rotate(),
        ]
    }
}

impl Symmetry for Board {
    fn symmetries(self) -> [Self; 8] {
        let mut boards = [self; 8];
        for z in 0..SIZE {
            for y in 0..SIZE {
                for x in 0..SIZE {
                    let pos = Pos { x, y, z };
                    for (i, sym) in pos.symmetries().into_iter().enumerate().skip(1) {
                        boards[i][sym] = self[pos];
                    }
                }
            }
        }
        boards
    }
}

impl Symmetry for Game {
    fn symmetries(self) -> [Self; 8] {
        self.board.symmetries().map(|board| Game { board })
    }
}

impl Symmetry for [f32; NUM_ACTIONS] {
    fn symmetries(self) -> [Self; 8] {
        let mut policies = [self; 8];
        for action in Action::all() {
            for (i, sym) in action.symmetries().into_iter().enumerate().skip(1) {
                policies[i][sym.index()] = self[action.index()];
            }
        }
        policies
    }
}

/// Symmetric copies of a position and its policy for data augmentation.
/// Duplicate boards collapse to their first occurrence, so the identity
/// always survives.
pub fn symmetry_pairs(
    game: Game,
    policy: [f32; NUM_ACTIONS],
) -> ArrayVec<(Game, [f32; NUM_ACTIONS]), 8> {
    let mut pairs = ArrayVec::new();
    for (game, policy) in game.symmetries().into_iter().zip(policy.symmetries()) {
        if !pairs.iter().any(|&(seen, _)| seen == game) {
            pairs.push((game, policy));
        }
    }
    pairs
}
