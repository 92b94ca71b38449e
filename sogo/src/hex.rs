use std::num::ParseIntError;

use crate::{game::Game, player::Player, pos::Pos, NUM_CELLS, SIZE};

/// Bit index used by the external interchange format. The z axis is stored
/// reversed relative to the internal layout: `pos = (3 - z) * 16 + y * 4 + x`.
pub const fn external_bit(pos: Pos) -> u32 {
    ((SIZE - 1 - pos.z) * SIZE * SIZE + pos.y * SIZE + pos.x) as u32
}

impl Game {
    /// Decodes a pair of per-player bitboards in the external convention,
    /// un-reversing the z axis.
    pub fn from_bitboards(one: u64, two: u64) -> Game {
        let mut game = Game::default();
        for i in 0..NUM_CELLS {
            let pos = Pos {
                x: i % SIZE,
                y: (i % (SIZE * SIZE)) / SIZE,
                z: SIZE - 1 - i / (SIZE * SIZE),
            };
            if one >> i & 1 == 1 {
                game.board[pos] = Some(Player::One);
            }
            if two >> i & 1 == 1 {
                game.board[pos] = Some(Player::Two);
            }
        }
        game
    }

    /// Encodes the board as a pair of bitboards in the external convention,
    /// the exact inverse of [`from_bitboards`](Game::from_bitboards).
    pub fn bitboards(&self) -> (u64, u64) {
        let mut one = 0;
        let mut two = 0;
        for z in 0..SIZE {
            for y in 0..SIZE {
                for x in 0..SIZE {
                    let pos = Pos { x, y, z };
                    match self.board[pos] {
                        Some(Player::One) => one |= 1u64 << external_bit(pos),
                        Some(Player::Two) => two |= 1u64 << external_bit(pos),
                        None => {}
                    }
                }
            }
        }
        (one, two)
    }

    /// Parses two hex strings (with or without a `0x` prefix) into a board.
    pub fn from_hex(one: &str, two: &str) -> Result<Game, ParseIntError> {
        let parse = |s: &str| u64::from_str_radix(s.trim_start_matches("0x"), 16);
        Ok(Game::from_bitboards(parse(one)?, parse(two)?))
    }
}
