use std::collections::BTreeSet;

use lazy_static::lazy_static;

use crate::{pos::Pos, SIZE};

/// The thirteen `(dx, dy, dz)` direction vectors a line of four can run
/// along: 3 axes, 6 face diagonals, 4 space diagonals.
const DIRECTIONS: [(i32, i32, i32); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 1, 0),
    (1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (1, 1, 1),
    (1, -1, 1),
    (1, 1, -1),
    (1, -1, -1),
];

pub const NUM_PATTERNS: usize = 76;

lazy_static! {
    /// Bitmask for every four-in-a-row line on the board, in ascending
    /// order. Built once and shared read-only.
    pub static ref WINNING_PATTERNS: [u64; NUM_PATTERNS] = generate_winning_patterns();
}

/// Whether an occupancy bitboard covers some winning line completely.
pub fn is_winning(bitboard: u64) -> bool {
    WINNING_PATTERNS
        .iter()
        .any(|&pattern| bitboard & pattern == pattern)
}

fn generate_winning_patterns() -> [u64; NUM_PATTERNS] {
    let bound = SIZE as i32;
    let mut patterns = BTreeSet::new();
    for z in 0..bound {
        for y in 0..bound {
            for x in 0..bound {
                for (dx, dy, dz) in DIRECTIONS {
                    let (end_x, end_y, end_z) = (x + 3 * dx, y + 3 * dy, z + 3 * dz);
                    if !(0..bound).contains(&end_x)
                        || !(0..bound).contains(&end_y)
                        || !(0..bound).contains(&end_z)
                    {
                        continue;
                    }
                    let mut mask = 0u64;
                    for i in 0..4 {
                        let pos = Pos {
                            x: (x + i * dx) as usize,
                            y: (y + i * dy) as usize,
                            z: (z + i * dz) as usize,
                        };
                        mask |= 1 << pos.bit();
                    }
                    patterns.insert(mask);
                }
            }
        }
    }
    let patterns: Vec<u64> = patterns.into_iter().collect();
    patterns
        .try_into()
        .expect("the cube has exactly 76 winning lines")
}
