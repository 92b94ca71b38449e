use sogo::{Game, Player, Pos, SIZE};

pub const INPUT_CHANNELS: usize = 4;

/// Network input: one-hot planes over (channel, depth, row, column).
pub type GameRepr = [[[[f32; SIZE]; SIZE]; SIZE]; INPUT_CHANNELS];

/// Creates the tensor which represents the game as input for the network:
/// both players' occupancy, the empty cells, and a constant plane flagging
/// Player One to move.
pub fn game_repr(game: &Game) -> GameRepr {
    let mut planes = [[[[0.0; SIZE]; SIZE]; SIZE]; INPUT_CHANNELS];
    for z in 0..SIZE {
        for y in 0..SIZE {
            for x in 0..SIZE {
                let channel = match game.board[Pos { x, y, z }] {
                    Some(Player::One) => 0,
                    Some(Player::Two) => 1,
                    None => 2,
                };
                planes[channel][z][y][x] = 1.0;
            }
        }
    }
    if game.current_player() == Player::One {
        planes[3] = [[[1.0; SIZE]; SIZE]; SIZE];
    }
    planes
}

/// Rebuilds a game from the occupancy planes of an encoded state.
pub fn game_from_repr(repr: &GameRepr) -> Game {
    let mut game = Game::default();
    for z in 0..SIZE {
        for y in 0..SIZE {
            for x in 0..SIZE {
                let pos = Pos { x, y, z };
                if repr[0][z][y][x] > 0.5 {
                    game.board[pos] = Some(Player::One);
                } else if repr[1][z][y][x] > 0.5 {
                    game.board[pos] = Some(Player::Two);
                }
            }
        }
    }
    game
}
