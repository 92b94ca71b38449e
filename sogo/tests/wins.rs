use sogo::*;

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

#[test]
fn pattern_table_has_76_distinct_lines() {
    assert_eq!(WINNING_PATTERNS.len(), NUM_PATTERNS);
    for &pattern in WINNING_PATTERNS.iter() {
        assert_eq!(pattern.count_ones(), 4);
    }
    for window in WINNING_PATTERNS.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn four_in_a_row_wins_along_every_direction() {
    for (dx, dy, dz) in DIRECTIONS {
        // Anchor the line at whichever corner lets it fit the cube.
        let start = |d: i32| if d < 0 { 3 } else { 0 };
        let (x, y, z) = (start(dx), start(dy), start(dz));
        let mut game = Game::default();
        for i in 0..4 {
            let pos = Pos {
                x: (x + i * dx) as usize,
                y: (y + i * dy) as usize,
                z: (z + i * dz) as usize,
            };
            game.board[pos] = Some(Player::One);
        }
        assert!(game.check_win(), "no win along ({dx}, {dy}, {dz})");
        assert!(game.check_game_over());
        assert_eq!(game.result(), GameResult::Winner(Player::One));
    }
}

#[test]
fn blocked_line_is_not_a_win() {
    let (game, applied) = Game::from_moves(&[0, 4, 1, 5, 2, 3]);
    assert_eq!(applied.len(), 6);
    assert!(!game.check_win());
    assert!(!game.check_game_over());
    assert_eq!(game.result(), GameResult::Ongoing);
}

#[test]
fn completed_column_loses_for_the_side_to_move() {
    let (game, applied) = Game::from_moves(&[0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(applied.len(), 7);
    assert_eq!(game.value_and_terminated(), (-1.0, true));
    assert_eq!(game.result(), GameResult::Winner(Player::One));
    assert_eq!(game.current_player(), Player::Two);
}

#[test]
fn results_are_mutually_exclusive() {
    for seed in [1usize, 5, 11, 23, 47, 101] {
        let mut game = Game::default();
        let mut n = seed;
        while game.result() == GameResult::Ongoing {
            let moves = game.possible_moves();
            let action = moves[n % moves.len()];
            n = n
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            game.play(action).unwrap();

            let one = game.board.count(Player::One);
            let two = game.board.count(Player::Two);
            assert!(one.abs_diff(two) <= 1);

            let (value, terminal) = game.value_and_terminated();
            assert_eq!(terminal, game.check_game_over());
            match game.result() {
                GameResult::Winner(winner) => {
                    assert!(game.check_win());
                    assert_eq!(winner, game.last_player());
                    assert_eq!((value, terminal), (-1.0, true));
                }
                GameResult::Draw => {
                    assert!(game.board.full());
                    assert!(!game.check_win());
                    assert_eq!((value, terminal), (0.0, true));
                }
                GameResult::Ongoing => {
                    assert_eq!((value, terminal), (0.0, false));
                }
            }
        }
        assert_ne!(game.result(), GameResult::Ongoing);
    }
}
