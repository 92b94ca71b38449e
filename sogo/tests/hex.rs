use sogo::*;

#[test]
fn first_drop_maps_to_the_low_bits() {
    let (game, _) = Game::from_moves(&[0]);
    // the piece rests at depth 3, which the external format stores as bit 0
    assert_eq!(external_bit(Pos { x: 0, y: 0, z: 3 }), 0);
    assert_eq!(game.bitboards(), (1, 0));
}

#[test]
fn decoding_unreverses_the_z_axis() {
    let game = Game::from_bitboards(1, 0);
    assert_eq!(game.board[Pos { x: 0, y: 0, z: 3 }], Some(Player::One));

    let game = Game::from_bitboards(1 << 48, 0);
    assert_eq!(game.board[Pos { x: 0, y: 0, z: 0 }], Some(Player::One));
}

#[test]
fn bitboards_round_trip() {
    let (game, applied) = Game::from_moves(&[0, 5, 10, 15, 0, 5, 3]);
    assert_eq!(applied.len(), 7);
    let (one, two) = game.bitboards();
    assert_eq!(Game::from_bitboards(one, two), game);
}

#[test]
fn hex_strings_parse() {
    let game = Game::from_hex("0x1", "0x10").unwrap();
    assert_eq!(game.board[Pos { x: 0, y: 0, z: 3 }], Some(Player::One));
    assert_eq!(game.board[Pos { x: 0, y: 1, z: 3 }], Some(Player::Two));
    assert!(Game::from_hex("xyz", "0x0").is_err());
}
