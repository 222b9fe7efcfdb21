// Native tests for puzzle transcoding: round trips plus each rejection
// stage of the decode pipeline.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use word_quartets::engine::{Game, Puzzle, TranscodeError};

fn puzzle() -> Puzzle {
    Puzzle::from_parts([
        ("Kinds of knots", ["reef", "bowline", "hitch", "granny"]),
        ("Chess pieces", ["rook", "pawn", "bishop", "knight"]),
        ("___ house", ["light", "green", "ware", "dog"]),
        ("Anagram bait", ["stale", "least", "tales", "steal"]),
    ])
}

#[test]
fn round_trip_is_identity() {
    let original = puzzle();
    let decoded = Puzzle::decode(&original.encode()).expect("own code decodes");
    assert_eq!(decoded, original);
}

#[test]
fn game_code_round_trips_through_a_new_game() {
    let game = Game::new(puzzle());
    let revived = Game::from_code(&game.puzzle_code()).expect("code decodes");
    assert_eq!(revived.puzzle_code(), game.puzzle_code());
}

#[test]
fn rejects_non_base64_input() {
    assert_eq!(
        Puzzle::decode("!!!not a code!!!"),
        Err(TranscodeError::Base64)
    );
}

#[test]
fn rejects_base64_that_is_not_gzip() {
    let code = URL_SAFE.encode(b"plain bytes, no gzip header");
    assert_eq!(Puzzle::decode(&code), Err(TranscodeError::Gzip));
}

#[test]
fn rejects_gzip_that_is_not_a_puzzle() {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&[0xFF; 16]).unwrap();
    let code = URL_SAFE.encode(encoder.finish().unwrap());
    assert_eq!(Puzzle::decode(&code), Err(TranscodeError::Postcard));
}

#[test]
fn empty_input_is_not_a_puzzle() {
    // Empty base64 decodes to zero bytes, which cannot be a gzip stream.
    assert!(Puzzle::decode("").is_err());
}
