// Integration tests (native) for the game logic.
// These avoid wasm/browser APIs and exercise the pure rules so they run
// under `cargo test` on the host.

use word_quartets::engine::{CardState, Color, Game, Puzzle, Verdict, MAX_MISTAKES};

fn puzzle() -> Puzzle {
    Puzzle::from_parts([
        ("yellow things", ["sun", "corn", "lemon", "canary"]),
        ("green things", ["grass", "lime", "frog", "jade"]),
        ("blue things", ["sky", "ocean", "jeans", "sapphire"]),
        ("purple things", ["plum", "lilac", "grape", "violet"]),
    ])
}

// The board order is shuffled at construction, so tests locate cards by word.
fn indices_of(game: &Game, words: [&str; 4]) -> Vec<usize> {
    (0..16)
        .filter(|&i| words.contains(&game.card_text(i)))
        .collect()
}

fn select(game: &mut Game, indices: &[usize]) {
    for &i in indices {
        game.toggle_card(i).expect("toggle accepted");
    }
}

#[test]
fn selection_is_capped_at_four() {
    let mut game = Game::new(puzzle());
    for i in 0..4 {
        assert!(game.toggle_card(i).is_some());
    }
    assert_eq!(game.selection_len(), 4);
    assert!(game.toggle_card(4).is_none(), "fifth card must be rejected");
    assert_eq!(game.selection_len(), 4);

    // Toggling a selected card off is always allowed.
    let change = game.toggle_card(2).expect("deselect accepted");
    assert!(!change.selected);
    assert_eq!(change.len, 3);
}

#[test]
fn clearing_empties_the_selection() {
    let mut game = Game::new(puzzle());
    select(&mut game, &[0, 1, 2]);
    game.clear_selection();
    assert_eq!(game.selection_len(), 0);
}

#[test]
fn matched_group_collapses_into_the_top_row() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    select(&mut game, &yellow);

    assert_eq!(game.check_selection(), Verdict::Matched(Color::Yellow));
    assert_eq!(game.solved_count(), 1);
    assert_eq!(game.selection_len(), 0, "match clears the selection");
    assert_eq!(game.mistakes_remaining(), MAX_MISTAKES);

    // The four yellow cards now occupy the first row, in board order.
    for i in 0..4 {
        assert_eq!(game.card(i).state, CardState::Solved);
        assert!(["sun", "corn", "lemon", "canary"].contains(&game.card_text(i)));
    }
    for i in 4..16 {
        assert_eq!(game.card(i).state, CardState::Normal);
    }
}

#[test]
fn solved_cards_reject_further_toggles() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    select(&mut game, &yellow);
    game.check_selection();
    assert!(game.toggle_card(0).is_none());
}

#[test]
fn fourth_group_wins() {
    let mut game = Game::new(puzzle());
    let groups: [(Color, [&str; 4]); 4] = [
        (Color::Yellow, ["sun", "corn", "lemon", "canary"]),
        (Color::Green, ["grass", "lime", "frog", "jade"]),
        (Color::Blue, ["sky", "ocean", "jeans", "sapphire"]),
        (Color::Purple, ["plum", "lilac", "grape", "violet"]),
    ];
    for (round, (color, words)) in groups.into_iter().enumerate() {
        // Matches reorder the board, so indices are found fresh each round.
        let indices = indices_of(&game, words);
        select(&mut game, &indices);
        let verdict = game.check_selection();
        if round == 3 {
            assert_eq!(verdict, Verdict::Won(color));
        } else {
            assert_eq!(verdict, Verdict::Matched(color));
        }
    }
    assert_eq!(game.solved_count(), 4);
    assert_eq!(game.mistakes_remaining(), MAX_MISTAKES);
}

#[test]
fn mismatch_costs_a_try_and_keeps_the_selection() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    let green = indices_of(&game, ["grass", "lime", "frog", "jade"]);
    select(&mut game, &[yellow[0], yellow[1], green[0], green[1]]);

    assert_eq!(game.check_selection(), Verdict::Mismatch);
    assert_eq!(game.mistakes_remaining(), MAX_MISTAKES - 1);
    assert_eq!(game.selection_len(), 4, "player must deselect manually");
}

#[test]
fn three_of_a_group_is_one_away() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    let green = indices_of(&game, ["grass", "lime", "frog", "jade"]);
    select(&mut game, &[yellow[0], yellow[1], yellow[2], green[0]]);

    assert_eq!(game.check_selection(), Verdict::OneAway);
    assert_eq!(game.mistakes_remaining(), MAX_MISTAKES - 1);
}

#[test]
fn one_away_is_found_regardless_of_selection_order() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    let green = indices_of(&game, ["grass", "lime", "frog", "jade"]);
    // The odd card first: the near-group is still detected.
    select(&mut game, &[green[0], yellow[0], yellow[1], yellow[2]]);

    assert_eq!(game.check_selection(), Verdict::OneAway);
}

#[test]
fn repeating_a_failed_guess_is_free() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    let green = indices_of(&game, ["grass", "lime", "frog", "jade"]);
    let first = [yellow[0], yellow[1], green[0], green[1]];
    select(&mut game, &first);

    assert_eq!(game.check_selection(), Verdict::Mismatch);
    let after_first = game.mistakes_remaining();

    // The selection is still populated; submitting again is the same guess.
    assert_eq!(game.check_selection(), Verdict::AlreadyTried);
    assert_eq!(game.mistakes_remaining(), after_first);

    // Still free after the mistake count has moved in between.
    game.clear_selection();
    select(&mut game, &[yellow[0], yellow[1], yellow[2], green[0]]);
    assert_eq!(game.check_selection(), Verdict::OneAway);
    let after_second = game.mistakes_remaining();

    game.clear_selection();
    // Same four cards as the first guess, selected in a different order.
    select(&mut game, &[green[1], green[0], yellow[1], yellow[0]]);
    assert_eq!(game.check_selection(), Verdict::AlreadyTried);
    assert_eq!(game.mistakes_remaining(), after_second);
}

#[test]
fn fourth_mistake_loses() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    let green = indices_of(&game, ["grass", "lime", "frog", "jade"]);

    for (round, &odd) in green.iter().enumerate() {
        select(&mut game, &[yellow[0], yellow[1], yellow[2], odd]);
        let verdict = game.check_selection();
        if round == 3 {
            assert_eq!(verdict, Verdict::Lost);
        } else {
            assert_eq!(verdict, Verdict::OneAway);
        }
        game.clear_selection();
    }
    assert_eq!(game.mistakes_remaining(), 0);
}

#[test]
fn incomplete_selection_changes_nothing() {
    let mut game = Game::new(puzzle());
    select(&mut game, &[0, 1, 2]);
    assert_eq!(game.check_selection(), Verdict::NotEnough);
    assert_eq!(game.mistakes_remaining(), MAX_MISTAKES);
    assert_eq!(game.selection_len(), 3);
}

#[test]
fn start_over_restores_a_fresh_board() {
    let mut game = Game::new(puzzle());
    let yellow = indices_of(&game, ["sun", "corn", "lemon", "canary"]);
    select(&mut game, &yellow);
    game.check_selection();
    let green = indices_of(&game, ["grass", "lime", "frog", "jade"]);
    let blue = indices_of(&game, ["sky", "ocean", "jeans", "sapphire"]);
    select(&mut game, &[green[0], green[1], blue[0], blue[1]]);
    game.check_selection();

    game.start_over();
    assert_eq!(game.solved_count(), 0);
    assert_eq!(game.selection_len(), 0);
    assert_eq!(game.mistakes_remaining(), MAX_MISTAKES);
    for i in 0..16 {
        assert_eq!(game.card(i).state, CardState::Normal);
    }

    // Previous attempts were forgotten: the old mismatch is judged afresh.
    let green = indices_of(&game, ["grass", "lime", "frog", "jade"]);
    let blue = indices_of(&game, ["sky", "ocean", "jeans", "sapphire"]);
    select(&mut game, &[green[0], green[1], blue[0], blue[1]]);
    assert_eq!(game.check_selection(), Verdict::Mismatch);
}

#[test]
fn theme_text_matches_the_puzzle() {
    let game = Game::new(puzzle());
    let (theme, words) = game.matched_text(Color::Blue);
    assert_eq!(theme, "blue things");
    assert_eq!(words, "sky, ocean, jeans, sapphire");
}
