// Browser-side tests for the card and theme-row leaves; compiled only for
// wasm32 and run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use word_quartets::engine::{Color, Game};
use word_quartets::ui::card::{Card, ThemeSet};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn card_reflects_state_onto_markup() {
    let card = Card::create(&document(), 7);
    assert_eq!(card.index(), Some(7));
    assert!(!card.selected());
    assert!(!card.disabled());

    card.set_selected(true);
    assert!(card.element().class_list().contains("selected"));
    card.set_selected(false);
    assert!(!card.selected());

    card.set_disabled(true);
    assert!(card.element().class_list().contains("disabled"));

    card.set_index(11);
    assert_eq!(card.index(), Some(11));
}

#[wasm_bindgen_test]
fn card_render_pulls_text_from_the_game() {
    let game = Game::default();
    let card = Card::create(&document(), 3);
    card.render(&game);
    assert_eq!(
        card.element().text_content().unwrap_or_default(),
        game.card_text(3)
    );
}

#[wasm_bindgen_test]
fn clones_adopt_their_own_index() {
    let card = Card::create(&document(), 2);
    let clone = card.deep_clone();
    clone.set_index(9);
    assert_eq!(card.index(), Some(2));
    assert_eq!(clone.index(), Some(9));
}

#[wasm_bindgen_test]
fn theme_row_is_tagged_with_its_color() {
    let game = Game::default();
    let set = ThemeSet::build(&document(), &game, Color::Green);
    let classes = set.element().class_list();
    assert!(classes.contains("theme-set"));
    assert!(classes.contains("green"));
    let (theme, _) = game.matched_text(Color::Green);
    assert!(set
        .element()
        .text_content()
        .unwrap_or_default()
        .contains(theme));
}
