//! Page context and wiring.
//!
//! One `Page` object is built at game start and shared (`Rc`) into every
//! handler — there is no module-level registry of elements. It owns the
//! game state, the board, and every control; closures capture the `Rc` and
//! nothing else.

use super::board::Board;
use super::card::Card;
use super::controls::Controls;
use super::element::DomError;
use super::overlay::{Dots, EndScreen, PopUp, PopUpId};
use super::selection::SelectionTracker;
use super::sequencer::{self, Phase, Sequencer};
use crate::engine::Game;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, window, Document};

pub struct Page {
    pub(crate) game: RefCell<Game>,
    pub(crate) board: RefCell<Board>,
    pub(crate) selection: SelectionTracker,
    pub(crate) sequencer: Sequencer,
    pub(crate) controls: Controls,
    pub(crate) dots: Dots,
    pub(crate) one_away: PopUp,
    pub(crate) already_guessed: PopUp,
    pub(crate) end_screen: EndScreen,
}

/// Builds the page context from the current document and starts the game.
pub fn boot() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let game = load_game(&document);
    let page = Page::new(&document, game).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let page = Rc::new(page);
    page.board.borrow().render_all(&page.game.borrow());
    page.wire();
    Ok(())
}

/// Reads the `game` query parameter and reconstructs the puzzle from it. A
/// malformed code is reported to the console and replaced by the default
/// puzzle; it never takes the page down.
fn load_game(document: &Document) -> Game {
    let code = document
        .url()
        .ok()
        .and_then(|href| web_sys::Url::new(&href).ok())
        .and_then(|url| url.search_params().get("game"));
    match code {
        None => Game::default(),
        Some(code) => Game::from_code(&code).unwrap_or_else(|err| {
            console::warn_1(&format!("ignoring malformed puzzle code: {err}").into());
            Game::default()
        }),
    }
}

impl Page {
    fn new(document: &Document, game: Game) -> Result<Self, DomError> {
        Ok(Self {
            game: RefCell::new(game),
            board: RefCell::new(Board::new(document)?),
            selection: SelectionTracker::new(document),
            sequencer: Sequencer::new(),
            controls: Controls::new(document)?,
            dots: Dots::new(document),
            one_away: PopUp::new(document, PopUpId::OneAway)?,
            already_guessed: PopUp::new(document, PopUpId::AlreadyGuessed)?,
            end_screen: EndScreen::new(document)?,
        })
    }

    fn wire(self: &Rc<Self>) {
        let cards: Vec<Card> = self.board.borrow().cards().cloned().collect();
        self.wire_cards(&cards);

        let page = Rc::clone(self);
        self.controls
            .submit
            .bind(move || spawn_local(sequencer::submit(Rc::clone(&page))));
        self.controls.submit.disable();

        let page = Rc::clone(self);
        self.controls.deselect.bind(move || page.deselect_clicked());
        self.controls.deselect.disable();

        let page = Rc::clone(self);
        self.controls.shuffle.bind(move || page.shuffle_clicked());

        let page = Rc::clone(self);
        self.controls
            .try_again
            .bind(move || page.try_again_clicked());

        let page = Rc::clone(self);
        self.controls.see_board.bind(move || page.see_board_clicked());
    }

    /// Installs click handlers on the given cards. Called for the full grid
    /// at start and reset, and for swapped-in clones after a match.
    pub(crate) fn wire_cards(self: &Rc<Self>, cards: &[Card]) {
        for card in cards {
            let page = Rc::clone(self);
            let handle = card.clone();
            card.on_click(move || page.card_clicked(&handle));
        }
    }

    /// Toggle protocol: a card may flip only while the sequencer is idle,
    /// and the game logic rejects a fifth selection. Control enablement
    /// follows the resulting selection size.
    fn card_clicked(&self, card: &Card) {
        if !self.sequencer.is_idle() || card.disabled() {
            return;
        }
        let Some(index) = card.index() else { return };
        let Some(change) = self.game.borrow_mut().toggle_card(index) else {
            return;
        };
        card.set_selected(change.selected);
        self.selection_changed(change.len);
    }

    fn selection_changed(&self, len: usize) {
        match len {
            0 => {
                self.controls.deselect.disable();
                self.controls.submit.disable();
            }
            1 => self.controls.deselect.enable(),
            3 => self.controls.submit.disable(),
            4 => self.controls.submit.enable(),
            _ => {}
        }
    }

    fn deselect_clicked(&self) {
        if !self.sequencer.is_idle() {
            return;
        }
        self.game.borrow_mut().clear_selection();
        self.selection.deselect_all();
        self.controls.deselect.disable();
        self.controls.submit.disable();
    }

    fn shuffle_clicked(self: &Rc<Self>) {
        if !self.sequencer.is_idle() {
            return;
        }
        self.sequencer.set(Phase::Shuffling);
        let page = Rc::clone(self);
        spawn_local(async move {
            {
                let board = page.board.borrow();
                board.hide();
                page.game.borrow_mut().shuffle();
            }
            {
                let game = page.game.borrow();
                let board = page.board.borrow();
                board.show(&game).await;
            }
            page.sequencer.set(Phase::Idle);
        });
    }

    fn try_again_clicked(self: &Rc<Self>) {
        if self.sequencer.phase() != Phase::GameOver {
            return;
        }
        {
            let mut game = self.game.borrow_mut();
            game.start_over();
            self.board.borrow_mut().reset(&game);
        }
        let cards: Vec<Card> = self.board.borrow().cards().cloned().collect();
        self.wire_cards(&cards);
        self.dots.reset();
        self.controls.submit.disable();
        self.controls.deselect.disable();
        self.controls.shuffle.enable();
        self.end_screen.close();
        self.sequencer.set(Phase::Idle);
    }

    /// Closes the end screen so the player can study the final board; the
    /// game stays over and every other control goes inert.
    fn see_board_clicked(&self) {
        self.controls.shuffle.disable();
        self.controls.deselect.disable();
        self.controls.submit.disable();
        self.end_screen.close();
    }
}
