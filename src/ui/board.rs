//! The visible board: owns every card element, the count of slots already
//! consumed by solved rows, and the swap-and-collapse sequence that turns a
//! matched selection into a theme row.
//!
//! Structural DOM mutation of the board happens only here; cards mutate
//! their own attributes and nothing else.

use super::animate::{self, Effect, SHUFFLE_SETTLE_MS};
use super::card::{Card, ThemeSet};
use super::element::{self, DomError};
use crate::engine::{Color, Game};
use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, HtmlDivElement};

const CARD_COUNT: usize = 16;
const ROW: usize = 4;

pub struct Board {
    document: Document,
    root: HtmlDivElement,
    cards: Vec<Card>,
    start_offset: usize,
}

impl Board {
    /// Adopts the 16 card elements under `#board`, or rebuilds them if the
    /// markup doesn't supply a full grid.
    pub fn new(document: &Document) -> Result<Self, DomError> {
        let root: HtmlDivElement = element::by_id(document, "board")?;
        let cards: Vec<Card> = element::collect(&root.get_elements_by_class_name("card"))
            .into_iter()
            .map(Card::from_element)
            .collect();
        let mut board = Self {
            document: document.clone(),
            root,
            cards,
            start_offset: 0,
        };
        if board.cards.len() != CARD_COUNT {
            board.rebuild();
        }
        Ok(board)
    }

    /// Maps a logical card index to its live element; `None` once the index
    /// falls inside a consumed row.
    pub fn card_at(&self, logical: usize) -> Option<&Card> {
        let live = logical.checked_sub(self.start_offset)?;
        self.cards.get(live)
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Re-projects every live card from game state: index attribute from
    /// its position, then text and selection state.
    pub fn render_all(&self, game: &Game) {
        for (pos, card) in self.cards.iter().enumerate() {
            card.set_index(self.start_offset + pos);
            card.render(game);
        }
    }

    pub fn set_interactive(&self, interactive: bool) {
        for card in &self.cards {
            card.set_disabled(!interactive);
        }
    }

    /// Swaps a freshly matched selection into the open row, collapses that
    /// row into a theme set, and advances the consumed offset by one row.
    ///
    /// The selection arrives in document order, mirroring the reorder the
    /// game logic already applied, so both sides agree on where displaced
    /// cards land. Each moving card's translation is computed from the
    /// bounding-box delta to its destination slot; all translations fire
    /// together, only the final pair is awaited, and the node exchange
    /// happens afterwards via clone-and-replace so no in-flight animation
    /// sees its element mutated.
    ///
    /// Returns the displaced clones that now live outside the collapsed
    /// row; they are fresh nodes and need their click handlers rewired.
    pub async fn consume_match(&mut self, game: &Game, color: Color, picked: &[Card]) -> Vec<Card> {
        // Final arrangement: slots[s] = live position of the element that
        // ends up in slot s, found by replaying the same pairwise swaps the
        // game logic performs.
        let mut slots: Vec<usize> = (0..self.cards.len()).collect();
        let mut last_origin = None;
        for (open_slot, card) in picked.iter().enumerate() {
            let Some(origin) = card
                .index()
                .and_then(|ix| ix.checked_sub(self.start_offset))
                .filter(|&p| p < self.cards.len())
            else {
                continue;
            };
            let current = slots
                .iter()
                .position(|&p| p == origin)
                .expect("origin slot tracked");
            slots.swap(open_slot, current);
            last_origin = Some(origin);
        }

        self.animate_swaps(&slots, last_origin).await;

        // Exchange the nodes. Every slot whose occupant changed gets a deep
        // clone of the arriving element, stamped with the slot's index.
        let mut incoming = Vec::new();
        let previous = self.cards.clone();
        for (slot, &origin) in slots.iter().enumerate() {
            if slot == origin {
                continue;
            }
            let clone = previous[origin].deep_clone();
            clone.set_index(self.start_offset + slot);
            previous[slot].replace_with(&clone);
            if slot >= ROW {
                incoming.push(clone.clone());
            }
            self.cards[slot] = clone;
        }

        // Collapse the now-front row into a single theme row.
        let set = ThemeSet::build(&self.document, game, color);
        let row: Vec<Card> = self.cards.drain(0..ROW).collect();
        let _ = self
            .root
            .insert_before(set.element(), Some(row[0].element()));
        for card in row {
            card.remove();
        }
        self.start_offset += ROW;
        self.render_all(game);
        incoming
    }

    async fn animate_swaps(&self, slots: &[usize], last_origin: Option<usize>) {
        let rects: Vec<_> = self
            .cards
            .iter()
            .map(|c| c.element().get_bounding_client_rect())
            .collect();
        let mut fired = Vec::new();
        for (slot, &origin) in slots.iter().enumerate() {
            if slot == origin {
                continue;
            }
            let dx = rects[slot].x() - rects[origin].x();
            let dy = rects[slot].y() - rects[origin].y();
            let el = self.cards[origin].element();
            if let Some(finished) = animate::finished(el, Effect::Slide { dx, dy }) {
                fired.push((origin, finished));
            }
        }
        // All translations share a start tick and a duration, so waiting on
        // the last picked card's swap is the barrier for the whole set. If
        // that card was already in place, wait on everything that moved.
        let has_last = last_origin.is_some_and(|last| fired.iter().any(|(o, _)| *o == last));
        for (origin, finished) in fired {
            if !has_last || Some(origin) == last_origin {
                let _ = finished.await;
            }
        }
    }

    /// Discards everything on the board and recreates the 16 cards in
    /// index order.
    pub fn reset(&mut self, game: &Game) {
        self.rebuild();
        self.render_all(game);
    }

    fn rebuild(&mut self) {
        self.root.set_inner_html("");
        self.cards = (0..CARD_COUNT)
            .map(|index| {
                let card = Card::create(&self.document, index);
                let _ = self.root.append_child(card.element());
                card
            })
            .collect();
        self.start_offset = 0;
    }

    /// Opens the shuffle bracket: all cards face away and stop reacting.
    pub fn hide(&self) {
        for card in &self.cards {
            card.set_shuffling(true);
            card.set_disabled(true);
        }
    }

    /// Closes the shuffle bracket: re-renders from the reshuffled game,
    /// waits out the settle delay, then re-enables interaction.
    pub async fn show(&self, game: &Game) {
        self.render_all(game);
        TimeoutFuture::new(SHUFFLE_SETTLE_MS).await;
        for card in &self.cards {
            card.set_shuffling(false);
            card.set_disabled(false);
        }
    }
}
