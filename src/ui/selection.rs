//! Tracks the currently selected cards by querying the live DOM.
//!
//! The tracker never caches across a mutation: `current()` re-reads the
//! `selected` class collection every time, so it stays correct through
//! swaps, shuffles and resets.

use super::animate::SHAKE_SETTLE_MS;
use super::card::Card;
use super::element;
use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, HtmlCollection};

pub struct SelectionTracker {
    handle: HtmlCollection,
}

impl SelectionTracker {
    pub fn new(document: &Document) -> Self {
        Self {
            handle: document.get_elements_by_class_name("selected"),
        }
    }

    /// The selected cards, fresh from the DOM, in document order.
    pub fn current(&self) -> Vec<Card> {
        element::collect(&self.handle)
            .into_iter()
            .map(Card::from_element)
            .collect()
    }

    /// Pops each selected card left to right. The first three starts are
    /// staggered; the last card's animation is awaited to completion so the
    /// caller can check the guess without racing a running animation.
    pub async fn jump(&self) {
        let cards = self.current();
        let Some((last, rest)) = cards.split_last() else {
            return;
        };
        for card in rest {
            card.jump().await;
        }
        last.jump_last().await;
    }

    /// Shakes every selected card at once, then waits out a settle delay.
    pub async fn shake(&self) {
        for card in self.current() {
            card.shake();
        }
        TimeoutFuture::new(SHAKE_SETTLE_MS).await;
    }

    /// Clears the selected flag on every selected card.
    pub fn deselect_all(&self) {
        for card in self.current() {
            card.set_selected(false);
        }
    }
}
