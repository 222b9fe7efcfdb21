//! The guess sequencer: one submission at a time, driven through a small
//! state machine.
//!
//! `submit` is only reachable from `Idle`, so the machine itself serializes
//! submissions; no lock is needed and none exists. Every other mutating
//! handler (card clicks, shuffle, deselect) checks the phase before
//! touching shared state, which also keeps `RefCell` borrows from ever
//! overlapping an in-flight animation.

use super::overlay::EndState;
use super::page::Page;
use crate::engine::{Color, Verdict};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Accepting input.
    Idle,
    /// Selection pop animation running.
    Jumping,
    /// Guess being judged.
    Checking,
    /// Outcome animations (swap/shake/pop-up) running.
    Resolving,
    /// Shuffle bracket open.
    Shuffling,
    /// Won or lost; submissions rejected until a reset.
    GameOver,
}

pub struct Sequencer {
    phase: Cell<Phase>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_idle(&self) -> bool {
        self.phase.get() == Phase::Idle
    }

    pub fn set(&self, phase: Phase) {
        self.phase.set(phase);
    }

    /// Claims the machine for a submission. Fails unless idle.
    fn begin(&self) -> bool {
        if self.is_idle() {
            self.phase.set(Phase::Jumping);
            true
        } else {
            false
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one full submission: pop the selection, judge it, play out the
/// outcome, and land back in `Idle` (or `GameOver`).
pub async fn submit(page: Rc<Page>) {
    if !page.sequencer.begin() {
        return;
    }
    page.controls.submit.disable();
    page.board.borrow().set_interactive(false);

    page.selection.jump().await;

    page.sequencer.set(Phase::Checking);
    let verdict = page.game.borrow_mut().check_selection();
    page.sequencer.set(Phase::Resolving);

    match verdict {
        // Checked before the tries counter is touched; no penalty.
        Verdict::AlreadyTried => {
            page.already_guessed.pop_up().await;
            page.controls.submit.enable();
        }
        Verdict::Matched(color) => {
            resolve_match(&page, color).await;
        }
        Verdict::Won(color) => {
            resolve_match(&page, color).await;
            page.end_screen.show(EndState::Win);
        }
        Verdict::Mismatch => {
            page.dots.hide_one();
            page.selection.shake().await;
            page.controls.submit.enable();
        }
        Verdict::OneAway => {
            page.dots.hide_one();
            page.selection.shake().await;
            page.one_away.pop_up().await;
            page.controls.submit.enable();
        }
        Verdict::Lost => {
            page.dots.hide_one();
            page.selection.shake().await;
            page.end_screen.show(EndState::Lost);
        }
        // Unreachable: the submit control is disabled below four cards.
        Verdict::NotEnough => {}
    }

    match verdict {
        Verdict::Won(_) | Verdict::Lost => page.sequencer.set(Phase::GameOver),
        _ => {
            page.board.borrow().set_interactive(true);
            page.sequencer.set(Phase::Idle);
        }
    }
}

/// Plays out a successful match: swap the selection into the open row,
/// collapse it into a theme row, and rewire the displaced clones.
async fn resolve_match(page: &Rc<Page>, color: Color) {
    let picked = page.selection.current();
    let incoming = {
        let game = page.game.borrow();
        let mut board = page.board.borrow_mut();
        board.consume_match(&game, color, &picked).await
    };
    page.wire_cards(&incoming);
    page.controls.deselect.disable();
}
