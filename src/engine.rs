//! The game-logic module: puzzle rules, selection, guess checking, and
//! puzzle transcoding. Deliberately free of DOM types so it runs (and is
//! tested) natively; the front-end in [`crate::ui`] is its only browser
//! consumer.

mod board;
pub mod color;
mod puzzle;

pub use board::{CardState, CardView, LogicalBoard, SelectionChange};
pub use color::Color;
pub use puzzle::{CardId, Puzzle, TranscodeError, WordGroup};

use board::{Guess, SelectionMiss};

/// Mistakes allowed before the game is lost.
pub const MAX_MISTAKES: u8 = 4;

/// Everything a submitted guess can come back as. Not an error type: each
/// variant is an expected control-flow branch for the front-end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Fourth group found; the game is over.
    Won(Color),
    /// A group found, more remain.
    Matched(Color),
    /// No group close to matching.
    Mismatch,
    /// Exactly three of the four cards share a group.
    OneAway,
    /// Fewer than four cards selected.
    NotEnough,
    /// Fourth mistake; the game is over.
    Lost,
    /// This exact set of four was already guessed and rejected.
    AlreadyTried,
}

/// One play-through of a puzzle: board state plus mistake bookkeeping.
pub struct Game {
    mistakes: u8,
    successes: u8,
    board: LogicalBoard,
    attempts: Vec<Guess>,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            mistakes: 0,
            successes: 0,
            board: LogicalBoard::new(puzzle),
            attempts: Vec::new(),
        }
    }

    pub fn from_code(code: &str) -> Result<Self, TranscodeError> {
        Ok(Self::new(Puzzle::decode(code)?))
    }

    pub fn puzzle_code(&self) -> String {
        self.board.puzzle().encode()
    }

    /// Toggles selection of the card at logical `index`; `None` when
    /// rejected (solved group, or a fifth card).
    pub fn toggle_card(&mut self, index: usize) -> Option<SelectionChange> {
        self.board.toggle(index)
    }

    pub fn clear_selection(&mut self) {
        self.board.deselect_all();
    }

    pub fn selection_len(&self) -> usize {
        self.board.selection_len()
    }

    /// Judges the current selection.
    ///
    /// A repeat of an already-rejected guess is reported first and changes
    /// nothing, in particular not the mistake count. Otherwise a wrong
    /// complete guess is recorded and costs a mistake; the fourth mistake
    /// loses the game, the fourth matched group wins it.
    pub fn check_selection(&mut self) -> Verdict {
        if let Some(guess) = self.board.guess() {
            if self.attempts.contains(&guess) {
                return Verdict::AlreadyTried;
            }
        }

        let almost_won = self.successes == 3;
        let almost_lost = self.mistakes == MAX_MISTAKES - 1;

        match self.board.test_selection() {
            Ok(color) => {
                self.successes += 1;
                if almost_won {
                    Verdict::Won(color)
                } else {
                    Verdict::Matched(color)
                }
            }
            Err(SelectionMiss::NotEnough) => Verdict::NotEnough,
            Err(miss) => {
                if let Some(guess) = self.board.guess() {
                    self.attempts.push(guess);
                }
                self.mistakes += 1;
                if almost_lost {
                    Verdict::Lost
                } else if miss == SelectionMiss::OneAway {
                    Verdict::OneAway
                } else {
                    Verdict::Mismatch
                }
            }
        }
    }

    pub fn shuffle(&mut self) {
        self.board.shuffle();
    }

    pub fn card_text(&self, index: usize) -> &str {
        self.board.word(index)
    }

    pub fn card(&self, index: usize) -> CardView<'_> {
        self.board.view(index)
    }

    /// Theme and comma-joined words of a solved group, for the collapsed
    /// theme row.
    pub fn matched_text(&self, color: Color) -> (&str, String) {
        let group = self.board.group(color);
        (group.theme(), group.joined())
    }

    pub fn solved_count(&self) -> usize {
        self.board.solved_count()
    }

    pub fn mistakes_remaining(&self) -> u8 {
        MAX_MISTAKES - self.mistakes
    }

    /// Back to a fresh play-through of the same puzzle.
    pub fn start_over(&mut self) {
        self.mistakes = 0;
        self.successes = 0;
        self.attempts.clear();
        self.board.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Puzzle::default())
    }
}
