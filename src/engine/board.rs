//! Logical board state: card order, the current selection, and solved groups.
//!
//! The board owns a permutation of the 16 [`CardId`]s. Solved groups always
//! occupy the front of the order, four slots per group; everything behind
//! them is still in play and is the only region a shuffle may touch.

use super::color::Color;
use super::puzzle::{CardId, Puzzle};
use rand::seq::SliceRandom;

pub struct LogicalBoard {
    puzzle: Puzzle,
    order: [CardId; 16],
    selection: Selection,
    solved: Vec<Color>,
}

/// Result of toggling one card, used to drive control enablement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub selected: bool,
    pub len: usize,
}

/// Why a complete-selection check did not produce a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum SelectionMiss {
    NotEnough,
    OneAway,
    Mismatch,
}

/// How a card should currently display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardState {
    Normal,
    Selected,
    Solved,
}

/// A card's word together with its display state.
pub struct CardView<'a> {
    pub word: &'a str,
    pub state: CardState,
}

impl LogicalBoard {
    pub fn new(puzzle: Puzzle) -> Self {
        let mut order = CardId::deck();
        order.shuffle(&mut rand::thread_rng());
        Self {
            puzzle,
            order,
            selection: Selection::default(),
            solved: Vec::new(),
        }
    }

    pub fn word(&self, index: usize) -> &str {
        self.puzzle.word(self.order[index])
    }

    pub fn view(&self, index: usize) -> CardView<'_> {
        let id = self.order[index];
        let state = if self.solved.contains(&id.color()) {
            CardState::Solved
        } else if self.selection.contains(id) {
            CardState::Selected
        } else {
            CardState::Normal
        };
        CardView {
            word: self.puzzle.word(id),
            state,
        }
    }

    pub fn group(&self, color: Color) -> &super::puzzle::WordGroup {
        self.puzzle.group(color)
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Toggles the card at `index`. Returns `None` when the toggle is
    /// rejected: the card belongs to a solved group, or selecting it would
    /// exceed four cards.
    pub fn toggle(&mut self, index: usize) -> Option<SelectionChange> {
        let id = self.order[index];
        if self.solved.contains(&id.color()) {
            return None;
        }
        let selected = self.selection.toggle(id)?;
        Some(SelectionChange {
            selected,
            len: self.selection.len(),
        })
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// The current selection as an order-insensitive guess, if complete.
    pub fn guess(&self) -> Option<Guess> {
        self.selection.as_guess()
    }

    /// Checks a complete selection against the groups. On a match the four
    /// cards move into the next open row, the group is marked solved and the
    /// selection clears; otherwise the board is left untouched.
    pub(super) fn test_selection(&mut self) -> Result<Color, SelectionMiss> {
        if self.selection.len() != 4 {
            return Err(SelectionMiss::NotEnough);
        }
        let best = Color::ALL
            .iter()
            .map(|&c| self.selection.iter().filter(|id| id.color() == c).count())
            .max()
            .unwrap_or(0);
        match best {
            4 => {
                let color = self.selection.iter().next().expect("selection full").color();
                self.move_matched();
                self.solved.push(color);
                self.selection.clear();
                Ok(color)
            }
            3 => Err(SelectionMiss::OneAway),
            _ => Err(SelectionMiss::Mismatch),
        }
    }

    /// Swaps the selected cards into the next open row. Cards are taken in
    /// board order so the visual swap animation and this reorder agree on
    /// where every displaced card ends up.
    fn move_matched(&mut self) {
        let mut picked: Vec<CardId> = self.selection.iter().collect();
        picked.sort_by_key(|&id| self.position(id));
        let mut top = self.solved.len() * 4;
        for id in picked {
            let pos = self.position(id);
            self.order.swap(top, pos);
            top += 1;
        }
    }

    fn position(&self, id: CardId) -> usize {
        self.order
            .iter()
            .position(|&x| x == id)
            .expect("selected card is on the board")
    }

    /// Reshuffles the in-play tail of the order.
    pub fn shuffle(&mut self) {
        let start = self.solved.len() * 4;
        self.order[start..].shuffle(&mut rand::thread_rng());
    }

    /// Clears selection and solved groups and reshuffles everything.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.solved.clear();
        self.shuffle();
    }
}

/// Up to four distinct selected cards, in selection order.
#[derive(Default, Clone, Debug)]
pub struct Selection(Vec<CardId>);

impl Selection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.0.iter().copied()
    }

    /// Adds or removes `id`. Returns the card's new selected state, or
    /// `None` if a fifth card was rejected.
    fn toggle(&mut self, id: CardId) -> Option<bool> {
        if let Some(at) = self.0.iter().position(|&x| x == id) {
            self.0.remove(at);
            Some(false)
        } else if self.0.len() < 4 {
            self.0.push(id);
            Some(true)
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn as_guess(&self) -> Option<Guess> {
        let ids: [CardId; 4] = self.0.as_slice().try_into().ok()?;
        Some(Guess::new(ids))
    }
}

/// A complete guess, normalized so equality is order-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guess([CardId; 4]);

impl Guess {
    fn new(mut ids: [CardId; 4]) -> Self {
        ids.sort();
        Self(ids)
    }
}
