//! Passive observers of guess outcomes: transient pop-up dialogs, the
//! remaining-tries dots, and the win/lose end screen.

use super::animate::{self, Effect};
use super::element::{self, DomError};
use strum::AsRefStr;
use web_sys::{Document, DomTokenList, HtmlCollection, HtmlDialogElement, HtmlSpanElement};

#[derive(AsRefStr, Clone, Copy)]
pub enum PopUpId {
    #[strum(serialize = "away")]
    OneAway,
    #[strum(serialize = "already")]
    AlreadyGuessed,
}

/// A dialog that fades in, holds for a moment and fades back out.
pub struct PopUp(HtmlDialogElement);

impl PopUp {
    pub fn new(document: &Document, id: PopUpId) -> Result<Self, DomError> {
        Ok(Self(element::by_id(document, id)?))
    }

    pub async fn pop_up(&self) {
        self.0.show();
        animate::play_through(&self.0, Effect::PopUp).await;
        self.0.close();
    }
}

/// The remaining-tries indicator: one dot per mistake still allowed.
pub struct Dots {
    handle: HtmlCollection,
}

impl Dots {
    pub fn new(document: &Document) -> Self {
        Self {
            handle: document.get_elements_by_class_name("dot"),
        }
    }

    fn dots(&self) -> Vec<HtmlSpanElement> {
        element::collect(&self.handle)
    }

    /// Hides the right-most visible dot.
    pub fn hide_one(&self) {
        if let Some(dot) = self
            .dots()
            .into_iter()
            .rev()
            .find(|dot| !dot.class_list().contains("hidden"))
        {
            let _ = dot.class_list().add_1("hidden");
        }
    }

    pub fn reset(&self) {
        for dot in self.dots() {
            let _ = dot.class_list().remove_1("hidden");
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum EndState {
    Win,
    Lost,
}

/// Modal shown when the game ends, with a win pane and a lose pane.
pub struct EndScreen {
    modal: HtmlDialogElement,
    win: DomTokenList,
    lose: DomTokenList,
}

impl EndScreen {
    pub fn new(document: &Document) -> Result<Self, DomError> {
        let modal: HtmlDialogElement = element::by_id(document, "endscreen")?;
        let win = element::by_id::<web_sys::HtmlDivElement>(document, "win")?.class_list();
        let lose = element::by_id::<web_sys::HtmlDivElement>(document, "lose")?.class_list();
        Ok(Self { modal, win, lose })
    }

    pub fn show(&self, state: EndState) {
        let _ = self.modal.show_modal();
        let pane = match state {
            EndState::Win => &self.win,
            EndState::Lost => &self.lose,
        };
        let _ = pane.add_1("enabled");
    }

    pub fn close(&self) {
        self.modal.close();
        let _ = self.win.remove_1("enabled");
        let _ = self.lose.remove_1("enabled");
    }
}
