//! The two visual leaves: an interactive word card, and the collapsed theme
//! row that replaces four cards once their group is solved.
//!
//! A card's display state is projected onto ordinary attributes and classes
//! (`data-index`, `selected`, `disabled`, `shuffling`) and refreshed through
//! an explicit [`Card::render`] call; nothing is cached between renders.

use super::animate::{self, Effect, JUMP_STAGGER_MS};
use crate::engine::{CardState, Color, Game};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{Document, HtmlBrElement, HtmlDivElement, HtmlElement, Text};

const INDEX_ATTR: &str = "data-index";

#[derive(Clone, Debug)]
pub struct Card(HtmlDivElement);

impl Card {
    /// Creates a fresh, unattached card element.
    pub fn create(document: &Document, index: usize) -> Self {
        let el: HtmlDivElement = document
            .create_element("div")
            .expect("create div")
            .unchecked_into();
        let _ = el.class_list().add_1("card");
        let card = Self(el);
        card.set_index(index);
        card
    }

    pub fn from_element(el: HtmlDivElement) -> Self {
        Self(el)
    }

    pub fn element(&self) -> &HtmlDivElement {
        &self.0
    }

    /// The card's logical puzzle index, re-read from the live attribute so
    /// swapped-in clones report their adopted position.
    pub fn index(&self) -> Option<usize> {
        self.0.get_attribute(INDEX_ATTR)?.parse().ok()
    }

    pub fn set_index(&self, index: usize) {
        let _ = self.0.set_attribute(INDEX_ATTR, &index.to_string());
    }

    pub fn selected(&self) -> bool {
        self.0.class_list().contains("selected")
    }

    pub fn set_selected(&self, selected: bool) {
        let list = self.0.class_list();
        let _ = if selected {
            list.add_1("selected")
        } else {
            list.remove_1("selected")
        };
    }

    pub fn disabled(&self) -> bool {
        self.0.class_list().contains("disabled")
    }

    pub fn set_disabled(&self, disabled: bool) {
        let list = self.0.class_list();
        let _ = if disabled {
            list.add_1("disabled")
        } else {
            list.remove_1("disabled")
        };
    }

    pub fn set_shuffling(&self, shuffling: bool) {
        let list = self.0.class_list();
        let _ = if shuffling {
            list.add_1("shuffling")
        } else {
            list.remove_1("shuffling")
        };
    }

    /// Re-pulls word text and selection state for this card's index.
    pub fn render(&self, game: &Game) {
        let Some(index) = self.index() else { return };
        let view = game.card(index);
        self.0.set_text_content(Some(view.word));
        self.set_selected(view.state == CardState::Selected);
    }

    pub fn on_click(&self, f: impl FnMut() + 'static) {
        let f: Function = Closure::<dyn FnMut()>::new(f).into_js_value().into();
        let _ = self.0.add_event_listener_with_callback("click", &f);
    }

    /// Deep-clones the element, listeners excluded.
    pub fn deep_clone(&self) -> Self {
        let node = self.0.clone_node_with_deep(true).expect("clone card node");
        Self(node.unchecked_into())
    }

    pub fn replace_with(&self, other: &Card) {
        let _ = self.0.replace_with_with_node_1(&other.0);
    }

    pub fn remove(&self) {
        self.0.remove();
    }

    pub fn shake(&self) {
        animate::play(&self.0, Effect::Shake);
    }

    /// Pop animation that yields after a fixed stagger, letting the next
    /// card start while this one is still in the air.
    pub async fn jump(&self) {
        animate::play_staggered(&self.0, Effect::Jump, JUMP_STAGGER_MS).await;
    }

    /// Pop animation awaited to completion; the last card of a selection
    /// uses this so the guess check never races a running animation.
    pub async fn jump_last(&self) {
        animate::play_through(&self.0, Effect::Jump).await;
    }
}

/// The collapsed representation of a solved group: theme name in bold over
/// its four words, tagged with the group color. Built once, never mutated.
pub struct ThemeSet(HtmlDivElement);

impl ThemeSet {
    pub fn build(document: &Document, game: &Game, color: Color) -> Self {
        let (theme, words) = game.matched_text(color);
        let el: HtmlDivElement = document
            .create_element("div")
            .expect("create div")
            .unchecked_into();
        let bold: HtmlElement = document
            .create_element("b")
            .expect("create b")
            .unchecked_into();
        bold.set_text_content(Some(theme));
        let newline: HtmlBrElement = document
            .create_element("br")
            .expect("create br")
            .unchecked_into();
        let text = Text::new_with_data(&words).expect("create text node");
        let _ = el.append_with_node_3(&bold, &newline, &text);
        let _ = el.class_list().add_2("theme-set", color.as_str());
        Self(el)
    }

    pub fn element(&self) -> &HtmlDivElement {
        &self.0
    }
}
