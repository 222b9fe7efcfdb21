//! Game control buttons.
//!
//! One parameterized [`Button`] covers every control: an element handle
//! plus its retained callback. Disabling hides the button and detaches the
//! listener; enabling reverses both.

use super::element::{self, DomError};
use std::cell::RefCell;
use strum::AsRefStr;
use wasm_bindgen::closure::Closure;
use web_sys::js_sys::Function;
use web_sys::{Document, HtmlDivElement};

#[derive(AsRefStr, Clone, Copy)]
pub enum ControlId {
    #[strum(serialize = "submit")]
    Submit,
    #[strum(serialize = "deselect")]
    DeselectAll,
    #[strum(serialize = "shuffle")]
    Shuffle,
    #[strum(serialize = "again")]
    TryAgain,
    #[strum(serialize = "see-board")]
    SeeBoard,
}

pub struct Button {
    el: HtmlDivElement,
    callback: RefCell<Option<Function>>,
}

impl Button {
    pub fn new(document: &Document, id: ControlId) -> Result<Self, DomError> {
        let el = element::by_id(document, id)?;
        Ok(Self {
            el,
            callback: RefCell::new(None),
        })
    }

    /// Installs the button's click handler and remembers it so
    /// enable/disable can re-attach and detach it.
    pub fn bind(&self, f: impl FnMut() + 'static) {
        let f: Function = Closure::<dyn FnMut()>::new(f).into_js_value().into();
        let _ = self.el.add_event_listener_with_callback("click", &f);
        *self.callback.borrow_mut() = Some(f);
    }

    pub fn enable(&self) {
        let _ = self.el.class_list().remove_1("hidden");
        if let Some(f) = self.callback.borrow().as_ref() {
            let _ = self.el.add_event_listener_with_callback("click", f);
        }
    }

    pub fn disable(&self) {
        let _ = self.el.class_list().add_1("hidden");
        if let Some(f) = self.callback.borrow().as_ref() {
            let _ = self.el.remove_event_listener_with_callback("click", f);
        }
    }
}

/// All five controls, looked up once at page start.
pub struct Controls {
    pub submit: Button,
    pub deselect: Button,
    pub shuffle: Button,
    pub try_again: Button,
    pub see_board: Button,
}

impl Controls {
    pub fn new(document: &Document) -> Result<Self, DomError> {
        Ok(Self {
            submit: Button::new(document, ControlId::Submit)?,
            deselect: Button::new(document, ControlId::DeselectAll)?,
            shuffle: Button::new(document, ControlId::Shuffle)?,
            try_again: Button::new(document, ControlId::TryAgain)?,
            see_board: Button::new(document, ControlId::SeeBoard)?,
        })
    }
}
