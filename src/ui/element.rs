//! Typed DOM element lookup.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCollection};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("element #{0} not found")]
    Missing(String),
    #[error("element #{0} has an unexpected type")]
    WrongType(String),
}

/// Looks up an element by id and downcasts it to the requested type.
pub fn by_id<T: JsCast>(document: &Document, id: impl AsRef<str>) -> Result<T, DomError> {
    let id = id.as_ref();
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(id.to_owned()))?
        .dyn_into()
        .map_err(|_| DomError::WrongType(id.to_owned()))
}

/// Snapshots a live `HtmlCollection` into a `Vec` of the requested element
/// type, keeping document order and skipping anything that fails the cast.
pub fn collect<T: JsCast>(collection: &HtmlCollection) -> Vec<T> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into().ok())
        .collect()
}
