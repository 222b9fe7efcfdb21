//! Puzzle content and transcoding.
//!
//! A puzzle is four themed groups of four words. Puzzles travel between
//! pages as a compact URL-safe string: postcard bytes, gzip-compressed,
//! base64-encoded. Decoding reverses the pipeline and reports which stage
//! rejected the input.

use super::color::Color;
use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use flate2::write::{GzDecoder, GzEncoder};
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::array;
use std::io::Write;
use thiserror::Error;

/// One themed set of four words.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WordGroup {
    theme: String,
    words: [String; 4],
}

impl WordGroup {
    pub fn new(theme: &str, words: [&str; 4]) -> Self {
        Self {
            theme: theme.to_owned(),
            words: array::from_fn(|i| words[i].to_owned()),
        }
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn words(&self) -> [&str; 4] {
        self.words.each_ref().map(String::as_str)
    }

    /// Comma-joined word list, as displayed in a collapsed theme row.
    pub fn joined(&self) -> String {
        self.words.join(", ")
    }
}

/// A full 4x4 puzzle, one group per [`Color`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    groups: [WordGroup; 4],
}

impl Puzzle {
    /// Builds a puzzle from four `(theme, words)` parts, in [`Color::ALL`]
    /// order.
    pub fn from_parts(parts: [(&str, [&str; 4]); 4]) -> Self {
        Self {
            groups: parts.map(|(theme, words)| WordGroup::new(theme, words)),
        }
    }

    pub fn group(&self, color: Color) -> &WordGroup {
        &self.groups[color.index()]
    }

    pub fn word(&self, id: CardId) -> &str {
        self.group(id.color()).word(id.word_index())
    }

    /// Serializes to a URL-safe code string.
    pub fn encode(&self) -> String {
        let bytes = postcard::to_allocvec(self).expect("puzzle serializes");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&bytes).expect("gzip into memory");
        let compressed = encoder.finish().expect("gzip into memory");
        URL_SAFE.encode(compressed)
    }

    /// Rebuilds a puzzle from a code produced by [`Puzzle::encode`].
    pub fn decode(code: &str) -> Result<Self, TranscodeError> {
        let compressed = URL_SAFE
            .decode(code)
            .map_err(|_| TranscodeError::Base64)?;
        let mut decoder = GzDecoder::new(Vec::new());
        decoder
            .write_all(&compressed)
            .map_err(|_| TranscodeError::Gzip)?;
        let bytes = decoder.finish().map_err(|_| TranscodeError::Gzip)?;
        postcard::from_bytes(&bytes).map_err(|_| TranscodeError::Postcard)
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::from_parts([
            ("Kinds of bread", ["rye", "pita", "naan", "brioche"]),
            ("Sea creatures", ["ray", "eel", "squid", "urchin"]),
            ("___ board", ["sound", "key", "surf", "chess"]),
            ("Hidden planets", ["mars", "saturn", "neptune", "mercury"]),
        ])
    }
}

/// Stage at which an incoming puzzle code was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("not valid base64")]
    Base64,
    #[error("not a gzip stream")]
    Gzip,
    #[error("not a serialized puzzle")]
    Postcard,
}

/// Identity of a single word slot: its group color plus the word's position
/// inside that group. Stable across shuffles.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CardId {
    color: Color,
    word: u8,
}

impl CardId {
    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn word_index(self) -> usize {
        self.word as usize
    }

    /// The 16 card identities in canonical order, one group after another.
    pub fn deck() -> [CardId; 16] {
        array::from_fn(|i| CardId {
            color: Color::ALL[i / 4],
            word: (i % 4) as u8,
        })
    }
}
