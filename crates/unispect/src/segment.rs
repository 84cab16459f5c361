#![forbid(unsafe_code)]

//! Grapheme segmentation seam.
//!
//! Splitting text into user-perceived characters is UAX #29 territory and
//! is deliberately *not* implemented here — the analyzer binds to a
//! vetted table-driven implementation through the narrow [`Segmenter`]
//! trait. [`GraphemeSegmenter`] is the default binding, backed by the
//! `unicode-segmentation` crate's extended grapheme clusters, so ZWJ emoji
//! sequences, flag pairs, combining marks, and skin-tone-modified emoji
//! each come back as a single segment.
//!
//! # Contract
//!
//! For any input, a segmenter must produce segments that are non-empty,
//! in order, and gap-free: concatenating them reproduces the input
//! exactly.

use unicode_segmentation::UnicodeSegmentation;

/// A UAX #29 grapheme cluster boundary provider.
///
/// Implementations slice the input; segments borrow from `text`.
pub trait Segmenter {
    /// Split `text` into grapheme cluster substrings, in order.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Default segmenter: extended grapheme clusters from
/// [`unicode_segmentation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphemeSegmenter;

impl Segmenter for GraphemeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }
}
