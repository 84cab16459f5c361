#![forbid(unsafe_code)]

//! Grapheme-accurate Unicode text analysis.
//!
//! `unispect` takes an arbitrary string, splits it into user-perceived
//! characters (UAX #29 grapheme clusters), classifies every underlying
//! code point into a fixed 13-category taxonomy (emoji, zero-width
//! joiners, variation selectors, controls, ...), computes each code
//! point's UTF-8 and UTF-16 encodings, and aggregates whole-text
//! statistics including hidden/invisible character detection.
//!
//! # Primary responsibilities
//! - **encode**: pure UTF-8/UTF-16 encoding arithmetic per code point.
//! - **classify**: ordered rule cascade over immutable static tables.
//! - **segment**: the narrow [`Segmenter`] seam around UAX #29
//!   segmentation (bound to `unicode-segmentation` by default).
//! - **analyze**: the orchestrator producing an immutable
//!   [`AnalysisResult`].
//! - **report**: one-line summary and byte-stable export report.
//!
//! # How it fits in a system
//! The engine is synchronous, allocation-bounded, and side-effect-free:
//! one call in, one immutable value out, O(n) in the input length. It
//! performs no I/O and keeps no state between calls, so it is safe to
//! call concurrently from any number of threads. Debouncing, clipboard
//! handling, and input-size limits belong to callers.
//!
//! # Example
//! ```
//! use unispect::{analyze, analysis_summary};
//!
//! let result = analyze("1\u{FE0F}\u{20E3}");
//! assert_eq!(result.stats.grapheme_count, 1);
//! assert_eq!(result.stats.code_point_count, 3);
//! assert!(result.graphemes[0].is_emoji);
//! assert_eq!(
//!     analysis_summary(&result),
//!     "1 visual character | 3 code points | 7 UTF-8 bytes | 1 emoji | 1 hidden char"
//! );
//! ```

pub mod analyze;
pub mod classify;
pub mod encode;
pub mod report;
pub mod segment;

mod tables;

pub use analyze::{
    AnalysisResult, AnalyzedCodePoint, CategoryBreakdown, GraphemeCluster, TextStats, analyze,
    analyze_code_point, analyze_with,
};
pub use classify::{CharInfo, CharacterCategory, categorize, character_info};
pub use encode::{format_unicode, utf8_bytes, utf16_units};
pub use report::{analysis_summary, export_report};
pub use segment::{GraphemeSegmenter, Segmenter};
