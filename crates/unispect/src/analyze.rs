#![forbid(unsafe_code)]

//! The analysis orchestrator and its result model.
//!
//! [`analyze`] walks an input string grapheme by grapheme, decomposes each
//! cluster into Unicode scalars, classifies and encodes every one, and
//! aggregates per-cluster flags and whole-text statistics into an
//! immutable [`AnalysisResult`].
//!
//! # Invariants
//!
//! 1. **Round trip**: concatenating [`GraphemeCluster::grapheme`] in index
//!    order reproduces the input exactly.
//! 2. **Sum consistency**: `stats.code_point_count` equals the summed
//!    cluster code point counts, `stats.utf8_byte_count` equals the summed
//!    UTF-8 byte lengths, and the category breakdown totals to
//!    `code_point_count`.
//! 3. **Totality**: no input string panics — empty input, zero-width runs,
//!    and control soup all produce a well-formed result.
//! 4. **Determinism**: same input, structurally identical output.
//!
//! # Example
//! ```
//! use unispect::analyze;
//!
//! let result = analyze("A\u{200B}B");
//! assert_eq!(result.stats.grapheme_count, 3);
//! assert_eq!(result.stats.hidden_char_count, 1);
//! assert!(result.graphemes[1].has_hidden_chars);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::classify::{CharInfo, CharacterCategory, categorize, character_info, is_emoji_code_point};
use crate::encode::{format_unicode, utf8_bytes, utf16_units};
use crate::segment::{GraphemeSegmenter, Segmenter};

// ---------------------------------------------------------------------------
// AnalyzedCodePoint
// ---------------------------------------------------------------------------

/// Everything the engine knows about one code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedCodePoint {
    /// The code point as a unit-length text value.
    #[serde(rename = "char")]
    pub ch: char,
    /// The Unicode scalar value.
    pub code_point: u32,
    /// Canonical `U+XXXX` spelling.
    pub unicode: String,
    /// Human-readable name, e.g. `"Zero Width Joiner"`.
    pub name: String,
    /// Short display tag, e.g. `"ZWJ"`.
    pub label: String,
    /// Taxonomy category.
    pub category: CharacterCategory,
    /// UTF-8 encoding, 1–4 bytes.
    pub utf8_bytes: SmallVec<[u8; 4]>,
    /// UTF-16 encoding, 1 unit in the BMP, else a surrogate pair.
    pub utf16_units: SmallVec<[u16; 2]>,
}

/// Classify and encode a single character.
#[must_use]
pub fn analyze_code_point(ch: char) -> AnalyzedCodePoint {
    let code_point = ch as u32;
    let CharInfo { name, label } = character_info(code_point);
    AnalyzedCodePoint {
        ch,
        code_point,
        unicode: format_unicode(code_point),
        name,
        label,
        category: categorize(code_point),
        utf8_bytes: utf8_bytes(code_point),
        utf16_units: utf16_units(code_point),
    }
}

// ---------------------------------------------------------------------------
// GraphemeCluster
// ---------------------------------------------------------------------------

/// One user-perceived character: a grapheme cluster and its decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphemeCluster {
    /// The cluster substring as it visually renders.
    pub grapheme: String,
    /// The cluster's code points, in original order; never empty.
    pub code_points: Vec<AnalyzedCodePoint>,
    /// Whether any constituent is emoji (or VS16 forces emoji
    /// presentation).
    pub is_emoji: bool,
    /// Whether any constituent is an invisible/hidden character.
    pub has_hidden_chars: bool,
    /// 0-based position in the cluster sequence.
    pub index: usize,
}

// ---------------------------------------------------------------------------
// CategoryBreakdown
// ---------------------------------------------------------------------------

/// Per-category code point tallies. All 13 categories are always present,
/// zero included, so the serialized form is a complete map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub emoji: usize,
    pub zwj: usize,
    pub zwnj: usize,
    pub zwsp: usize,
    pub vs: usize,
    pub skin_tone: usize,
    pub bom: usize,
    pub control: usize,
    pub format: usize,
    pub private_use: usize,
    pub surrogate: usize,
    pub whitespace: usize,
    pub printable: usize,
}

impl CategoryBreakdown {
    /// Tally of one category.
    #[must_use]
    pub fn count(&self, category: CharacterCategory) -> usize {
        match category {
            CharacterCategory::Emoji => self.emoji,
            CharacterCategory::Zwj => self.zwj,
            CharacterCategory::Zwnj => self.zwnj,
            CharacterCategory::Zwsp => self.zwsp,
            CharacterCategory::Vs => self.vs,
            CharacterCategory::SkinTone => self.skin_tone,
            CharacterCategory::Bom => self.bom,
            CharacterCategory::Control => self.control,
            CharacterCategory::Format => self.format,
            CharacterCategory::PrivateUse => self.private_use,
            CharacterCategory::Surrogate => self.surrogate,
            CharacterCategory::Whitespace => self.whitespace,
            CharacterCategory::Printable => self.printable,
        }
    }

    /// Bump one category's tally.
    pub fn increment(&mut self, category: CharacterCategory) {
        let slot = match category {
            CharacterCategory::Emoji => &mut self.emoji,
            CharacterCategory::Zwj => &mut self.zwj,
            CharacterCategory::Zwnj => &mut self.zwnj,
            CharacterCategory::Zwsp => &mut self.zwsp,
            CharacterCategory::Vs => &mut self.vs,
            CharacterCategory::SkinTone => &mut self.skin_tone,
            CharacterCategory::Bom => &mut self.bom,
            CharacterCategory::Control => &mut self.control,
            CharacterCategory::Format => &mut self.format,
            CharacterCategory::PrivateUse => &mut self.private_use,
            CharacterCategory::Surrogate => &mut self.surrogate,
            CharacterCategory::Whitespace => &mut self.whitespace,
            CharacterCategory::Printable => &mut self.printable,
        };
        *slot += 1;
    }

    /// `(category, count)` pairs in canonical taxonomy order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterCategory, usize)> + '_ {
        CharacterCategory::ALL.into_iter().map(|c| (c, self.count(c)))
    }

    /// Sum over all categories; equals the analyzed code point count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.iter().map(|(_, n)| n).sum()
    }
}

// ---------------------------------------------------------------------------
// TextStats / AnalysisResult
// ---------------------------------------------------------------------------

/// Whole-text aggregate statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    /// Number of grapheme clusters (user-perceived characters).
    pub grapheme_count: usize,
    /// Number of Unicode scalar values.
    pub code_point_count: usize,
    /// Input length in UTF-16 code units (what a JS `string.length`
    /// reports), independent of the other counts.
    pub utf16_length: usize,
    /// Total UTF-8 encoding size in bytes.
    pub utf8_byte_count: usize,
    /// Number of clusters flagged [`GraphemeCluster::is_emoji`].
    pub emoji_count: usize,
    /// Code points in the hidden set (zwj/zwnj/zwsp/vs/bom/control/format
    /// — not surrogate; see [`CharacterCategory::is_hidden`]).
    pub hidden_char_count: usize,
    /// Per-category tallies, all 13 keys present.
    pub category_breakdown: CategoryBreakdown,
}

/// Complete analysis of one input string. An immutable value, built fresh
/// per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The original input, verbatim.
    pub input: String,
    /// Grapheme clusters in order; indexes are contiguous from 0.
    pub graphemes: Vec<GraphemeCluster>,
    /// Whole-text statistics.
    pub stats: TextStats,
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Analyze `text` with the default UAX #29 segmenter.
#[must_use]
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with(&GraphemeSegmenter, text)
}

/// Analyze `text`, segmenting through a caller-provided [`Segmenter`].
///
/// Empty input short-circuits to an all-zero result (every breakdown
/// category present at 0). Never panics for any input string.
#[must_use]
pub fn analyze_with<S: Segmenter + ?Sized>(segmenter: &S, text: &str) -> AnalysisResult {
    if text.is_empty() {
        return AnalysisResult {
            input: String::new(),
            graphemes: Vec::new(),
            stats: TextStats::default(),
        };
    }

    let mut graphemes = Vec::new();
    let mut breakdown = CategoryBreakdown::default();
    let mut code_point_count = 0usize;
    let mut utf8_byte_count = 0usize;
    let mut emoji_count = 0usize;
    let mut hidden_char_count = 0usize;

    for (index, grapheme) in segmenter.segment(text).into_iter().enumerate() {
        let mut code_points = Vec::new();
        let mut is_emoji = false;
        let mut has_hidden_chars = false;

        for ch in grapheme.chars() {
            let analyzed = analyze_code_point(ch);

            breakdown.increment(analyzed.category);
            utf8_byte_count += analyzed.utf8_bytes.len();
            code_point_count += 1;
            if analyzed.category.is_hidden() {
                hidden_char_count += 1;
            }

            // VS16 forces emoji presentation of the preceding character, so
            // it marks the cluster as emoji even though its own category is
            // `Vs`.
            if is_emoji_code_point(analyzed.code_point) || analyzed.code_point == 0xFE0F {
                is_emoji = true;
            }
            // The cluster-level flag additionally treats unpaired
            // surrogates as hidden; the text-level tally above does not.
            if analyzed.category.is_hidden()
                || analyzed.category == CharacterCategory::Surrogate
            {
                has_hidden_chars = true;
            }

            code_points.push(analyzed);
        }

        if is_emoji {
            emoji_count += 1;
        }

        graphemes.push(GraphemeCluster {
            grapheme: grapheme.to_string(),
            code_points,
            is_emoji,
            has_hidden_chars,
            index,
        });
    }

    let stats = TextStats {
        grapheme_count: graphemes.len(),
        code_point_count,
        utf16_length: text.encode_utf16().count(),
        utf8_byte_count,
        emoji_count,
        hidden_char_count,
        category_breakdown: breakdown,
    };

    tracing::trace!(
        graphemes = stats.grapheme_count,
        code_points = stats.code_point_count,
        utf8_bytes = stats.utf8_byte_count,
        emoji = stats.emoji_count,
        hidden = stats.hidden_char_count,
        "text analysis complete"
    );

    AnalysisResult {
        input: text.to_string(),
        graphemes,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Empty and plain inputs
    // -----------------------------------------------------------------------

    #[test]
    fn empty_input_is_all_zero() {
        let result = analyze("");
        assert_eq!(result.input, "");
        assert!(result.graphemes.is_empty());
        assert_eq!(result.stats, TextStats::default());
        assert_eq!(result.stats.category_breakdown.total(), 0);
    }

    #[test]
    fn plain_ascii_hello() {
        let result = analyze("Hello");
        assert_eq!(result.stats.grapheme_count, 5);
        assert_eq!(result.stats.code_point_count, 5);
        assert_eq!(result.stats.utf8_byte_count, 5);
        assert_eq!(result.stats.utf16_length, 5);
        assert_eq!(result.stats.emoji_count, 0);
        assert_eq!(result.stats.hidden_char_count, 0);
        assert_eq!(result.stats.category_breakdown.printable, 5);
        for cluster in &result.graphemes {
            assert!(!cluster.is_emoji);
            assert!(!cluster.has_hidden_chars);
            for cp in &cluster.code_points {
                assert_eq!(cp.category, CharacterCategory::Printable);
            }
        }
    }

    #[test]
    fn indexes_are_contiguous_from_zero() {
        let result = analyze("abc 😀 déf");
        for (i, cluster) in result.graphemes.iter().enumerate() {
            assert_eq!(cluster.index, i);
        }
    }

    // -----------------------------------------------------------------------
    // Emoji aggregation
    // -----------------------------------------------------------------------

    #[test]
    fn zwj_family_is_one_emoji_cluster_with_seven_code_points() {
        let result = analyze("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}");
        assert_eq!(result.stats.grapheme_count, 1);
        assert_eq!(result.stats.code_point_count, 7);
        assert_eq!(result.stats.emoji_count, 1);

        let family = &result.graphemes[0];
        assert!(family.is_emoji);
        assert!(family.has_hidden_chars); // the three ZWJs
        assert_eq!(result.stats.category_breakdown.zwj, 3);
        assert_eq!(result.stats.category_breakdown.emoji, 4);
        assert_eq!(result.stats.hidden_char_count, 3);
    }

    #[test]
    fn keycap_counts_as_emoji_via_vs16() {
        // '1' + VS16 + combining enclosing keycap
        let result = analyze("1\u{FE0F}\u{20E3}");
        assert_eq!(result.stats.grapheme_count, 1);
        assert_eq!(result.stats.code_point_count, 3);

        let keycap = &result.graphemes[0];
        assert!(keycap.is_emoji, "VS16 must force the emoji flag");
        assert_eq!(keycap.code_points[0].category, CharacterCategory::Printable);
        assert_eq!(keycap.code_points[1].category, CharacterCategory::Vs);
        assert_eq!(keycap.code_points[2].category, CharacterCategory::Emoji);
        assert_eq!(result.stats.emoji_count, 1);
    }

    #[test]
    fn flag_sequence_aggregates_as_single_emoji() {
        let result = analyze("\u{1F1FA}\u{1F1F8}");
        assert_eq!(result.stats.grapheme_count, 1);
        assert_eq!(result.stats.code_point_count, 2);
        assert_eq!(result.stats.emoji_count, 1);
        assert!(!result.graphemes[0].has_hidden_chars);
    }

    #[test]
    fn skin_tone_sequence_flags_emoji_without_hidden() {
        let result = analyze("\u{1F44B}\u{1F3FD}");
        assert_eq!(result.stats.grapheme_count, 1);
        assert_eq!(result.stats.emoji_count, 1);
        assert_eq!(result.stats.category_breakdown.skin_tone, 1);
        assert_eq!(result.stats.category_breakdown.emoji, 1);
        assert!(!result.graphemes[0].has_hidden_chars);
    }

    #[test]
    fn rainbow_flag_mixes_emoji_and_hidden() {
        // White flag + VS16 + ZWJ + rainbow
        let result = analyze("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}");
        assert_eq!(result.stats.grapheme_count, 1);
        assert_eq!(result.stats.code_point_count, 4);
        assert_eq!(result.stats.emoji_count, 1);
        let flag = &result.graphemes[0];
        assert!(flag.is_emoji);
        assert!(flag.has_hidden_chars); // VS16 and ZWJ
        assert_eq!(result.stats.hidden_char_count, 2);
    }

    // -----------------------------------------------------------------------
    // Hidden character accounting
    // -----------------------------------------------------------------------

    #[test]
    fn zero_width_space_isolates_into_own_cluster() {
        let result = analyze("A\u{200B}B");
        assert_eq!(result.stats.grapheme_count, 3);
        assert_eq!(result.graphemes[0].grapheme, "A");
        assert_eq!(result.graphemes[1].grapheme, "\u{200B}");
        assert_eq!(result.graphemes[2].grapheme, "B");

        assert!(!result.graphemes[0].has_hidden_chars);
        assert!(result.graphemes[1].has_hidden_chars);
        assert!(!result.graphemes[2].has_hidden_chars);
        assert_eq!(result.stats.hidden_char_count, 1);
        assert_eq!(result.stats.category_breakdown.zwsp, 1);
    }

    #[test]
    fn bom_and_controls_count_as_hidden() {
        let result = analyze("\u{FEFF}x\u{0007}");
        assert_eq!(result.stats.hidden_char_count, 2);
        assert_eq!(result.stats.category_breakdown.bom, 1);
        assert_eq!(result.stats.category_breakdown.control, 1);
    }

    #[test]
    fn whitespace_is_not_hidden() {
        let result = analyze("a b\u{00A0}c");
        assert_eq!(result.stats.hidden_char_count, 0);
        assert_eq!(result.stats.category_breakdown.whitespace, 2);
    }

    // -----------------------------------------------------------------------
    // Whole-text invariants
    // -----------------------------------------------------------------------

    #[test]
    fn utf16_length_counts_code_units_not_code_points() {
        // 😀 is 1 code point, 2 UTF-16 units, 4 UTF-8 bytes.
        let result = analyze("a😀");
        assert_eq!(result.stats.code_point_count, 2);
        assert_eq!(result.stats.utf16_length, 3);
        assert_eq!(result.stats.utf8_byte_count, 5);
    }

    #[test]
    fn round_trip_concatenation() {
        let text = "Hello 👋🏽 World! 🌍🏳️‍🌈\u{200B}";
        let result = analyze(text);
        let rebuilt: String = result.graphemes.iter().map(|g| g.grapheme.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn breakdown_total_matches_code_point_count() {
        let text = "Hello\u{200B}\u{FEFF} 👨‍👩‍👧‍👦 ©\u{E000}";
        let result = analyze(text);
        assert_eq!(
            result.stats.category_breakdown.total(),
            result.stats.code_point_count
        );
    }

    #[test]
    fn per_cluster_sums_match_totals() {
        let result = analyze("mixé 😀👍🏿 text\u{200D}");
        let cp_sum: usize = result.graphemes.iter().map(|g| g.code_points.len()).sum();
        let byte_sum: usize = result
            .graphemes
            .iter()
            .flat_map(|g| &g.code_points)
            .map(|cp| cp.utf8_bytes.len())
            .sum();
        assert_eq!(result.stats.code_point_count, cp_sum);
        assert_eq!(result.stats.utf8_byte_count, byte_sum);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "déjà vu 🏴󠁧󠁢󠁳󠁣󠁴󠁿 \u{202E}abc";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn custom_segmenter_is_honored() {
        struct WholeInput;
        impl Segmenter for WholeInput {
            fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
                vec![text]
            }
        }

        let result = analyze_with(&WholeInput, "abc");
        assert_eq!(result.stats.grapheme_count, 1);
        assert_eq!(result.stats.code_point_count, 3);
        assert_eq!(result.graphemes[0].grapheme, "abc");
    }

    // -----------------------------------------------------------------------
    // JSON contract
    // -----------------------------------------------------------------------

    #[test]
    fn serializes_to_the_documented_shape() {
        let result = analyze("A");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["input"], "A");
        let cluster = &json["graphemes"][0];
        assert_eq!(cluster["grapheme"], "A");
        assert_eq!(cluster["isEmoji"], false);
        assert_eq!(cluster["hasHiddenChars"], false);
        assert_eq!(cluster["index"], 0);

        let cp = &cluster["codePoints"][0];
        assert_eq!(cp["char"], "A");
        assert_eq!(cp["codePoint"], 65);
        assert_eq!(cp["unicode"], "U+0041");
        assert_eq!(cp["category"], "printable");
        assert_eq!(cp["utf8Bytes"], serde_json::json!([65]));
        assert_eq!(cp["utf16Units"], serde_json::json!([65]));

        let stats = &json["stats"];
        assert_eq!(stats["graphemeCount"], 1);
        assert_eq!(stats["utf16Length"], 1);
        let breakdown = stats["categoryBreakdown"].as_object().unwrap();
        assert_eq!(breakdown.len(), 13);
        assert_eq!(breakdown["printable"], 1);
        assert_eq!(breakdown["skin_tone"], 0);
    }

    #[test]
    fn category_tokens_serialize_snake_case() {
        let skin = serde_json::to_string(&CharacterCategory::SkinTone).unwrap();
        assert_eq!(skin, "\"skin_tone\"");
        let pu = serde_json::to_string(&CharacterCategory::PrivateUse).unwrap();
        assert_eq!(pu, "\"private_use\"");
    }
}
