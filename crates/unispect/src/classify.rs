#![forbid(unsafe_code)]

//! Code point classification: a fixed 13-category taxonomy resolved by an
//! ordered rule cascade, plus human-readable name/label lookup.
//!
//! # Invariants
//!
//! 1. **Total**: every `u32` in `0..=0x10FFFF` resolves to exactly one
//!    category; nothing panics, unknown input falls through to
//!    [`CharacterCategory::Printable`].
//! 2. **Ordered**: [`CATEGORY_RULES`] is evaluated top to bottom, first
//!    match wins. The order is observable — a variation selector is `Vs`,
//!    never `Format`, even though both predicates match U+FE00..=U+FE0F.
//! 3. **Deterministic**: classification reads only immutable static
//!    tables; repeated calls always agree.
//!
//! # Example
//! ```
//! use unispect::classify::{CharacterCategory, categorize, character_info};
//!
//! assert_eq!(categorize(0x200D), CharacterCategory::Zwj);
//! assert_eq!(categorize(0x1F600), CharacterCategory::Emoji);
//! assert_eq!(categorize(0x41), CharacterCategory::Printable);
//!
//! let info = character_info(0x200B);
//! assert_eq!(info.name, "Zero Width Space");
//! assert_eq!(info.label, "ZWSP");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tables::{
    EMOJI_RANGES, REGIONAL_INDICATOR_END, REGIONAL_INDICATOR_START, SKIN_TONE_MODIFIERS,
    VARIATION_SELECTORS, special_char,
};

// ---------------------------------------------------------------------------
// CharacterCategory
// ---------------------------------------------------------------------------

/// Semantic category of a single code point.
///
/// Closed taxonomy; serializes to the lowercase snake_case tokens used in
/// the JSON output contract (`"skin_tone"`, `"private_use"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterCategory {
    /// Curated emoji ranges, regional indicators, and skin tones.
    Emoji,
    /// Zero Width Joiner, U+200D.
    Zwj,
    /// Zero Width Non-Joiner, U+200C.
    Zwnj,
    /// Zero Width Space, U+200B.
    Zwsp,
    /// Variation selectors VS1..=VS16, U+FE00..=U+FE0F.
    Vs,
    /// Fitzpatrick skin tone modifiers, U+1F3FB..=U+1F3FF.
    SkinTone,
    /// Byte Order Mark, U+FEFF.
    Bom,
    /// C0/C1 control codes.
    Control,
    /// Invisible formatting: directional marks, joiners, soft hyphen, ...
    Format,
    /// Private use areas (BMP block, planes 15 and 16).
    PrivateUse,
    /// UTF-16 surrogate range U+D800..=U+DFFF, only meaningful unpaired.
    Surrogate,
    /// Visible spacing characters.
    Whitespace,
    /// Everything else.
    Printable,
}

impl CharacterCategory {
    /// Every category, in the taxonomy's canonical order.
    pub const ALL: [CharacterCategory; 13] = [
        CharacterCategory::Emoji,
        CharacterCategory::Zwj,
        CharacterCategory::Zwnj,
        CharacterCategory::Zwsp,
        CharacterCategory::Vs,
        CharacterCategory::SkinTone,
        CharacterCategory::Bom,
        CharacterCategory::Control,
        CharacterCategory::Format,
        CharacterCategory::PrivateUse,
        CharacterCategory::Surrogate,
        CharacterCategory::Whitespace,
        CharacterCategory::Printable,
    ];

    /// The serialized token for this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterCategory::Emoji => "emoji",
            CharacterCategory::Zwj => "zwj",
            CharacterCategory::Zwnj => "zwnj",
            CharacterCategory::Zwsp => "zwsp",
            CharacterCategory::Vs => "vs",
            CharacterCategory::SkinTone => "skin_tone",
            CharacterCategory::Bom => "bom",
            CharacterCategory::Control => "control",
            CharacterCategory::Format => "format",
            CharacterCategory::PrivateUse => "private_use",
            CharacterCategory::Surrogate => "surrogate",
            CharacterCategory::Whitespace => "whitespace",
            CharacterCategory::Printable => "printable",
        }
    }

    /// Whether code points of this category are tallied in the text-level
    /// hidden-character count.
    ///
    /// `Surrogate` is deliberately absent: the per-grapheme
    /// `has_hidden_chars` flag treats unpaired surrogates as hidden, the
    /// text-level tally does not.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(
            self,
            CharacterCategory::Zwj
                | CharacterCategory::Zwnj
                | CharacterCategory::Zwsp
                | CharacterCategory::Vs
                | CharacterCategory::Bom
                | CharacterCategory::Control
                | CharacterCategory::Format
        )
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Membership predicates
// ---------------------------------------------------------------------------

/// Curated emoji membership: pictographic ranges, regional indicators, and
/// skin tone modifiers. An approximation, not the Unicode `Emoji` property;
/// see [`crate::tables`].
#[must_use]
pub fn is_emoji_code_point(code_point: u32) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code_point))
        || is_regional_indicator(code_point)
        || is_skin_tone_modifier(code_point)
}

/// Variation selector, U+FE00..=U+FE0F.
#[must_use]
pub fn is_variation_selector(code_point: u32) -> bool {
    (0xFE00..=0xFE0F).contains(&code_point)
}

/// Fitzpatrick skin tone modifier, U+1F3FB..=U+1F3FF.
#[must_use]
pub fn is_skin_tone_modifier(code_point: u32) -> bool {
    (0x1F3FB..=0x1F3FF).contains(&code_point)
}

/// Regional indicator letter, U+1F1E6..=U+1F1FF.
#[must_use]
pub fn is_regional_indicator(code_point: u32) -> bool {
    (REGIONAL_INDICATOR_START..=REGIONAL_INDICATOR_END).contains(&code_point)
}

/// The A–Z letter a regional indicator stands for, if it is one.
#[must_use]
pub fn regional_indicator_letter(code_point: u32) -> Option<char> {
    if is_regional_indicator(code_point) {
        char::from_u32('A' as u32 + (code_point - REGIONAL_INDICATOR_START))
    } else {
        None
    }
}

fn is_zwj(code_point: u32) -> bool {
    code_point == 0x200D
}

fn is_zwnj(code_point: u32) -> bool {
    code_point == 0x200C
}

fn is_zwsp(code_point: u32) -> bool {
    code_point == 0x200B
}

fn is_bom(code_point: u32) -> bool {
    code_point == 0xFEFF
}

fn is_control(code_point: u32) -> bool {
    code_point <= 0x1F || (0x7F..=0x9F).contains(&code_point)
}

fn is_format(code_point: u32) -> bool {
    (0x200B..=0x200F).contains(&code_point) // zero width and directional marks
        || (0x2028..=0x202F).contains(&code_point) // line/paragraph separators, embedding
        || (0x2060..=0x206F).contains(&code_point) // word joiners, invisible operators
        || code_point == 0x00AD // soft hyphen
        || code_point == 0x034F // combining grapheme joiner
        || code_point == 0x061C // Arabic letter mark
        || code_point == 0x180E // Mongolian vowel separator
}

fn is_private_use(code_point: u32) -> bool {
    (0xE000..=0xF8FF).contains(&code_point)
        || (0xF0000..=0xFFFFD).contains(&code_point)
        || (0x100000..=0x10FFFD).contains(&code_point)
}

fn is_surrogate(code_point: u32) -> bool {
    (0xD800..=0xDFFF).contains(&code_point)
}

fn is_whitespace(code_point: u32) -> bool {
    matches!(code_point, 0x20 | 0x09 | 0x0A | 0x0D | 0xA0 | 0x3000)
        || (0x2000..=0x200A).contains(&code_point)
}

// ---------------------------------------------------------------------------
// Rule cascade
// ---------------------------------------------------------------------------

/// One classification rule: membership predicate and the category it
/// assigns.
pub type CategoryRule = (fn(u32) -> bool, CharacterCategory);

/// The classification cascade, most specific first. First match wins.
///
/// The order is load-bearing: ZWJ/ZWNJ/ZWSP/BOM sit inside ranges that
/// later rules also match (`Format`, `Whitespace`), variation selectors and
/// skin tones shadow `Format` and `Emoji`, and `Printable` is the implicit
/// fallback when nothing matches.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    (is_zwj, CharacterCategory::Zwj),
    (is_zwnj, CharacterCategory::Zwnj),
    (is_zwsp, CharacterCategory::Zwsp),
    (is_bom, CharacterCategory::Bom),
    (is_variation_selector, CharacterCategory::Vs),
    (is_skin_tone_modifier, CharacterCategory::SkinTone),
    (is_emoji_code_point, CharacterCategory::Emoji),
    (is_control, CharacterCategory::Control),
    (is_format, CharacterCategory::Format),
    (is_private_use, CharacterCategory::PrivateUse),
    (is_surrogate, CharacterCategory::Surrogate),
    (is_whitespace, CharacterCategory::Whitespace),
];

/// Classify a code point by walking [`CATEGORY_RULES`] top to bottom.
#[must_use]
pub fn categorize(code_point: u32) -> CharacterCategory {
    for &(matches, category) in CATEGORY_RULES {
        if matches(code_point) {
            return category;
        }
    }
    CharacterCategory::Printable
}

// ---------------------------------------------------------------------------
// Name / label lookup
// ---------------------------------------------------------------------------

/// Human-readable description of a code point: a full name and a short
/// display tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharInfo {
    /// Full descriptive name, e.g. `"Zero Width Joiner"`.
    pub name: String,
    /// Short display tag, e.g. `"ZWJ"`.
    pub label: String,
}

/// Name and label for a code point.
///
/// Resolution priority: the special-character table, then variation
/// selectors, skin tones, and regional indicators, then category-driven
/// fallbacks — emoji get a generic `"Emoji"` name with the character as
/// label, control/format characters (and scalar values with no `char`
/// form, i.e. surrogates) get a `Unicode U+XXXX` name, and anything else
/// is described by the character itself.
#[must_use]
pub fn character_info(code_point: u32) -> CharInfo {
    if let Some((name, label)) = special_char(code_point) {
        return CharInfo {
            name: name.to_string(),
            label: label.to_string(),
        };
    }

    if is_variation_selector(code_point) {
        let vs = VARIATION_SELECTORS[(code_point - 0xFE00) as usize];
        return CharInfo {
            name: format!("Variation Selector {vs}"),
            label: vs.to_string(),
        };
    }

    if is_skin_tone_modifier(code_point) {
        let idx = SKIN_TONE_MODIFIERS
            .iter()
            .position(|&(cp, _)| cp == code_point)
            .unwrap_or_default();
        return CharInfo {
            name: SKIN_TONE_MODIFIERS[idx].1.to_string(),
            // Fitzpatrick scale position 1-5.
            label: format!("Skin {}", code_point - 0x1F3FA),
        };
    }

    if let Some(letter) = regional_indicator_letter(code_point) {
        return CharInfo {
            name: format!("Regional Indicator Symbol Letter {letter}"),
            label: format!("RI-{letter}"),
        };
    }

    let category = categorize(code_point);
    match char::from_u32(code_point) {
        Some(ch)
            if category != CharacterCategory::Control
                && category != CharacterCategory::Format =>
        {
            if category == CharacterCategory::Emoji {
                CharInfo {
                    name: "Emoji".to_string(),
                    label: ch.to_string(),
                }
            } else {
                CharInfo {
                    name: ch.to_string(),
                    label: ch.to_string(),
                }
            }
        }
        // Control/format without a table entry, and surrogate scalar values
        // that have no char form: fall back to the hex spelling.
        _ => CharInfo {
            name: format!("Unicode U+{code_point:04X}"),
            label: format!("U+{code_point:04X}"),
        },
    }
}
