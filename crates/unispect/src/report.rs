#![forbid(unsafe_code)]

//! Presentation over the result model: the one-line summary and the
//! plain-text export report.
//!
//! Both functions are pure string builders; the export layout is a stable
//! contract (consumers diff it byte-for-byte), so the literal text here
//! must not drift.

use crate::analyze::AnalysisResult;

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// One-line metric summary, fixed phrase order, joined with `" | "`.
///
/// Emoji and hidden-character phrases appear only when non-zero; "emoji"
/// never takes a plural suffix.
///
/// # Example
/// ```
/// use unispect::{analyze, report::analysis_summary};
///
/// let result = analyze("Hello");
/// assert_eq!(
///     analysis_summary(&result),
///     "5 visual characters | 5 code points | 5 UTF-8 bytes"
/// );
/// ```
#[must_use]
pub fn analysis_summary(result: &AnalysisResult) -> String {
    let stats = &result.stats;
    let mut parts = vec![
        format!(
            "{} visual character{}",
            stats.grapheme_count,
            plural(stats.grapheme_count)
        ),
        format!(
            "{} code point{}",
            stats.code_point_count,
            plural(stats.code_point_count)
        ),
        format!(
            "{} UTF-8 byte{}",
            stats.utf8_byte_count,
            plural(stats.utf8_byte_count)
        ),
    ];

    if stats.emoji_count > 0 {
        parts.push(format!("{} emoji", stats.emoji_count));
    }
    if stats.hidden_char_count > 0 {
        parts.push(format!(
            "{} hidden char{}",
            stats.hidden_char_count,
            plural(stats.hidden_char_count)
        ));
    }

    parts.join(" | ")
}

/// The plain-text export report: header, statistics block, and a
/// per-cluster breakdown with one line per code point.
///
/// The layout is byte-exact, including the `UTF-16 Length (JS string)`
/// label and the two/four-space indentation of the grapheme breakdown.
#[must_use]
pub fn export_report(result: &AnalysisResult) -> String {
    let stats = &result.stats;
    let mut lines = vec![
        "Unicode Analysis Results".to_string(),
        "========================".to_string(),
        String::new(),
        format!("Input: \"{}\"", result.input),
        String::new(),
        "Statistics:".to_string(),
        format!("- Visual Characters (Graphemes): {}", stats.grapheme_count),
        format!("- Code Points: {}", stats.code_point_count),
        format!("- UTF-16 Length (JS string): {}", stats.utf16_length),
        format!("- UTF-8 Bytes: {}", stats.utf8_byte_count),
        format!("- Emoji Count: {}", stats.emoji_count),
        format!("- Hidden Characters: {}", stats.hidden_char_count),
        String::new(),
        "Grapheme Breakdown:".to_string(),
    ];

    for cluster in &result.graphemes {
        lines.push(format!(
            "  \"{}\" ({} code points)",
            cluster.grapheme,
            cluster.code_points.len()
        ));
        for cp in &cluster.code_points {
            lines.push(format!("    {} - {} [{}]", cp.unicode, cp.name, cp.category));
        }
    }

    lines.join("\n")
}
