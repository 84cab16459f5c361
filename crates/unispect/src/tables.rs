#![forbid(unsafe_code)]

//! Static classification data: curated emoji ranges, the special-character
//! name/label table, variation-selector and skin-tone names.
//!
//! All tables are immutable `static` data built into the binary; nothing
//! here is computed or mutated at runtime, so concurrent readers need no
//! synchronization.
//!
//! The emoji table is a curated approximation of common pictographic
//! blocks, not the Unicode `Emoji` property. It intentionally includes
//! legacy symbols that render as emoji in practice (©, ®, ™, arrows,
//! media controls). Callers that need property-exact detection should not
//! use this table; the analyzer's observable output depends on keeping it
//! as-is.

/// Inclusive code point ranges treated as emoji.
///
/// Major pictographic blocks first, then single legacy symbols and small
/// clusters that predate the dedicated emoji blocks. Ranges may overlap;
/// membership is a linear scan over at most this table's length.
pub(crate) static EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F700, 0x1F77F), // Alchemical Symbols
    (0x1F780, 0x1F7FF), // Geometric Shapes Extended
    (0x1F800, 0x1F8FF), // Supplemental Arrows-C
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA00, 0x1FA6F), // Chess Symbols
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
    (0x2600, 0x26FF),   // Miscellaneous Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x231A, 0x231B),   // Watch, hourglass
    (0x23E9, 0x23F3),   // Media controls
    (0x23F8, 0x23FA),   // More media controls
    (0x25AA, 0x25AB),   // Small squares
    (0x25B6, 0x25B6),   // Play button
    (0x25C0, 0x25C0),   // Reverse button
    (0x25FB, 0x25FE),   // Squares
    (0x2614, 0x2615),   // Umbrella, hot beverage
    (0x2648, 0x2653),   // Zodiac
    (0x267F, 0x267F),   // Wheelchair
    (0x2693, 0x2693),   // Anchor
    (0x26A1, 0x26A1),   // High voltage
    (0x26AA, 0x26AB),   // Circles
    (0x26BD, 0x26BE),   // Sports balls
    (0x26C4, 0x26C5),   // Snowman, sun
    (0x26CE, 0x26CE),   // Ophiuchus
    (0x26D4, 0x26D4),   // No entry
    (0x26EA, 0x26EA),   // Church
    (0x26F2, 0x26F3),   // Fountain, golf
    (0x26F5, 0x26F5),   // Sailboat
    (0x26FA, 0x26FA),   // Tent
    (0x26FD, 0x26FD),   // Fuel pump
    (0x2702, 0x2702),   // Scissors
    (0x2705, 0x2705),   // Check mark
    (0x2708, 0x270D),   // Transport, writing
    (0x270F, 0x270F),   // Pencil
    (0x2712, 0x2712),   // Black nib
    (0x2714, 0x2714),   // Check mark
    (0x2716, 0x2716),   // X mark
    (0x271D, 0x271D),   // Cross
    (0x2721, 0x2721),   // Star of David
    (0x2728, 0x2728),   // Sparkles
    (0x2733, 0x2734),   // Eight-spoked asterisk
    (0x2744, 0x2744),   // Snowflake
    (0x2747, 0x2747),   // Sparkle
    (0x274C, 0x274C),   // Cross mark
    (0x274E, 0x274E),   // Negative cross mark
    (0x2753, 0x2755),   // Question marks
    (0x2757, 0x2757),   // Exclamation
    (0x2763, 0x2764),   // Heart exclamation, heart
    (0x2795, 0x2797),   // Math symbols
    (0x27A1, 0x27A1),   // Arrow
    (0x27B0, 0x27B0),   // Curly loop
    (0x27BF, 0x27BF),   // Double curly loop
    (0x2934, 0x2935),   // Arrows
    (0x2B05, 0x2B07),   // Arrows
    (0x2B1B, 0x2B1C),   // Squares
    (0x2B50, 0x2B50),   // Star
    (0x2B55, 0x2B55),   // Circle
    (0x3030, 0x3030),   // Wavy dash
    (0x303D, 0x303D),   // Part alternation mark
    (0x3297, 0x3297),   // Circled ideograph congratulation
    (0x3299, 0x3299),   // Circled ideograph secret
    (0x00A9, 0x00A9),   // Copyright
    (0x00AE, 0x00AE),   // Registered
    (0x2122, 0x2122),   // Trademark
    (0x23CF, 0x23CF),   // Eject
    (0x23ED, 0x23EF),   // Media controls
    (0x23F1, 0x23F2),   // Stopwatch, timer
    (0x2139, 0x2139),   // Information
    (0x2194, 0x2199),   // Arrows
    (0x21A9, 0x21AA),   // Arrows
    (0x20E3, 0x20E3),   // Combining enclosing keycap (keycap sequences)
];

/// First regional indicator (Regional Indicator Symbol Letter A).
pub(crate) const REGIONAL_INDICATOR_START: u32 = 0x1F1E6;
/// Last regional indicator (Regional Indicator Symbol Letter Z).
pub(crate) const REGIONAL_INDICATOR_END: u32 = 0x1F1FF;

/// Fitzpatrick skin tone modifiers, U+1F3FB..=U+1F3FF, in code point order.
pub(crate) static SKIN_TONE_MODIFIERS: &[(u32, &str)] = &[
    (0x1F3FB, "Light Skin Tone"),
    (0x1F3FC, "Medium-Light Skin Tone"),
    (0x1F3FD, "Medium Skin Tone"),
    (0x1F3FE, "Medium-Dark Skin Tone"),
    (0x1F3FF, "Dark Skin Tone"),
];

/// Short names for VS1..=VS16 (U+FE00..=U+FE0F), indexed by `cp - 0xFE00`.
///
/// VS15 and VS16 carry their presentation role because they are the two a
/// user actually encounters in the wild.
pub(crate) static VARIATION_SELECTORS: [&str; 16] = [
    "VS1",
    "VS2",
    "VS3",
    "VS4",
    "VS5",
    "VS6",
    "VS7",
    "VS8",
    "VS9",
    "VS10",
    "VS11",
    "VS12",
    "VS13",
    "VS14",
    "VS15 (Text)",
    "VS16 (Emoji)",
];

/// Well-known invisible/control/space code points with explicit names and
/// display labels.
///
/// Sorted by code point; looked up via binary search. Entries take
/// priority over every other naming rule.
pub(crate) static SPECIAL_CHARS: &[(u32, &str, &str)] = &[
    (0x0000, "Null", "NUL"),
    (0x0001, "Start of Heading", "SOH"),
    (0x0002, "Start of Text", "STX"),
    (0x0003, "End of Text", "ETX"),
    (0x0004, "End of Transmission", "EOT"),
    (0x0005, "Enquiry", "ENQ"),
    (0x0006, "Acknowledge", "ACK"),
    (0x0007, "Bell", "BEL"),
    (0x0008, "Backspace", "BS"),
    (0x0009, "Horizontal Tab", "TAB"),
    (0x000A, "Line Feed", "LF"),
    (0x000B, "Vertical Tab", "VT"),
    (0x000C, "Form Feed", "FF"),
    (0x000D, "Carriage Return", "CR"),
    (0x000E, "Shift Out", "SO"),
    (0x000F, "Shift In", "SI"),
    (0x001B, "Escape", "ESC"),
    (0x0020, "Space", "SP"),
    (0x007F, "Delete", "DEL"),
    (0x00A0, "No-Break Space", "NBSP"),
    (0x00AD, "Soft Hyphen", "SHY"),
    (0x034F, "Combining Grapheme Joiner", "CGJ"),
    (0x061C, "Arabic Letter Mark", "ALM"),
    (0x115F, "Hangul Choseong Filler", "HCF"),
    (0x1160, "Hangul Jungseong Filler", "HJF"),
    (0x17B4, "Khmer Vowel Inherent Aq", "KV1"),
    (0x17B5, "Khmer Vowel Inherent Aa", "KV2"),
    (0x180E, "Mongolian Vowel Separator", "MVS"),
    (0x2000, "En Quad", "ENQ"),
    (0x2001, "Em Quad", "EMQ"),
    (0x2002, "En Space", "ENS"),
    (0x2003, "Em Space", "EMS"),
    (0x2004, "Three-Per-Em Space", "3PES"),
    (0x2005, "Four-Per-Em Space", "4PES"),
    (0x2006, "Six-Per-Em Space", "6PES"),
    (0x2007, "Figure Space", "FSP"),
    (0x2008, "Punctuation Space", "PSP"),
    (0x2009, "Thin Space", "TSP"),
    (0x200A, "Hair Space", "HSP"),
    (0x200B, "Zero Width Space", "ZWSP"),
    (0x200C, "Zero Width Non-Joiner", "ZWNJ"),
    (0x200D, "Zero Width Joiner", "ZWJ"),
    (0x200E, "Left-to-Right Mark", "LRM"),
    (0x200F, "Right-to-Left Mark", "RLM"),
    (0x2028, "Line Separator", "LS"),
    (0x2029, "Paragraph Separator", "PS"),
    (0x202A, "Left-to-Right Embedding", "LRE"),
    (0x202B, "Right-to-Left Embedding", "RLE"),
    (0x202C, "Pop Directional Formatting", "PDF"),
    (0x202D, "Left-to-Right Override", "LRO"),
    (0x202E, "Right-to-Left Override", "RLO"),
    (0x202F, "Narrow No-Break Space", "NNBS"),
    (0x205F, "Medium Mathematical Space", "MMS"),
    (0x2060, "Word Joiner", "WJ"),
    (0x2061, "Function Application", "FA"),
    (0x2062, "Invisible Times", "IT"),
    (0x2063, "Invisible Separator", "IS"),
    (0x2064, "Invisible Plus", "IP"),
    (0x2066, "Left-to-Right Isolate", "LRI"),
    (0x2067, "Right-to-Left Isolate", "RLI"),
    (0x2068, "First Strong Isolate", "FSI"),
    (0x2069, "Pop Directional Isolate", "PDI"),
    (0x206A, "Inhibit Symmetric Swapping", "ISS"),
    (0x206B, "Activate Symmetric Swapping", "ASS"),
    (0x206C, "Inhibit Arabic Form Shaping", "IAFS"),
    (0x206D, "Activate Arabic Form Shaping", "AAFS"),
    (0x206E, "National Digit Shapes", "NDS"),
    (0x206F, "Nominal Digit Shapes", "NODS"),
    (0x3000, "Ideographic Space", "ISP"),
    (0xFEFF, "Byte Order Mark", "BOM"),
    (0xFFA0, "Halfwidth Hangul Filler", "HHF"),
    (0xFFFC, "Object Replacement Character", "OBJ"),
    (0xFFFD, "Replacement Character", "REP"),
];

/// Look up a special-character entry by code point.
pub(crate) fn special_char(code_point: u32) -> Option<(&'static str, &'static str)> {
    SPECIAL_CHARS
        .binary_search_by_key(&code_point, |&(cp, _, _)| cp)
        .ok()
        .map(|i| (SPECIAL_CHARS[i].1, SPECIAL_CHARS[i].2))
}
