#![forbid(unsafe_code)]

//! Built-in example texts.
//!
//! A small catalog of inputs that exercise the interesting corners of the
//! analyzer: ZWJ sequences, variation selectors, skin tones, and invisible
//! characters. Lives in the CLI because the engine deliberately carries no
//! example data.

/// One named example input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleText {
    /// Name accepted by `unispect analyze --example <NAME>`.
    pub name: &'static str,
    /// One-line description for the listing.
    pub summary: &'static str,
    /// The text itself.
    pub text: &'static str,
}

/// The example catalog, in listing order.
pub static EXAMPLE_TEXTS: &[ExampleText] = &[
    ExampleText {
        name: "zwj-family",
        summary: "Four person emoji joined into one family by three ZWJs",
        text: "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}",
    },
    ExampleText {
        name: "rainbow-flag",
        summary: "White flag + VS16 + ZWJ + rainbow",
        text: "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
    },
    ExampleText {
        name: "keycap",
        summary: "Digit 1 + VS16 + combining enclosing keycap",
        text: "1\u{FE0F}\u{20E3}",
    },
    ExampleText {
        name: "skin-tone",
        summary: "Waving hand with medium skin tone modifier",
        text: "\u{1F44B}\u{1F3FD}",
    },
    ExampleText {
        name: "doctor-dark",
        summary: "Woman + dark skin tone + ZWJ + medical symbol + VS16",
        text: "\u{1F469}\u{1F3FF}\u{200D}\u{2695}\u{FE0F}",
    },
    ExampleText {
        name: "hidden-chars",
        summary: "ZWSP and BOM hiding inside plain ASCII",
        text: "Hello\u{200B}World\u{FEFF}",
    },
    ExampleText {
        name: "mixed-content",
        summary: "Prose with emoji, skin tone, flag sequence, and a ZWSP",
        text: "Hello \u{1F44B}\u{1F3FD} World! \u{1F30D}\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}\u{200B}",
    },
];

/// Look up an example by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ExampleText> {
    EXAMPLE_TEXTS.iter().find(|e| e.name == name)
}

/// Print the catalog, one example per line.
pub fn print_examples() {
    for example in EXAMPLE_TEXTS {
        println!("{:<14} {} — {}", example.name, example.text, example.summary);
    }
}
