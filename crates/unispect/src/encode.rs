#![forbid(unsafe_code)]

//! Per-code-point encoding arithmetic: UTF-8 byte sequences, UTF-16 code
//! units, and canonical `U+XXXX` formatting.
//!
//! Every function here is total over `0..=0x10FFFF` and pure. No input is
//! rejected: a surrogate-range value still yields the three bytes the UTF-8
//! bit pattern prescribes, because the analyzer reports what the encoding
//! *would* be rather than validating scalar values (Rust `char` inputs can
//! never be surrogates anyway; the `u32` surface exists so classification
//! tooling can probe the full range).
//!
//! # Example
//! ```
//! use unispect::encode::{format_unicode, utf8_bytes, utf16_units};
//!
//! assert_eq!(utf8_bytes(0x41).as_slice(), &[0x41]);
//! assert_eq!(utf8_bytes(0x1F600).as_slice(), &[0xF0, 0x9F, 0x98, 0x80]);
//! assert_eq!(utf16_units(0x1F600).as_slice(), &[0xD83D, 0xDE00]);
//! assert_eq!(format_unicode(0x9), "U+0009");
//! assert_eq!(format_unicode(0x1F600), "U+1F600");
//! ```

use smallvec::{SmallVec, smallvec};

/// UTF-8 encoding of a code point, 1–4 bytes by magnitude.
#[must_use]
pub fn utf8_bytes(code_point: u32) -> SmallVec<[u8; 4]> {
    if code_point <= 0x7F {
        smallvec![code_point as u8]
    } else if code_point <= 0x7FF {
        smallvec![
            0xC0 | (code_point >> 6) as u8,
            0x80 | (code_point & 0x3F) as u8,
        ]
    } else if code_point <= 0xFFFF {
        smallvec![
            0xE0 | (code_point >> 12) as u8,
            0x80 | ((code_point >> 6) & 0x3F) as u8,
            0x80 | (code_point & 0x3F) as u8,
        ]
    } else {
        smallvec![
            0xF0 | (code_point >> 18) as u8,
            0x80 | ((code_point >> 12) & 0x3F) as u8,
            0x80 | ((code_point >> 6) & 0x3F) as u8,
            0x80 | (code_point & 0x3F) as u8,
        ]
    }
}

/// UTF-16 encoding of a code point: one unit in the BMP, otherwise a
/// high/low surrogate pair.
#[must_use]
pub fn utf16_units(code_point: u32) -> SmallVec<[u16; 2]> {
    if code_point <= 0xFFFF {
        smallvec![code_point as u16]
    } else {
        let offset = code_point - 0x10000;
        smallvec![
            0xD800 + (offset >> 10) as u16,
            0xDC00 + (offset & 0x3FF) as u16,
        ]
    }
}

/// Canonical `U+XXXX` form: uppercase hex, zero-padded to 4 digits inside
/// the BMP, natural width above it.
#[must_use]
pub fn format_unicode(code_point: u32) -> String {
    if code_point <= 0xFFFF {
        format!("U+{code_point:04X}")
    } else {
        format!("U+{code_point:X}")
    }
}
