//! String canonicalization applied before every comparison.
//!
//! Normalization trims surrounding whitespace and lower-cases the input,
//! then composes it to NFC and folds the letter variant `ё` to `е` until the
//! string stops changing. The result is a fixed point: normalizing an
//! already-normalized string returns it as-is.

use unicode_normalization::{UnicodeNormalization, is_nfc};

/// The letter variant folded away during normalization.
pub const LETTER_VARIANT: char = '\u{0451}';

/// The canonical letter that [`LETTER_VARIANT`] folds to.
pub const LETTER_CANONICAL: char = '\u{0435}';

/// Canonicalize a string for comparison.
///
/// Returns a new owned string. Hot loops that normalize many candidates
/// should prefer the crate-internal buffer-reusing variant.
///
/// # Examples
///
/// ```
/// use fuzzyrank::normalize;
///
/// assert_eq!(normalize("  Ёлка "), "елка");
/// assert_eq!(normalize("MOSCOW"), "moscow");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    normalize_into(s, &mut buf);
    buf
}

/// Normalize `s` into `buf`, reusing the buffer's allocation.
///
/// ASCII input takes a byte-level path that avoids Unicode case-mapping and
/// composition tables entirely.
pub(crate) fn normalize_into(s: &str, buf: &mut String) {
    buf.clear();
    let trimmed = s.trim();
    buf.reserve(trimmed.len());

    if trimmed.is_ascii() {
        buf.extend(trimmed.bytes().map(|b| b.to_ascii_lowercase() as char));
        return;
    }

    // Whole-string lower-casing applies the context-sensitive final sigma.
    let lowered = trimmed.to_lowercase();
    buf.extend(lowered.nfc().map(fold_variant));

    // Folding a variant that carries a further U+0308 leaves `е` + U+0308,
    // which composes into the variant again. Each round shortens the string.
    while !is_nfc(buf.as_str()) {
        let recomposed: String = buf.as_str().nfc().map(fold_variant).collect();
        *buf = recomposed;
    }
}

fn fold_variant(c: char) -> char {
    if c == LETTER_VARIANT { LETTER_CANONICAL } else { c }
}

/// Number of Unicode scalar values in `s`, with an ASCII shortcut.
pub(crate) fn char_len(s: &str) -> usize {
    if s.is_ascii() {
        s.len()
    } else {
        s.chars().count()
    }
}
