//! Character-offset helpers
//!
//! The analysis service counts positions in **characters** (Unicode scalar
//! values), the way Python slices strings. Rust strings index by byte, so
//! every span coming from the service or stored on an entity has to be
//! converted before slicing. Umlauts are routine in Swiss documents
//! ("Müller", "Zürich"), so byte and char offsets diverge constantly; all
//! conversion is concentrated here and byte offsets never leave the core.

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at `char_offset`
///
/// Offsets past the end clamp to `s.len()`, which keeps slicing total for
/// defensively handled out-of-range spans.
pub fn byte_offset(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

/// Slice `s` by the half-open character interval `[start, end)`
pub fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    let byte_start = byte_offset(s, start);
    let byte_end = byte_offset(s, end).max(byte_start);
    &s[byte_start..byte_end]
}

/// Case-insensitive character equality
///
/// Compares the full Unicode lowercase expansions, so "Ü" matches "ü".
/// Both sides are compared one character at a time, which keeps match
/// positions aligned with source offsets (lowercasing a whole string can
/// change its length, e.g. "İ").
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
