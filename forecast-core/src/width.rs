//! Display-width aware padding for table cells.
//!
//! Character count and rendered width disagree as soon as emoji or East
//! Asian glyphs appear: a wide glyph occupies two terminal columns, a
//! combining mark none. All width measurement in this crate goes through
//! [`display_width`], so the width table stays a single, swappable seam.

use unicode_width::UnicodeWidthStr;

/// Number of terminal columns `text` occupies when rendered.
///
/// Wide glyphs (emoji, CJK) count as two columns, combining marks as zero,
/// everything else as one. Emoji presentation sequences (base character
/// followed by U+FE0F) count as two.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad `text` with trailing spaces until it renders at `target` columns.
///
/// Content already wider than `target` is returned unchanged rather than
/// truncated, so an over-long cell overflows its column instead of losing
/// data.
pub fn pad_to_width(text: &str, target: usize) -> String {
    let padding = target.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}
