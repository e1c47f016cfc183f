//! Formatting utilities for terminal output

/// Numeric glyph for a word length: circled digits up to 20, parenthesized beyond
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::length_glyph;
///
/// assert_eq!(length_glyph(4), "④");
/// assert_eq!(length_glyph(21), "(21)");
/// ```
#[must_use]
pub fn length_glyph(length: usize) -> String {
    let circled = match length {
        0 => Some('⓪'),
        1..=20 => u32::try_from(length)
            .ok()
            .and_then(|n| char::from_u32(0x245F + n)),
        _ => None,
    };

    circled.map_or_else(|| format!("({length})"), String::from)
}

/// Create a bar of `width` cells with `value` out of `max` filled
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
