use crate::types::ContentSection;

/// Fixed reading speed used for the estimate.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Estimated minutes to read an article body, `ceil(words / 200)`.
///
/// Counts whitespace-delimited tokens of every body block; headings do not
/// count. Empty content is 0 minutes.
pub fn estimate_minutes(content: &[ContentSection]) -> u32 {
    let words: u32 = content
        .iter()
        .flat_map(|section| section.body.iter())
        .map(|block| block.text.split_whitespace().count() as u32)
        .sum();
    words.div_ceil(WORDS_PER_MINUTE)
}
