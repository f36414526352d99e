//! Context windows and context multipliers

use crate::lexicon::Lexicon;

/// Extract the window around the first occurrence of `term` in `text`
///
/// The window spans `radius` characters before the match and `radius`
/// characters after its end, clipped to the text bounds. Plain substring
/// search is used so names with punctuation need no escaping. Only the first
/// occurrence is contextualized. Returns an empty string when `term` is absent.
pub fn extract_context(text: &str, term: &str, radius: usize) -> String {
    let Some(index) = text.find(term) else {
        return String::new();
    };

    let start = text[..index]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(index, |(i, _)| i);

    let match_end = index + term.len();
    let end = text[match_end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| match_end + i);

    text[start..end].to_string()
}

/// Map a context window to the multiplier applied to a term's weight
///
/// Starts neutral at 1.0; every positive modifier phrase present adds the
/// lexicon's increment, every negative one subtracts its decrement. Both kinds
/// stack freely. The result is clamped to the lexicon's multiplier bounds.
pub fn score_context(context: &str, lexicon: &Lexicon) -> f64 {
    let context = context.to_lowercase();
    let mut multiplier: f64 = 1.0;

    for phrase in &lexicon.positive_context {
        if context.contains(&phrase.to_lowercase()) {
            multiplier += lexicon.positive_increment;
        }
    }

    for phrase in &lexicon.negative_context {
        if context.contains(&phrase.to_lowercase()) {
            multiplier -= lexicon.negative_decrement;
        }
    }

    multiplier.min(lexicon.max_multiplier).max(lexicon.min_multiplier)
}
