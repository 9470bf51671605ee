//! Case-insensitive pattern counting.

use regex::{Regex, RegexBuilder};

/// Compile a list of literal alternatives into one case-insensitive pattern.
///
/// Alternatives are escaped and joined with `|`, so they match as plain
/// substrings anywhere in the text (no word boundaries). Earlier alternatives
/// win when two could start at the same position.
///
/// Case folding is ASCII-only: non-ASCII characters such as U+017F (long s)
/// or U+212A (Kelvin sign) never match their ASCII look-alikes. Alternatives
/// must therefore be ASCII.
pub fn compile_alternatives(alternatives: &[&str]) -> Result<Regex, regex::Error> {
    let source = alternatives
        .iter()
        .map(|alt| regex::escape(alt))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .unicode(false)
        .build()
}

/// Count all non-overlapping matches of `pattern` in `text`.
///
/// Matching proceeds left to right; after a match the search resumes at its
/// end. Returns 0 for empty text.
pub fn count_matches(text: &str, pattern: &Regex) -> usize {
    if text.is_empty() {
        return 0;
    }
    pattern.find_iter(text).count()
}
