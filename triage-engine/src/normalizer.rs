// Text normalization applied to every symptom phrase
use lazy_static::lazy_static;
use regex::Regex;

/// Compile a pattern that is known to be valid at build time
#[allow(clippy::expect_used)]
pub(crate) fn static_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern compiles")
}

lazy_static! {
    // Unicode-aware: letters, digits and marks of any script survive.
    static ref NON_WORD: Regex = static_pattern(r"[^\w\s]");
    static ref WHITESPACE: Regex = static_pattern(r"\s+");
}

/// Lowercase, replace punctuation with spaces, collapse whitespace and trim
///
/// ```rust
/// use triage_engine::normalize;
///
/// assert_eq!(normalize("  Chest PAIN!!  "), "chest pain");
/// assert_eq!(normalize("short-of-breath"), "short of breath");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = NON_WORD.replace_all(&lowered, " ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}
