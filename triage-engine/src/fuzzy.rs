//! Fuzzy keyword matching
//!
//! A phrase matches a keyword when the keyword occurs in it verbatim, or when
//! the two strings are similar enough by the Ratcliff/Obershelp measure. The
//! measure is computed over Unicode scalar values and counts the characters
//! covered by recursively found longest common blocks:
//! `ratio = 2 * matched / (len(candidate) + len(keyword))`.

use std::collections::HashMap;

use crate::error::{TriageError, TriageResult};

/// Similarity a phrase must reach to match a keyword
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Sequences this long or longer ignore overly common characters when
/// seeding block search
const AUTOJUNK_MIN_LEN: usize = 200;

/// How a candidate phrase compared with a keyword
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome {
    /// Keyword occurs in the candidate
    Substring,
    /// Similarity reached the threshold
    Ratio(f64),
    /// Similarity fell short of the threshold
    NoMatch(f64),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchOutcome::NoMatch(_))
    }

    /// Similarity score; substring hits count as a perfect score
    pub fn score(&self) -> f64 {
        match self {
            MatchOutcome::Substring => 1.0,
            MatchOutcome::Ratio(r) | MatchOutcome::NoMatch(r) => *r,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> TriageResult<Self> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(TriageError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Case-insensitive comparison of a candidate phrase against a keyword
    ///
    /// ```rust
    /// use triage_engine::{FuzzyMatcher, MatchOutcome};
    ///
    /// let matcher = FuzzyMatcher::default();
    /// assert_eq!(matcher.evaluate("Severe chest pain", "chest pain"), MatchOutcome::Substring);
    /// assert!(matcher.is_match("chest pian", "chest pain"));
    /// assert!(!matcher.is_match("headache", "chest pain"));
    /// ```
    pub fn evaluate(&self, candidate: &str, keyword: &str) -> MatchOutcome {
        let candidate = candidate.to_lowercase();
        let keyword = keyword.to_lowercase();

        if candidate.contains(&keyword) {
            return MatchOutcome::Substring;
        }

        let ratio = similarity_ratio(&candidate, &keyword);
        if ratio >= self.threshold {
            MatchOutcome::Ratio(ratio)
        } else {
            MatchOutcome::NoMatch(ratio)
        }
    }

    pub fn is_match(&self, candidate: &str, keyword: &str) -> bool {
        self.evaluate(candidate, keyword).is_match()
    }
}

/// Ratcliff/Obershelp similarity in `[0.0, 1.0]`; two empty strings score 1.0
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = BlockMatcher::new(&a, &b)
        .matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum();

    2.0 * matched as f64 / total as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

struct BlockMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    // positions of each character in `b`, ascending
    b_index: HashMap<char, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
        for (position, ch) in b.iter().enumerate() {
            b_index.entry(*ch).or_default().push(position);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_index.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b_index }
    }

    fn same(&self, i: usize, j: usize) -> bool {
        matches!((self.a.get(i), self.b.get(j)), (Some(x), Some(y)) if x == y)
    }

    /// Longest common block within `a[alo..ahi]` and `b[blo..bhi]`; ties go to
    /// the block starting earliest in `a`, then earliest in `b`
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // length of the match ending at b[j] for the previous row of a
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_runs: HashMap<usize, usize> = HashMap::new();
            let positions = self.a.get(i).and_then(|ch| self.b_index.get(ch));

            for &j in positions.into_iter().flatten() {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let previous = j.checked_sub(1).and_then(|p| run_lengths.get(&p)).copied();
                let size = previous.unwrap_or(0) + 1;
                next_runs.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
            run_lengths = next_runs;
        }

        // Characters dropped from the index can still extend a block.
        while best_i > alo && best_j > blo && self.same(best_i - 1, best_j - 1) {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.same(best_i + best_size, best_j + best_size)
        {
            best_size += 1;
        }

        Block {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    fn matching_blocks(&self) -> Vec<Block> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a_start && blo < block.b_start {
                pending.push((alo, block.a_start, blo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < ahi && b_end < bhi {
                pending.push((a_end, ahi, b_end, bhi));
            }
            blocks.push(block);
        }

        blocks.sort();
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_known_ratios() {
        assert_close(similarity_ratio("chest pian", "chest pain"), 0.9);
        assert_close(similarity_ratio("headache", "chest pain"), 1.0 / 3.0);
        assert_close(similarity_ratio("severe chest pain", "chest pain"), 20.0 / 27.0);
        assert_close(similarity_ratio("fever", "heart"), 0.4);
        assert_close(similarity_ratio("stroek", "stroke"), 10.0 / 12.0);
        assert_close(similarity_ratio("sezure", "seizure"), 12.0 / 13.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_close(similarity_ratio("", ""), 1.0);
        assert_close(similarity_ratio("abcd", ""), 0.0);
        assert_close(similarity_ratio("", "abcd"), 0.0);
    }

    #[test]
    fn test_substring_short_circuits() {
        let matcher = FuzzyMatcher::default();
        assert_eq!(
            matcher.evaluate("I have SEVERE chest pain", "Chest Pain"),
            MatchOutcome::Substring
        );
        // empty keywords are contained in everything
        assert_eq!(matcher.evaluate("fever", ""), MatchOutcome::Substring);
    }

    #[test]
    fn test_threshold_boundary() {
        let matcher = FuzzyMatcher::default();
        let outcome = matcher.evaluate("chest pian", "chest pain");
        assert!(matches!(outcome, MatchOutcome::Ratio(_)));
        assert_close(outcome.score(), 0.9);

        let outcome = matcher.evaluate("fever", "heart");
        assert!(matches!(outcome, MatchOutcome::NoMatch(_)));
        assert_close(outcome.score(), 0.4);

        let strict = FuzzyMatcher::new(0.95).unwrap();
        assert!(!strict.is_match("chest pian", "chest pain"));
        let lenient = FuzzyMatcher::new(0.4).unwrap();
        assert!(lenient.is_match("fever", "heart"));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        assert!(FuzzyMatcher::new(-0.1).is_err());
        assert!(FuzzyMatcher::new(1.5).is_err());
        assert!(FuzzyMatcher::new(f64::NAN).is_err());
        assert!(FuzzyMatcher::new(0.0).is_ok());
        assert!(FuzzyMatcher::new(1.0).is_ok());
    }

    #[test]
    fn test_long_keyword_uses_autojunk() {
        // Popular characters are dropped from the index but blocks still extend.
        let keyword = "a".repeat(250);
        let candidate = "a".repeat(100);
        assert_close(similarity_ratio(&candidate, &keyword), 200.0 / 350.0);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_close(similarity_ratio("सीने", "सीने"), 1.0);
        assert_close(similarity_ratio("fièvre", "fievre"), 10.0 / 12.0);
    }
}
