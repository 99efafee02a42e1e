//! Ranks the word list against the query.

use std::cmp::Reverse;

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    /// Position in the word list.
    pub index: usize,
    pub score: u32,
}

/// Page of ranked words plus the number of matches overall.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ranked {
    pub words: Vec<String>,
    pub total: usize,
}

/// Fuzzy matcher reused across keystrokes.
pub struct WordFilter {
    matcher: Matcher,
    scratch: Vec<char>,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            scratch: Vec::new(),
        }
    }
}

impl WordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches for `query`, best first; equal scores keep list order.
    ///
    /// A blank query matches nothing, so the suggestion list stays closed
    /// until something is typed. Whitespace separates atoms that must all
    /// match.
    pub fn rank(&mut self, query: &str, words: &[String]) -> Vec<FilterMatch> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);

        let mut matches = Vec::new();
        for (index, word) in words.iter().enumerate() {
            let haystack = Utf32Str::new(word, &mut self.scratch);
            if let Some(score) = pattern.score(haystack, &mut self.matcher) {
                matches.push(FilterMatch { index, score });
            }
        }
        matches.sort_by_key(|m| Reverse(m.score));
        matches
    }

    /// The best `limit` words for `query`.
    pub fn top(&mut self, query: &str, words: &[String], limit: usize) -> Ranked {
        let matches = self.rank(query, words);
        Ranked {
            total: matches.len(),
            words: matches
                .iter()
                .take(limit)
                .map(|m| words[m.index].clone())
                .collect(),
        }
    }
}
