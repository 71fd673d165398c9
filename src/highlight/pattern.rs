/*!
 * Keyword pattern construction.
 *
 * Raw keyword strings are split into atomic terms, escaped, and compiled into
 * a single case-insensitive alternation. When nothing usable remains the
 * builder returns `KeywordPattern::NoMatch`, an inert value that never
 * matches, so "no keywords" is a data case rather than an error.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::errors::PatternError;

/// Separators between terms: ASCII comma, full-width comma, enumeration comma, whitespace
static TERM_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[,，、\s]+").expect("Invalid term separator regex")
});

/// Compiled size limit for keyword patterns (the regex default is 10 MiB).
/// Terms of a few hundred thousand characters still fit; anything beyond
/// this is rejected and degrades to the sentinel.
pub const PATTERN_SIZE_LIMIT: usize = 256 * (1 << 20);

/// Characters escaped before a term enters the alternation
const META_CHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// A compiled keyword alternation, or the sentinel that matches nothing
#[derive(Debug, Clone)]
pub enum KeywordPattern {
    /// Case-insensitive alternation wrapped in one capturing group
    Compiled(Regex),
    /// No usable terms; never matches
    NoMatch,
}

impl KeywordPattern {
    /// Whether this is the inert sentinel
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// Test text against the pattern. Always false for the sentinel.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Compiled(regex) => regex.is_match(text),
            Self::NoMatch => false,
        }
    }

    /// Number of non-overlapping matches in `text`
    pub fn count_matches(&self, text: &str) -> usize {
        match self {
            Self::Compiled(regex) => regex.find_iter(text).count(),
            Self::NoMatch => 0,
        }
    }

    /// The underlying regex, if any
    pub fn regex(&self) -> Option<&Regex> {
        match self {
            Self::Compiled(regex) => Some(regex),
            Self::NoMatch => None,
        }
    }

    /// Source of the compiled pattern, if any
    pub fn as_str(&self) -> Option<&str> {
        self.regex().map(|regex| regex.as_str())
    }
}

/// Split raw keywords into atomic terms
///
/// Every input is split on runs of commas (ASCII, full-width, enumeration)
/// and whitespace; the pieces are trimmed and empty ones dropped. Order is
/// preserved and duplicates are kept.
pub fn split_terms<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .flat_map(|keyword| TERM_SEPARATOR_REGEX.split(keyword.as_ref()))
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Backslash-escape regex metacharacters in a single term
pub fn escape_term(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if META_CHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the keyword regex, reporting why it could not be built
///
/// Fails with `PatternError::Compile` when the compiled pattern would
/// exceed `PATTERN_SIZE_LIMIT`.
pub fn try_build_keyword_pattern<S: AsRef<str>>(keywords: &[S]) -> Result<Regex, PatternError> {
    let terms = split_terms(keywords);
    if terms.is_empty() {
        return Err(PatternError::NoTerms);
    }

    let alternation = terms
        .iter()
        .map(|term| escape_term(term))
        .collect::<Vec<_>>()
        .join("|");

    let regex = RegexBuilder::new(&format!("({})", alternation))
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?;

    debug!("Built keyword pattern from {} terms", terms.len());
    Ok(regex)
}

/// Build the keyword pattern, degrading to the sentinel instead of failing
pub fn build_keyword_pattern<S: AsRef<str>>(keywords: &[S]) -> KeywordPattern {
    match try_build_keyword_pattern(keywords) {
        Ok(regex) => KeywordPattern::Compiled(regex),
        Err(PatternError::NoTerms) => KeywordPattern::NoMatch,
        Err(error) => {
            warn!("Keyword pattern rejected, highlighting disabled: {}", error);
            KeywordPattern::NoMatch
        }
    }
}
