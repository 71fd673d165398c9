/*!
 * Paragraph segmentation.
 *
 * Content arrives either as rendered HTML or as plain text, and the caller
 * does not say which. Segmentation therefore runs an ordered list of
 * strategies and keeps the first one that yields at least one unit:
 *
 * - `TagBlocks`: heading (`h1`-`h6`) and paragraph (`p`) elements, markup included
 * - `BlankLineBlocks`: plain-text blocks separated by blank lines
 * - `WholeContent`: the entire input as a single unit
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Block-level elements, one branch per tag since the regex crate has no backreferences
static TAG_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    let branches: Vec<String> = ["h1", "h2", "h3", "h4", "h5", "h6", "p"]
        .iter()
        .map(|tag| format!(r"<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>", tag = tag))
        .collect();
    Regex::new(&format!("(?is){}", branches.join("|"))).expect("Invalid tag block regex")
});

/// A newline, optional whitespace, then another newline
static BLANK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").expect("Invalid blank line regex")
});

/// Segmentation strategies, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStrategy {
    /// Heading and paragraph elements including their tags
    TagBlocks,
    /// Non-blank blocks between blank lines
    BlankLineBlocks,
    /// The whole content as one unit
    WholeContent,
}

impl SegmentStrategy {
    /// All strategies in fallback order
    pub const ORDER: [SegmentStrategy; 3] = [
        SegmentStrategy::TagBlocks,
        SegmentStrategy::BlankLineBlocks,
        SegmentStrategy::WholeContent,
    ];

    /// Apply this strategy alone. May return an empty list.
    pub fn apply<'a>(&self, content: &'a str) -> Vec<&'a str> {
        match self {
            Self::TagBlocks => tag_blocks(content),
            Self::BlankLineBlocks => BLANK_LINE_REGEX
                .split(content)
                .filter(|block| !block.trim().is_empty())
                .collect(),
            Self::WholeContent => vec![content],
        }
    }
}

/// Result of segmenting a piece of content
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation<'a> {
    /// Strategy that produced the paragraphs
    pub strategy: SegmentStrategy,
    /// Paragraphs in document order, borrowed from the input
    pub paragraphs: Vec<&'a str>,
}

impl<'a> Segmentation<'a> {
    /// Number of paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Always false; segmentation yields at least one unit
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

fn tag_blocks(content: &str) -> Vec<&str> {
    TAG_BLOCK_REGEX
        .captures_iter(content)
        .filter(|caps| {
            // Exactly one branch participates; its group holds the inner text
            caps.iter()
                .skip(1)
                .flatten()
                .next()
                .is_some_and(|inner| !inner.as_str().trim().is_empty())
        })
        .filter_map(|caps| caps.get(0).map(|whole| whole.as_str()))
        .collect()
}

/// Split content into paragraph units using the first strategy that finds any
pub fn segment(content: &str) -> Segmentation<'_> {
    for strategy in SegmentStrategy::ORDER {
        let paragraphs = strategy.apply(content);
        if !paragraphs.is_empty() {
            debug!(
                "Segmented {} bytes into {} paragraphs using {:?}",
                content.len(),
                paragraphs.len(),
                strategy
            );
            return Segmentation { strategy, paragraphs };
        }
    }

    // WholeContent never comes back empty, but keep the contract explicit
    Segmentation {
        strategy: SegmentStrategy::WholeContent,
        paragraphs: vec![content],
    }
}

/// Paragraph units of `content`, without the strategy that produced them
pub fn segment_paragraphs(content: &str) -> Vec<&str> {
    segment(content).paragraphs
}
