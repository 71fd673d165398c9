/*!
 * Snippet windowing.
 *
 * Selects a contiguous run of paragraphs starting at the first paragraph
 * that contains a keyword. The run is short in collapsed mode and longer in
 * expanded mode ("read more"). Content without any match is returned whole
 * so a preview never hides the only relevant text.
 */

use std::borrow::Cow;
use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use super::pattern::{KeywordPattern, build_keyword_pattern};
use super::segment::segment;

/// Display mode of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Truncated preview
    #[default]
    Collapsed,
    /// "Read more" preview
    Expanded,
}

impl From<bool> for WindowMode {
    fn from(expanded: bool) -> Self {
        if expanded { Self::Expanded } else { Self::Collapsed }
    }
}

/// Paragraph counts for each window mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSizes {
    /// Paragraphs shown when collapsed
    #[serde(default = "default_collapsed_window")]
    pub collapsed: usize,

    /// Paragraphs shown when expanded
    #[serde(default = "default_expanded_window")]
    pub expanded: usize,
}

pub(crate) fn default_collapsed_window() -> usize {
    2
}

pub(crate) fn default_expanded_window() -> usize {
    5
}

impl Default for WindowSizes {
    fn default() -> Self {
        Self {
            collapsed: default_collapsed_window(),
            expanded: default_expanded_window(),
        }
    }
}

impl WindowSizes {
    /// Window size for a mode, never below one paragraph
    pub fn for_mode(&self, mode: WindowMode) -> usize {
        let size = match mode {
            WindowMode::Collapsed => self.collapsed,
            WindowMode::Expanded => self.expanded,
        };
        size.max(1)
    }
}

/// Half-open paragraph index range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWindow {
    /// Index of the first matching paragraph
    pub start: usize,
    /// One past the last paragraph shown
    pub end: usize,
}

impl MatchWindow {
    /// Number of paragraphs in the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window covers no paragraphs
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The window as a slice range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Find the window anchored at the earliest matching paragraph
///
/// Returns `None` when no paragraph matches (always the case for the
/// sentinel pattern). The window always contains the anchor paragraph,
/// so a `size` of 0 is treated as 1.
pub fn locate_window(paragraphs: &[&str], pattern: &KeywordPattern, size: usize) -> Option<MatchWindow> {
    let start = paragraphs.iter().position(|paragraph| pattern.is_match(paragraph))?;
    let end = start.saturating_add(size.max(1)).min(paragraphs.len());
    Some(MatchWindow { start, end })
}

/// Window `content` around the first match of an already built pattern
pub fn window_with_pattern<'a>(
    content: &'a str,
    pattern: &KeywordPattern,
    mode: WindowMode,
    sizes: &WindowSizes,
) -> Cow<'a, str> {
    if pattern.is_sentinel() {
        return Cow::Borrowed(content);
    }

    let segmentation = segment(content);
    match locate_window(&segmentation.paragraphs, pattern, sizes.for_mode(mode)) {
        Some(window) => {
            debug!(
                "Snippet window {:?} of {} paragraphs ({:?})",
                window.range(),
                segmentation.len(),
                mode
            );
            Cow::Owned(segmentation.paragraphs[window.range()].concat())
        }
        None => {
            debug!("No paragraph matched, keeping full content");
            Cow::Borrowed(content)
        }
    }
}

/// Window `content` around the first keyword match using the default sizes
///
/// Returns the content unchanged when there are no keywords or no paragraph
/// matches.
pub fn window_snippet<S: AsRef<str>>(content: &str, keywords: &[S], expanded: bool) -> String {
    if keywords.is_empty() {
        return content.to_string();
    }
    let pattern = build_keyword_pattern(keywords);
    window_with_pattern(content, &pattern, expanded.into(), &WindowSizes::default()).into_owned()
}
