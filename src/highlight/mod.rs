/*!
 * Keyword highlighting and snippet windowing.
 *
 * Pure functions over (content, keywords, expanded) returning HTML strings.
 *
 * # Architecture
 *
 * - `pattern`: Splits, escapes and compiles keywords into one alternation
 * - `segment`: Splits content into paragraph units with fallback strategies
 * - `window`: Selects the paragraphs around the first match
 * - `render`: Wraps matches in marker elements
 * - `fragment`: Reads keywords from URL fragments
 */

pub mod pattern;
pub mod segment;
pub mod window;
pub mod render;
pub mod fragment;

// Re-export main types
pub use pattern::{KeywordPattern, build_keyword_pattern, split_terms};
pub use segment::{SegmentStrategy, segment_paragraphs};
pub use window::{MatchWindow, WindowMode, WindowSizes, window_snippet};
pub use render::{Highlighter, MarkerStyle, highlight_full, highlight_snippet};
pub use fragment::keywords_from_fragment;
