/*!
 * # snipmark - keyword snippets and exclusive media playback
 *
 * A Rust library for the presentation layer of a content site.
 *
 * ## Features
 *
 * - Highlight search keywords in HTML or plain text:
 *   - Case-insensitive matching of comma/whitespace separated keywords
 *   - Matches wrapped in a configurable marker element, text preserved
 * - Snippet previews anchored at the first matching paragraph:
 *   - Collapsed (2 paragraphs) and expanded (5 paragraphs) windows
 *   - Content with no match is returned whole
 * - Keyword extraction from URL fragments
 * - Single playback across all mounted video and audio elements
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `highlight`: Keyword highlighting engine:
 *   - `highlight::pattern`: Keyword pattern builder
 *   - `highlight::segment`: Paragraph segmentation
 *   - `highlight::window`: Snippet windowing
 *   - `highlight::render`: Marker rendering
 *   - `highlight::fragment`: URL fragment keyword source
 * - `media`: Media exclusivity coordinator
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod highlight;
pub mod media;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{Config, HighlightConfig};
pub use highlight::{
    Highlighter, KeywordPattern, build_keyword_pattern, highlight_full, highlight_snippet,
    keywords_from_fragment, split_terms,
};
pub use media::{MediaCoordinator, MediaHandle, MediaKind, SharedMedia};
pub use errors::{MediaError, PatternError};
