/*!
 * Highlight rendering.
 *
 * Wraps every keyword occurrence in a marker element. The matched text is
 * copied through untouched (original case included); only markup is added.
 * With no usable keywords every entry point is the identity transform.
 */

use regex::Captures;

use crate::app_config::HighlightConfig;

use super::pattern::{KeywordPattern, build_keyword_pattern};
use super::window::{WindowMode, WindowSizes, window_with_pattern};

/// Marker element wrapped around each match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Element name, e.g. `mark`
    pub tag: String,
    /// Class attribute value; omitted when empty
    pub class: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            tag: "mark".to_string(),
            class: "highlight".to_string(),
        }
    }
}

impl MarkerStyle {
    /// Opening tag
    pub fn open(&self) -> String {
        if self.class.is_empty() {
            format!("<{}>", self.tag)
        } else {
            format!("<{} class=\"{}\">", self.tag, self.class)
        }
    }

    /// Closing tag
    pub fn close(&self) -> String {
        format!("</{}>", self.tag)
    }

    /// Wrap a single piece of text
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open(), text, self.close())
    }
}

/// Applies keyword highlighting with a fixed marker style and window sizes
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    marker: MarkerStyle,
    sizes: WindowSizes,
}

impl Highlighter {
    /// Create a highlighter from configuration
    ///
    /// Window sizes below one paragraph are raised to one, so a snippet
    /// always contains the matching paragraph even for unvalidated configs.
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            marker: MarkerStyle {
                tag: config.marker_tag.clone(),
                class: config.marker_class.clone(),
            },
            sizes: WindowSizes {
                collapsed: config.collapsed_window.max(1),
                expanded: config.expanded_window.max(1),
            },
        }
    }

    /// Marker style in use
    pub fn marker(&self) -> &MarkerStyle {
        &self.marker
    }

    /// Window sizes in use
    pub fn window_sizes(&self) -> &WindowSizes {
        &self.sizes
    }

    /// Wrap every match of `pattern` in `text`. The sentinel leaves text as is.
    pub fn wrap_matches(&self, text: &str, pattern: &KeywordPattern) -> String {
        let Some(regex) = pattern.regex() else {
            return text.to_string();
        };

        let open = self.marker.open();
        let close = self.marker.close();
        regex
            .replace_all(text, |caps: &Captures| format!("{}{}{}", open, &caps[0], close))
            .into_owned()
    }

    /// Window the content around the first match, then mark every match in the window
    pub fn highlight_snippet<S: AsRef<str>>(&self, content: &str, keywords: &[S], expanded: bool) -> String {
        if keywords.is_empty() {
            return content.to_string();
        }

        let pattern = build_keyword_pattern(keywords);
        if pattern.is_sentinel() {
            return content.to_string();
        }

        let windowed = window_with_pattern(content, &pattern, WindowMode::from(expanded), &self.sizes);
        self.wrap_matches(&windowed, &pattern)
    }

    /// Mark every match in the whole content, without windowing
    pub fn highlight_full<S: AsRef<str>>(&self, content: &str, keywords: &[S]) -> String {
        if keywords.is_empty() {
            return content.to_string();
        }

        let pattern = build_keyword_pattern(keywords);
        self.wrap_matches(content, &pattern)
    }

    /// Number of keyword occurrences in the whole content
    pub fn count_matches<S: AsRef<str>>(&self, content: &str, keywords: &[S]) -> usize {
        build_keyword_pattern(keywords).count_matches(content)
    }
}

/// Windowed and marked HTML using the default marker and window sizes
pub fn highlight_snippet<S: AsRef<str>>(content: &str, keywords: &[S], expanded: bool) -> String {
    Highlighter::default().highlight_snippet(content, keywords, expanded)
}

/// Fully marked HTML using the default marker
pub fn highlight_full<S: AsRef<str>>(content: &str, keywords: &[S]) -> String {
    Highlighter::default().highlight_full(content, keywords)
}
