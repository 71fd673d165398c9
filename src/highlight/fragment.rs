/*!
 * Keyword extraction from URL fragments.
 *
 * Pages usually carry search keywords in the fragment, e.g.
 * `/courses/12#kw=apple,pie`. This module pulls the raw values out so they
 * can be passed straight to the highlighter.
 */

use log::debug;
use url::form_urlencoded;

/// Default fragment parameter holding keywords
pub const DEFAULT_KEYWORD_PARAM: &str = "kw";

/// Decoded values of every `param` entry in a fragment
///
/// Accepts a bare fragment (`kw=a`), a fragment with its leading `#`, or a
/// full URL. Values are percent-decoded and `+` becomes a space. The values
/// are returned raw; splitting into atomic terms happens in the pattern
/// builder.
pub fn keywords_from_fragment(fragment: &str, param: &str) -> Vec<String> {
    let fragment = match fragment.find('#') {
        Some(pos) => &fragment[pos + 1..],
        None => fragment,
    };

    let keywords: Vec<String> = form_urlencoded::parse(fragment.as_bytes())
        .filter(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
        .collect();

    debug!("Found {} keyword values for '{}' in fragment", keywords.len(), param);
    keywords
}
