/*!
 * Tests for highlight rendering
 */

use snipmark::app_config::HighlightConfig;
use snipmark::highlight::{Highlighter, MarkerStyle, build_keyword_pattern};
use snipmark::{highlight_full, highlight_snippet};

use crate::common::{marked, strip_marks};

#[test]
fn test_highlightFull_withKeywordB_shouldWrapWithoutChangingText() {
    let result = highlight_full("abc", &["b"]);
    assert!(result.contains(&format!("a{}c", marked("b"))));
    assert_eq!(strip_marks(&result), "abc");
}

#[test]
fn test_identityLaw_withNoAtomicTerms_shouldReturnInputUnchanged() {
    let contents = ["", "plain", "<p>html</p><p>two</p>", "line\n\nline"];
    let keyword_sets: [&[&str]; 4] = [&[], &[""], &["  ", "\t"], &[",", "，、"]];

    for content in contents {
        for keywords in keyword_sets {
            assert_eq!(highlight_full(content, keywords), content);
            assert_eq!(highlight_snippet(content, keywords, false), content);
            assert_eq!(highlight_snippet(content, keywords, true), content);
        }
    }
}

#[test]
fn test_highlightFull_withSeveralTerms_shouldMarkEachOccurrence() {
    let result = highlight_full("Apple pie and apple tart", &["apple", "tart"]);
    assert_eq!(
        result,
        format!("{} pie and {} {}", marked("Apple"), marked("apple"), marked("tart"))
    );
}

#[test]
fn test_highlightFull_shouldNotWindowLongContent() {
    let content = "<p>one</p><p>two</p><p>three</p><p>four apple</p>";
    let result = highlight_full(content, &["apple"]);
    assert!(result.starts_with("<p>one</p>"));
    assert_eq!(strip_marks(&result), content);
}

#[test]
fn test_highlightSnippet_withMatchInMarkup_shouldStillPreserveText() {
    // Matches inside attributes are wrapped too; the input is trusted content
    let content = "<p class=\"apple\">apple</p>";
    let result = highlight_snippet(content, &["apple"], false);
    assert_eq!(strip_marks(&result), content);
}

#[test]
fn test_highlightSnippet_withReplacementSyntaxInContent_shouldCopyLiterally() {
    let result = highlight_full("cost $1 or ${name}", &["cost"]);
    assert_eq!(result, format!("{} $1 or ${{name}}", marked("cost")));
}

#[test]
fn test_highlighter_wrapMatches_withSentinel_shouldReturnText() {
    let highlighter = Highlighter::default();
    let pattern = build_keyword_pattern(&[" "]);
    assert_eq!(highlighter.wrap_matches("text", &pattern), "text");
}

#[test]
fn test_highlighter_withEmptyClass_shouldOmitAttribute() {
    let config = HighlightConfig {
        marker_class: String::new(),
        ..HighlightConfig::default()
    };
    let highlighter = Highlighter::new(&config);
    assert_eq!(highlighter.highlight_full("a b", &["b"]), "a <mark>b</mark>");
    assert_eq!(highlighter.marker(), &MarkerStyle { tag: "mark".to_string(), class: String::new() });
}

#[test]
fn test_countMatches_withSentinel_shouldBeZero() {
    let highlighter = Highlighter::default();
    assert_eq!(highlighter.count_matches("a a a", &["a"]), 3);
    assert_eq!(highlighter.count_matches::<&str>("a a a", &[]), 0);
}
