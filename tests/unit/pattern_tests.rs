/*!
 * Tests for keyword pattern construction
 */

use snipmark::highlight::pattern::{escape_term, try_build_keyword_pattern};
use snipmark::{PatternError, build_keyword_pattern, split_terms};

#[test]
fn test_splitTerms_withChineseKeywords_shouldYieldThreeTerms() {
    assert_eq!(split_terms(&["苦 乐, 因果"]), vec!["苦", "乐", "因果"]);
}

#[test]
fn test_splitTerms_acrossSeveralInputs_shouldKeepInputOrder() {
    let terms = split_terms(&["b a", "", "c，d"]);
    assert_eq!(terms, vec!["b", "a", "c", "d"]);
}

#[test]
fn test_buildPattern_withSeparatorsOnly_shouldBeInert() {
    for keywords in [vec![""], vec!["   "], vec![",，、"], vec![]] {
        let pattern = build_keyword_pattern(&keywords);
        assert!(pattern.is_sentinel());
        assert!(!pattern.is_match("anything at all"));
        assert!(pattern.regex().is_none());
    }
}

#[test]
fn test_buildPattern_isDeterministic() {
    let first = build_keyword_pattern(&["apple, pie"]);
    let second = build_keyword_pattern(&["apple, pie"]);
    assert_eq!(first.as_str(), second.as_str());
}

#[test]
fn test_buildPattern_withRegexSyntax_shouldNotFail() {
    let pattern = build_keyword_pattern(&["[a-z]+", "(unclosed", "^$"]);
    assert!(!pattern.is_sentinel());
    assert!(pattern.is_match("literal [a-z]+ here"));
    assert!(pattern.is_match("(unclosed"));
    assert!(!pattern.is_match("abc"));
}

#[test]
fn test_buildPattern_withUnicodeCase_shouldMatchCaseInsensitively() {
    let pattern = build_keyword_pattern(&["straße"]);
    assert!(pattern.is_match("STRASSE") || pattern.is_match("STRAßE"));
    assert!(build_keyword_pattern(&["ÉTÉ"]).is_match("été"));
}

#[test]
fn test_escapeTerm_withEveryMetaCharacter_shouldEscapeAll() {
    assert_eq!(escape_term(".*+?^${}()|[]\\"), r"\.\*\+\?\^\$\{\}\(\)\|\[\]\\");
}

#[test]
fn test_tryBuildPattern_withTerms_shouldCompile() {
    let regex = try_build_keyword_pattern(&["x"]).unwrap();
    assert_eq!(regex.as_str(), "(x)");
    assert_eq!(try_build_keyword_pattern(&[","]).unwrap_err(), PatternError::NoTerms);
}
