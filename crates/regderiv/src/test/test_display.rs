// Tests for the textual rendering of patterns and captures
use crate::*;

#[test]
fn test_display_atoms() {
    assert_eq!(empty().to_string(), "()");
    assert_eq!(fail().to_string(), "[]");
    assert_eq!(any().to_string(), ".");
    assert_eq!(literal('a').to_string(), "a");
    assert_eq!(literal_str("a.b").to_string(), "a\\.b");
    assert_eq!(literal_str("(*)").to_string(), "\\(\\*\\)");
}

#[test]
fn test_display_sets() {
    assert_eq!(char_range('0', '9').to_string(), "[0-9]");
    assert_eq!(char_set(['a', 'b']).to_string(), "[ab]");
    assert_eq!(char_set(['a', 'b', 'c', 'x']).to_string(), "[a-cx]");
    assert_eq!(not_char_set(['x']).to_string(), "[^x]");
    assert_eq!(char_set(['-', ']']).to_string(), "[\\-\\]]");
}

#[test]
fn test_display_operators() {
    assert_eq!(alternation(literal_str("ab"), literal_str("cd")).to_string(), "ab|cd");
    assert_eq!(
        sequence(alternation(literal_str("ab"), literal('c')), literal('d')).to_string(),
        "(ab|c)d"
    );
    assert_eq!(star(literal('a')).to_string(), "a*");
    assert_eq!(star(literal_str("ab")).to_string(), "(ab)*");
    assert_eq!(one_or_more(literal('a')).to_string(), "aa*");
    assert_eq!(optional(literal('a')).to_string(), "a?");
    assert_eq!(optional(literal_str("ab")).to_string(), "(ab)?");
    assert_eq!(star(optional(literal('a'))).to_string(), "(a?)*");
    // only the empty-first order reads as an optional
    assert_eq!(alternation(literal('a'), empty()).to_string(), "a|()");
    assert_eq!(
        alternation(literal('a'), alternation(literal_str("bc"), literal_str("de"))).to_string(),
        "a|bc|de"
    );
}

#[test]
fn test_display_marks() {
    let p = mark("year", one_or_more(char_range('0', '9')));
    assert_eq!(p.to_string(), "(?<year>[0-9][0-9]*)");
    assert_eq!(star(mark("x", literal('a'))).to_string(), "(?<x>a)*");
}

#[test]
fn test_display_captures() {
    assert_eq!(Captures::new().to_string(), "{}");
    let caps = Captures::single("x", "ab")
        .merge(Captures::single("y", "1"))
        .merge(Captures::single("y", "2"));
    assert_eq!(caps.to_string(), "{x=[ab], y=[1,2]}");
}
