// Tests for the smart constructors and their reductions
use crate::*;

#[test]
fn test_sequence_drops_empty() {
    let a = literal('a');
    assert!(sequence(empty(), a.clone()).ptr_eq(&a));
    assert!(sequence(a.clone(), empty()).ptr_eq(&a));
    assert!(sequence(empty(), empty()).is_empty());
}

#[test]
fn test_sequence_propagates_fail() {
    assert!(sequence(fail(), literal('a')).is_fail());
    assert!(sequence(literal('a'), fail()).is_fail());
    assert!(sequence(empty(), fail()).is_fail());
}

#[test]
fn test_alternation_absorbs_fail() {
    let a = literal('a');
    assert!(alternation(fail(), a.clone()).ptr_eq(&a));
    assert!(alternation(a.clone(), fail()).ptr_eq(&a));
    assert!(alternation(fail(), fail()).is_fail());
}

#[test]
fn test_alternation_merges_sets() {
    assert_eq!(alternation(literal('a'), literal('b')), char_set(['a', 'b']));
    assert_eq!(
        alternation(char_range('0', '4'), char_range('3', '9')),
        char_range('0', '9')
    );
}

#[test]
fn test_alternation_any_absorbs_sets() {
    let set = char_set(['x', 'y', 'z']);
    assert!(matches!(alternation(any(), set.clone()).kind(), PatternKind::AnyChar));
    assert!(matches!(alternation(set, any()).kind(), PatternKind::AnyChar));
    assert!(matches!(alternation(any(), any()).kind(), PatternKind::AnyChar));
    assert!(matches!(
        alternation(not_char_set(['q']), any()).kind(),
        PatternKind::AnyChar
    ));
}

#[test]
fn test_alternation_negated_sets() {
    assert_eq!(
        alternation(not_char_set(['a', 'b']), not_char_set(['b', 'c'])),
        not_char_set(['b'])
    );
    // nothing excluded by both sides
    assert!(matches!(
        alternation(not_char_set(['a', 'b']), not_char_set(['c', 'd'])).kind(),
        PatternKind::AnyChar
    ));
    assert_eq!(
        alternation(char_set(['a']), not_char_set(['a', 'b'])),
        not_char_set(['b'])
    );
}

#[test]
fn test_alternation_same_node() {
    let p = sequence(literal('a'), literal('b'));
    assert!(alternation(p.clone(), p.clone()).ptr_eq(&p));
    assert!(alternation(empty(), empty()).is_empty());
}

#[test]
fn test_alternation_keeps_structure() {
    let p = alternation(literal_str("ab"), literal('c'));
    assert!(matches!(p.kind(), PatternKind::Alternation(_, _)));
}

#[test]
fn test_star_flattens() {
    let s = star(literal('a'));
    assert!(star(s.clone()).ptr_eq(&s));
    assert!(star(empty()).is_empty());
    assert!(star(fail()).is_empty());
    assert!(star(sequence(empty(), empty())).is_empty());
}

#[test]
fn test_star_keeps_empty_marks() {
    let p = star(mark("x", empty()));
    assert!(matches!(p.kind(), PatternKind::Star(_)));
    assert!(p.has_marks());
}

#[test]
fn test_mark_of_fail() {
    assert!(mark("x", fail()).is_fail());
    assert!(mark("x", char_set(Vec::new())).is_fail());
}

#[test]
fn test_mark_starts_with_empty_buffer() {
    match mark("year", literal('1')).kind() {
        PatternKind::Mark {
            name,
            buffer,
            inner,
        } => {
            assert_eq!(name.as_str(), "year");
            assert!(buffer.is_empty());
            assert_eq!(*inner, literal('1'));
        }
        other => panic!("expected a mark, got {:?}", other),
    }
}

#[test]
fn test_char_set_edge_cases() {
    assert!(char_set(Vec::new()).is_fail());
    assert!(char_range('9', '0').is_fail());
    assert!(matches!(not_char_set(Vec::new()).kind(), PatternKind::AnyChar));
    match char_range('0', '9').kind() {
        PatternKind::CharSet(set) => assert_eq!(set.len(), 10),
        other => panic!("expected a set, got {:?}", other),
    }
    assert_eq!(literal('a'), char_set(['a']));
}

#[test]
fn test_optional_and_one_or_more() {
    match optional(literal('a')).kind() {
        PatternKind::Alternation(p1, p2) => {
            assert!(p1.is_empty());
            assert_eq!(*p2, literal('a'));
        }
        other => panic!("expected an alternation, got {:?}", other),
    }
    assert!(optional(empty()).is_empty());

    match one_or_more(literal('a')).kind() {
        PatternKind::Sequence(p1, p2) => {
            assert_eq!(*p1, literal('a'));
            assert_eq!(*p2, star(literal('a')));
        }
        other => panic!("expected a sequence, got {:?}", other),
    }
}

#[test]
fn test_literal_str() {
    assert!(literal_str("").is_empty());
    assert_eq!(literal_str("ab"), sequence(literal('a'), literal('b')));
    assert_eq!(literal_str("abc").size(), 5);
}

#[test]
fn test_cached_flags() {
    assert!(empty().nullable());
    assert!(!fail().nullable());
    assert!(star(literal('a')).nullable());
    assert!(!sequence(star(literal('a')), literal('b')).nullable());
    assert!(alternation(literal('a'), literal_str("")).nullable());
    assert!(mark("x", star(any())).nullable());
    assert!(!literal_str("abc").has_marks());
    assert!(sequence(literal('a'), mark("x", any())).has_marks());
}

#[test]
fn test_mark_names() {
    let p = sequence(
        mark("b", literal('1')),
        alternation(mark("a", literal('2')), star(mark("b", literal('3')))),
    );
    let names: Vec<String> = p.mark_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(literal('a').mark_names().is_empty());
}

#[test]
fn test_reduction_is_idempotent() {
    let p = alternation(literal_str("ab"), star(literal('c')));
    assert_eq!(sequence(p.clone(), empty()).size(), p.size());
    assert_eq!(alternation(fail(), p.clone()).size(), p.size());
    let s = star(p.clone());
    assert_eq!(star(s.clone()).size(), s.size());
}

#[test]
fn test_settled_captures_lean_left() {
    let (x, y) = (mark("x", empty()), mark("y", empty()));
    let p = sequence(x.clone(), sequence(y.clone(), literal('c')));
    match p.kind() {
        PatternKind::Sequence(settled, rest) => {
            assert_eq!(*settled, Pattern::from_kind(PatternKind::Sequence(x, y)));
            assert_eq!(*rest, literal('c'));
        }
        other => panic!("expected a sequence, got {:?}", other),
    }
    assert_eq!(
        match_exact(&p, "c").unwrap().names().collect::<Vec<_>>(),
        vec!["x", "y"]
    );
}

#[test]
fn test_consumes_and_depth() {
    assert!(!empty().consumes());
    assert!(!fail().consumes());
    assert!(literal('a').consumes());
    assert!(!mark("x", empty()).consumes());
    assert!(!star(mark("x", empty())).consumes());
    assert!(star(literal('a')).consumes());

    assert_eq!(literal('a').depth(), 1);
    assert_eq!(literal_str("abcdef").depth(), 6);
    assert_eq!(mark("x", star(literal('a'))).depth(), 3);
    // settled subtrees count as one level however they nest
    assert_eq!(sequence(mark("x", mark("y", empty())), literal('a')).depth(), 2);
}

#[test]
fn test_deep_settled_prefix() {
    let build = || {
        (0..200_000).fold(literal('z'), |rest, _| sequence(mark("x", empty()), rest))
    };
    let (p, q) = (build(), build());
    assert_eq!(p.size(), q.size());
    assert!(p.depth() <= 2);
    assert!(p == q);
    assert!(p != literal('z'));
    drop(p);
    drop(q);
}
