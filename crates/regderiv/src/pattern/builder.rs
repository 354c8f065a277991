// Smart constructors
//
// Every pattern is built here and comes out reduced: `Fail` is absorbed or
// propagated, `Empty` disappears from sequences, char-only alternations fold
// into a single set node, stars flatten, and sequences of settled captures
// lean left. Differentiation rebuilds the tree through these same functions
// after every input char, so without the reductions residuals would grow
// without bound.

use std::sync::LazyLock;

use smol_str::SmolStr;

use super::{CaptureBuffer, CharSet, Pattern, PatternKind};

static EMPTY: LazyLock<Pattern> = LazyLock::new(|| Pattern::from_kind(PatternKind::Empty));
static FAIL: LazyLock<Pattern> = LazyLock::new(|| Pattern::from_kind(PatternKind::Fail));
static ANY: LazyLock<Pattern> = LazyLock::new(|| Pattern::from_kind(PatternKind::AnyChar));

/// Matches only the empty string
pub fn empty() -> Pattern {
    EMPTY.clone()
}

/// Matches nothing
pub fn fail() -> Pattern {
    FAIL.clone()
}

/// Matches any single char
pub fn any() -> Pattern {
    ANY.clone()
}

pub fn literal(c: char) -> Pattern {
    Pattern::from_kind(PatternKind::CharSet(CharSet::from_iter([c])))
}

/// One char out of `chars`; an empty set gives `Fail`.
pub fn char_set<I: IntoIterator<Item = char>>(chars: I) -> Pattern {
    from_set(chars.into_iter().collect())
}

/// One char not in `chars`; an empty set gives `AnyChar`.
pub fn not_char_set<I: IntoIterator<Item = char>>(chars: I) -> Pattern {
    from_negated_set(chars.into_iter().collect())
}

/// One char between `lo` and `hi` inclusive
pub fn char_range(lo: char, hi: char) -> Pattern {
    from_set(CharSet::from_range(lo, hi))
}

/// The exact string `s`
pub fn literal_str(s: &str) -> Pattern {
    s.chars()
        .rev()
        .fold(empty(), |rest, c| sequence(literal(c), rest))
}

pub fn sequence(p1: Pattern, p2: Pattern) -> Pattern {
    match (p1.kind(), p2.kind()) {
        (PatternKind::Fail, _) | (_, PatternKind::Fail) => fail(),
        (PatternKind::Empty, _) => p2,
        (_, PatternKind::Empty) => p1,
        // settled captures gather on the left, so repeated captures under a
        // star do not deepen the part of the tree that still consumes input
        (_, PatternKind::Sequence(q1, q2)) if !p1.consumes() && !q1.consumes() => {
            let settled = Pattern::from_kind(PatternKind::Sequence(p1.clone(), q1.clone()));
            Pattern::from_kind(PatternKind::Sequence(settled, q2.clone()))
        }
        _ => Pattern::from_kind(PatternKind::Sequence(p1, p2)),
    }
}

pub fn alternation(p1: Pattern, p2: Pattern) -> Pattern {
    use PatternKind as K;

    if p1.ptr_eq(&p2) {
        return p1;
    }
    match (p1.kind(), p2.kind()) {
        (K::Fail, _) => p2,
        (_, K::Fail) => p1,
        (K::Empty, K::Empty) => p1,
        (K::CharSet(s1), K::CharSet(s2)) => from_set(s1.union(s2)),
        (K::AnyChar, K::CharSet(_) | K::NegatedCharSet(_) | K::AnyChar)
        | (K::CharSet(_) | K::NegatedCharSet(_), K::AnyChar) => any(),
        (K::NegatedCharSet(s1), K::NegatedCharSet(s2)) => from_negated_set(s1.intersection(s2)),
        (K::CharSet(s), K::NegatedCharSet(n)) | (K::NegatedCharSet(n), K::CharSet(s)) => {
            from_negated_set(n.difference(s))
        }
        _ => Pattern::from_kind(K::Alternation(p1, p2)),
    }
}

pub fn star(p: Pattern) -> Pattern {
    match p.kind() {
        PatternKind::Star(_) => p,
        PatternKind::Empty | PatternKind::Fail => empty(),
        _ if !p.has_marks() && !p.consumes() => empty(),
        _ => Pattern::from_kind(PatternKind::Star(p)),
    }
}

/// `p` or nothing; the empty branch is tried first
pub fn optional(p: Pattern) -> Pattern {
    alternation(empty(), p)
}

pub fn one_or_more(p: Pattern) -> Pattern {
    sequence(p.clone(), star(p))
}

/// Capture whatever `p` matches under `name`. A capture around `Fail` is
/// itself `Fail`.
pub fn mark(name: impl Into<SmolStr>, p: Pattern) -> Pattern {
    marked(name.into(), CaptureBuffer::new(), p)
}

pub(crate) fn marked(name: SmolStr, buffer: CaptureBuffer, inner: Pattern) -> Pattern {
    if inner.is_fail() {
        return fail();
    }
    Pattern::from_kind(PatternKind::Mark {
        name,
        buffer,
        inner,
    })
}

fn from_set(set: CharSet) -> Pattern {
    if set.is_empty() {
        fail()
    } else {
        Pattern::from_kind(PatternKind::CharSet(set))
    }
}

fn from_negated_set(set: CharSet) -> Pattern {
    if set.is_empty() {
        any()
    } else {
        Pattern::from_kind(PatternKind::NegatedCharSet(set))
    }
}
