// Nullability and the derivative transition
//
// derivative(p, c) is the residual pattern that matches the rest of any string
// p matches that starts with c. Marks record c in their buffer on the way
// down, so the residual also carries the text captured so far.

use ahash::AHashMap;

use crate::pattern::{
    Pattern, PatternKind, alternation, empty, fail, marked, sequence, star,
};

/// Whether `p` accepts the empty string
#[inline]
pub fn nullable(p: &Pattern) -> bool {
    p.nullable()
}

/// Differentiate `p` by `c` without memoization
pub fn derivative(p: &Pattern, c: char) -> Pattern {
    Deriver::new().derive(p, c)
}

/// Keep only the empty-string matches of `p`, with every mark and its buffer
/// intact. The result can no longer consume input; it is `Fail` exactly when
/// `p` is not nullable.
pub fn mark_empty(p: &Pattern) -> Pattern {
    if !p.nullable() {
        return fail();
    }
    if !p.has_marks() {
        return empty();
    }
    // nothing left to consume, so nothing to drop
    if !p.consumes() {
        return p.clone();
    }
    match p.kind() {
        PatternKind::Sequence(p1, p2) => sequence(mark_empty(p1), mark_empty(p2)),
        PatternKind::Alternation(p1, p2) => alternation(mark_empty(p1), mark_empty(p2)),
        PatternKind::Star(inner) => star(mark_empty(inner)),
        PatternKind::Mark {
            name,
            buffer,
            inner,
        } => marked(name.clone(), buffer.clone(), mark_empty(inner)),
        // not nullable or cannot consume, handled above
        PatternKind::Empty
        | PatternKind::Fail
        | PatternKind::CharSet(_)
        | PatternKind::AnyChar
        | PatternKind::NegatedCharSet(_) => fail(),
    }
}

/// Derivative engine with an optional memo table.
///
/// Entries are keyed by node identity and char. Each entry keeps its key node
/// alive, so an address can never be reused while it is in the table. The
/// table is dropped wholesale once it reaches `max_entries`.
pub struct Deriver {
    cache: Option<AHashMap<(usize, char), (Pattern, Pattern)>>,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Deriver {
    /// No memoization
    pub fn new() -> Self {
        Self {
            cache: None,
            max_entries: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn memoized(max_entries: usize) -> Self {
        Self {
            cache: Some(AHashMap::default()),
            max_entries,
            hits: 0,
            misses: 0,
        }
    }

    pub fn is_memoized(&self) -> bool {
        self.cache.is_some()
    }

    /// (hits, misses) of the memo table since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.len())
    }

    pub fn clear(&mut self) {
        if let Some(cache) = &mut self.cache {
            cache.clear();
        }
    }

    pub fn derive(&mut self, p: &Pattern, c: char) -> Pattern {
        if !p.consumes() {
            return fail();
        }
        if self.cache.is_none() || is_leaf(p) {
            return self.derive_node(p, c);
        }

        let key = (p.addr(), c);
        if let Some((_, hit)) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            self.hits += 1;
            return hit.clone();
        }
        self.misses += 1;

        let result = self.derive_node(p, c);
        if let Some(cache) = &mut self.cache {
            if cache.len() >= self.max_entries {
                cache.clear();
            }
            if self.max_entries > 0 {
                cache.insert(key, (p.clone(), result.clone()));
            }
        }
        result
    }

    fn derive_node(&mut self, p: &Pattern, c: char) -> Pattern {
        match p.kind() {
            PatternKind::Empty | PatternKind::Fail => fail(),
            PatternKind::CharSet(set) => {
                if set.contains(c) {
                    empty()
                } else {
                    fail()
                }
            }
            PatternKind::AnyChar => empty(),
            PatternKind::NegatedCharSet(set) => {
                if set.contains(c) {
                    fail()
                } else {
                    empty()
                }
            }
            PatternKind::Sequence(p1, p2) => {
                let consuming = sequence(self.derive(p1, c), p2.clone());
                // mark_empty(p1) is Fail here, and so is the whole second branch
                if !p1.nullable() {
                    return consuming;
                }
                let tail = self.derive(p2, c);
                if tail.is_fail() {
                    return consuming;
                }
                alternation(consuming, sequence(mark_empty(p1), tail))
            }
            PatternKind::Alternation(p1, p2) => {
                alternation(self.derive(p1, c), self.derive(p2, c))
            }
            // p is already star(inner)
            PatternKind::Star(inner) => sequence(self.derive(inner, c), p.clone()),
            PatternKind::Mark {
                name,
                buffer,
                inner,
            } => marked(name.clone(), buffer.push(c), self.derive(inner, c)),
        }
    }
}

#[inline]
fn is_leaf(p: &Pattern) -> bool {
    matches!(
        p.kind(),
        PatternKind::Empty
            | PatternKind::Fail
            | PatternKind::CharSet(_)
            | PatternKind::AnyChar
            | PatternKind::NegatedCharSet(_)
    )
}
