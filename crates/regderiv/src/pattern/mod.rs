// Pattern tree
//
// Patterns are immutable and shared: a `Pattern` is an `Arc` handle to a node,
// so the residuals produced by differentiation reuse every subtree they leave
// untouched. Nodes are only created through the smart constructors in
// `builder`, which keep the tree in reduced form.

mod buffer;
mod builder;
mod char_set;

pub use buffer::{CaptureBuffer, IterRev};
pub use builder::{
    alternation, any, char_range, char_set, empty, fail, literal, literal_str, mark,
    not_char_set, one_or_more, optional, sequence, star,
};
pub(crate) use builder::marked;
pub use char_set::CharSet;

use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// Matches only the empty string
    Empty,
    /// Matches nothing
    Fail,
    Sequence(Pattern, Pattern),
    /// Choice; the left branch wins when both succeed
    Alternation(Pattern, Pattern),
    Star(Pattern),
    /// One char from a nonempty set
    CharSet(CharSet),
    AnyChar,
    /// One char outside the set
    NegatedCharSet(CharSet),
    /// Named capture around `inner`. `buffer` holds what `inner` has
    /// consumed so far.
    Mark {
        name: SmolStr,
        buffer: CaptureBuffer,
        inner: Pattern,
    },
}

struct Node {
    kind: PatternKind,
    nullable: bool,
    consumes: bool,
    has_marks: bool,
    size: usize,
    depth: usize,
}

#[derive(Clone)]
pub struct Pattern(Arc<Node>);

impl Pattern {
    pub(crate) fn from_kind(kind: PatternKind) -> Self {
        // children are never Fail here; the smart constructors absorb it
        let (nullable, consumes, has_marks, size, below) = match &kind {
            PatternKind::Empty => (true, false, false, 1, 0),
            PatternKind::Fail => (false, false, false, 1, 0),
            PatternKind::CharSet(_) | PatternKind::AnyChar | PatternKind::NegatedCharSet(_) => {
                (false, true, false, 1, 0)
            }
            PatternKind::Sequence(p1, p2) => (
                p1.nullable() && p2.nullable(),
                p1.consumes() || p2.consumes(),
                p1.has_marks() || p2.has_marks(),
                1usize.saturating_add(p1.size()).saturating_add(p2.size()),
                p1.depth().max(p2.depth()),
            ),
            PatternKind::Alternation(p1, p2) => (
                p1.nullable() || p2.nullable(),
                p1.consumes() || p2.consumes(),
                p1.has_marks() || p2.has_marks(),
                1usize.saturating_add(p1.size()).saturating_add(p2.size()),
                p1.depth().max(p2.depth()),
            ),
            PatternKind::Star(p) => (
                true,
                p.consumes(),
                p.has_marks(),
                p.size().saturating_add(1),
                p.depth(),
            ),
            PatternKind::Mark { inner, .. } => (
                inner.nullable(),
                inner.consumes(),
                true,
                inner.size().saturating_add(1),
                inner.depth(),
            ),
        };
        // derivation never descends into a subtree that cannot consume
        let depth = if consumes { below + 1 } else { 1 };
        Pattern(Arc::new(Node {
            kind,
            nullable,
            consumes,
            has_marks,
            size,
            depth,
        }))
    }

    #[inline]
    pub fn kind(&self) -> &PatternKind {
        &self.0.kind
    }

    /// Whether the pattern accepts the empty string
    #[inline]
    pub fn nullable(&self) -> bool {
        self.0.nullable
    }

    /// Whether the pattern matches some nonempty string. Patterns that do not
    /// can only contribute the captures they already hold.
    #[inline]
    pub fn consumes(&self) -> bool {
        self.0.consumes
    }

    /// Whether any `Mark` occurs in the tree
    #[inline]
    pub fn has_marks(&self) -> bool {
        self.0.has_marks
    }

    /// Node count, counting shared subtrees once per occurrence
    #[inline]
    pub fn size(&self) -> usize {
        self.0.size
    }

    /// Nesting depth of the part of the tree that can still consume input.
    /// A subtree that cannot consume counts as a single level.
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.0.kind, PatternKind::Empty)
    }

    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self.0.kind, PatternKind::Fail)
    }

    /// Same node, not merely an equal one
    #[inline]
    pub fn ptr_eq(&self, other: &Pattern) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    pub(crate) fn as_sequence(&self) -> Option<(&Pattern, &Pattern)> {
        match self.kind() {
            PatternKind::Sequence(p1, p2) => Some((p1, p2)),
            _ => None,
        }
    }

    pub(crate) fn as_alternation(&self) -> Option<(&Pattern, &Pattern)> {
        match self.kind() {
            PatternKind::Alternation(p1, p2) => Some((p1, p2)),
            _ => None,
        }
    }

    /// Operands of a nest of binary nodes, left to right, whichever way the
    /// nest leans. `split` opens up a node or returns `None` for an operand.
    pub(crate) fn operands(
        &self,
        split: fn(&Pattern) -> Option<(&Pattern, &Pattern)>,
    ) -> Vec<&Pattern> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(p) = stack.pop() {
            match split(p) {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => out.push(p),
            }
        }
        out
    }

    /// Names of every `Mark` in the tree, sorted and deduplicated
    pub fn mark_names(&self) -> Vec<SmolStr> {
        let mut names = Vec::new();
        let mut stack = vec![self];
        while let Some(p) = stack.pop() {
            if !p.has_marks() {
                continue;
            }
            match p.kind() {
                PatternKind::Sequence(p1, p2) | PatternKind::Alternation(p1, p2) => {
                    stack.push(p2);
                    stack.push(p1);
                }
                PatternKind::Star(inner) => stack.push(inner),
                PatternKind::Mark { name, inner, .. } => {
                    names.push(name.clone());
                    stack.push(inner);
                }
                _ => {}
            }
        }
        names.sort();
        names.dedup();
        names
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            if a.size() != b.size() || a.depth() != b.depth() {
                return false;
            }
            match (a.kind(), b.kind()) {
                (PatternKind::Sequence(a1, a2), PatternKind::Sequence(b1, b2))
                | (PatternKind::Alternation(a1, a2), PatternKind::Alternation(b1, b2)) => {
                    pending.push((a2, b2));
                    pending.push((a1, b1));
                }
                (PatternKind::Star(a1), PatternKind::Star(b1)) => pending.push((a1, b1)),
                (
                    PatternKind::Mark {
                        name: n1,
                        buffer: buf1,
                        inner: i1,
                    },
                    PatternKind::Mark {
                        name: n2,
                        buffer: buf2,
                        inner: i2,
                    },
                ) => {
                    if n1 != n2 || buf1 != buf2 {
                        return false;
                    }
                    pending.push((i1, i2));
                }
                // leaves, or nodes of different kinds
                (k1, k2) => {
                    if k1 != k2 {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.kind.fmt(f)
    }
}

// Unlink iteratively; residuals can nest far deeper than the stack allows
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(&mut self.kind, &mut stack);
        while let Some(mut child) = stack.pop() {
            if let Some(node) = Arc::get_mut(&mut child.0) {
                detach_children(&mut node.kind, &mut stack);
            }
        }
    }
}

fn detach_children(kind: &mut PatternKind, out: &mut Vec<Pattern>) {
    if matches!(
        kind,
        PatternKind::Empty
            | PatternKind::Fail
            | PatternKind::CharSet(_)
            | PatternKind::AnyChar
            | PatternKind::NegatedCharSet(_)
    ) {
        return;
    }
    match std::mem::replace(kind, PatternKind::Empty) {
        PatternKind::Sequence(p1, p2) | PatternKind::Alternation(p1, p2) => {
            out.push(p1);
            out.push(p2);
        }
        PatternKind::Star(inner) | PatternKind::Mark { inner, .. } => out.push(inner),
        _ => {}
    }
}
