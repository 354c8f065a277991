// Reading captures out of a residual pattern
// Only meaningful for nullable patterns; anything else extracts to None.

use crate::captures::Captures;
use crate::pattern::{Pattern, PatternKind};

pub fn extract(p: &Pattern) -> Option<Captures> {
    if !p.nullable() {
        return None;
    }
    match p.kind() {
        PatternKind::Empty => Some(Captures::new()),
        PatternKind::Fail
        | PatternKind::CharSet(_)
        | PatternKind::AnyChar
        | PatternKind::NegatedCharSet(_) => None,
        // whole nests at once; settled captures pile up into long sequences
        PatternKind::Sequence(..) => {
            let mut captures = Captures::new();
            for operand in p.operands(Pattern::as_sequence) {
                captures = captures.merge(extract(operand)?);
            }
            Some(captures)
        }
        // the leftmost branch that extracts wins
        PatternKind::Alternation(..) => p
            .operands(Pattern::as_alternation)
            .into_iter()
            .find_map(extract),
        // marks inside a star surface through the unrolled Sequence copies
        PatternKind::Star(_) => Some(Captures::new()),
        PatternKind::Mark {
            name,
            buffer,
            inner,
        } => Captures::both(
            Some(Captures::single(name.clone(), buffer.to_text())),
            extract(inner),
        ),
    }
}
