// Regex-like rendering of patterns and capture dictionaries
// Display only; nothing parses this format back.

use std::fmt::{self, Display, Write};

use crate::captures::Captures;
use crate::pattern::{CharSet, Pattern, PatternKind};

/// Characters escaped with a backslash outside of sets
const SPECIAL: &[char] = &['.', '[', '{', '}', '(', ')', '\\', '*', '+', '?', '|', '^', '$'];

/// Characters escaped inside `[...]`
const SET_SPECIAL: &[char] = &['\\', '[', ']', '^', '-'];

// Binding strength, loosest first
const ALT: u8 = 0;
const SEQ: u8 = 1;
const POSTFIX: u8 = 2;
const ATOM: u8 = 3;

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pattern(f, self, ALT)
    }
}

fn write_pattern(f: &mut fmt::Formatter<'_>, p: &Pattern, prec: u8) -> fmt::Result {
    match p.kind() {
        PatternKind::Empty => f.write_str("()"),
        PatternKind::Fail => f.write_str("[]"),
        PatternKind::AnyChar => f.write_char('.'),
        PatternKind::CharSet(set) => match set.single() {
            Some(c) => write_char(f, c, SPECIAL),
            None => write_set(f, set, false),
        },
        PatternKind::NegatedCharSet(set) => write_set(f, set, true),
        PatternKind::Alternation(p1, p2) if p1.is_empty() => {
            parenthesize(f, prec > POSTFIX, |f| {
                write_pattern(f, p2, ATOM)?;
                f.write_char('?')
            })
        }
        PatternKind::Alternation(..) => parenthesize(f, prec > ALT, |f| {
            for (i, branch) in p.operands(open_alternation).into_iter().enumerate() {
                if i > 0 {
                    f.write_char('|')?;
                }
                write_pattern(f, branch, ALT)?;
            }
            Ok(())
        }),
        PatternKind::Sequence(..) => parenthesize(f, prec > SEQ, |f| {
            for operand in p.operands(Pattern::as_sequence) {
                write_pattern(f, operand, SEQ)?;
            }
            Ok(())
        }),
        PatternKind::Star(inner) => parenthesize(f, prec > POSTFIX, |f| {
            write_pattern(f, inner, ATOM)?;
            f.write_char('*')
        }),
        PatternKind::Mark { name, inner, .. } => {
            write!(f, "(?<{}>", name)?;
            write_pattern(f, inner, ALT)?;
            f.write_char(')')
        }
    }
}

/// Alternation nests open up, except `()|p` which prints as `p?`
fn open_alternation(p: &Pattern) -> Option<(&Pattern, &Pattern)> {
    match p.as_alternation() {
        Some((p1, _)) if p1.is_empty() => None,
        split => split,
    }
}

fn parenthesize(
    f: &mut fmt::Formatter<'_>,
    wrap: bool,
    body: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    if wrap {
        f.write_char('(')?;
        body(f)?;
        f.write_char(')')
    } else {
        body(f)
    }
}

fn write_set(f: &mut fmt::Formatter<'_>, set: &CharSet, negated: bool) -> fmt::Result {
    f.write_str(if negated { "[^" } else { "[" })?;
    for run in set.ranges() {
        let (lo, hi) = (*run.start(), *run.end());
        write_char(f, lo, SET_SPECIAL)?;
        match hi as u32 - lo as u32 {
            0 => {}
            1 => write_char(f, hi, SET_SPECIAL)?,
            _ => {
                f.write_char('-')?;
                write_char(f, hi, SET_SPECIAL)?;
            }
        }
    }
    f.write_char(']')
}

fn write_char(f: &mut fmt::Formatter<'_>, c: char, special: &[char]) -> fmt::Result {
    if special.contains(&c) {
        f.write_char('\\')?;
        f.write_char(c)
    } else if c.is_control() {
        write!(f, "{}", c.escape_unicode())
    } else {
        f.write_char(c)
    }
}

impl Display for Captures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (name, values)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=[{}]", name, values.join(","))?;
        }
        f.write_char('}')
    }
}
