// Top-level matching
//
// Every operation here folds the derivative over the input, one char at a
// time. Anchored matching must consume the whole string; search retries one
// char further along each time an attempt dies.

use std::convert::Infallible;
use std::ops::Range;

use crate::captures::Captures;
use crate::deriv::Deriver;
use crate::error::{MatchError, MatchResult};
use crate::extract::extract;
use crate::limits::{DEFAULT_MAX_CACHE_ENTRIES, MatchLimits};
use crate::pattern::Pattern;

/// A single derivative step, possibly refused.
pub(crate) trait Stepper {
    type Error;

    fn step(&mut self, state: &Pattern, c: char) -> Result<Pattern, Self::Error>;
}

impl Stepper for Deriver {
    type Error = Infallible;

    #[inline]
    fn step(&mut self, state: &Pattern, c: char) -> Result<Pattern, Infallible> {
        Ok(self.derive(state, c))
    }
}

/// Deriver that refuses residuals above a size or depth budget
struct Budgeted {
    deriver: Deriver,
    max_state_size: usize,
    max_state_depth: usize,
}

impl Stepper for Budgeted {
    type Error = MatchError;

    fn step(&mut self, state: &Pattern, c: char) -> MatchResult<Pattern> {
        let next = self.deriver.derive(state, c);
        if next.size() > self.max_state_size {
            return Err(MatchError::StateTooLarge {
                size: next.size(),
                limit: self.max_state_size,
            });
        }
        if next.depth() > self.max_state_depth {
            return Err(MatchError::StateTooDeep {
                depth: next.depth(),
                limit: self.max_state_depth,
            });
        }
        Ok(next)
    }
}

/// A successful search: where it matched and what it captured.
/// Offsets are byte offsets into the searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    haystack: &'t str,
    start: usize,
    end: usize,
    captures: Captures,
}

impl<'t> Match<'t> {
    fn new(haystack: &'t str, start: usize, end: usize, captures: Captures) -> Self {
        Self {
            haystack,
            start,
            end,
            captures,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.start..self.end]
    }

    /// The unconsumed text after the match
    pub fn rest(&self) -> &'t str {
        &self.haystack[self.end..]
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn into_captures(self) -> Captures {
        self.captures
    }
}

fn run_exact<S: Stepper>(
    stepper: &mut S,
    pattern: &Pattern,
    text: &str,
) -> Result<Option<Captures>, S::Error> {
    let mut state = pattern.clone();
    for c in text.chars() {
        if state.is_fail() {
            return Ok(None);
        }
        state = stepper.step(&state, c)?;
    }
    Ok(extract(&state))
}

/// Greedy prefix match. Consumes chars until the next one would turn the
/// state into `Fail`, then stops on the state it has. Returns the captures of
/// that state, if it can stop there, and the bytes consumed before the
/// failing char.
fn run_prefix<S: Stepper>(
    stepper: &mut S,
    pattern: &Pattern,
    text: &str,
) -> Result<(Option<Captures>, usize), S::Error> {
    let mut state = pattern.clone();
    for (pos, c) in text.char_indices() {
        let next = stepper.step(&state, c)?;
        if next.is_fail() {
            return Ok((extract(&state), pos));
        }
        state = next;
    }
    Ok((extract(&state), text.len()))
}

fn run_find<'t, S: Stepper>(
    stepper: &mut S,
    pattern: &Pattern,
    haystack: &'t str,
    from: usize,
) -> Result<Option<Match<'t>>, S::Error> {
    let text = &haystack[from..];
    if text.is_empty() {
        let found = run_exact(stepper, pattern, text)?;
        return Ok(found.map(|captures| Match::new(haystack, from, from, captures)));
    }
    for (offset, _) in text.char_indices() {
        if let (Some(captures), len) = run_prefix(stepper, pattern, &text[offset..])? {
            let start = from + offset;
            return Ok(Some(Match::new(haystack, start, start + len, captures)));
        }
    }
    Ok(None)
}

/// Where the search after `m` resumes, or `None` once the text is used up.
/// An empty match steps over one char so the search always advances.
fn next_start(haystack: &str, m: &Match<'_>) -> Option<usize> {
    let next = if m.is_empty() {
        m.end + haystack[m.end..].chars().next()?.len_utf8()
    } else {
        m.end
    };
    (next < haystack.len()).then_some(next)
}

fn deriver() -> Deriver {
    Deriver::memoized(DEFAULT_MAX_CACHE_ENTRIES)
}

/// Match the whole of `text`
pub fn match_exact(pattern: &Pattern, text: &str) -> Option<Captures> {
    let Ok(found) = run_exact(&mut deriver(), pattern, text);
    found
}

/// Consume `text` for as long as the pattern can go on. Returns the captures
/// of the state reached, if it accepts there, and the unconsumed remainder
/// starting at the char that could not be consumed.
pub fn match_prefix_greedy<'t>(pattern: &Pattern, text: &'t str) -> (Option<Captures>, &'t str) {
    let Ok((captures, consumed)) = run_prefix(&mut deriver(), pattern, text);
    (captures, &text[consumed..])
}

/// Leftmost match anywhere in `text`
pub fn find_first_match<'t>(pattern: &Pattern, text: &'t str) -> Option<Match<'t>> {
    let Ok(found) = run_find(&mut deriver(), pattern, text, 0);
    found
}

/// Captures of every successive non-overlapping match
pub fn find_all_matches(pattern: &Pattern, text: &str) -> Vec<Captures> {
    matches(pattern, text).map(Match::into_captures).collect()
}

pub fn contains_match(pattern: &Pattern, text: &str) -> bool {
    find_first_match(pattern, text).is_some()
}

/// Lazy iterator over successive non-overlapping matches
pub fn matches<'t>(pattern: &Pattern, text: &'t str) -> Matches<'t> {
    Matches {
        deriver: deriver(),
        pattern: pattern.clone(),
        haystack: text,
        next: Some(0),
    }
}

pub struct Matches<'t> {
    deriver: Deriver,
    pattern: Pattern,
    haystack: &'t str,
    next: Option<usize>,
}

impl<'t> Iterator for Matches<'t> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        let from = self.next.take()?;
        let Ok(found) = run_find(&mut self.deriver, &self.pattern, self.haystack, from);
        let m = found?;
        self.next = next_start(self.haystack, &m);
        Some(m)
    }
}

/// A pattern bound to a memo table and a residual size budget.
///
/// The free functions build a fresh memo table per call. A `Matcher` keeps
/// one across calls, which pays off when the same pattern runs many times,
/// and turns runaway residual growth into `MatchError::StateTooLarge` or
/// `MatchError::StateTooDeep`.
pub struct Matcher {
    pattern: Pattern,
    limits: MatchLimits,
    engine: Budgeted,
}

impl Matcher {
    pub fn new(pattern: Pattern) -> Self {
        Self::with_limits(pattern, MatchLimits::default())
    }

    pub fn with_limits(pattern: Pattern, limits: MatchLimits) -> Self {
        let deriver = if limits.memoize {
            Deriver::memoized(limits.max_cache_entries)
        } else {
            Deriver::new()
        };
        Self {
            pattern,
            limits,
            engine: Budgeted {
                deriver,
                max_state_size: limits.max_state_size,
                max_state_depth: limits.max_state_depth,
            },
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn limits(&self) -> MatchLimits {
        self.limits
    }

    pub fn deriver(&self) -> &Deriver {
        &self.engine.deriver
    }

    pub fn match_exact(&mut self, text: &str) -> MatchResult<Option<Captures>> {
        run_exact(&mut self.engine, &self.pattern, text)
    }

    pub fn match_prefix_greedy<'t>(
        &mut self,
        text: &'t str,
    ) -> MatchResult<(Option<Captures>, &'t str)> {
        let (captures, consumed) = run_prefix(&mut self.engine, &self.pattern, text)?;
        Ok((captures, &text[consumed..]))
    }

    pub fn find_first<'t>(&mut self, text: &'t str) -> MatchResult<Option<Match<'t>>> {
        run_find(&mut self.engine, &self.pattern, text, 0)
    }

    pub fn find_all<'t>(&mut self, text: &'t str) -> MatchResult<Vec<Match<'t>>> {
        let mut found = Vec::new();
        let mut from = Some(0);
        while let Some(start) = from {
            let Some(m) = run_find(&mut self.engine, &self.pattern, text, start)? else {
                break;
            };
            from = next_start(text, &m);
            found.push(m);
        }
        Ok(found)
    }

    pub fn contains_match(&mut self, text: &str) -> MatchResult<bool> {
        Ok(self.find_first(text)?.is_some())
    }
}
