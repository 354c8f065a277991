// Derivative-based regular expressions with named submatches
//
// Instead of compiling to an automaton, a pattern is rewritten one input char
// at a time into the residual pattern that matches the rest of the input.
// Named captures ride along inside the residual and are read out once it
// accepts the empty string.

#[cfg(test)]
mod test;

pub mod captures;
pub mod deriv;
mod display;
pub mod error;
pub mod extract;
pub mod limits;
pub mod pattern;
pub mod search;

#[cfg(feature = "serde")]
pub mod serde;

pub use captures::{Captures, lookup_captures};
pub use deriv::{Deriver, derivative, mark_empty, nullable};
pub use error::{MatchError, MatchResult};
pub use extract::extract;
pub use limits::MatchLimits;
pub use pattern::{
    CaptureBuffer, CharSet, Pattern, PatternKind, alternation, any, char_range, char_set, empty,
    fail, literal, literal_str, mark, not_char_set, one_or_more, optional, sequence, star,
};
pub use search::{
    Match, Matcher, Matches, contains_match, find_all_matches, find_first_match, match_exact,
    match_prefix_greedy, matches,
};
