// Character sets for single-char patterns
// A plain ordered set of code points; no Unicode classes beyond that

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSet(BTreeSet<char>);

impl CharSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// All code points from `lo` to `hi` inclusive. Empty when `lo > hi`.
    pub fn from_range(lo: char, hi: char) -> Self {
        (lo..=hi).collect()
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// The only member, if there is exactly one
    pub fn single(&self) -> Option<char> {
        if self.0.len() == 1 {
            self.0.first().copied()
        } else {
            None
        }
    }

    pub fn union(&self, other: &CharSet) -> CharSet {
        Self(self.0.union(&other.0).copied().collect())
    }

    pub fn intersection(&self, other: &CharSet) -> CharSet {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    pub fn difference(&self, other: &CharSet) -> CharSet {
        Self(self.0.difference(&other.0).copied().collect())
    }

    /// Maximal runs of consecutive code points, in ascending order.
    pub fn ranges(&self) -> Vec<RangeInclusive<char>> {
        let mut out: Vec<RangeInclusive<char>> = Vec::new();
        for c in self.iter() {
            match out.last_mut() {
                Some(run) if (*run.end() as u32) + 1 == c as u32 => {
                    *run = *run.start()..=c;
                }
                _ => out.push(c..=c),
            }
        }
        out
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
