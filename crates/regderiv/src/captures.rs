// Capture dictionaries and their merge algebra
//
// A dictionary maps group names to the values captured under them, kept sorted
// by name with unique names. `both` combines the captures of subpatterns that
// must all hold; `first` picks between alternatives, left one first.

use std::cmp::Ordering;

use smol_str::SmolStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    entries: Vec<(SmolStr, Vec<String>)>,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary holding one value under one name
    pub fn single(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            entries: vec![(name.into(), vec![value.into()])],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values captured under `name`, in match order. Empty if the name was
    /// never captured.
    pub fn get(&self, name: &str) -> &[String] {
        match self
            .entries
            .binary_search_by(|(entry, _)| entry.as_str().cmp(name))
        {
            Ok(idx) => self.entries[idx].1.as_slice(),
            Err(_) => &[],
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// The last value captured under `name`
    pub fn last(&self, name: &str) -> Option<&str> {
        self.get(name).last().map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Merge by name. Values under a shared name are concatenated, `self`'s
    /// first; all other entries are interleaved in name order.
    pub fn merge(self, other: Captures) -> Captures {
        if self.entries.is_empty() {
            return other;
        }
        if other.entries.is_empty() {
            return self;
        }

        let mut merged = Vec::with_capacity(self.entries.len() + other.entries.len());
        let mut left = self.entries.into_iter().peekable();
        let mut right = other.entries.into_iter().peekable();
        loop {
            let order = match (left.peek(), right.peek()) {
                (Some((l, _)), Some((r, _))) => l.cmp(r),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };
            match order {
                Ordering::Less => merged.extend(left.next()),
                Ordering::Greater => merged.extend(right.next()),
                Ordering::Equal => {
                    if let (Some((name, mut values)), Some((_, more))) = (left.next(), right.next())
                    {
                        values.extend(more);
                        merged.push((name, values));
                    }
                }
            }
        }
        Captures { entries: merged }
    }

    /// Present only if both sides are; then their merge.
    pub fn both(a: Option<Captures>, b: Option<Captures>) -> Option<Captures> {
        Some(a?.merge(b?))
    }

    /// `a` if present, otherwise `b`. Leftmost bias: a successful left side
    /// wins even when the right side would also succeed.
    pub fn first(a: Option<Captures>, b: Option<Captures>) -> Option<Captures> {
        a.or(b)
    }
}

/// Values captured under `name`; a missing name yields an empty slice.
pub fn lookup_captures<'a>(name: &str, captures: &'a Captures) -> &'a [String] {
    captures.get(name)
}
