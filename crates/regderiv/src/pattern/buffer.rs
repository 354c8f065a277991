// Capture buffer
// Persistent cons list of the chars a Mark has consumed, newest first.
// Prepend is O(1) and residuals that fork from the same state share the tail.

use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct CaptureBuffer(Option<Arc<Cell>>);

struct Cell {
    ch: char,
    len: usize,
    next: CaptureBuffer,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self(None)
    }

    /// A new buffer with `ch` recorded after everything already in `self`
    pub fn push(&self, ch: char) -> Self {
        Self(Some(Arc::new(Cell {
            ch,
            len: self.len() + 1,
            next: self.clone(),
        })))
    }

    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |cell| cell.len)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Chars in reverse consumption order
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev {
            cur: self.0.as_deref(),
        }
    }

    /// The captured text in consumption order
    pub fn to_text(&self) -> String {
        let mut chars: Vec<char> = self.iter_rev().collect();
        chars.reverse();
        chars.into_iter().collect()
    }
}

pub struct IterRev<'a> {
    cur: Option<&'a Cell>,
}

impl<'a> Iterator for IterRev<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let cell = self.cur?;
        self.cur = cell.next.0.as_deref();
        Some(cell.ch)
    }
}

impl PartialEq for CaptureBuffer {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            _ => self.len() == other.len() && self.iter_rev().eq(other.iter_rev()),
        }
    }
}

impl Eq for CaptureBuffer {}

impl fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_text())
    }
}

// Unlink iteratively so a long capture does not recurse once per char on drop
impl Drop for CaptureBuffer {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(cell) = next {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.next.0.take(),
                Err(_) => break,
            }
        }
    }
}
