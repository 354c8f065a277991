//! Matching limits and tuning constants.
//!
//! Residual patterns can grow super-linearly under nested stars and
//! alternations, and derivation walks them recursively. `MatchLimits` bounds
//! residual size and depth, and the size of the derivative memo table for a
//! `Matcher`.

// ===== State size =====

/// Default cap on the node count of a residual pattern.
pub const DEFAULT_MAX_STATE_SIZE: usize = 1 << 20;

/// Default cap on residual depth.
pub const DEFAULT_MAX_STATE_DEPTH: usize = 512;

// ===== Memoization =====

/// Default number of memoized derivatives before the table is flushed.
pub const DEFAULT_MAX_CACHE_ENTRIES: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Abort once a residual has more nodes than this
    pub max_state_size: usize,
    /// Abort once a residual nests deeper than this
    pub max_state_depth: usize,
    /// Memo table capacity; reaching it flushes the table
    pub max_cache_entries: usize,
    pub memoize: bool,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            max_state_size: DEFAULT_MAX_STATE_SIZE,
            max_state_depth: DEFAULT_MAX_STATE_DEPTH,
            max_cache_entries: DEFAULT_MAX_CACHE_ENTRIES,
            memoize: true,
        }
    }
}

impl MatchLimits {
    /// No cap on residual size or depth
    pub fn unlimited() -> Self {
        Self {
            max_state_size: usize::MAX,
            max_state_depth: usize::MAX,
            ..Self::default()
        }
    }

    pub fn with_max_state_size(mut self, max_state_size: usize) -> Self {
        self.max_state_size = max_state_size;
        self
    }

    pub fn with_max_state_depth(mut self, max_state_depth: usize) -> Self {
        self.max_state_depth = max_state_depth;
        self
    }

    pub fn with_max_cache_entries(mut self, max_cache_entries: usize) -> Self {
        self.max_cache_entries = max_cache_entries;
        self
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
