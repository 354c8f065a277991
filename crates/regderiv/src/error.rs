/// Errors from a budgeted `Matcher`. Not matching is never an error; it is
/// reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// A residual pattern outgrew `MatchLimits::max_state_size`
    StateTooLarge { size: usize, limit: usize },
    /// A residual pattern nested deeper than `MatchLimits::max_state_depth`
    StateTooDeep { depth: usize, limit: usize },
}

pub type MatchResult<T> = Result<T, MatchError>;

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::StateTooLarge { size, limit } => {
                write!(f, "pattern state too large ({} nodes, limit {})", size, limit)
            }
            MatchError::StateTooDeep { depth, limit } => {
                write!(f, "pattern state too deep ({} levels, limit {})", depth, limit)
            }
        }
    }
}

impl std::error::Error for MatchError {}
