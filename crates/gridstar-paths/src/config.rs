//! Search configuration.

/// Baseline an already-open neighbor's candidate cost is compared against
/// before the neighbor is re-parented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    /// Compare against the expanding cell's own `g`.
    ///
    /// With positive step costs the candidate can never beat it, so an open
    /// cell keeps the parent it was discovered from.
    #[default]
    CurrentNode,
    /// Compare against the neighbor's recorded `g` (textbook A*).
    Neighbor,
}

/// Tuning knobs for [`PathFinder`](crate::PathFinder).
///
/// The default reproduces first-discovery best-first search: no reopening of
/// closed cells, [`Relaxation::CurrentNode`], no expansion limit and no
/// endpoint checks. [`SearchConfig::strict`] gives optimal A*.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub relaxation: Relaxation,
    /// Move a closed cell back to the open set when it is reached with a
    /// strictly lower `g`.
    pub reopen_closed: bool,
    /// Abort with [`PathError::Aborted`](crate::PathError::Aborted) once this
    /// many cells have been expanded.
    pub max_expansions: Option<usize>,
    /// Reject a start or goal that is not passable before searching.
    pub validate_endpoints: bool,
}

impl SearchConfig {
    /// Textbook A*: neighbor-baseline relaxation with reopening.
    pub fn strict() -> Self {
        Self {
            relaxation: Relaxation::Neighbor,
            reopen_closed: true,
            ..Self::default()
        }
    }

    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    pub fn with_reopen_closed(mut self, reopen: bool) -> Self {
        self.reopen_closed = reopen;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_validate_endpoints(mut self, validate: bool) -> Self {
        self.validate_endpoints = validate;
        self
    }
}
