use std::fmt;

use gridstar_core::Point;

/// Which end of a search an [`PathError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Start,
    Goal,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Errors returned by [`PathFinder`](crate::PathFinder) searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The open set ran dry before the goal was reached.
    NotFound,
    /// The configured expansion limit was hit.
    Aborted { expanded: usize },
    /// The start or goal cannot be occupied. Only reported when endpoint
    /// validation is enabled.
    InvalidEndpoint { cell: Point, kind: EndpointKind },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no path to goal"),
            Self::Aborted { expanded } => {
                write!(f, "search aborted after {expanded} expansions")
            }
            Self::InvalidEndpoint { cell, kind } => {
                write!(f, "{kind} {cell} is not passable")
            }
        }
    }
}

impl std::error::Error for PathError {}
