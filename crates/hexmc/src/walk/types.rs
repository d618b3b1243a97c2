//! Walk state and error types.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Coord, Vertex};

/// Unordered set of board cells adjacent to the traced winning boundary.
/// Border cells are never included.
pub type Chain = HashSet<Coord>;

/// Fatal walk failures. Both signal invalid input construction (wrong border
/// convention, non-square board), never a normal-path outcome; the caller
/// must abort, not retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// Neither turn hypothesis matched at this vertex: the bordered values
    /// under comparison disagree with both neighbors of the current edge.
    NoTurn { at: Vertex },
    /// The walk left the bordered grid somewhere other than the two valid
    /// exit corners.
    BadExit { at: Vertex },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::NoTurn { at } => {
                write!(f, "no turn direction at vertex ({}, {})", at.x, at.y)
            }
            WalkError::BadExit { at } => {
                write!(f, "walk exited at invalid vertex ({}, {})", at.x, at.y)
            }
        }
    }
}

impl std::error::Error for WalkError {}

/// Four-vertex window straddling a directed edge of the dual lattice.
///
/// ```text
///           v1
///          / |
///         /  |
///    v2 --+-- v3      the walk crosses the v2/v3 edge heading away from v1
///         |  /
///         | /
///          v4
/// ```
///
/// `Vertex` is `Copy`, so every turn builds four fresh value copies; the
/// window never aliases the previous step's vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Window {
    pub v1: Vertex,
    pub v2: Vertex,
    pub v3: Vertex,
    pub v4: Vertex,
}

impl Window {
    /// Start at the top-right corner of the bordered grid; `v1` sits at row
    /// `-1`, which wraps to the opposite border strip.
    pub fn start() -> Self {
        Self {
            v1: Vertex::new(-1, 1),
            v2: Vertex::new(0, 0),
            v3: Vertex::new(0, 1),
            v4: Vertex::new(1, 0),
        }
    }

    /// Turn left: the new window is `(v3, v2, v4, v2 + (v2 − v1))`.
    #[inline]
    pub fn turn_left(self) -> Self {
        Self {
            v1: self.v3,
            v2: self.v2,
            v3: self.v4,
            v4: self.v2 + (self.v2 - self.v1),
        }
    }

    /// Turn right: the new window is `(v2, v4, v3, v3 + (v3 − v1))`.
    #[inline]
    pub fn turn_right(self) -> Self {
        Self {
            v1: self.v2,
            v2: self.v4,
            v3: self.v3,
            v4: self.v3 + (self.v3 - self.v1),
        }
    }
}
