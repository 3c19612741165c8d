//! Error types for space construction and mutation.

use fief_core::SpaceId;
use std::fmt;

/// Errors arising from space construction or token/adjacency operations.
///
/// All variants are domain-rule violations: the arguments had the right
/// types but an illegal value or combination. Wrong-fundamental-type
/// failures cannot reach this API — they are caught where board files are
/// parsed (see `fief-board`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Space IDs start at 1; 0 is reserved for "no neighbour" in board files.
    NonPositiveId {
        /// The offending ID.
        id: SpaceId,
    },
    /// Lost tribes are never placed on mountain spaces.
    TribesOnMountains,
    /// A token operation was given a count of zero.
    ZeroTokenCount {
        /// The token kind the operation named.
        kind: String,
    },
    /// The named token kind is not on the space.
    TokenNotPresent {
        /// The token kind the operation named.
        kind: String,
    },
    /// More tokens were requested for removal than the space holds.
    RemoveExceedsCount {
        /// The token kind the operation named.
        kind: String,
        /// How many tokens the caller asked to remove.
        requested: u32,
        /// How many tokens the space holds.
        present: u32,
    },
    /// The space was built without the adjacency capability.
    NoAdjacency,
    /// A space cannot be its own neighbour.
    SelfNeighbour {
        /// The space's own ID.
        id: SpaceId,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { id } => write!(f, "space id must be positive, got {id}"),
            Self::TribesOnMountains => {
                write!(f, "lost tribes are not permitted on mountains terrain")
            }
            Self::ZeroTokenCount { kind } => {
                write!(f, "token count for '{kind}' must be at least 1")
            }
            Self::TokenNotPresent { kind } => {
                write!(f, "token '{kind}' could not be removed, not on space")
            }
            Self::RemoveExceedsCount {
                kind,
                requested,
                present,
            } => write!(
                f,
                "cannot remove {requested} '{kind}' tokens, only {present} on space"
            ),
            Self::NoAdjacency => write!(f, "space does not track neighbours"),
            Self::SelfNeighbour { id } => {
                write!(f, "space {id} cannot be its own neighbour")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
